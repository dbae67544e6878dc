//! Wumpus Scout - command-line harness
//!
//! Thin wrapper around the agent core: reads one percept line per tick from
//! stdin (wire symbols O/B/S/Y, whitespace separated, anything else
//! ignored), prints the chosen action code. The simulator on the other side
//! of the pipe applies the action and produces the next percepts.

use clap::Parser;
use std::io::{self, BufRead, Write};
use wumpus_scout::core::error::Result;
use wumpus_scout::core::types::PerceptSet;
use wumpus_scout::AgentSession;

#[derive(Parser, Debug)]
#[command(about = "Knowledge-based Wumpus World agent")]
struct Args {
    /// Tracing filter, e.g. "wumpus_scout=debug"
    #[arg(long, default_value = "wumpus_scout=info")]
    log: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(args.log)
        .with_writer(io::stderr)
        .init();

    tracing::info!("Wumpus Scout starting...");

    let mut session = AgentSession::new()?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let percepts = PerceptSet::parse_symbols(&line?);
        let action = session.decide(&percepts)?;
        writeln!(stdout, "{}", action.code())?;
        stdout.flush()?;
    }

    tracing::info!(
        ticks = session.beliefs().moves_taken,
        kills = session.beliefs().kill_count,
        "input exhausted, shutting down"
    );
    Ok(())
}
