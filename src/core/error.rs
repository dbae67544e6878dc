use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    /// Malformed rule or fact at knowledge-base construction. A programming
    /// defect, not a runtime condition: abort, do not retry.
    #[error("Knowledge base configuration error: {0}")]
    Configuration(String),

    /// The inference oracle could not resolve a query pattern. Propagated to
    /// the caller rather than silently treated as false.
    #[error("Inference query failed: {0}")]
    Query(String),

    /// The decision cascade produced no action. Unreachable by construction
    /// (the deadlock reset always yields a move); hitting it means a logic
    /// invariant was violated.
    #[error("No action available: decision cascade exhausted")]
    NoActionAvailable,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScoutError>;
