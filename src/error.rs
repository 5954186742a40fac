use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("missing {} required field(s): {}", .missing.len(), .missing.join(", "))]
    Validation { missing: Vec<&'static str> },

    #[error("expected {expected} tab-separated fields, got {actual}")]
    FieldCount { expected: usize, actual: usize },

    #[error("unknown field key: {0}")]
    UnknownField(String),

    #[error("invalid manual entry: {0}")]
    Json(#[from] serde_json::Error),

    #[error("degenerate page geometry: {0}")]
    Geometry(String),

    #[error("cannot {event} a submission that is {from}")]
    InvalidTransition {
        from: &'static str,
        event: &'static str,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
