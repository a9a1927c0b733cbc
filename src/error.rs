use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DredgeError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("params parse error in {path}: {reason}")]
    ParamsParse { path: PathBuf, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DredgeError {
    /// Shorthand for an `InvalidArgument` error with a formatted reason.
    pub fn invalid(reason: impl Into<String>) -> Self {
        DredgeError::InvalidArgument {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DredgeError>;
