use thiserror::Error;

/// Error type that captures common wallet failures.
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("wallet snapshot is malformed ({location})")]
    MalformedSnapshot { location: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type WalletResult<T> = Result<T, WalletError>;

impl WalletError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Wraps a structural parse failure, pinpointing line and column when
    /// the parser provides them.
    pub(crate) fn malformed_snapshot(err: &serde_json::Error) -> Self {
        let location = if err.line() > 0 {
            format!("line {}, column {}", err.line(), err.column())
        } else {
            err.to_string()
        };
        Self::MalformedSnapshot { location }
    }
}
