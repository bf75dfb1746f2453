//! Error types shared across Ghosthand crates.

/// Top-level error type for Ghosthand operations.
#[derive(Debug, thiserror::Error)]
pub enum GhosthandError {
    #[error("Surface error: {message}")]
    Surface { message: String },

    #[error("Script error: {message}")]
    Script { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using GhosthandError.
pub type GhosthandResult<T> = Result<T, GhosthandError>;

impl GhosthandError {
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface {
            message: msg.into(),
        }
    }

    pub fn script(msg: impl Into<String>) -> Self {
        Self::Script {
            message: msg.into(),
        }
    }
}
