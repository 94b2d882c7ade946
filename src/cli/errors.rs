use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid params file {path}: {source}")]
    InvalidParams {
        path: String,
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Slicer error: {0}")]
    Slicer(#[from] spritecut::Error),
}
