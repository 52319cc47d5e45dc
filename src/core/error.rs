use thiserror::Error;

pub type Result<T> = std::result::Result<T, FfkError>;

#[derive(Debug, Error)]
pub enum FfkError {
    #[error("{tool} binary not found in PATH")]
    BinaryNotFound { tool: &'static str },
    #[error("{tool} failed (exit_code={exit_code:?}): {stderr}")]
    ProcessFailed {
        tool: &'static str,
        exit_code: Option<i32>,
        stderr: String,
    },
    #[error("could not parse ffprobe output: {0}")]
    ProbeParse(#[from] serde_json::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
