//! Error types for acquire-env

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Command failed with exit code {code}: {command}\n{stderr}")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("Command not found: {command}")]
    CommandNotFound { command: String },

    #[error("Command timed out after {seconds}s: {command}")]
    Timeout { command: String, seconds: u64 },

    #[error("Unexpected output from {command}: {message}")]
    InvalidOutput { command: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
