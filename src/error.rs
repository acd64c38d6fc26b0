use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Env file error: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get a message suitable for logging
    /// Env file parse errors can echo file contents, so they are summarized
    pub fn log_safe(&self) -> String {
        match self {
            Error::Config(msg) => format!("Configuration error: {msg}"),
            Error::EnvFile(dotenvy::Error::LineParse(_, index)) => {
                format!("Env file error: malformed line at offset {index}")
            }
            Error::EnvFile(_) => "Env file could not be read".to_string(),
            Error::Json(_) => "JSON serialization failed".to_string(),
            Error::Io(_) => "Output write failed".to_string(),
        }
    }
}
