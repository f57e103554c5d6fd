use std::fmt;

#[derive(Debug)]
pub enum StudioError {
    ConfigError(String),
    ResponseError(String),
    GenerationError(String),
    ConnectionError(String),
}

impl fmt::Display for StudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudioError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            StudioError::ResponseError(msg) => write!(f, "Response error: {}", msg),
            StudioError::GenerationError(msg) => write!(f, "Generation error: {}", msg),
            StudioError::ConnectionError(msg) => write!(f, "Connection error: {}", msg),
        }
    }
}

impl std::error::Error for StudioError {}

impl StudioError {
    /// Message carried by a server-reported generation failure, if this is one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            StudioError::GenerationError(msg) => Some(msg),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StudioError>;
