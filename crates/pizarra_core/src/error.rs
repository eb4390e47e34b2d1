use std::fmt;

#[derive(Debug)]
pub enum BoardError {
    UnknownFormation(String),
    InvalidPosition(String),
    InvalidRoster(String),
    SerializationError(String),
    DeserializationError(String),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BoardError::UnknownFormation(key) => {
                write!(f, "Unknown formation: {}", key)
            }
            BoardError::InvalidPosition(position) => {
                write!(f, "Invalid player position: {}", position)
            }
            BoardError::InvalidRoster(msg) => {
                write!(f, "Invalid roster: {}", msg)
            }
            BoardError::SerializationError(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            BoardError::DeserializationError(msg) => {
                write!(f, "Deserialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for BoardError {}

impl From<serde_json::Error> for BoardError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            BoardError::DeserializationError(err.to_string())
        } else {
            BoardError::SerializationError(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
