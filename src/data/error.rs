use std::{error::Error, fmt};

/// Ways the coordinate request can fail. All of them end the same way for the UI
/// (log it, show no markers) but they read differently in the log.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    Network(String),
    Status(u16),
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {}", msg),
            FetchError::Status(code) => write!(f, "Server answered HTTP {}", code),
            FetchError::Decode(msg) => write!(f, "Malformed coordinate payload: {}", msg),
        }
    }
}

impl Error for FetchError {}
