use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum LibraryError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    // The metadata service could not be reached or answered with something other than a
    // book. Lookups fold this into an absent result; it never reaches a REST caller.
    CurrentlyUnavailable {
        message: String,
        reason_code: Option<String>,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn unavailable(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::CurrentlyUnavailable { message: message.to_string(), reason_code }
    }

    // maps an http status from the metadata service to an error kind
    pub fn from_status(message: &str, status: u16) -> LibraryError {
        if status == 404 {
            LibraryError::not_found(
                format!("not found error {:?} {}", message, status).as_str())
        } else {
            LibraryError::unavailable(
                format!("metadata service error {:?} {}", message, status).as_str(), Some(status.to_string()))
        }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::DuplicateKey { message } => { message.as_str() }
            LibraryError::NotFound { message } => { message.as_str() }
            LibraryError::CurrentlyUnavailable { message, .. } => { message.as_str() }
            LibraryError::Validation { message, .. } => { message.as_str() }
            LibraryError::Serialization { message } => { message.as_str() }
            LibraryError::Runtime { message, .. } => { message.as_str() }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("library file io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl From<reqwest::Error> for LibraryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LibraryError::unavailable(format!("metadata request timed out {}", err).as_str(),
                                      Some("TimeoutError".to_string()))
        } else if err.is_connect() {
            LibraryError::unavailable(format!("metadata connection failed {}", err).as_str(),
                                      Some("DispatchFailure".to_string()))
        } else if err.is_decode() {
            LibraryError::serialization(format!("metadata response parsing {}", err).as_str())
        } else if let Some(status) = err.status() {
            LibraryError::from_status(err.to_string().as_str(), status.as_u16())
        } else {
            LibraryError::unavailable(format!("metadata request failed {}", err).as_str(), None)
        }
    }
}

impl std::error::Error for LibraryError {}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::CurrentlyUnavailable { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for the catalog.
pub type LibraryResult<T> = Result<T, LibraryError>;
