//! Domain Layer - Errors
//!
//! Every failure path in this crate degrades to "act as if the operation
//! didn't happen"; errors exist so callers can log them, not so they can
//! abort the process.

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone)]
pub enum DomainError {
    Storage(String),
    Serialization(String),
    Geocode(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::Storage(msg) => write!(f, "Storage error: {}", msg),
            DomainError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            DomainError::Geocode(msg) => write!(f, "Geocoding error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Serialization(e.to_string())
    }
}
