//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
///
/// Every failure the core can surface is one of these kinds. The caller
/// (CLI, HTTP layer) decides how to present each kind; the core never
/// swallows or retries.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a store unavailable error
    pub fn store_unavailable(msg: impl Into<String>) -> Self {
        Self::StoreUnavailable(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_kind() {
        let e = Error::invalid_argument("benzina price must be > 0");
        assert_eq!(e.to_string(), "invalid argument: benzina price must be > 0");

        let e = Error::not_found("no station found for province");
        assert!(e.to_string().starts_with("not found"));

        let e = Error::store_unavailable("collection file missing");
        assert!(matches!(e, Error::StoreUnavailable(_)));
    }
}
