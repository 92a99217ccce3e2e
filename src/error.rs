//! Error types for the LRU cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key not present in the cache
    #[error("Key not found")]
    NotFound,

    /// Rejected construction or configuration parameter
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CacheError {
    /// Returns true for the `NotFound` variant.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CacheError::NotFound)
    }
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CacheError::NotFound.to_string(), "Key not found");
        assert_eq!(
            CacheError::InvalidArgument("capacity must be positive".to_string()).to_string(),
            "Invalid argument: capacity must be positive"
        );
    }

    #[test]
    fn test_is_not_found() {
        assert!(CacheError::NotFound.is_not_found());
        assert!(!CacheError::InvalidArgument("x".to_string()).is_not_found());
    }
}
