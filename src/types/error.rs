use thiserror::Error;

/// salescope error types
#[derive(Error, Debug)]
pub enum SalescopeError {
    /// Failed to parse order JSON
    #[error("parse error: {0}")]
    Parse(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for salescope
pub type Result<T> = std::result::Result<T, SalescopeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SalescopeError::Parse("invalid json".into());
        assert_eq!(err.to_string(), "parse error: invalid json");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SalescopeError = io_err.into();
        assert!(err.to_string().contains("io error"));
    }
}
