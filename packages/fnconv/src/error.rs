//! Error types for converter construction and use.

use thiserror::Error;

/// Errors originated by this crate.
///
/// Failures raised by the caller's own callables are never turned into an
/// `Error`; they reach the caller of `convert`/`unconvert` unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A mandatory callable was absent at construction time.
    ///
    /// Carries the name of the missing argument.
    #[error("{0} cannot be absent")]
    InvalidArgument(&'static str),

    /// The converter has no mapping for the requested direction.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
}

impl Error {
    pub(crate) fn absent(argument: &'static str) -> Self {
        tracing::debug!(argument, "rejecting absent callable");
        Error::InvalidArgument(argument)
    }

    pub(crate) fn no_reverse() -> Self {
        tracing::trace!("unconvert called without a reverse transform");
        Error::UnsupportedOperation("unconvert without a reverse transform")
    }
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_display() {
        let e = Error::absent("forward transform");
        assert_eq!(format!("{}", e), "forward transform cannot be absent");
    }

    #[test]
    fn unsupported_operation_display() {
        let e = Error::no_reverse();
        let display = format!("{}", e);
        assert!(display.starts_with("unsupported operation"));
        assert!(display.contains("reverse transform"));
    }

    #[test]
    fn errors_have_no_source() {
        use std::error::Error as StdError;

        assert!(StdError::source(&Error::absent("predicate")).is_none());
        assert!(StdError::source(&Error::no_reverse()).is_none());
    }
}
