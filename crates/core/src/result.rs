//! Result alias and logging combinators.

use crate::error::Error;

/// The standard Result type for site logic.
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for recovering from errors without unwrap/expect.
///
/// The error is logged through `tracing` before it is discarded, so a
/// recovered failure still shows up in the browser console.
pub trait ResultExt<T> {
    /// Convert a Result to an Option, logging the error if present.
    fn into_option_logged(self) -> Option<T>;

    /// Get the value or a default, logging the error if present.
    fn or_default_logged(self, default: T) -> T;
}

impl<T> ResultExt<T> for Result<T> {
    fn into_option_logged(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("Operation failed: {}", e);
                None
            }
        }
    }

    fn or_default_logged(self, default: T) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Operation failed, using default: {}", e);
                default
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;

    #[test]
    fn test_into_option_logged() {
        let ok: Result<u8> = Ok(3);
        assert_eq!(ok.into_option_logged(), Some(3));

        let err: Result<u8> = Err(Error::EmptyCarousel);
        assert_eq!(err.into_option_logged(), None);
    }

    #[test]
    fn test_or_default_logged() {
        let err: Result<u64> = Err(Error::InvalidInterval);
        assert_eq!(err.or_default_logged(5000), 5000);

        let ok: Result<u64> = Ok(42);
        assert_eq!(ok.or_default_logged(5000), 42);
    }
}
