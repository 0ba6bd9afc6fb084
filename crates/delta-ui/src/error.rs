//! Error types for Leptos UI components
//!
//! This module provides error handling types that follow the project's
//! zero-unwrap and functional programming patterns.

use thiserror::Error;

/// Errors that can occur in Leptos UI components
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UiError {
    /// Creating or driving an IntersectionObserver failed
    #[error("intersection observer failed: {0}")]
    ObserverFailed(String),

    /// Timer delay does not fit the browser's millisecond range
    #[error("timer delay out of range: {0}ms")]
    TimerOutOfRange(u128),

    /// Error from the site logic
    #[error(transparent)]
    Core(#[from] delta_core::Error),
}

/// Result type alias for UI operations
pub type Result<T> = std::result::Result<T, UiError>;

/// Converts a delay to the `u32` milliseconds gloo timers take
///
/// # Errors
///
/// Returns [`UiError::TimerOutOfRange`] when the delay exceeds `u32::MAX` ms.
pub fn timer_millis(delay: std::time::Duration) -> Result<u32> {
    let ms = delay.as_millis();
    u32::try_from(ms).map_err(|_| UiError::TimerOutOfRange(ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_error_display() {
        assert_eq!(
            UiError::ObserverFailed("no root".to_string()).to_string(),
            "intersection observer failed: no root"
        );
    }

    #[test]
    fn test_core_error_is_transparent() {
        let err = UiError::from(delta_core::Error::EmptyCarousel);
        assert_eq!(err.to_string(), "carousel needs at least one item");
    }

    #[test]
    fn test_timer_millis() {
        assert_eq!(timer_millis(Duration::from_millis(5000)), Ok(5000));
        assert_eq!(
            timer_millis(Duration::from_secs(u64::MAX)),
            Err(UiError::TimerOutOfRange(Duration::from_secs(u64::MAX).as_millis()))
        );
    }
}
