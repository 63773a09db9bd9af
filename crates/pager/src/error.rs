//! Error types for the flexcal-pager crate.

use flexcal_calendar::CalendarError;
use flexcal_grid::GridError;

/// Error type for all fallible operations in the flexcal-pager crate.
///
/// Every failing operation is rejected before any pager state changes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PagerError {
    /// Returned when a date or month is invalid or leaves the supported range.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Returned when a grid position or cell is invalid.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Returned when a pager position is not held by the current window.
    #[error("position {position} is outside the window around {current}")]
    PositionOutsideWindow {
        /// The requested pager position.
        position: i64,
        /// The current pager position.
        current: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_position_outside_window() {
        let e = PagerError::PositionOutsideWindow {
            position: 410,
            current: 400,
        };
        assert_eq!(
            e.to_string(),
            "position 410 is outside the window around 400"
        );
    }

    #[test]
    fn error_wraps_calendar() {
        let e: PagerError = CalendarError::InvalidMonth { month: 12 }.into();
        assert_eq!(e.to_string(), "invalid month: 12 (must be 0..=11)");
        assert!(matches!(e, PagerError::Calendar(_)));
    }

    #[test]
    fn error_wraps_grid() {
        let e: PagerError = GridError::InvalidPosition { position: 50 }.into();
        assert!(matches!(e, PagerError::Grid(_)));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<PagerError>();
    }
}
