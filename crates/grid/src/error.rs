//! Error types for the flexcal-grid crate.

use flexcal_calendar::CalendarError;

/// Error type for all fallible operations in the flexcal-grid crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Returned when the (year, month) of a grid is invalid.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Returned when a linear grid position is outside 0..42.
    #[error("invalid grid position: {position} (must be 0..42)")]
    InvalidPosition {
        /// The invalid position.
        position: usize,
    },

    /// Returned when a row/column pair is outside the 6x7 grid.
    #[error("invalid grid cell: row {row}, col {col} (must be 0..6, 0..7)")]
    InvalidCell {
        /// The requested row.
        row: usize,
        /// The requested column.
        col: usize,
    },
}
