//! Error types for the flexcal-calendar crate.

/// Error type for all fallible operations in the flexcal-calendar crate.
///
/// Months are 0-based throughout the workspace (January = 0), matching the
/// month numbering the pager exposes to its hosts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 0..=11.
    #[error("invalid month: {month} (must be 0..=11)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: i64,
    },

    /// Returned when a year falls outside the supported range.
    #[error("invalid year: {year} (must be {min}..={max})")]
    InvalidYear {
        /// The invalid year that was provided or computed.
        year: i64,
        /// Smallest supported year.
        min: i32,
        /// Largest supported year.
        max: i32,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} of {year} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u32,
        /// The 0-based month for which the day is invalid.
        month: u32,
        /// The year of the month.
        year: i32,
        /// The maximum valid day for the given month.
        max_day: u32,
    },
}
