//! Configuration for the month pager.

use chrono::Weekday;
use flexcal_calendar::CalendarMonth;
use flexcal_grid::GridMode;

use crate::error::PagerError;

/// Configuration for a [`PagerController`](crate::PagerController).
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use flexcal_pager::PagerConfig;
///
/// let config = PagerConfig::new(2024, 1)
///     .with_show_dates_outside_month(false)
///     .with_first_day_of_week(Weekday::Mon);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PagerConfig {
    start_year: i32,
    start_month: u32,
    show_dates_outside_month: bool,
    first_day_of_week: Weekday,
}

impl PagerConfig {
    /// Creates a configuration starting at the 0-based `start_month` of
    /// `start_year`.
    ///
    /// Defaults: dates outside the month are shown, weeks start on Sunday.
    pub fn new(start_year: i32, start_month: u32) -> Self {
        Self {
            start_year,
            start_month,
            show_dates_outside_month: true,
            first_day_of_week: Weekday::Sun,
        }
    }

    /// Creates a configuration starting at `month`.
    pub fn starting_at(month: CalendarMonth) -> Self {
        Self::new(month.year(), month.month())
    }

    /// Sets whether adjacent-month days fill the six-week grid.
    pub fn with_show_dates_outside_month(mut self, show: bool) -> Self {
        self.show_dates_outside_month = show;
        self
    }

    /// Sets the weekday shown in the first grid column.
    pub fn with_first_day_of_week(mut self, weekday: Weekday) -> Self {
        self.first_day_of_week = weekday;
        self
    }

    // --- Accessors ---

    /// Returns the start year.
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Returns the 0-based start month.
    pub fn start_month(&self) -> u32 {
        self.start_month
    }

    /// Returns whether adjacent-month days are shown.
    pub fn show_dates_outside_month(&self) -> bool {
        self.show_dates_outside_month
    }

    /// Returns the first day of the week.
    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    /// Returns the grid mode implied by [`Self::show_dates_outside_month`].
    pub fn grid_mode(&self) -> GridMode {
        GridMode::from_show_outside(self.show_dates_outside_month)
    }

    /// Returns the validated start month.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::Calendar`] if the start year or month is invalid.
    pub fn start(&self) -> Result<CalendarMonth, PagerError> {
        Ok(CalendarMonth::new(self.start_year, self.start_month)?)
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), PagerError> {
        self.start().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexcal_calendar::CalendarError;

    #[test]
    fn defaults() {
        let cfg = PagerConfig::new(2024, 1);
        assert_eq!(cfg.start_year(), 2024);
        assert_eq!(cfg.start_month(), 1);
        assert!(cfg.show_dates_outside_month());
        assert_eq!(cfg.first_day_of_week(), Weekday::Sun);
        assert_eq!(cfg.grid_mode(), GridMode::SixWeeks);
    }

    #[test]
    fn builder_chaining() {
        let cfg = PagerConfig::new(2024, 1)
            .with_show_dates_outside_month(false)
            .with_first_day_of_week(Weekday::Mon);
        assert!(!cfg.show_dates_outside_month());
        assert_eq!(cfg.first_day_of_week(), Weekday::Mon);
        assert_eq!(cfg.grid_mode(), GridMode::Compact);
    }

    #[test]
    fn starting_at_month() {
        let month = CalendarMonth::new(2025, 6).unwrap();
        let cfg = PagerConfig::starting_at(month);
        assert_eq!(cfg.start().unwrap(), month);
    }

    #[test]
    fn validate_bad_month() {
        assert_eq!(
            PagerConfig::new(2024, 12).validate().unwrap_err(),
            PagerError::Calendar(CalendarError::InvalidMonth { month: 12 })
        );
    }

    #[test]
    fn validate_bad_year() {
        assert!(PagerConfig::new(0, 0).validate().is_err());
    }
}
