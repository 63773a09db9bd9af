//! Year-month values and Gregorian month lengths.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::CalendarError;

/// Smallest year a [`CalendarMonth`] may hold.
pub const MIN_YEAR: i32 = 1;

/// Largest year a [`CalendarMonth`] may hold.
pub const MAX_YEAR: i32 = 9999;

/// A (year, month) pair identifying one page of the calendar.
///
/// Months are 0-based (January = 0). Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth {
    year: i32,
    month: u32,
}

pub(crate) fn check_year(year: i64) -> Result<i32, CalendarError> {
    if year < i64::from(MIN_YEAR) || year > i64::from(MAX_YEAR) {
        return Err(CalendarError::InvalidYear {
            year,
            min: MIN_YEAR,
            max: MAX_YEAR,
        });
    }
    Ok(year as i32)
}

pub(crate) fn check_month(month: u32) -> Result<u32, CalendarError> {
    if month > 11 {
        return Err(CalendarError::InvalidMonth {
            month: i64::from(month),
        });
    }
    Ok(month)
}

/// Returns `true` if `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Returns the number of days in the given 0-based month.
///
/// # Errors
///
/// Returns [`CalendarError`] if the year or month is out of range.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    Ok(CalendarMonth::new(year, month)?.days_in_month())
}

impl CalendarMonth {
    /// Creates a new `CalendarMonth`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] if `year` is outside
    /// [`MIN_YEAR`]..=[`MAX_YEAR`] and [`CalendarError::InvalidMonth`] if
    /// `month` is outside 0..=11.
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        let year = check_year(i64::from(year))?;
        let month = check_month(month)?;
        Ok(Self { year, month })
    }

    /// Creates a `CalendarMonth` from a linear month index (`year * 12 + month`).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] if the index falls outside the
    /// supported year range.
    pub fn from_index(index: i64) -> Result<Self, CalendarError> {
        let year = check_year(index.div_euclid(12))?;
        Ok(Self {
            year,
            month: index.rem_euclid(12) as u32,
        })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the 0-based month (0..=11).
    pub fn month(self) -> u32 {
        self.month
    }

    /// Returns the linear month index `year * 12 + month`.
    pub fn index(self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month)
    }

    /// Returns the number of days in this month, leap-year aware.
    pub fn days_in_month(self) -> u32 {
        // The day before the 1st of the following month; chrono covers year
        // MAX_YEAR + 1.
        let (year, month) = if self.month == 11 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 2)
        };
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|next| next.pred_opt())
            .map(|last| last.day())
            .expect("supported year range is representable")
    }

    /// Returns the first day of this month.
    pub fn first_day(self) -> NaiveDate {
        // Every month in MIN_YEAR..=MAX_YEAR is representable by chrono.
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
            .expect("supported year range is representable")
    }

    /// Returns the weekday of the first day of this month.
    pub fn first_weekday(self) -> Weekday {
        self.first_day().weekday()
    }

    /// Returns the month `delta` months away (negative moves backwards).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] if the result leaves the
    /// supported year range.
    pub fn offset(self, delta: i64) -> Result<Self, CalendarError> {
        Self::from_index(self.index().saturating_add(delta))
    }

    /// Returns the following month.
    ///
    /// # Errors
    ///
    /// Fails only past December of [`MAX_YEAR`].
    pub fn next(self) -> Result<Self, CalendarError> {
        self.offset(1)
    }

    /// Returns the preceding month.
    ///
    /// # Errors
    ///
    /// Fails only before January of [`MIN_YEAR`].
    pub fn previous(self) -> Result<Self, CalendarError> {
        self.offset(-1)
    }

    /// Signed number of month steps from `self` to `other`.
    pub fn months_until(self, other: Self) -> i64 {
        other.index() - self.index()
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let m = CalendarMonth::new(2024, 1).unwrap();
        assert_eq!(m.year(), 2024);
        assert_eq!(m.month(), 1);
    }

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            CalendarMonth::new(2024, 12).unwrap_err(),
            CalendarError::InvalidMonth { month: 12 }
        );
    }

    #[test]
    fn new_invalid_year() {
        assert!(matches!(
            CalendarMonth::new(0, 0),
            Err(CalendarError::InvalidYear { year: 0, .. })
        ));
        assert!(matches!(
            CalendarMonth::new(10_000, 0),
            Err(CalendarError::InvalidYear { year: 10_000, .. })
        ));
    }

    #[test]
    fn february_lengths() {
        assert_eq!(days_in_month(2024, 1).unwrap(), 29);
        assert_eq!(days_in_month(2023, 1).unwrap(), 28);
        assert_eq!(days_in_month(1900, 1).unwrap(), 28);
        assert_eq!(days_in_month(2000, 1).unwrap(), 29);
    }

    #[test]
    fn month_lengths_at_range_edges() {
        assert_eq!(days_in_month(MIN_YEAR, 0).unwrap(), 31);
        assert_eq!(days_in_month(MAX_YEAR, 11).unwrap(), 31);
        assert_eq!(days_in_month(MAX_YEAR, 10).unwrap(), 30);
        let thirty: Vec<u32> = (0..12)
            .filter(|&m| days_in_month(2023, m).unwrap() == 30)
            .collect();
        assert_eq!(thirty, vec![3, 5, 8, 10]);
    }

    #[test]
    fn month_lengths_match_chrono() {
        for year in [1999, 2000, 2023, 2024] {
            for month in 0..12 {
                let m = CalendarMonth::new(year, month).unwrap();
                let last = m.next().unwrap().first_day().pred_opt().unwrap();
                assert_eq!(m.days_in_month(), last.day(), "{m}");
            }
        }
    }

    #[test]
    fn offset_rolls_over_years() {
        let dec = CalendarMonth::new(2024, 11).unwrap();
        assert_eq!(dec.next().unwrap(), CalendarMonth::new(2025, 0).unwrap());
        assert_eq!(dec.offset(-12).unwrap(), CalendarMonth::new(2023, 11).unwrap());
        assert_eq!(dec.offset(14).unwrap(), CalendarMonth::new(2026, 1).unwrap());

        let jan = CalendarMonth::new(2025, 0).unwrap();
        assert_eq!(jan.previous().unwrap(), dec);
    }

    #[test]
    fn offset_out_of_range() {
        let last = CalendarMonth::new(MAX_YEAR, 11).unwrap();
        assert!(last.next().is_err());
        let first = CalendarMonth::new(MIN_YEAR, 0).unwrap();
        assert!(first.previous().is_err());
        assert!(first.offset(i64::MAX).is_err());
    }

    #[test]
    fn months_until_is_antisymmetric() {
        let a = CalendarMonth::new(2024, 11).unwrap();
        let b = CalendarMonth::new(2025, 0).unwrap();
        assert_eq!(a.months_until(b), 1);
        assert_eq!(b.months_until(a), -1);
        assert_eq!(a.months_until(a), 0);
    }

    #[test]
    fn first_weekday_feb_2024() {
        let feb = CalendarMonth::new(2024, 1).unwrap();
        assert_eq!(feb.first_weekday(), Weekday::Thu);
    }

    #[test]
    fn ordering_is_chronological() {
        let a = CalendarMonth::new(2023, 11).unwrap();
        let b = CalendarMonth::new(2024, 0).unwrap();
        assert!(a < b);
    }

    #[test]
    fn display_is_one_based() {
        let m = CalendarMonth::new(2024, 0).unwrap();
        assert_eq!(m.to_string(), "2024-01");
    }
}
