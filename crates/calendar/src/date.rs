//! Gregorian date value used for selections and "today".

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;
use crate::month::{CalendarMonth, MAX_YEAR, MIN_YEAR, check_month, check_year};

/// A real calendar date with a 0-based month.
///
/// The constructors guarantee `1 <= day <= days_in_month(year, month)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Creates a new `CalendarDate`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the year or month is out of range, or if
    /// `day` is not a day of that month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        let cal_month = CalendarMonth::new(year, month)?;
        let max_day = cal_month.days_in_month();
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Creates a `CalendarDate`, clamping `day` into the month.
    ///
    /// A day past the end of the month becomes the month's last day and
    /// day 0 becomes day 1.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the year or month is out of range.
    pub fn clamped(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        let cal_month = CalendarMonth::new(year, month)?;
        Ok(Self {
            year,
            month,
            day: day.clamp(1, cal_month.days_in_month()),
        })
    }

    /// Returns the first day of `month`.
    pub fn first_of(month: CalendarMonth) -> Self {
        Self {
            year: month.year(),
            month: month.month(),
            day: 1,
        }
    }

    /// Converts a chrono date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] if the date lies outside the
    /// supported year range.
    pub fn from_naive(date: NaiveDate) -> Result<Self, CalendarError> {
        let year = check_year(i64::from(date.year()))?;
        let month = check_month(date.month0())?;
        Ok(Self {
            year,
            month,
            day: date.day(),
        })
    }

    /// Converts a chrono date, saturating to Jan 1 of [`MIN_YEAR`] or
    /// Dec 31 of [`MAX_YEAR`] outside the supported range.
    pub fn saturating_from_naive(date: NaiveDate) -> Self {
        match date.year() {
            year if year < MIN_YEAR => Self {
                year: MIN_YEAR,
                month: 0,
                day: 1,
            },
            year if year > MAX_YEAR => Self {
                year: MAX_YEAR,
                month: 11,
                day: 31,
            },
            year => Self {
                year,
                month: date.month0(),
                day: date.day(),
            },
        }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the 0-based month (0..=11).
    pub fn month(self) -> u32 {
        self.month
    }

    /// Returns the day within the month.
    pub fn day(self) -> u32 {
        self.day
    }

    /// Returns the month this date belongs to.
    pub fn calendar_month(self) -> CalendarMonth {
        // Safety: the constructors validated year and month.
        CalendarMonth::new(self.year, self.month).expect("CalendarDate holds a valid month")
    }

    /// Returns `true` if this date falls on `year`/`month`/`day`.
    pub fn is(self, year: i32, month: u32, day: u32) -> bool {
        self.year == year && self.month == month && self.day == day
    }

    /// Converts to a chrono date.
    pub fn to_naive(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, self.day)
            .expect("CalendarDate always holds a real date")
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month + 1, self.day)
    }
}
