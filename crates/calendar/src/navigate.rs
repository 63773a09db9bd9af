//! Day and month stepping over a selected date.

use chrono::NaiveDate;

use crate::date::CalendarDate;
use crate::error::CalendarError;
use crate::month::{CalendarMonth, MAX_YEAR, MIN_YEAR};

/// Paging direction. `Right` moves forward in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards earlier months.
    Left,
    /// Towards later months.
    Right,
}

impl Direction {
    /// Direction of travel from position `from` to position `to`.
    ///
    /// Equal positions report `Left`; callers treat a zero delta as a no-op
    /// before asking for a direction.
    pub fn between(from: i64, to: i64) -> Self {
        if to > from { Self::Right } else { Self::Left }
    }

    /// Signed unit step for this direction.
    pub fn step(self) -> i64 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }
}

/// A single-day step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStep {
    /// One day forward.
    Next,
    /// One day back.
    Previous,
}

impl DayStep {
    /// The paging direction a month rollover in this step implies.
    pub fn direction(self) -> Direction {
        match self {
            Self::Next => Direction::Right,
            Self::Previous => Direction::Left,
        }
    }
}

/// Result of [`step_day`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The new date lies in the same month.
    SameMonth(CalendarDate),
    /// The new date lies in the adjacent month; the caller should page.
    MonthRollover {
        /// The stepped date.
        date: CalendarDate,
        /// Which way the calendar has to page.
        direction: Direction,
    },
}

impl StepOutcome {
    /// The stepped date regardless of rollover.
    pub fn date(self) -> CalendarDate {
        match self {
            Self::SameMonth(date) | Self::MonthRollover { date, .. } => date,
        }
    }
}

fn out_of_range(year: i32) -> CalendarError {
    CalendarError::InvalidYear {
        year: i64::from(year),
        min: MIN_YEAR,
        max: MAX_YEAR,
    }
}

/// Moves `date` one day forward or back using real calendar arithmetic.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] when the step leaves the supported
/// year range.
///
/// # Example
///
/// ```
/// use flexcal_calendar::{CalendarDate, DayStep, Direction, StepOutcome, step_day};
///
/// let feb1 = CalendarDate::new(2024, 1, 1).unwrap();
/// let outcome = step_day(feb1, DayStep::Previous).unwrap();
/// assert_eq!(
///     outcome,
///     StepOutcome::MonthRollover {
///         date: CalendarDate::new(2024, 0, 31).unwrap(),
///         direction: Direction::Left,
///     }
/// );
/// ```
pub fn step_day(date: CalendarDate, step: DayStep) -> Result<StepOutcome, CalendarError> {
    let naive = date.to_naive();
    let stepped: Option<NaiveDate> = match step {
        DayStep::Next => naive.succ_opt(),
        DayStep::Previous => naive.pred_opt(),
    };
    let stepped = stepped.ok_or_else(|| out_of_range(date.year()))?;
    let stepped = CalendarDate::from_naive(stepped)?;

    if stepped.calendar_month() == date.calendar_month() {
        Ok(StepOutcome::SameMonth(stepped))
    } else {
        Ok(StepOutcome::MonthRollover {
            date: stepped,
            direction: step.direction(),
        })
    }
}

/// Signed number of month steps from the selected month to the reference
/// month. The day of month plays no part.
///
/// # Errors
///
/// Returns [`CalendarError`] if either (year, month) pair is invalid.
pub fn month_difference(
    selected_year: i32,
    selected_month: u32,
    reference_year: i32,
    reference_month: u32,
) -> Result<i64, CalendarError> {
    let selected = CalendarMonth::new(selected_year, selected_month)?;
    let reference = CalendarMonth::new(reference_year, reference_month)?;
    Ok(selected.months_until(reference))
}

/// Shifts `date` by `delta` months, landing on the first of the target month.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] if the target month is out of range.
pub fn shift_month(date: CalendarDate, delta: i64) -> Result<CalendarDate, CalendarError> {
    let target = date.calendar_month().offset(delta)?;
    Ok(CalendarDate::first_of(target))
}

/// Shifts `date` by `delta` months keeping the day of month, clamped to the
/// target month's length (Jan 31 + 1 month = Feb 28/29).
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] if the target month is out of range.
pub fn shift_month_clamped(date: CalendarDate, delta: i64) -> Result<CalendarDate, CalendarError> {
    let target = date.calendar_month().offset(delta)?;
    CalendarDate::clamped(target.year(), target.month(), date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn step_within_month() {
        let outcome = step_day(date(2024, 5, 10), DayStep::Next).unwrap();
        assert_eq!(outcome, StepOutcome::SameMonth(date(2024, 5, 11)));
        let outcome = step_day(date(2024, 5, 10), DayStep::Previous).unwrap();
        assert_eq!(outcome, StepOutcome::SameMonth(date(2024, 5, 9)));
    }

    #[test]
    fn step_back_from_feb_first() {
        let outcome = step_day(date(2024, 1, 1), DayStep::Previous).unwrap();
        assert_eq!(
            outcome,
            StepOutcome::MonthRollover {
                date: date(2024, 0, 31),
                direction: Direction::Left,
            }
        );
    }

    #[test]
    fn step_forward_from_leap_day() {
        let outcome = step_day(date(2024, 1, 29), DayStep::Next).unwrap();
        assert_eq!(
            outcome,
            StepOutcome::MonthRollover {
                date: date(2024, 2, 1),
                direction: Direction::Right,
            }
        );
    }

    #[test]
    fn step_forward_from_feb_28_in_leap_year_stays() {
        let outcome = step_day(date(2024, 1, 28), DayStep::Next).unwrap();
        assert_eq!(outcome, StepOutcome::SameMonth(date(2024, 1, 29)));
    }

    #[test]
    fn step_across_year() {
        let outcome = step_day(date(2024, 11, 31), DayStep::Next).unwrap();
        assert_eq!(outcome.date(), date(2025, 0, 1));
        assert!(matches!(outcome, StepOutcome::MonthRollover { .. }));
    }

    #[test]
    fn step_out_of_range() {
        assert!(step_day(date(MAX_YEAR, 11, 31), DayStep::Next).is_err());
        assert!(step_day(date(MIN_YEAR, 0, 1), DayStep::Previous).is_err());
    }

    #[test]
    fn month_difference_laws() {
        assert_eq!(month_difference(2024, 4, 2024, 4).unwrap(), 0);
        assert_eq!(month_difference(2024, 4, 2024, 5).unwrap(), 1);
        assert_eq!(month_difference(2024, 11, 2025, 0).unwrap(), 1);
        assert_eq!(month_difference(2025, 0, 2024, 11).unwrap(), -1);
        assert_eq!(month_difference(2024, 4, 2024, 6).unwrap(), 2);
        assert_eq!(month_difference(2022, 3, 2024, 3).unwrap(), 24);
    }

    #[test]
    fn month_difference_rejects_bad_month() {
        assert_eq!(
            month_difference(2024, 12, 2024, 0).unwrap_err(),
            CalendarError::InvalidMonth { month: 12 }
        );
    }

    #[test]
    fn shift_month_normalises_to_first() {
        assert_eq!(shift_month(date(2024, 0, 31), 1).unwrap(), date(2024, 1, 1));
        assert_eq!(shift_month(date(2024, 0, 15), -1).unwrap(), date(2023, 11, 1));
    }

    #[test]
    fn shift_month_clamped_keeps_day() {
        assert_eq!(
            shift_month_clamped(date(2024, 0, 31), 1).unwrap(),
            date(2024, 1, 29)
        );
        assert_eq!(
            shift_month_clamped(date(2024, 4, 15), 2).unwrap(),
            date(2024, 6, 15)
        );
    }

    #[test]
    fn direction_between_positions() {
        assert_eq!(Direction::between(400, 401), Direction::Right);
        assert_eq!(Direction::between(400, 398), Direction::Left);
        assert_eq!(Direction::Right.step(), 1);
        assert_eq!(DayStep::Previous.direction(), Direction::Left);
    }
}
