//! # flexcal-calendar
//!
//! Gregorian month and date values plus the day/month stepping used by the
//! month pager.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["CalendarMonth (year, 0-based month)"] -->|".offset(delta)"| A
//!     A -->|"CalendarDate::first_of()"| B["CalendarDate"]
//!     B -->|"step_day()"| C["StepOutcome"]
//!     B -->|"shift_month()"| B
//!     A -->|"month_difference()"| D["signed month count"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use flexcal_calendar::{CalendarDate, DayStep, month_difference, step_day};
//!
//! let selected = CalendarDate::new(2024, 11, 15).unwrap(); // Dec 15, 2024
//! let jump = month_difference(2024, 11, 2025, 0).unwrap(); // +1
//! let next = step_day(selected, DayStep::Next).unwrap().date();
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | `CalendarMonth`, supported year range, month lengths |
//! | `date` | `CalendarDate` with day clamping |
//! | `navigate` | Day stepping, month difference, month shifting |
//! | `error` | Error types |

mod date;
mod error;
mod month;
mod navigate;

pub use date::CalendarDate;
pub use error::CalendarError;
pub use month::{CalendarMonth, MAX_YEAR, MIN_YEAR, days_in_month, is_leap_year};
pub use navigate::{
    DayStep, Direction, StepOutcome, month_difference, shift_month, shift_month_clamped, step_day,
};
