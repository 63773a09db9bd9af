//! Infinite month pager for a calendar widget.
//!
//! A [`PagerController`] presents an unbounded sequence of months through a
//! fixed window of four [`MonthAdapter`]s. Position changes (swipes or
//! programmatic jumps) slide the window, rebind the exposed slots, move the
//! selection into the current slot and notify the host.
//!
//! # Flow
//!
//! ```text
//!  swipe / jump ──▶ on_position_selected ──▶ rebind slots ──▶ on_month_change
//!  cell click   ──▶ click                ──▶ selection    ──▶ on_date_click
//!  renderer     ──▶ cell_view(position)  ──▶ (day, CellState, outside?)
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use flexcal_calendar::CalendarDate;
//! use flexcal_pager::{Collaborators, FixedClock, PagerConfig, PagerController};
//!
//! let today = CalendarDate::new(2025, 0, 3).unwrap();
//! let config = PagerConfig::new(2024, 11);
//! let mut pager = PagerController::new(&config, Collaborators::new(FixedClock(today))).unwrap();
//!
//! let change = pager.go_to_current_month().unwrap().unwrap();
//! assert_eq!(change.month.year(), 2025);
//! assert_eq!(change.month.month(), 0);
//! ```

pub mod adapter;
pub mod collaborators;
pub mod config;
pub mod controller;
pub mod error;

pub use adapter::{CellView, MonthAdapter};
pub use collaborators::{
    CalendarListener, Clock, Collaborators, Event, EventSource, FixedClock, LocalClock,
};
pub use config::PagerConfig;
pub use controller::{INITIAL_POSITION, MonthChange, PagerController, WINDOW_SLOTS, slot_index};
pub use error::PagerError;

// Re-export the value types hosts need alongside the pager.
pub use flexcal_calendar::{CalendarDate, CalendarMonth, Direction};
pub use flexcal_grid::{CellState, GridMode};
