//! # flexcal-grid
//!
//! Maps a month onto the fixed 6x7 calendar grid and classifies each cell.
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐
//!  │ compute_grid │────▶│    classify    │────▶ CellState
//!  │ (42 cells)   │     │ (today, sel.)  │
//!  └──────────────┘     └────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use chrono::Weekday;
//! use flexcal_calendar::CalendarDate;
//! use flexcal_grid::{CellState, classify, compute_grid};
//!
//! let grid = compute_grid(2024, 1, Weekday::Sun).unwrap();
//! let today = CalendarDate::new(2024, 1, 1).unwrap();
//! let cell = grid.cells()[4];
//! assert_eq!(cell.day, 1);
//! assert_eq!(classify(&cell, grid.month(), today, None), CellState::Today);
//! ```

pub mod classify;
pub mod error;
pub mod layout;

pub use classify::{CellState, classify};
pub use error::GridError;
pub use layout::{
    GRID_CELLS, GRID_COLUMNS, GRID_ROWS, GridCell, GridMode, MonthGrid, compute_grid,
    weekday_order,
};
