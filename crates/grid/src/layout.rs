//! Six-week month grid layout.

use chrono::Weekday;
use flexcal_calendar::CalendarMonth;

use crate::error::GridError;

/// Number of week rows in the fixed grid.
pub const GRID_ROWS: usize = 6;

/// Number of weekday columns in the grid.
pub const GRID_COLUMNS: usize = 7;

/// Total number of cells in the fixed six-week grid.
pub const GRID_CELLS: usize = GRID_ROWS * GRID_COLUMNS;

/// How many cells of a month grid a host displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridMode {
    /// All 42 cells, with continuation days from the adjacent months.
    #[default]
    SixWeeks,
    /// Leading blank cells and the month's days only; no trailing cells.
    Compact,
}

impl GridMode {
    /// Mode matching a "show dates outside month" flag.
    pub fn from_show_outside(show_dates_outside_month: bool) -> Self {
        if show_dates_outside_month {
            Self::SixWeeks
        } else {
            Self::Compact
        }
    }
}

/// One cell of a month grid.
///
/// For cells outside the month, `day` continues the adjacent month's
/// numbering: counting back from the previous month's last day before
/// day 1, and forward from 1 after the last day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    /// Week row (0..6).
    pub row: u8,
    /// Weekday column (0..7), relative to the first day of the week.
    pub col: u8,
    /// Day number shown in the cell.
    pub day: u32,
    /// Whether the day belongs to the grid's month.
    pub in_current_month: bool,
}

impl GridCell {
    /// Linear position of the cell (`row * 7 + col`).
    pub fn position(&self) -> usize {
        usize::from(self.row) * GRID_COLUMNS + usize::from(self.col)
    }
}

/// The 42-cell layout of one month.
///
/// A pure function of the month and the first day of the week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: CalendarMonth,
    first_day_of_week: Weekday,
    offset: u32,
    days_in_month: u32,
    cells: [GridCell; GRID_CELLS],
}

/// Number of columns between `first_day_of_week` and `weekday`.
fn weekday_offset(weekday: Weekday, first_day_of_week: Weekday) -> u32 {
    (weekday.num_days_from_monday() + 7 - first_day_of_week.num_days_from_monday()) % 7
}

impl MonthGrid {
    /// Lays out `month` with weeks starting on `first_day_of_week`.
    pub fn new(month: CalendarMonth, first_day_of_week: Weekday) -> Self {
        let offset = weekday_offset(month.first_weekday(), first_day_of_week);
        let days_in_month = month.days_in_month();
        let previous_days = match month.previous() {
            Ok(prev) => prev.days_in_month(),
            // January of the first supported year: December always has 31 days.
            Err(_) => 31,
        };

        let cells = std::array::from_fn(|position| {
            // 1-based day number relative to this month; <= 0 before day 1.
            let relative = position as i64 - i64::from(offset) + 1;
            let (day, in_current_month) = if relative < 1 {
                ((i64::from(previous_days) + relative) as u32, false)
            } else if relative > i64::from(days_in_month) {
                ((relative - i64::from(days_in_month)) as u32, false)
            } else {
                (relative as u32, true)
            };
            GridCell {
                row: (position / GRID_COLUMNS) as u8,
                col: (position % GRID_COLUMNS) as u8,
                day,
                in_current_month,
            }
        });

        Self {
            month,
            first_day_of_week,
            offset,
            days_in_month,
            cells,
        }
    }

    /// The month this grid lays out.
    pub fn month(&self) -> CalendarMonth {
        self.month
    }

    /// The weekday shown in column 0.
    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    /// Column of day 1 (0..7).
    pub fn first_day_offset(&self) -> u32 {
        self.offset
    }

    /// Number of days in the grid's month.
    pub fn days_in_month(&self) -> u32 {
        self.days_in_month
    }

    /// All 42 cells in row-major order.
    pub fn cells(&self) -> &[GridCell; GRID_CELLS] {
        &self.cells
    }

    /// The cell at a linear position.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidPosition`] if `position >= 42`.
    pub fn cell(&self, position: usize) -> Result<GridCell, GridError> {
        self.cells
            .get(position)
            .copied()
            .ok_or(GridError::InvalidPosition { position })
    }

    /// The cell at `row`/`col`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCell`] outside the 6x7 grid.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<GridCell, GridError> {
        if row >= GRID_ROWS || col >= GRID_COLUMNS {
            return Err(GridError::InvalidCell { row, col });
        }
        Ok(self.cells[row * GRID_COLUMNS + col])
    }

    /// Day number displayed at `row`/`col`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCell`] outside the 6x7 grid.
    pub fn day_at(&self, row: usize, col: usize) -> Result<u32, GridError> {
        Ok(self.cell_at(row, col)?.day)
    }

    /// Whether `row`/`col` shows a day of the grid's month.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCell`] outside the 6x7 grid.
    pub fn is_within_current_month(&self, row: usize, col: usize) -> Result<bool, GridError> {
        Ok(self.cell_at(row, col)?.in_current_month)
    }

    /// Position of `day` of the grid's month, if it is a real day.
    pub fn position_of_day(&self, day: u32) -> Option<usize> {
        if (1..=self.days_in_month).contains(&day) {
            Some((self.offset + day - 1) as usize)
        } else {
            None
        }
    }

    /// Number of cells a host displays in `mode`.
    pub fn visible_count(&self, mode: GridMode) -> usize {
        match mode {
            GridMode::SixWeeks => GRID_CELLS,
            GridMode::Compact => (self.offset + self.days_in_month) as usize,
        }
    }

    /// Number of week rows the month's days occupy (4, 5 or 6).
    pub fn row_count(&self) -> usize {
        (self.offset + self.days_in_month).div_ceil(GRID_COLUMNS as u32) as usize
    }
}

/// Computes the grid for a 0-based `month` of `year`.
///
/// # Errors
///
/// Returns [`GridError::Calendar`] for an invalid year or month.
pub fn compute_grid(
    year: i32,
    month: u32,
    first_day_of_week: Weekday,
) -> Result<MonthGrid, GridError> {
    let month = CalendarMonth::new(year, month)?;
    Ok(MonthGrid::new(month, first_day_of_week))
}

/// Weekdays in column order for a week starting on `first_day_of_week`.
pub fn weekday_order(first_day_of_week: Weekday) -> [Weekday; GRID_COLUMNS] {
    let mut day = first_day_of_week;
    std::array::from_fn(|_| {
        let current = day;
        day = day.succ();
        current
    })
}
