//! One slot of the pager window: a month grid plus a selection mirror.

use chrono::Weekday;
use flexcal_calendar::{CalendarDate, CalendarMonth};
use flexcal_grid::{CellState, GridCell, GridError, GridMode, MonthGrid, classify};

use crate::collaborators::{Event, EventSource};
use crate::error::PagerError;

/// Day cells of an adjacent month up to this number belong to the next month;
/// larger numbers belong to the previous month.
const NEXT_MONTH_MAX_DAY: u32 = 12;

/// What the renderer needs to draw one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    /// Day number to display.
    pub day: u32,
    /// Semantic state for styling.
    pub state: CellState,
    /// Whether the day belongs to an adjacent month.
    pub is_outside_month: bool,
    /// Whether the cell shows anything. Outside-month cells are blank in
    /// compact mode.
    pub visible: bool,
    /// Events on the day; only looked up for days of the bound month.
    pub events: Vec<Event>,
}

/// A month bound to one slot of the circular window.
///
/// The selection is a snapshot handed in by the controller; the adapter
/// never owns the authoritative selection.
#[derive(Debug, Clone)]
pub struct MonthAdapter {
    slot: usize,
    grid: MonthGrid,
    mode: GridMode,
    selection: Option<CalendarDate>,
    dirty: bool,
}

impl MonthAdapter {
    pub(crate) fn new(
        slot: usize,
        month: CalendarMonth,
        first_day_of_week: Weekday,
        mode: GridMode,
    ) -> Self {
        Self {
            slot,
            grid: MonthGrid::new(month, first_day_of_week),
            mode,
            selection: None,
            dirty: true,
        }
    }

    /// Index of this slot in the window (0..4).
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// The bound month.
    pub fn month(&self) -> CalendarMonth {
        self.grid.month()
    }

    /// The bound month's grid.
    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    /// How many cells the renderer shows.
    pub fn mode(&self) -> GridMode {
        self.mode
    }

    /// The mirrored selection, if this slot holds it.
    pub fn selection(&self) -> Option<CalendarDate> {
        self.selection
    }

    /// Whether the slot changed since it was last displayed.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of cells exposed to the renderer.
    pub fn cell_count(&self) -> usize {
        self.grid.visible_count(self.mode)
    }

    /// Rebinds the slot. Returns `true` if the month changed.
    pub(crate) fn rebind(&mut self, month: CalendarMonth) -> bool {
        if month == self.grid.month() {
            return false;
        }
        self.grid = MonthGrid::new(month, self.grid.first_day_of_week());
        self.dirty = true;
        true
    }

    pub(crate) fn set_selection(&mut self, selection: Option<CalendarDate>) {
        self.selection = selection;
        self.dirty = true;
    }

    pub(crate) fn set_mode(&mut self, mode: GridMode) {
        self.mode = mode;
        self.dirty = true;
    }

    pub(crate) fn set_first_day_of_week(&mut self, weekday: Weekday) {
        self.grid = MonthGrid::new(self.grid.month(), weekday);
        self.dirty = true;
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn checked_cell(&self, position: usize) -> Result<GridCell, PagerError> {
        if position >= self.cell_count() {
            return Err(GridError::InvalidPosition { position }.into());
        }
        Ok(self.grid.cell(position)?)
    }

    /// Render data for the cell at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::Grid`] if `position` is not an exposed cell.
    pub fn cell_view(
        &self,
        position: usize,
        today: CalendarDate,
        events: Option<&dyn EventSource>,
    ) -> Result<CellView, PagerError> {
        let cell = self.checked_cell(position)?;
        let month = self.month();
        let state = classify(&cell, month, today, self.selection);
        let events = match events {
            Some(source) if cell.in_current_month => {
                source.events_for_day(month.year(), month.month(), cell.day)
            }
            _ => Vec::new(),
        };
        Ok(CellView {
            day: cell.day,
            state,
            is_outside_month: !cell.in_current_month,
            visible: cell.in_current_month || self.mode == GridMode::SixWeeks,
            events,
        })
    }

    /// The date a click on `position` selects, or `None` if the cell is blank.
    ///
    /// Outside-month days up to 12 resolve to the next month, larger days to
    /// the previous month.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError`] if `position` is not an exposed cell or the
    /// adjacent month is out of range.
    pub fn resolve_click(&self, position: usize) -> Result<Option<CalendarDate>, PagerError> {
        let cell = self.checked_cell(position)?;
        let month = self.month();
        if cell.in_current_month {
            return Ok(Some(CalendarDate::new(month.year(), month.month(), cell.day)?));
        }
        if self.mode == GridMode::Compact {
            return Ok(None);
        }
        let adjacent = if cell.day <= NEXT_MONTH_MAX_DAY {
            month.next()?
        } else {
            month.previous()?
        };
        Ok(Some(CalendarDate::new(
            adjacent.year(),
            adjacent.month(),
            cell.day,
        )?))
    }
}
