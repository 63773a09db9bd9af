//! Infinite month paging over a circular window of four month adapters.
//!
//! Pager positions are unbounded integers. The month shown at a position is
//! `anchor_month + (position - anchor_position)`, and position `p` lives in
//! slot `p mod 4`. The window around the current position `c` covers
//! `c - 1 ..= c + 2`, one slot per residue.

use chrono::Weekday;
use flexcal_calendar::{
    CalendarDate, CalendarMonth, DayStep, Direction, StepOutcome, month_difference, step_day,
};
use flexcal_grid::{GridMode, weekday_order};
use tracing::{debug, trace};

use crate::adapter::{CellView, MonthAdapter};
use crate::collaborators::{CalendarListener, Clock, Collaborators, EventSource};
use crate::config::PagerConfig;
use crate::error::PagerError;

/// Number of slots in the circular window.
pub const WINDOW_SLOTS: usize = 4;

/// Position the pager starts at. Any value works; this one leaves room to
/// page backwards without negative positions.
pub const INITIAL_POSITION: i64 = WINDOW_SLOTS as i64 * 100;

/// Emitted after every completed slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthChange {
    /// Month now shown.
    pub month: CalendarMonth,
    /// Direction of travel.
    pub direction: Direction,
    /// New pager position.
    pub position: i64,
}

/// Slot holding pager `position`.
pub fn slot_index(position: i64) -> usize {
    position.rem_euclid(WINDOW_SLOTS as i64) as usize
}

fn window(center: i64) -> impl Iterator<Item = i64> {
    (center - 1)..=(center + 2)
}

/// Owns the selection and the four month adapters, and turns position
/// changes into month transitions.
pub struct PagerController {
    slots: [MonthAdapter; WINDOW_SLOTS],
    anchor_position: i64,
    anchor_month: CalendarMonth,
    last_position: i64,
    selected: CalendarDate,
    mode: GridMode,
    first_day_of_week: Weekday,
    clock: Box<dyn Clock>,
    events: Option<Box<dyn EventSource>>,
    listener: Option<Box<dyn CalendarListener>>,
}

impl PagerController {
    /// Creates a pager showing the configured start month.
    ///
    /// The initial selection is today's day of month within the start month,
    /// clamped to the month's length.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::Calendar`] if the start month is invalid.
    pub fn new(config: &PagerConfig, collaborators: Collaborators) -> Result<Self, PagerError> {
        let start = config.start()?;
        let today = collaborators.clock.today();
        let selected = CalendarDate::clamped(start.year(), start.month(), today.day())?;
        let mode = config.grid_mode();
        let first_day_of_week = config.first_day_of_week();

        let months = window_months(start, INITIAL_POSITION, INITIAL_POSITION, start);
        let mut slots: [MonthAdapter; WINDOW_SLOTS] = std::array::from_fn(|slot| {
            MonthAdapter::new(slot, months[slot], first_day_of_week, mode)
        });
        slots[slot_index(INITIAL_POSITION)].set_selection(Some(selected));

        debug!(
            start = %start,
            selected = %selected,
            position = INITIAL_POSITION,
            "pager created"
        );

        Ok(Self {
            slots,
            anchor_position: INITIAL_POSITION,
            anchor_month: start,
            last_position: INITIAL_POSITION,
            selected,
            mode,
            first_day_of_week,
            clock: collaborators.clock,
            events: collaborators.events,
            listener: collaborators.listener,
        })
    }

    // --- Accessors ---

    /// The current pager position.
    pub fn current_position(&self) -> i64 {
        self.last_position
    }

    /// The month shown at the current position.
    pub fn current_month(&self) -> CalendarMonth {
        self.current_adapter().month()
    }

    /// The authoritative selection.
    pub fn selected_date(&self) -> CalendarDate {
        self.selected
    }

    /// Today, as reported by the clock.
    pub fn today(&self) -> CalendarDate {
        self.clock.today()
    }

    /// The adapter showing the current month.
    pub fn current_adapter(&self) -> &MonthAdapter {
        &self.slots[slot_index(self.last_position)]
    }

    /// All four slots, indexed by slot number.
    pub fn slots(&self) -> &[MonthAdapter; WINDOW_SLOTS] {
        &self.slots
    }

    /// The adapter holding `position`.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::PositionOutsideWindow`] if `position` is not in
    /// the current window.
    pub fn adapter_at(&self, position: i64) -> Result<&MonthAdapter, PagerError> {
        if !window(self.last_position).any(|p| p == position) {
            return Err(PagerError::PositionOutsideWindow {
                position,
                current: self.last_position,
            });
        }
        Ok(&self.slots[slot_index(position)])
    }

    /// The month shown at any pager position.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::Calendar`] if that month is out of range.
    pub fn month_at(&self, position: i64) -> Result<CalendarMonth, PagerError> {
        let delta = position.saturating_sub(self.anchor_position);
        Ok(self.anchor_month.offset(delta)?)
    }

    /// Whether adjacent-month days are shown.
    pub fn show_dates_outside_month(&self) -> bool {
        self.mode == GridMode::SixWeeks
    }

    /// The weekday in the first grid column.
    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    /// Weekdays in header order.
    pub fn weekday_header(&self) -> [Weekday; 7] {
        weekday_order(self.first_day_of_week)
    }

    /// Week rows the current month occupies.
    pub fn row_count(&self) -> usize {
        self.current_adapter().grid().row_count()
    }

    /// Number of cells exposed for the current month.
    pub fn cell_count(&self) -> usize {
        self.current_adapter().cell_count()
    }

    /// Render data for a cell of the current month.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::Grid`] if `position` is not an exposed cell.
    pub fn cell_view(&self, position: usize) -> Result<CellView, PagerError> {
        self.current_adapter()
            .cell_view(position, self.clock.today(), self.events.as_deref())
    }

    // --- Collaborators ---

    /// Replaces the listener.
    pub fn set_listener(&mut self, listener: impl CalendarListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Replaces the event source and marks every slot for redisplay.
    pub fn set_event_source(&mut self, events: impl EventSource + 'static) {
        self.events = Some(Box::new(events));
        for slot in &mut self.slots {
            slot.mark_dirty();
        }
    }

    // --- Transitions ---

    /// Slides the window to `new_position`.
    ///
    /// Returns `None` when the position did not change. The selection moves
    /// to day 1 of the new month, and the listener sees the month change
    /// after that month is bound and selected.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::Calendar`] if the target month is out of range;
    /// nothing is modified in that case.
    #[tracing::instrument(skip(self), fields(from = self.last_position))]
    pub fn on_position_selected(
        &mut self,
        new_position: i64,
    ) -> Result<Option<MonthChange>, PagerError> {
        let last_position = self.last_position;
        if new_position == last_position {
            return Ok(None);
        }
        let direction = Direction::between(last_position, new_position);

        let target = self.month_at(new_position)?;
        let new_selected = CalendarDate::first_of(target);
        let months = window_months(
            self.anchor_month,
            self.anchor_position,
            new_position,
            target,
        );

        self.slots[slot_index(last_position)].set_selection(None);

        for (slot, month) in self.slots.iter_mut().zip(months) {
            if slot.rebind(month) {
                trace!(slot = slot.slot(), month = %month, "slot rebound");
            }
        }

        let current = slot_index(new_position);
        self.slots[current].set_selection(Some(new_selected));
        self.last_position = new_position;
        self.selected = new_selected;

        let change = MonthChange {
            month: self.slots[current].month(),
            direction,
            position: new_position,
        };
        debug!(
            month = %change.month,
            ?direction,
            selected = %self.selected,
            "month changed"
        );
        if let Some(listener) = self.listener.as_mut() {
            listener.on_month_change(change.month, change.direction);
        }
        Ok(Some(change))
    }

    /// Slides one month forward.
    ///
    /// # Errors
    ///
    /// See [`Self::on_position_selected`].
    pub fn move_to_next_month(&mut self) -> Result<Option<MonthChange>, PagerError> {
        self.on_position_selected(self.last_position + 1)
    }

    /// Slides one month back.
    ///
    /// # Errors
    ///
    /// See [`Self::on_position_selected`].
    pub fn move_to_previous_month(&mut self) -> Result<Option<MonthChange>, PagerError> {
        self.on_position_selected(self.last_position - 1)
    }

    /// Jumps directly to the month containing today.
    ///
    /// The distance is measured from the shown month, and the jump reuses the
    /// ordinary slide for any number of months.
    ///
    /// # Errors
    ///
    /// See [`Self::on_position_selected`].
    pub fn go_to_current_month(&mut self) -> Result<Option<MonthChange>, PagerError> {
        let today = self.clock.today();
        let shown = self.current_month();
        let difference = month_difference(shown.year(), shown.month(), today.year(), today.month())?;
        if difference == 0 {
            return Ok(None);
        }
        debug!(difference, "jumping to current month");
        self.on_position_selected(self.last_position.saturating_add(difference))
    }

    /// Moves the selection one day forward, paging on a month rollover.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::Calendar`] at the end of the supported range.
    pub fn move_to_next_date(&mut self) -> Result<Option<MonthChange>, PagerError> {
        self.step_selection(DayStep::Next)
    }

    /// Moves the selection one day back, paging on a month rollover.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::Calendar`] at the start of the supported range.
    pub fn move_to_previous_date(&mut self) -> Result<Option<MonthChange>, PagerError> {
        self.step_selection(DayStep::Previous)
    }

    fn step_selection(&mut self, step: DayStep) -> Result<Option<MonthChange>, PagerError> {
        let outcome = step_day(self.selected, step)?;
        if let StepOutcome::MonthRollover { date, direction } = outcome {
            trace!(%date, ?direction, "day step rolls over");
        }
        // After an adjacent-month click the selection is off the shown page.
        self.select_date(outcome.date())
    }

    /// Selects `date`, paging to its month first if needed. Raises no click
    /// event.
    ///
    /// # Errors
    ///
    /// See [`Self::on_position_selected`].
    pub fn select_date(&mut self, date: CalendarDate) -> Result<Option<MonthChange>, PagerError> {
        let difference = self.current_month().months_until(date.calendar_month());
        let change = if difference == 0 {
            None
        } else {
            self.on_position_selected(self.last_position.saturating_add(difference))?
        };
        self.apply_selection(date);
        Ok(change)
    }

    /// Handles a click on a cell of the current month.
    ///
    /// Returns the selected date, or `None` for a blank cell.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError`] if `position` is not an exposed cell.
    pub fn click(&mut self, position: usize) -> Result<Option<CalendarDate>, PagerError> {
        let Some(date) = self.current_adapter().resolve_click(position)? else {
            return Ok(None);
        };
        self.apply_selection(date);
        debug!(position, date = %date, "date clicked");
        if let Some(listener) = self.listener.as_mut() {
            listener.on_date_click(date);
        }
        Ok(Some(date))
    }

    fn apply_selection(&mut self, date: CalendarDate) {
        self.selected = date;
        let current = slot_index(self.last_position);
        self.slots[current].set_selection(Some(date));
    }

    // --- Presentation ---

    /// Switches between the six-week and compact grids. Position and
    /// selection are kept; every slot is marked for redisplay.
    pub fn set_show_dates_outside_month(&mut self, show: bool) {
        self.mode = GridMode::from_show_outside(show);
        for slot in &mut self.slots {
            slot.set_mode(self.mode);
        }
        debug!(show, "outside-month dates toggled");
    }

    /// Changes the first column's weekday and lays out every slot again.
    pub fn set_first_day_of_week(&mut self, weekday: Weekday) {
        self.first_day_of_week = weekday;
        for slot in &mut self.slots {
            slot.set_first_day_of_week(weekday);
        }
        debug!(?weekday, "first day of week changed");
    }

    /// Slots needing redisplay since the last call, clearing their flags.
    pub fn take_dirty_slots(&mut self) -> Vec<usize> {
        self.slots
            .iter_mut()
            .filter_map(|slot| slot.take_dirty().then_some(slot.slot()))
            .collect()
    }
}

/// Months for every slot of the window around `center`.
///
/// Neighbours beyond the supported range repeat `fallback` so that the
/// edge months stay reachable.
fn window_months(
    anchor_month: CalendarMonth,
    anchor_position: i64,
    center: i64,
    fallback: CalendarMonth,
) -> [CalendarMonth; WINDOW_SLOTS] {
    let mut months = [fallback; WINDOW_SLOTS];
    for position in window(center) {
        if let Ok(month) = anchor_month.offset(position.saturating_sub(anchor_position)) {
            months[slot_index(position)] = month;
        }
    }
    months
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::FixedClock;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    fn month(y: i32, m: u32) -> CalendarMonth {
        CalendarMonth::new(y, m).unwrap()
    }

    fn pager(start_year: i32, start_month: u32, today: CalendarDate) -> PagerController {
        let config = PagerConfig::new(start_year, start_month);
        PagerController::new(&config, Collaborators::new(FixedClock(today))).unwrap()
    }

    #[test]
    fn slot_index_is_euclidean() {
        assert_eq!(slot_index(400), 0);
        assert_eq!(slot_index(403), 3);
        assert_eq!(slot_index(-1), 3);
    }

    #[test]
    fn initial_window() {
        let p = pager(2024, 1, date(2024, 1, 10));
        assert_eq!(p.current_position(), INITIAL_POSITION);
        assert_eq!(p.current_month(), month(2024, 1));
        assert_eq!(p.selected_date(), date(2024, 1, 10));
        assert_eq!(p.adapter_at(INITIAL_POSITION - 1).unwrap().month(), month(2024, 0));
        assert_eq!(p.adapter_at(INITIAL_POSITION + 1).unwrap().month(), month(2024, 2));
        assert_eq!(p.adapter_at(INITIAL_POSITION + 2).unwrap().month(), month(2024, 3));
        assert!(p.adapter_at(INITIAL_POSITION + 3).is_err());
    }

    #[test]
    fn initial_selection_clamped_to_start_month() {
        let p = pager(2023, 1, date(2024, 0, 31));
        assert_eq!(p.selected_date(), date(2023, 1, 28));
    }

    #[test]
    fn zero_delta_is_a_no_op() {
        let mut p = pager(2024, 1, date(2024, 1, 10));
        p.take_dirty_slots();
        let change = p.on_position_selected(INITIAL_POSITION).unwrap();
        assert!(change.is_none());
        assert!(p.take_dirty_slots().is_empty());
        assert_eq!(p.selected_date(), date(2024, 1, 10));
    }

    #[test]
    fn slide_right_moves_selection_to_first() {
        let mut p = pager(2024, 1, date(2024, 1, 10));
        let change = p.move_to_next_month().unwrap().unwrap();
        assert_eq!(change.month, month(2024, 2));
        assert_eq!(change.direction, Direction::Right);
        assert_eq!(change.position, INITIAL_POSITION + 1);
        assert_eq!(p.selected_date(), date(2024, 2, 1));
        assert_eq!(p.current_adapter().selection(), Some(date(2024, 2, 1)));
        assert_eq!(p.slots()[slot_index(INITIAL_POSITION)].selection(), None);
    }

    #[test]
    fn only_one_slot_holds_selection() {
        let mut p = pager(2024, 1, date(2024, 1, 10));
        for target in [401, 402, 399, 405, 397] {
            p.on_position_selected(target).unwrap();
            let holders = p.slots().iter().filter(|s| s.selection().is_some()).count();
            assert_eq!(holders, 1, "after moving to {target}");
        }
    }

    #[test]
    fn window_follows_position() {
        let mut p = pager(2024, 1, date(2024, 1, 10));
        p.on_position_selected(INITIAL_POSITION + 5).unwrap();
        for offset in -1..=2 {
            let position = INITIAL_POSITION + 5 + offset;
            assert_eq!(
                p.adapter_at(position).unwrap().month(),
                p.month_at(position).unwrap()
            );
        }
        assert_eq!(p.current_month(), month(2024, 6));
    }

    #[test]
    fn out_of_range_target_is_rejected_without_mutation() {
        let mut p = pager(9999, 11, date(9999, 11, 1));
        p.take_dirty_slots();
        let err = p.move_to_next_month().unwrap_err();
        assert!(matches!(err, PagerError::Calendar(_)));
        assert_eq!(p.current_position(), INITIAL_POSITION);
        assert_eq!(p.current_month(), month(9999, 11));
        assert!(p.take_dirty_slots().is_empty());
    }

    #[test]
    fn edge_month_neighbours_fall_back() {
        let p = pager(9999, 11, date(9999, 11, 1));
        assert_eq!(p.adapter_at(INITIAL_POSITION + 1).unwrap().month(), month(9999, 11));
        assert_eq!(p.adapter_at(INITIAL_POSITION - 1).unwrap().month(), month(9999, 10));
    }

    #[test]
    fn toggle_outside_dates_keeps_position_and_selection() {
        let mut p = pager(2024, 1, date(2024, 1, 10));
        p.take_dirty_slots();
        p.set_show_dates_outside_month(false);
        assert_eq!(p.current_position(), INITIAL_POSITION);
        assert_eq!(p.selected_date(), date(2024, 1, 10));
        assert_eq!(p.cell_count(), 33);
        assert_eq!(p.take_dirty_slots().len(), WINDOW_SLOTS);
        assert!(!p.show_dates_outside_month());
    }

    #[test]
    fn first_day_of_week_change() {
        let mut p = pager(2024, 1, date(2024, 1, 10));
        p.set_first_day_of_week(Weekday::Mon);
        assert_eq!(p.weekday_header()[0], Weekday::Mon);
        assert_eq!(p.current_adapter().grid().first_day_offset(), 3);
    }
}
