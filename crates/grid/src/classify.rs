//! Semantic state of a grid cell.

use flexcal_calendar::{CalendarDate, CalendarMonth};

use crate::layout::GridCell;

/// How a cell should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    /// The cell shows a day of an adjacent month.
    OutsideMonth,
    /// A plain day of the month.
    Regular,
    /// Today, not selected.
    Today,
    /// The selected day, not today.
    Selected,
    /// The selected day and also today.
    SelectedToday,
}

impl CellState {
    /// Whether the cell carries the selection.
    pub fn is_selected(self) -> bool {
        matches!(self, Self::Selected | Self::SelectedToday)
    }

    /// Whether the cell is today.
    pub fn is_today(self) -> bool {
        matches!(self, Self::Today | Self::SelectedToday)
    }
}

/// Classifies `cell` of the grid bound to `bound_month`.
///
/// Outside-month cells are never selected or today, even if their
/// continuation day number would match.
pub fn classify(
    cell: &GridCell,
    bound_month: CalendarMonth,
    today: CalendarDate,
    selected: Option<CalendarDate>,
) -> CellState {
    if !cell.in_current_month {
        return CellState::OutsideMonth;
    }
    let year = bound_month.year();
    let month = bound_month.month();
    let is_selected = selected.is_some_and(|s| s.is(year, month, cell.day));
    let is_today = today.is(year, month, cell.day);

    match (is_selected, is_today) {
        (true, true) => CellState::SelectedToday,
        (true, false) => CellState::Selected,
        (false, true) => CellState::Today,
        (false, false) => CellState::Regular,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::MonthGrid;
    use chrono::Weekday;

    fn feb_2024() -> MonthGrid {
        MonthGrid::new(CalendarMonth::new(2024, 1).unwrap(), Weekday::Sun)
    }

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn outside_month_wins() {
        let g = feb_2024();
        // Position 3 shows Jan 31.
        let state = classify(
            &g.cells()[3],
            g.month(),
            date(2024, 0, 31),
            Some(date(2024, 0, 31)),
        );
        assert_eq!(state, CellState::OutsideMonth);
    }

    #[test]
    fn regular_today_selected() {
        let g = feb_2024();
        let today = date(2024, 1, 10);
        let selected = Some(date(2024, 1, 20));
        let at = |day: u32| g.cells()[g.position_of_day(day).unwrap()];

        assert_eq!(classify(&at(5), g.month(), today, selected), CellState::Regular);
        assert_eq!(classify(&at(10), g.month(), today, selected), CellState::Today);
        assert_eq!(classify(&at(20), g.month(), today, selected), CellState::Selected);
    }

    #[test]
    fn selected_today() {
        let g = feb_2024();
        let cell = g.cells()[g.position_of_day(10).unwrap()];
        let today = date(2024, 1, 10);
        let state = classify(&cell, g.month(), today, Some(today));
        assert_eq!(state, CellState::SelectedToday);
        assert!(state.is_selected());
        assert!(state.is_today());
    }

    #[test]
    fn selection_in_other_month_ignored() {
        let g = feb_2024();
        let cell = g.cells()[g.position_of_day(10).unwrap()];
        let state = classify(&cell, g.month(), date(2023, 1, 10), Some(date(2024, 2, 10)));
        assert_eq!(state, CellState::Regular);
    }

    #[test]
    fn no_selection() {
        let g = feb_2024();
        let cell = g.cells()[g.position_of_day(10).unwrap()];
        assert_eq!(
            classify(&cell, g.month(), date(2024, 1, 11), None),
            CellState::Regular
        );
    }
}
