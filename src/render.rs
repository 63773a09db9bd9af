//! Plain-text rendering of the current month.

use std::fmt::Write;

use anyhow::Result;
use flexcal_pager::{CellState, CellView, PagerController};

/// Text for one cell, four columns wide.
///
/// `[d]` selected, `(d)` today, `<d>` both, `~d` adjacent month.
fn cell_text(view: &CellView) -> String {
    if !view.visible {
        return "    ".to_string();
    }
    let day = view.day;
    let mut text = match view.state {
        CellState::OutsideMonth => format!("~{day:>2} "),
        CellState::Regular => format!(" {day:>2} "),
        CellState::Today => format!("({day:>2})"),
        CellState::Selected => format!("[{day:>2}]"),
        CellState::SelectedToday => format!("<{day:>2}>"),
    };
    if !view.events.is_empty() && text.ends_with(' ') {
        text.pop();
        text.push('*');
    }
    text
}

/// Renders the pager's current month as a title, a weekday header and the
/// exposed cells, seven per line.
pub fn render_month(pager: &PagerController) -> Result<String> {
    let month = pager.current_month();
    let mut out = String::new();
    writeln!(out, "{}", month.first_day().format("%B %Y"))?;

    let header: String = pager
        .weekday_header()
        .iter()
        .map(|weekday| format!("{:>4}", weekday.to_string()))
        .collect();
    writeln!(out, "{}", header.trim_end())?;

    let cells = (0..pager.cell_count())
        .map(|position| Ok(cell_text(&pager.cell_view(position)?)))
        .collect::<Result<Vec<_>>>()?;
    for week in cells.chunks(7) {
        writeln!(out, "{}", week.concat().trim_end())?;
    }
    Ok(out)
}
