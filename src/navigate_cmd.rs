use std::str::FromStr;

use anyhow::{Context, Error, Result, bail};
use tracing::{debug, info_span};

use flexcal_pager::{CalendarDate, CalendarListener, CalendarMonth, Direction, PagerController};

use crate::cli::NavigateArgs;
use crate::config::FlexcalConfig;
use crate::convert::{build_pager, parse_date};
use crate::render::render_month;

/// One user action replayed against the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    NextMonth,
    PreviousMonth,
    NextDay,
    PreviousDay,
    Today,
    Click(usize),
    Goto(CalendarDate),
}

impl FromStr for Step {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let step = match s {
            "next" => Self::NextMonth,
            "prev" => Self::PreviousMonth,
            "next-day" => Self::NextDay,
            "prev-day" => Self::PreviousDay,
            "today" => Self::Today,
            _ => match s.split_once(':') {
                Some(("click", position)) => Self::Click(
                    position
                        .parse()
                        .with_context(|| format!("invalid cell position in {s:?}"))?,
                ),
                Some(("goto", date)) => Self::Goto(parse_date(date)?),
                _ => bail!("unknown step: {s:?}"),
            },
        };
        Ok(step)
    }
}

/// Prints pager events as they happen.
struct PrintListener;

impl CalendarListener for PrintListener {
    fn on_date_click(&mut self, date: CalendarDate) {
        println!("date-click {date}");
    }

    fn on_month_change(&mut self, month: CalendarMonth, direction: Direction) {
        let direction = match direction {
            Direction::Left => "left",
            Direction::Right => "right",
        };
        println!("month-change {month} {direction}");
    }
}

fn apply(pager: &mut PagerController, step: Step) -> Result<()> {
    match step {
        Step::NextMonth => pager.move_to_next_month().map(drop)?,
        Step::PreviousMonth => pager.move_to_previous_month().map(drop)?,
        Step::NextDay => pager.move_to_next_date().map(drop)?,
        Step::PreviousDay => pager.move_to_previous_date().map(drop)?,
        Step::Today => pager.go_to_current_month().map(drop)?,
        Step::Click(position) => pager.click(position).map(drop)?,
        Step::Goto(date) => pager.select_date(date).map(drop)?,
    }
    Ok(())
}

/// Replays the steps, printing each event, then the final month.
pub fn run(args: NavigateArgs, config: &FlexcalConfig) -> Result<()> {
    let _cmd = info_span!("navigate").entered();
    let steps = args
        .steps
        .iter()
        .map(|s| s.parse::<Step>())
        .collect::<Result<Vec<_>>>()?;

    let mut pager = build_pager(&config.calendar, &args.view, Some(Box::new(PrintListener)))?;
    for (i, step) in steps.into_iter().enumerate() {
        debug!(index = i, ?step, "applying step");
        apply(&mut pager, step).with_context(|| format!("step {} ({step:?}) failed", i + 1))?;
    }

    println!("selected {}", pager.selected_date());
    print!("{}", render_month(&pager)?);
    Ok(())
}
