//! Pure conversion functions: TOML config plus CLI overrides -> pager config.

use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, Weekday};
use flexcal_pager::{
    CalendarDate, CalendarListener, Clock, Collaborators, FixedClock, LocalClock, PagerConfig,
    PagerController,
};

use crate::cli::ViewArgs;
use crate::config::CalendarToml;

/// Parses a weekday name such as "mon", "Monday" or "SUN".
pub fn parse_weekday(s: &str) -> Result<Weekday> {
    match s.parse::<Weekday>() {
        Ok(weekday) => Ok(weekday),
        Err(_) => bail!("unknown weekday: {s:?}"),
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<CalendarDate> {
    let naive = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("invalid date {s:?} (expected YYYY-MM-DD)"))?;
    Ok(CalendarDate::from_naive(naive)?)
}

/// Converts a 1-based month as written by people into the 0-based index.
pub fn parse_month_number(month: u32) -> Result<u32> {
    match month {
        1..=12 => Ok(month - 1),
        other => bail!("month must be between 1 and 12, got {other}"),
    }
}

/// The fixed "today", CLI first, then config file.
pub fn resolve_today(cal: &CalendarToml, view: &ViewArgs) -> Result<Option<CalendarDate>> {
    view.today
        .as_deref()
        .or(cal.today.as_deref())
        .map(parse_date)
        .transpose()
}

/// Builds a `PagerConfig`, with CLI flags taking precedence over the file.
///
/// Year and month default to those of `today`.
pub fn build_pager_config(
    cal: &CalendarToml,
    view: &ViewArgs,
    today: CalendarDate,
) -> Result<PagerConfig> {
    let year = view.year.or(cal.start_year).unwrap_or(today.year());
    let month = match view.month.or(cal.start_month) {
        Some(month) => parse_month_number(month)?,
        None => today.month(),
    };
    let first_day = view
        .first_day
        .as_deref()
        .unwrap_or(&cal.first_day_of_week);
    let show_outside = cal.show_dates_outside_month && !view.compact;

    let config = PagerConfig::new(year, month)
        .with_show_dates_outside_month(show_outside)
        .with_first_day_of_week(parse_weekday(first_day)?);
    config.validate().context("invalid calendar settings")?;
    Ok(config)
}

/// Opens a pager for the merged settings.
///
/// "Today" is read once, so every cell and event within one run agrees on it.
pub fn build_pager(
    cal: &CalendarToml,
    view: &ViewArgs,
    listener: Option<Box<dyn CalendarListener>>,
) -> Result<PagerController> {
    let today = match resolve_today(cal, view)? {
        Some(date) => date,
        None => LocalClock.today(),
    };
    let config = build_pager_config(cal, view, today)?;
    let mut collaborators = Collaborators::new(FixedClock(today));
    if let Some(listener) = listener {
        collaborators = collaborators.with_boxed_listener(listener);
    }
    Ok(PagerController::new(&config, collaborators)?)
}
