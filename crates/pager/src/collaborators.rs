//! Capabilities the pager consumes from its host.

use chrono::Local;
use flexcal_calendar::{CalendarDate, CalendarMonth, Direction};

/// Source of "today".
pub trait Clock {
    /// The current date, within the supported year range.
    fn today(&self) -> CalendarDate;
}

/// Reads today from the local system clock.
///
/// A system date outside years 1..=9999 saturates to the nearest end.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> CalendarDate {
        CalendarDate::saturating_from_naive(Local::now().date_naive())
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

/// A marker attached to a day, identified by its display colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Event {
    /// Host-defined colour identifier.
    pub color: u32,
}

/// Per-day event lookup. Results are neither cached nor validated.
pub trait EventSource {
    /// Events on the 0-based `month` of `year`, day `day`. May be empty.
    fn events_for_day(&self, year: i32, month: u32, day: u32) -> Vec<Event>;
}

impl<F> EventSource for F
where
    F: Fn(i32, u32, u32) -> Vec<Event>,
{
    fn events_for_day(&self, year: i32, month: u32, day: u32) -> Vec<Event> {
        self(year, month, day)
    }
}

/// Receives the pager's outward events, synchronously and after the state
/// they describe has been applied.
pub trait CalendarListener {
    /// A day cell was clicked and is now the selection.
    fn on_date_click(&mut self, date: CalendarDate) {
        let _ = date;
    }

    /// The pager slid to `month`.
    fn on_month_change(&mut self, month: CalendarMonth, direction: Direction) {
        let _ = (month, direction);
    }
}

/// Everything the pager needs from its host, handed over at construction.
pub struct Collaborators {
    pub(crate) clock: Box<dyn Clock>,
    pub(crate) events: Option<Box<dyn EventSource>>,
    pub(crate) listener: Option<Box<dyn CalendarListener>>,
}

impl Collaborators {
    /// Collaborators with the given clock and no event source or listener.
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            events: None,
            listener: None,
        }
    }

    /// Sets the event source.
    pub fn with_events(mut self, events: impl EventSource + 'static) -> Self {
        self.events = Some(Box::new(events));
        self
    }

    /// Sets the listener.
    pub fn with_listener(mut self, listener: impl CalendarListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Sets an already boxed listener.
    pub fn with_boxed_listener(mut self, listener: Box<dyn CalendarListener>) -> Self {
        self.listener = Some(listener);
        self
    }
}

impl Default for Collaborators {
    fn default() -> Self {
        Self::new(LocalClock)
    }
}
