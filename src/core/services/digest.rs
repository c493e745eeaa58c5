//! Weekly event digest
//!
//! Filters the calendar feed to a rolling one-week window and formats
//! each qualifying event for publication. A single `now` value is
//! threaded through both the window computation and the filter, so the
//! window never drifts from the clock the filter sees.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};

use crate::core::models::CalendarEvent;

/// Published when no events qualify for the window
///
/// The digest always says something; an empty week is a message, not
/// silence.
pub const NO_EVENTS_MESSAGE: &str = ">>> No events for the week";

/// The half-open date window `[now + 1 day, now + 7 days)`
#[must_use]
pub fn weekly_window(now: DateTime<Utc>) -> (NaiveDate, NaiveDate) {
    let start = (now + Duration::days(1)).date_naive();
    let end = (now + Duration::days(7)).date_naive();
    (start, end)
}

/// Whether a digest tick at `now` should publish
///
/// The digest fires every 24 hours but only publishes on the configured
/// trigger weekday; every other tick is a no-op.
#[must_use]
pub fn is_trigger_day(now: DateTime<Utc>, trigger: Weekday) -> bool {
    now.weekday() == trigger
}

/// Format one event for the digest
#[must_use]
pub fn format_event(event: &CalendarEvent) -> String {
    format!(
        ">>> ## Event Title: {title}\nEvent Date: ``{date}``\nEvent URL: [**{title}**]({url})",
        title = event.title,
        date = event.date,
        url = event.url,
    )
}

/// Build the ordered digest lines for the week following `now`
///
/// An event qualifies iff its UTC day lies in `[now + 1, now + 7)`;
/// events with an unparseable date never qualify. Zero qualifying events
/// yield the single [`NO_EVENTS_MESSAGE`], never an empty sequence.
#[must_use]
pub fn build_weekly_digest(now: DateTime<Utc>, events: &[CalendarEvent]) -> Vec<String> {
    let (start, end) = weekly_window(now);

    let lines: Vec<String> = events
        .iter()
        .filter(|event| event.utc_day().is_some_and(|day| start <= day && day < end))
        .map(format_event)
        .collect();

    if lines.is_empty() {
        vec![NO_EVENTS_MESSAGE.to_string()]
    } else {
        lines
    }
}
