//! Calendar event as served by the remote feed

use chrono::NaiveDate;
use serde::Deserialize;

/// One event from the calendar feed
///
/// Sourced fresh per digest run; lives for one digest cycle only.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CalendarEvent {
    /// Event title
    pub title: String,
    /// Human-formatted date, shown verbatim in the digest
    pub date: String,
    /// Parseable UTC date, `YYYY-MM-DD` prefix
    pub date_utc: String,
    /// Link to the event page
    pub url: String,
}

impl CalendarEvent {
    /// UTC calendar day of the event, parsed from the `date_utc` prefix
    ///
    /// Returns `None` when the prefix is not a valid `YYYY-MM-DD` date;
    /// such events never qualify for a digest window.
    #[must_use]
    pub fn utc_day(&self) -> Option<NaiveDate> {
        let prefix = self.date_utc.split([' ', 'T']).next()?;
        NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
    }
}
