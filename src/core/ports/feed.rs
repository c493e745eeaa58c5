//! Calendar feed port

use crate::core::error::DependencyError;
use crate::core::models::CalendarEvent;

/// Read access to the remote event list
#[allow(async_fn_in_trait)]
pub trait EventFeed {
    /// Fetch the full event list
    ///
    /// A non-success response is an error here; the digest tick decides
    /// whether to treat that as zero events.
    async fn fetch_events(&self) -> Result<Vec<CalendarEvent>, DependencyError>;
}
