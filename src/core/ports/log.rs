//! Event log port
//!
//! Every mutating or failing operation writes one line here. The log is
//! a capability handed to each component at construction, not a global.

/// Destination for significant bot events
///
/// Recording is best-effort: implementations absorb their own delivery
/// failures so a broken log never takes a handler down with it.
#[allow(async_fn_in_trait)]
pub trait EventLog {
    /// Record one event line
    async fn record(&self, text: &str);
}
