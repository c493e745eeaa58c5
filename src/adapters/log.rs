//! Channel-backed event log
//!
//! Sends each event line to the fixed log channel, timestamped and
//! silent. The log handle is built once at startup and injected into
//! every component that records events.

use chrono::Local;

use crate::core::ports::{ChatGateway, EventLog};

/// Event log writing to a chat channel
#[derive(Debug, Clone)]
pub struct ChannelLog<G> {
    gateway: G,
    channel_id: u64,
}

impl<G> ChannelLog<G> {
    /// Create a log bound to the given channel
    #[must_use]
    pub const fn new(gateway: G, channel_id: u64) -> Self {
        Self {
            gateway,
            channel_id,
        }
    }
}

impl<G: ChatGateway> EventLog for ChannelLog<G> {
    async fn record(&self, text: &str) {
        let stamped = format!(">>> {text} \n``{}``", Local::now().format("[%m.%d.%y %H:%M]"));
        if let Err(err) = self.gateway.send_message(self.channel_id, &stamped, true).await {
            log::warn!("event log delivery failed: {err}");
        }
    }
}
