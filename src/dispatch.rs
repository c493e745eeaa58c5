//! Event dispatcher and command surface
//!
//! Routes each inbound message or form submission to exactly one
//! handler, owns the digest scheduler tick, and serializes submissions
//! per member so duplicate submissions cannot interleave their role
//! mutations. Failures never cross handler boundaries: each handler
//! catches, logs, and abandons its own.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc, Weekday};
use tokio::sync::Mutex;

use crate::core::models::{
    IdentitySubmission, MemberState, RolePair, VerificationOutcome, reprompt,
};
use crate::core::ports::{ChatGateway, EventFeed, EventLog, RosterStore};
use crate::core::services::{build_weekly_digest, decide, is_trigger_day, reconcile};

/// The administrative shutdown command
pub const CLOSE_COMMAND: &str = "!close";

/// Presence text shown while the bot is running
pub const PRESENCE: &str = "Verifying ✅";

/// One inbound chat message, as handed over by the transport runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    /// Sender's member id
    pub author_id: u64,
    /// Sender's username
    pub author_name: String,
    /// Names of the roles the sender holds
    pub author_roles: Vec<String>,
    /// Channel the message arrived in
    pub channel_id: u64,
    /// Id of the message itself
    pub message_id: u64,
    /// Raw message text
    pub content: String,
    /// Whether the bot itself sent this message
    pub from_self: bool,
}

/// Guild-level settings the dispatcher routes against
#[derive(Debug, Clone)]
pub struct GuildSettings {
    /// The mutually exclusive verification role pair
    pub roles: RolePair,
    /// Role allowed to use the administrative shutdown command
    pub officer_role: String,
    /// Channel the weekly digest is published to
    pub events_channel_id: u64,
    /// Weekday on which a digest tick publishes
    pub digest_weekday: Weekday,
    /// Bot display name used in startup/shutdown log lines
    pub bot_name: String,
}

/// Routing and scheduling over the four ports
///
/// Generic over its collaborators so tests drive it with mocks and the
/// binary wires in the HTTP and console adapters.
#[derive(Debug)]
pub struct Dispatcher<R, F, G, L> {
    roster: R,
    feed: F,
    gateway: G,
    log: L,
    settings: GuildSettings,
    member_locks: Mutex<HashMap<u64, Arc<Mutex<()>>>>,
}

impl<R, F, G, L> Dispatcher<R, F, G, L>
where
    R: RosterStore,
    F: EventFeed,
    G: ChatGateway,
    L: EventLog,
{
    /// Wire a dispatcher from its collaborators and guild settings
    pub fn new(roster: R, feed: F, gateway: G, log: L, settings: GuildSettings) -> Self {
        Self {
            roster,
            feed,
            gateway,
            log,
            settings,
            member_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Announce startup: set presence and log a running notice
    pub async fn startup(&self) {
        if let Err(err) = self.gateway.set_presence(PRESENCE).await {
            log::warn!("could not set presence: {err}");
        }
        self.log.record(&format!("### [{}] is now running!", self.settings.bot_name)).await;
    }

    /// Announce shutdown and close the gateway connection
    pub async fn shutdown(&self) {
        self.log
            .record(&format!("### [{}] is now disconnected from client", self.settings.bot_name))
            .await;
        if let Err(err) = self.gateway.close().await {
            log::warn!("could not close gateway: {err}");
        }
    }

    /// Route one inbound chat message
    ///
    /// Messages from the bot itself are ignored. The `!close` command is
    /// always deleted; it shuts the bot down only when the sender holds
    /// the officer role, otherwise the attempt is logged and ignored.
    /// Returns `true` when the message requested shutdown by an officer.
    pub async fn handle_message(&self, message: &InboundMessage) -> bool {
        if message.from_self {
            return false;
        }

        log::debug!(
            "[{}] {}: \"{}\"",
            message.channel_id,
            message.author_name,
            message.content
        );

        if message.content != CLOSE_COMMAND {
            return false;
        }

        if let Err(err) =
            self.gateway.delete_message(message.channel_id, message.message_id).await
        {
            self.log
                .record(&format!(
                    "Could not delete message in [{}] due to ``{}``",
                    message.channel_id,
                    err.brief()
                ))
                .await;
        }

        if message.author_roles.iter().any(|role| role == &self.settings.officer_role) {
            self.shutdown().await;
            true
        } else {
            self.log
                .record(&format!("**[{}]** attempted to shut me down", message.author_name))
                .await;
            false
        }
    }

    /// Handle one verification form submission
    ///
    /// Decides the outcome, reconciles the member, acknowledges the
    /// submitter in `channel_id` with the outcome text, and deletes the
    /// triggering message when one exists. Submissions for the same
    /// member are serialized through a per-member lock.
    pub async fn handle_submission(
        &self,
        member: &MemberState,
        submission: &IdentitySubmission,
        channel_id: u64,
        message_id: Option<u64>,
    ) {
        let lock = self.member_lock(member.id).await;
        let _guard = lock.lock().await;

        match decide(&self.roster, submission).await {
            Ok(VerificationOutcome::Malformed) => {
                self.reply(channel_id, &reprompt()).await;
            },
            Ok(outcome) => {
                reconcile(&self.gateway, &self.log, outcome, member, &self.settings.roles, submission)
                    .await;
                self.reply(channel_id, outcome.text()).await;
                if let Some(message_id) = message_id
                    && let Err(err) = self.gateway.delete_message(channel_id, message_id).await
                {
                    self.log
                        .record(&format!(
                            "Could not delete submission from [{}] due to ``{}``",
                            member.username,
                            err.brief()
                        ))
                        .await;
                }
            },
            Err(err) => {
                self.log
                    .record(&format!(
                        "Could not verify [{}] due to ``{}``",
                        member.username,
                        err.brief()
                    ))
                    .await;
            },
        }
    }

    /// One digest scheduler tick
    ///
    /// No-op unless `now` falls on the trigger weekday. A feed failure
    /// is logged and the run proceeds with zero events, so a trigger-day
    /// tick always publishes something. Returns whether anything was
    /// published.
    pub async fn tick_digest(&self, now: DateTime<Utc>) -> bool {
        if !is_trigger_day(now, self.settings.digest_weekday) {
            return false;
        }

        let events = match self.feed.fetch_events().await {
            Ok(events) => events,
            Err(err) => {
                self.log
                    .record(&format!("Failed to retrieve events due to ``{}``", err.brief()))
                    .await;
                Vec::new()
            },
        };

        for line in build_weekly_digest(now, &events) {
            if let Err(err) = self.gateway.send_message(self.settings.events_channel_id, &line, false).await
            {
                self.log
                    .record(&format!("Could not publish digest due to ``{}``", err.brief()))
                    .await;
            }
        }
        true
    }

    /// Run the digest scheduler until the task is dropped
    ///
    /// Fires every 24 hours, starting one full period after startup so a
    /// restart on the trigger day does not publish a second digest. The
    /// weekday gate inside `tick_digest` decides whether a firing
    /// publishes.
    pub async fn run_scheduler(&self) {
        let period = std::time::Duration::from_secs(24 * 60 * 60);
        let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
        loop {
            interval.tick().await;
            self.tick_digest(Utc::now()).await;
        }
    }

    /// Send an acknowledgment to the submitter, silent, guarded
    async fn reply(&self, channel_id: u64, text: &str) {
        if let Err(err) = self.gateway.send_message(channel_id, text, true).await {
            self.log
                .record(&format!("Could not send response due to ``{}``", err.brief()))
                .await;
        }
    }

    /// Lock guarding reconciliation for one member
    async fn member_lock(&self, member_id: u64) -> Arc<Mutex<()>> {
        let mut locks = self.member_locks.lock().await;
        locks.entry(member_id).or_insert_with(|| Arc::new(Mutex::new(()))).clone()
    }
}
