//! Console gateway for dry runs
//!
//! Stands in for a real transport binding: every outbound operation is
//! written to the process log and reported as successful. `run` wires
//! this in when no transport is attached, so scheduler and reconciler
//! behavior can be observed end to end without touching a live server.

use crate::core::error::DependencyError;
use crate::core::ports::ChatGateway;

/// Gateway that logs outbound operations instead of performing them
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleGateway;

impl ConsoleGateway {
    /// Create a console gateway
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ChatGateway for ConsoleGateway {
    async fn send_message(
        &self,
        channel_id: u64,
        text: &str,
        silent: bool,
    ) -> Result<(), DependencyError> {
        log::info!("[gateway] send to {channel_id} (silent={silent}): {text}");
        Ok(())
    }

    async fn delete_message(
        &self,
        channel_id: u64,
        message_id: u64,
    ) -> Result<(), DependencyError> {
        log::info!("[gateway] delete message {message_id} in {channel_id}");
        Ok(())
    }

    async fn add_role(&self, member_id: u64, role: &str) -> Result<(), DependencyError> {
        log::info!("[gateway] add role \"{role}\" to member {member_id}");
        Ok(())
    }

    async fn remove_role(&self, member_id: u64, role: &str) -> Result<(), DependencyError> {
        log::info!("[gateway] remove role \"{role}\" from member {member_id}");
        Ok(())
    }

    async fn set_nickname(&self, member_id: u64, nickname: &str) -> Result<(), DependencyError> {
        log::info!("[gateway] set nickname of member {member_id} to \"{nickname}\"");
        Ok(())
    }

    async fn set_presence(&self, activity: &str) -> Result<(), DependencyError> {
        log::info!("[gateway] set presence: {activity}");
        Ok(())
    }

    async fn close(&self) -> Result<(), DependencyError> {
        log::info!("[gateway] close connection");
        Ok(())
    }
}
