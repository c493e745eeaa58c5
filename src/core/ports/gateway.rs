//! Chat gateway port
//!
//! The outbound half of the messaging platform: everything the bot does
//! to channels and members. The inbound half (event dispatch) is the
//! transport runtime's concern and stays outside this crate.

use crate::core::error::DependencyError;

/// Outbound operations against the messaging platform
#[allow(async_fn_in_trait)]
pub trait ChatGateway {
    /// Send a message to a channel
    ///
    /// `silent` suppresses member notifications for the message.
    async fn send_message(
        &self,
        channel_id: u64,
        text: &str,
        silent: bool,
    ) -> Result<(), DependencyError>;

    /// Delete a message from a channel
    async fn delete_message(&self, channel_id: u64, message_id: u64)
    -> Result<(), DependencyError>;

    /// Grant a role, referenced by display name, to a member
    async fn add_role(&self, member_id: u64, role: &str) -> Result<(), DependencyError>;

    /// Revoke a role, referenced by display name, from a member
    async fn remove_role(&self, member_id: u64, role: &str) -> Result<(), DependencyError>;

    /// Set a member's server nickname
    async fn set_nickname(&self, member_id: u64, nickname: &str) -> Result<(), DependencyError>;

    /// Set the bot's presence/activity text
    async fn set_presence(&self, activity: &str) -> Result<(), DependencyError>;

    /// Close the gateway connection
    async fn close(&self) -> Result<(), DependencyError>;
}
