//! Bot configuration
//!
//! Loaded from a TOML file (default location under the platform config
//! directory, overridable with `--config`), with the auth token also
//! accepted from the environment. A missing token is fatal for `run`;
//! everything else has defaults matching the original deployment.

use std::path::{Path, PathBuf};
use std::{env, fs};

use anyhow::Context;
use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::core::models::RolePair;
use crate::dispatch::GuildSettings;

/// Environment variable consulted when the config file carries no token
pub const TOKEN_ENV: &str = "ROLLCALL_TOKEN";

/// Top-level bot configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotConfig {
    /// Messaging platform auth token; may instead come from [`TOKEN_ENV`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Roster store settings
    #[serde(default)]
    pub roster: RosterConfig,
    /// Calendar feed and digest settings
    #[serde(default)]
    pub calendar: CalendarConfig,
    /// Guild roles and channels
    #[serde(default)]
    pub guild: GuildConfig,
}

/// Roster store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Spreadsheet document id
    #[serde(default)]
    pub document_id: String,
    /// Path to the local credential key file
    #[serde(default = "default_credentials_file")]
    pub credentials_file: PathBuf,
    /// Column range holding the identifiers (2nd column, header skipped)
    #[serde(default = "default_roster_range")]
    pub range: String,
}

fn default_credentials_file() -> PathBuf {
    PathBuf::from("credentials.json")
}

fn default_roster_range() -> String {
    "Sheet1!B2:B".to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            document_id: String::new(),
            credentials_file: default_credentials_file(),
            range: default_roster_range(),
        }
    }
}

/// Calendar feed and digest settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// URL of the JSON event feed
    #[serde(default)]
    pub feed_url: String,
    /// Channel the digest is published to
    #[serde(default)]
    pub events_channel_id: u64,
    /// Weekday on which the digest publishes (e.g. "Monday" or "Mon")
    #[serde(default = "default_weekday")]
    pub weekday: String,
}

fn default_weekday() -> String {
    "Monday".to_string()
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            feed_url: String::new(),
            events_channel_id: 0,
            weekday: default_weekday(),
        }
    }
}

impl CalendarConfig {
    /// Parse the configured trigger weekday
    pub fn digest_weekday(&self) -> anyhow::Result<Weekday> {
        self.weekday
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid digest weekday: {}", self.weekday))
    }
}

/// Guild roles and channels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuildConfig {
    /// Role granted to verified members
    #[serde(default = "default_verified_role")]
    pub verified_role: String,
    /// Role granted to members who failed verification
    #[serde(default = "default_unverified_role")]
    pub unverified_role: String,
    /// Role allowed to use the administrative shutdown command
    #[serde(default = "default_officer_role")]
    pub officer_role: String,
    /// Channel the event log writes to
    #[serde(default)]
    pub log_channel_id: u64,
    /// Bot display name used in log lines
    #[serde(default = "default_bot_name")]
    pub bot_name: String,
}

fn default_verified_role() -> String {
    "Verified Member".to_string()
}

fn default_unverified_role() -> String {
    "Unverified Member".to_string()
}

fn default_officer_role() -> String {
    "Officer".to_string()
}

fn default_bot_name() -> String {
    "rollcall".to_string()
}

impl Default for GuildConfig {
    fn default() -> Self {
        Self {
            verified_role: default_verified_role(),
            unverified_role: default_unverified_role(),
            officer_role: default_officer_role(),
            log_channel_id: 0,
            bot_name: default_bot_name(),
        }
    }
}

impl BotConfig {
    /// Default config file path (`<config dir>/rollcall/config.toml`)
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("rollcall/config.toml")
    }

    /// Load configuration
    ///
    /// An explicit `path` must exist and parse. Without one, the default
    /// location is read if present, and defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::read(path),
            None => {
                let default = Self::default_path();
                if default.exists() { Self::read(&default) } else { Ok(Self::default()) }
            },
        }
    }

    fn read(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file: {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("invalid config file: {}", path.display()))
    }

    /// Resolve the auth token from config or environment
    ///
    /// Its absence is a fatal startup condition for `run`.
    pub fn require_token(&self) -> anyhow::Result<String> {
        if let Some(token) = &self.token
            && !token.is_empty()
        {
            return Ok(token.clone());
        }
        env::var(TOKEN_ENV).ok().filter(|token| !token.is_empty()).with_context(|| {
            format!("missing auth token: set `token` in the config file or {TOKEN_ENV}")
        })
    }

    /// Guild settings for the dispatcher
    pub fn guild_settings(&self) -> anyhow::Result<GuildSettings> {
        Ok(GuildSettings {
            roles: RolePair {
                verified: self.guild.verified_role.clone(),
                unverified: self.guild.unverified_role.clone(),
            },
            officer_role: self.guild.officer_role.clone(),
            events_channel_id: self.calendar.events_channel_id,
            digest_weekday: self.calendar.digest_weekday()?,
            bot_name: self.guild.bot_name.clone(),
        })
    }
}
