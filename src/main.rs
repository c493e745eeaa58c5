//! rollcall - community verification and events bot
//!
//! Verifies members against a remote roster, reconciles their roles and
//! nickname with the outcome, and publishes a weekly digest of upcoming
//! events.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata,
    clippy::future_not_send
)]

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use colored::Colorize;

use rollcall::adapters::{ChannelLog, ConsoleGateway, HttpEventFeed, SheetsRoster};
use rollcall::config::BotConfig;
use rollcall::core::ports::{EventFeed, RosterStore};
use rollcall::core::services::build_weekly_digest;
use rollcall::dispatch::Dispatcher;

/// rollcall - community verification and events bot
#[derive(Parser, Debug)]
#[command(
    name = "rollcall",
    version,
    about = "Verify members against a remote roster and announce upcoming events",
    long_about = "A community-management bot core.\n\n\
                  Members submit a name and identifier, which is checked against a\n\
                  spreadsheet-backed roster; roles and nickname follow the outcome.\n\
                  A weekly digest of upcoming events is published on a fixed weekday."
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file (default: platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the bot: startup announcement plus the digest scheduler
    Run,

    /// Build and print this week's digest once
    Digest {
        /// Pretend today is this date (YYYY-MM-DD) instead of now
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Query the roster
    Roster {
        #[command(subcommand)]
        action: RosterAction,
    },
}

#[derive(Subcommand, Debug)]
enum RosterAction {
    /// Check whether an identifier is authorized
    Check {
        /// The member identifier (9 digits)
        identifier: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config = BotConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Run => run(&config).await,
        Command::Digest { date } => digest(&config, date).await,
        Command::Roster {
            action: RosterAction::Check { identifier },
        } => roster_check(&config, &identifier).await,
    }
}

/// Start the bot with the console gateway and run the digest scheduler
async fn run(config: &BotConfig) -> anyhow::Result<()> {
    // Token presence is a startup requirement even though the console
    // gateway itself never sends it anywhere.
    let _token = config.require_token()?;

    let client = reqwest::Client::new();
    let roster = SheetsRoster::with_key_file(
        client.clone(),
        config.roster.document_id.as_str(),
        config.roster.range.as_str(),
        &config.roster.credentials_file,
    )?;
    let feed = HttpEventFeed::new(client, config.calendar.feed_url.as_str());
    let gateway = ConsoleGateway::new();
    let log = ChannelLog::new(gateway, config.guild.log_channel_id);

    let dispatcher = Dispatcher::new(roster, feed, gateway, log, config.guild_settings()?);

    log::info!("gateway: console (no transport bound); outbound operations are logged");
    dispatcher.startup().await;
    dispatcher.run_scheduler().await;
    Ok(())
}

/// Fetch the feed once and print the digest for the week after `date`
async fn digest(config: &BotConfig, date: Option<NaiveDate>) -> anyhow::Result<()> {
    let now = date.map_or_else(Utc::now, |d| {
        DateTime::from_naive_utc_and_offset(d.and_hms_opt(0, 0, 0).unwrap_or_default(), Utc)
    });

    let feed = HttpEventFeed::new(reqwest::Client::new(), config.calendar.feed_url.as_str());
    let events = match feed.fetch_events().await {
        Ok(events) => events,
        Err(err) => {
            log::warn!("failed to retrieve events: {err}");
            Vec::new()
        },
    };

    for line in build_weekly_digest(now, &events) {
        println!("{line}");
    }
    Ok(())
}

/// Check one identifier against the roster and print the outcome
async fn roster_check(config: &BotConfig, identifier: &str) -> anyhow::Result<()> {
    let roster = SheetsRoster::with_key_file(
        reqwest::Client::new(),
        config.roster.document_id.as_str(),
        config.roster.range.as_str(),
        &config.roster.credentials_file,
    )?;

    if roster.is_authorized(identifier).await? {
        println!("{}", "Verified!".green().bold());
    } else {
        println!("{}", "NOT Verified!".red().bold());
    }
    Ok(())
}
