//! rollcall - a community chat bot core for member verification and event
//! announcements
//!
//! This library verifies members against an externally maintained roster,
//! reconciles their role membership and display name with the verification
//! outcome, and publishes a weekly digest of upcoming events. The messaging
//! transport, roster store, and calendar feed sit behind port traits so the
//! core logic stays free of transport concerns.

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

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod dispatch;
