//! Concrete port implementations
//!
//! HTTP adapters for the roster store and calendar feed, a console
//! gateway for dry runs, and the channel-backed event log.

pub mod console;
pub mod http;
pub mod log;

pub use console::ConsoleGateway;
pub use http::{HttpEventFeed, SheetsRoster};
pub use log::ChannelLog;
