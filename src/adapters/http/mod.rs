//! HTTP-backed adapters
//!
//! Both remote reads share one `reqwest::Client`; neither retries, times
//! out beyond the client defaults, or caches anything between calls.

mod feed;
mod roster;

pub use feed::{HttpEventFeed, decode_feed_body};
pub use roster::SheetsRoster;
