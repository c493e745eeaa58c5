//! Port traits (interfaces) for external collaborators
//!
//! These traits define the boundaries between core business logic and
//! external systems (the roster store, the calendar feed, the messaging
//! platform, the log destination).
//!
//! Implementations live in the `adapters` module; tests supply
//! hand-rolled mocks.
//!
//! ## Design Principle
//!
//! The core domain logic depends only on these traits, never on concrete
//! implementations. The dispatcher is generic over all four, so swapping
//! a transport or a roster backend never touches the decision logic.

mod feed;
mod gateway;
mod log;
mod roster;

pub use feed::EventFeed;
pub use gateway::ChatGateway;
pub use log::EventLog;
pub use roster::RosterStore;
