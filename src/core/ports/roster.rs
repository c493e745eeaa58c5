//! Roster store port
//!
//! The externally maintained list of identifiers authorized for verified
//! status.

use crate::core::error::DependencyError;

/// Authorization lookup against the remote roster
///
/// Implementations re-read the authoritative identifier column on every
/// call; there is no cache, so the freshest roster edit always wins.
#[allow(async_fn_in_trait)]
pub trait RosterStore {
    /// Whether `identifier` appears verbatim in the roster's identifier
    /// column
    ///
    /// An unreachable store or rejected credentials surface as an error,
    /// which callers must treat as "could not determine" — never as
    /// "not verified".
    async fn is_authorized(&self, identifier: &str) -> Result<bool, DependencyError>;
}
