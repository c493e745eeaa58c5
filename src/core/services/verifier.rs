//! Verification decision
//!
//! Pure apart from the single roster consult: shape validation happens
//! first, and a malformed submission never reaches the roster.

use crate::core::error::DependencyError;
use crate::core::models::{IdentitySubmission, VerificationOutcome};
use crate::core::ports::RosterStore;

/// Decide the verification outcome for a submission
///
/// Malformed input short-circuits to [`VerificationOutcome::Malformed`]
/// without consulting the roster. Well-formed input is `Verified` iff the
/// roster authorizes the identifier. A roster failure propagates; it must
/// not be read as "not verified".
///
/// The identifier is lowercased before lookup so the comparison stays
/// case-insensitive even if the roster column ever carries non-digits.
pub async fn decide<R: RosterStore>(
    roster: &R,
    submission: &IdentitySubmission,
) -> Result<VerificationOutcome, DependencyError> {
    if !submission.is_well_formed() {
        return Ok(VerificationOutcome::Malformed);
    }

    let authorized = roster.is_authorized(&submission.identifier.to_lowercase()).await?;
    Ok(if authorized {
        VerificationOutcome::Verified
    } else {
        VerificationOutcome::NotVerified
    })
}
