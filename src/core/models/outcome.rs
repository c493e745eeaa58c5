//! Verification outcome

use rand::seq::IndexedRandom;

/// Re-prompt phrasings shown for malformed submissions
///
/// One is chosen at random per response so repeated failures do not read
/// like a stuck bot.
const REPROMPT_PHRASES: [&str; 3] = [
    "Please enter as prompted",
    "You may have typed that incorrectly, please try again",
    "Can you try retyping your information again",
];

/// Field order appended to every re-prompt
const REPROMPT_ORDER: &str = "FIRSTNAME LASTNAME MEMBER-ID";

/// Tri-state result of a verification decision
///
/// Produced once per submission; immutable; drives reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// The identifier appears in the roster
    Verified,
    /// The submission was well-formed but the identifier is not in the
    /// roster
    NotVerified,
    /// The submission failed shape validation; no roster consult happened
    Malformed,
}

impl VerificationOutcome {
    /// User-facing acknowledgment text for this outcome
    ///
    /// For `Malformed` this is the generic form-error text; the
    /// dispatcher sends the friendlier [`reprompt`] instead.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Verified => "Verified!",
            Self::NotVerified => "NOT Verified!",
            Self::Malformed => "Please enter your proper information.",
        }
    }

    /// Whether this outcome triggers role/nickname reconciliation
    #[must_use]
    pub const fn mutates_member(self) -> bool {
        matches!(self, Self::Verified | Self::NotVerified)
    }
}

/// Friendly re-prompt for a malformed submission
///
/// One of three fixed phrasings, always suffixed with the expected field
/// order.
#[must_use]
pub fn reprompt() -> String {
    let phrase = REPROMPT_PHRASES
        .choose(&mut rand::rng())
        .unwrap_or(&REPROMPT_PHRASES[0]);
    format!("{phrase}: {REPROMPT_ORDER}")
}
