//! Tests for the verification decision

use rollcall::core::error::DependencyError;
use rollcall::core::models::VerificationOutcome;
use rollcall::core::services::decide;

use crate::common::{MockRoster, submission};

#[tokio::test]
async fn authorized_identifier_is_verified() {
    let roster = MockRoster::with_identifiers(&["123456789"]);
    let outcome = decide(&roster, &submission("John", "Doe", "123456789")).await.unwrap();
    assert_eq!(outcome, VerificationOutcome::Verified);
}

#[tokio::test]
async fn unknown_identifier_is_not_verified() {
    let roster = MockRoster::with_identifiers(&["123456789"]);
    let outcome = decide(&roster, &submission("John", "Doe", "987654321")).await.unwrap();
    assert_eq!(outcome, VerificationOutcome::NotVerified);
}

#[tokio::test]
async fn well_formed_input_never_yields_malformed() {
    let roster = MockRoster::with_identifiers(&[]);
    let outcome = decide(&roster, &submission("Jane", "Doe", "000000000")).await.unwrap();
    assert!(outcome.mutates_member());
}

#[tokio::test]
async fn malformed_input_skips_the_roster() {
    let roster = MockRoster::with_identifiers(&["123456789"]);
    let calls = roster.call_counter();

    let outcome = decide(&roster, &submission("Jane", "Doe", "12345")).await.unwrap();

    assert_eq!(outcome, VerificationOutcome::Malformed);
    assert_eq!(*calls.borrow(), 0);
}

#[tokio::test]
async fn roster_failure_propagates_instead_of_not_verified() {
    let roster = MockRoster::failing(DependencyError::Status(503));
    let result = decide(&roster, &submission("John", "Doe", "123456789")).await;
    assert!(matches!(result, Err(DependencyError::Status(503))));
}

#[tokio::test]
async fn outcome_texts_match_the_contract() {
    assert_eq!(VerificationOutcome::Verified.text(), "Verified!");
    assert_eq!(VerificationOutcome::NotVerified.text(), "NOT Verified!");
}

#[test]
fn reprompt_always_names_the_field_order() {
    for _ in 0..20 {
        let prompt = rollcall::core::models::reprompt();
        assert!(prompt.ends_with("FIRSTNAME LASTNAME MEMBER-ID"), "unexpected prompt: {prompt}");
    }
}
