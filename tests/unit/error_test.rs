//! Tests for dependency error display and log truncation

use rollcall::core::error::DependencyError;

#[test]
fn display_names_the_failure_kind() {
    assert_eq!(
        DependencyError::Transport("connection refused".into()).to_string(),
        "request failed: connection refused"
    );
    assert_eq!(DependencyError::Status(503).to_string(), "unexpected status 503");
    assert_eq!(
        DependencyError::Forbidden("Manage Roles".into()).to_string(),
        "missing permission: Manage Roles"
    );
    assert_eq!(
        DependencyError::InvalidResponse("expected value at line 1".into()).to_string(),
        "malformed response: expected value at line 1"
    );
}

#[test]
fn brief_keeps_short_messages_intact() {
    let err = DependencyError::Status(404);
    assert_eq!(err.brief(), "unexpected status 404");
}

#[test]
fn brief_truncates_long_upstream_chains() {
    let err = DependencyError::Transport("x".repeat(500));
    let brief = err.brief();
    assert!(brief.ends_with("..."));
    assert!(brief.len() <= 123);
}

#[test]
fn brief_truncates_on_a_character_boundary() {
    let err = DependencyError::Transport("é".repeat(300));
    let brief = err.brief();
    assert!(brief.ends_with("..."));
    assert!(brief.is_char_boundary(brief.len() - 3));
}
