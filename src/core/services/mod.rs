//! Core services
//!
//! The decision, reconciliation, and digest logic. `decide` and the
//! digest builders are pure apart from their single port consult;
//! `reconcile` is split into a pure planning step and a guarded apply
//! step so the mutation order is testable without I/O.

pub mod digest;
pub mod reconciler;
pub mod verifier;

pub use digest::{NO_EVENTS_MESSAGE, build_weekly_digest, format_event, is_trigger_day, weekly_window};
pub use reconciler::{ReconcilePlan, ReconcileResult, plan, reconcile};
pub use verifier::decide;
