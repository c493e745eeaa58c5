//! Core domain logic
//!
//! Everything under this module is transport-agnostic: domain models,
//! port traits for external collaborators, and the pure services that
//! decide verification outcomes, plan reconciliation, and build digests.

pub mod error;
pub mod models;
pub mod ports;
pub mod services;
