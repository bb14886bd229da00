//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by composing the external
//! capability calls in the order the issuance and validation contracts
//! require. Services consume the [`crate::domain::External`] trait and
//! provide a clean API for transport-level callers.

pub mod services;
