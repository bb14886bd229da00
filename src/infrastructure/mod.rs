//! Infrastructure layer implementing the external capability boundary.
//!
//! This layer provides concrete implementations of the domain's
//! [`crate::domain::External`] trait.
//!
//! # Modules
//!
//! - [`memory_external`] - Process-local implementation for tests and embedding

pub mod memory_external;

pub use memory_external::MemoryExternal;
