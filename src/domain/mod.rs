//! Domain layer containing the token entities and the capability boundary.
//!
//! - [`entities`] - Core business data structures
//! - [`external`] - The collaborator trait the handler is generic over
//!
//! The domain layer has no dependency on infrastructure; the [`External`]
//! trait defines the contract the infrastructure layer implements.

pub mod entities;
pub mod external;

pub use external::External;

#[cfg(test)]
pub use external::MockExternal;
