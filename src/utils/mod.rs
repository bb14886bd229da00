//! Helper functions for URL canonicalization and token generation.
//!
//! - [`url_validator`] - Repository URL validation and canonicalization
//! - [`token_generator`] - Opaque bearer token generation

pub mod token_generator;
pub mod url_validator;
