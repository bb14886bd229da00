//! Core business data structures.

pub mod access_token;

pub use access_token::{AccessToken, TokenRequest};
