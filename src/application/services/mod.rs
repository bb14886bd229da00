//! Business logic services for the application layer.

pub mod token_handler;

pub use token_handler::TokenHandler;
