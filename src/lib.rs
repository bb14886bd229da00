//! # husky-token
//!
//! Access token issuance and validation core for repository security-scan
//! submissions.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Token entities and the external capability trait
//! - **Application Layer** ([`application`]) - The token handler orchestrating issuance and validation
//! - **Infrastructure Layer** ([`infrastructure`]) - Concrete capability implementations
//!
//! Transport (HTTP handlers, CLI) and durable persistence are callers'
//! concerns; the handler talks to them only through the
//! [`domain::External`] trait.
//!
//! ## Features
//!
//! - Opaque bearer token issuance bound to a canonical repository URL
//! - Token validation driven solely by the stored validity flag
//! - Repository registration verification
//! - Verbatim error passthrough from every collaborator
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use husky_token::application::services::TokenHandler;
//! use husky_token::domain::entities::TokenRequest;
//! use husky_token::infrastructure::MemoryExternal;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), husky_token::TokenError> {
//! let external = Arc::new(MemoryExternal::new());
//! external.register_repo("https://github.com/globo/myProject").await;
//!
//! let handler = TokenHandler::new(external);
//! handler.verify_repo("https://github.com/globo/myProject").await?;
//!
//! let token = handler
//!     .generate_access_token(TokenRequest {
//!         repository_url: "https://github.com/globo/myProject".to_string(),
//!     })
//!     .await?;
//! assert!(token.is_valid);
//!
//! handler.validate_token(&token.husky_token, &token.url).await?;
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use error::TokenError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::TokenHandler;
    pub use crate::domain::External;
    pub use crate::domain::entities::{AccessToken, TokenRequest};
    pub use crate::error::TokenError;
    pub use crate::infrastructure::MemoryExternal;
}
