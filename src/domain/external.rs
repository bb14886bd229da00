//! Capability boundary consumed by the token handler.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::AccessToken;
use crate::error::TokenError;

/// External capabilities the token core depends on.
///
/// Bundles five independent concerns — URL validation, token-string
/// generation, clock access, token persistence/retrieval, and repository
/// registration lookup — behind one injectable boundary. The handler depends
/// only on this trait, never on a concrete implementation.
///
/// # Implementations
///
/// - [`crate::infrastructure::MemoryExternal`] — process-local implementation
/// - Test mocks auto-generated with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait External: Send + Sync {
    /// Validates a raw repository URL and returns its canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::InvalidUrl`] when the URL is malformed or fails
    /// policy.
    async fn validate_url(&self, raw_url: &str) -> Result<String, TokenError>;

    /// Mints a new opaque token string.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Generation`] when the underlying generator is
    /// unavailable or exhausted.
    async fn generate_token(&self) -> Result<String, TokenError>;

    /// Reads the current time. No failure mode.
    fn time_now(&self) -> DateTime<Utc>;

    /// Persists a freshly built access token.
    ///
    /// Implementations enforce the at-most-one-valid-record-per-pair
    /// constraint.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Storage`] when persistence is unavailable or a
    /// constraint is violated.
    async fn store_access_token(&self, access_token: AccessToken) -> Result<(), TokenError>;

    /// Retrieves the stored record matching exactly this token string and
    /// repository URL.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Retrieval`] when no record matches or the lookup
    /// backend fails.
    async fn find_access_token(
        &self,
        token: &str,
        repository_url: &str,
    ) -> Result<AccessToken, TokenError>;

    /// Checks whether a canonical repository URL is registered.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::RepoLookup`] when the repository is unknown or
    /// the lookup backend fails; callers cannot distinguish the two.
    async fn find_repo_url(&self, repository_url: &str) -> Result<(), TokenError>;
}
