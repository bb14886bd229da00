//! Token issuance and validation orchestration.

use std::sync::Arc;

use crate::domain::External;
use crate::domain::entities::{AccessToken, TokenRequest};
use crate::error::TokenError;

/// Orchestrates token issuance and validation over the [`External`] capabilities.
///
/// Holds nothing but the collaborator handle and takes no locks, so a single
/// instance serves unlimited concurrent callers. Every collaborator error is
/// propagated to the caller untouched; the one error originating here is
/// [`TokenError::InvalidAccessToken`].
pub struct TokenHandler<E: External> {
    external: Arc<E>,
}

impl<E: External> TokenHandler<E> {
    /// Creates a new handler over an external collaborator.
    pub fn new(external: Arc<E>) -> Self {
        Self { external }
    }

    /// Mints and persists a new access token for a repository.
    ///
    /// Runs strictly in order: URL validation, token generation, clock read,
    /// persistence. The first failing step aborts the call, its error comes
    /// back unchanged, and nothing is persisted — a partially built record is
    /// never observable by the caller. No step is retried.
    pub async fn generate_access_token(
        &self,
        request: TokenRequest,
    ) -> Result<AccessToken, TokenError> {
        let url = self.external.validate_url(&request.repository_url).await?;
        let husky_token = self.external.generate_token().await?;

        let access_token = AccessToken {
            husky_token,
            url,
            is_valid: true,
            created_at: self.external.time_now(),
        };

        self.external
            .store_access_token(access_token.clone())
            .await?;

        Ok(access_token)
    }

    /// Decides whether a presented `(token, repository_url)` pair currently
    /// authorizes access.
    ///
    /// Retrieval is keyed by the pair exactly as given; any normalization is
    /// the retrieval collaborator's business. Validity is judged solely by
    /// the stored record's flag — no expiry arithmetic happens here, so
    /// time-based expiry must already be reflected in the flag.
    ///
    /// # Errors
    ///
    /// Returns the retrieval error unchanged when lookup fails, and
    /// [`TokenError::InvalidAccessToken`] when a record exists with its
    /// validity flag off.
    pub async fn validate_token(
        &self,
        token: &str,
        repository_url: &str,
    ) -> Result<(), TokenError> {
        let access_token = self
            .external
            .find_access_token(token, repository_url)
            .await?;

        if !access_token.is_valid {
            return Err(TokenError::InvalidAccessToken);
        }

        Ok(())
    }

    /// Decides whether a repository URL is well-formed and registered,
    /// independent of any token.
    ///
    /// Registration lookup runs against the canonical URL and is skipped
    /// entirely when validation fails. Whatever the lookup returns passes
    /// through unchanged; "not registered" and "lookup backend failure" are
    /// not distinguished here.
    pub async fn verify_repo(&self, repository_url: &str) -> Result<(), TokenError> {
        let url = self.external.validate_url(repository_url).await?;
        self.external.find_repo_url(&url).await
    }
}
