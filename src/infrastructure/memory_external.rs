//! In-memory implementation of the external capability boundary.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::domain::External;
use crate::domain::entities::AccessToken;
use crate::error::TokenError;
use crate::utils::{token_generator, url_validator};

/// External collaborator backed by process-local state.
///
/// Suitable for tests, development, and embedding without a database. Tokens
/// live in a map keyed by `(token, repository URL)`; repositories must be
/// registered explicitly via [`MemoryExternal::register_repo`] before
/// verification succeeds.
///
/// Revocation is exposed here rather than on the handler: flipping the
/// validity flag is a collaborator-side process.
#[derive(Default)]
pub struct MemoryExternal {
    tokens: RwLock<HashMap<(String, String), AccessToken>>,
    repos: RwLock<HashSet<String>>,
}

impl MemoryExternal {
    /// Creates an empty collaborator with no registered repositories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a repository so that lookups for `url` succeed.
    ///
    /// The URL must already be in canonical form (the form
    /// [`External::validate_url`] produces).
    pub async fn register_repo(&self, url: &str) {
        self.repos.write().await.insert(url.to_string());
        debug!(url, "repository registered");
    }

    /// Administratively revokes a stored token by clearing its validity flag.
    ///
    /// Returns `false` when no record matches the pair. The record stays in
    /// storage; presence alone never authorizes access.
    pub async fn revoke_token(&self, token: &str, repository_url: &str) -> bool {
        let mut tokens = self.tokens.write().await;
        match tokens.get_mut(&(token.to_string(), repository_url.to_string())) {
            Some(record) => {
                record.is_valid = false;
                debug!(repository_url, "access token revoked");
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl External for MemoryExternal {
    async fn validate_url(&self, raw_url: &str) -> Result<String, TokenError> {
        url_validator::validate_repository_url(raw_url)
    }

    async fn generate_token(&self) -> Result<String, TokenError> {
        token_generator::generate_token()
    }

    fn time_now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    async fn store_access_token(&self, access_token: AccessToken) -> Result<(), TokenError> {
        let mut tokens = self.tokens.write().await;
        let key = (access_token.husky_token.clone(), access_token.url.clone());

        // At most one currently valid record per (token, URL) pair.
        if tokens.get(&key).is_some_and(|existing| existing.is_valid) {
            warn!(url = %access_token.url, "duplicate valid access token rejected");
            return Err(TokenError::Storage(
                "Access token already exists for this repository".to_string(),
            ));
        }

        tokens.insert(key, access_token);
        Ok(())
    }

    async fn find_access_token(
        &self,
        token: &str,
        repository_url: &str,
    ) -> Result<AccessToken, TokenError> {
        self.tokens
            .read()
            .await
            .get(&(token.to_string(), repository_url.to_string()))
            .cloned()
            .ok_or_else(|| TokenError::Retrieval("Access token not found".to_string()))
    }

    async fn find_repo_url(&self, repository_url: &str) -> Result<(), TokenError> {
        if self.repos.read().await.contains(repository_url) {
            Ok(())
        } else {
            Err(TokenError::RepoLookup("Repository URL not found".to_string()))
        }
    }
}
