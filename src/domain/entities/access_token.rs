//! Access token entity and issuance request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted credential authorizing a repository to submit scan jobs.
///
/// Records are created by issuance only and never mutated by this crate
/// afterwards; revocation and expiry are collaborator-side processes that
/// flip [`AccessToken::is_valid`] in storage. A record existing in storage is
/// not sufficient for authorization — the flag is the sole source of truth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// Opaque bearer credential. The crate never inspects its structure.
    pub husky_token: String,
    /// Canonical repository URL this token authorizes (post-validation form).
    pub url: String,
    /// Whether the token currently authorizes access.
    pub is_valid: bool,
    /// Issuance time, read from the clock capability. Immutable.
    pub created_at: DateTime<Utc>,
}

/// Client request to issue a token for a repository.
///
/// Carries the raw, unvalidated URL; canonicalization happens during issuance.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRequest {
    pub repository_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_default_token_is_not_valid() {
        let token = AccessToken::default();
        assert!(token.husky_token.is_empty());
        assert!(token.url.is_empty());
        assert!(!token.is_valid);
    }

    #[test]
    fn test_token_construction() {
        let now = Utc::now();
        let token = AccessToken {
            husky_token: "abc123".to_string(),
            url: "https://www.github.com/myProject".to_string(),
            is_valid: true,
            created_at: now,
        };

        assert_eq!(token.husky_token, "abc123");
        assert_eq!(token.url, "https://www.github.com/myProject");
        assert!(token.is_valid);
        assert_eq!(token.created_at, now);
    }
}
