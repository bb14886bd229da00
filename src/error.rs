//! Crate-wide error type for token issuance and validation.

use thiserror::Error;

/// Errors surfaced by the token handler and its external collaborators.
///
/// Variants are keyed by failure origin. A message produced by a collaborator
/// is rendered verbatim; the handler never wraps, renames, or reclassifies it.
/// [`TokenError::InvalidAccessToken`] is the only error the handler itself
/// originates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Repository URL is malformed or fails URL policy.
    #[error("{0}")]
    InvalidUrl(String),

    /// The token generator was unavailable or failed to produce a value.
    #[error("{0}")]
    Generation(String),

    /// Persisting an access token failed (backend down or constraint violation).
    #[error("{0}")]
    Storage(String),

    /// Looking up a stored access token failed (not found or backend error).
    #[error("{0}")]
    Retrieval(String),

    /// Repository registration lookup failed (not registered or backend error).
    #[error("{0}")]
    RepoLookup(String),

    /// A stored record was found but its validity flag is off.
    #[error("Access token is invalid")]
    InvalidAccessToken,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collaborator_message_renders_verbatim() {
        let err = TokenError::InvalidUrl("URL is not valid".to_string());
        assert_eq!(err.to_string(), "URL is not valid");

        let err = TokenError::Storage("Failed to store access token in DB".to_string());
        assert_eq!(err.to_string(), "Failed to store access token in DB");
    }

    #[test]
    fn test_invalid_access_token_message() {
        assert_eq!(
            TokenError::InvalidAccessToken.to_string(),
            "Access token is invalid"
        );
    }
}
