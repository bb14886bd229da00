//! Repository URL validation and canonicalization.

use url::Url;

use crate::error::TokenError;

/// Validates a raw repository URL and returns its canonical form.
///
/// Accepts http/https URLs with a host. Canonicalization lowercases the
/// host, strips any fragment, and drops default ports.
pub fn validate_repository_url(input: &str) -> Result<String, TokenError> {
    let mut url =
        Url::parse(input).map_err(|e| TokenError::InvalidUrl(format!("Invalid URL: {e}")))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => {
            return Err(TokenError::InvalidUrl(
                "Only http/https URLs are allowed".to_string(),
            ));
        }
    }

    let Some(host) = url.host_str() else {
        return Err(TokenError::InvalidUrl("URL has no host".to_string()));
    };
    let host_lc = host.to_ascii_lowercase();
    url.set_host(Some(&host_lc))
        .map_err(|_| TokenError::InvalidUrl("Failed to set host".to_string()))?;

    url.set_fragment(None);

    let is_default_port = matches!(
        (url.scheme(), url.port()),
        ("http", Some(80)) | ("https", Some(443))
    );
    if is_default_port {
        url.set_port(None)
            .map_err(|_| TokenError::InvalidUrl("Failed to drop port".to_string()))?;
    }

    Ok(url.to_string())
}
