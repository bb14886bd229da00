//! Opaque bearer token generation.

use base64::Engine as _;
use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::error::TokenError;

/// Mints a new opaque bearer token: 32 OS-random bytes, URL-safe base64
/// without padding.
pub fn generate_token() -> Result<String, TokenError> {
    let mut buf = [0u8; 32];
    OsRng
        .try_fill_bytes(&mut buf)
        .map_err(|e| TokenError::Generation(format!("Failed to generate token: {e}")))?;
    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf))
}
