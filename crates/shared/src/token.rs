//! Session token generation and hashing.
//!
//! Login sessions are identified by an opaque random token handed to the
//! browser in an httpOnly cookie. Only the SHA-256 digest of the token is
//! persisted, so a leaked sessions table cannot be replayed.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Number of random bytes in a session token (256 bits).
const TOKEN_BYTES: usize = 32;

/// Generates a new opaque session token (base64url, no padding).
pub fn generate_session_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Computes the hex-encoded SHA-256 digest of a token.
///
/// This is the value stored in (and looked up from) the sessions table.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_length() {
        let token = generate_session_token();
        // 32 bytes base64url without padding
        assert_eq!(token.len(), 43);
    }

    #[test]
    fn test_tokens_are_unique() {
        let a = generate_session_token();
        let b = generate_session_token();
        assert_ne!(a, b);
    }

    #[test]
    fn test_token_is_urlsafe() {
        let token = generate_session_token();
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_hash_token_is_hex_sha256() {
        let digest = hash_token("abc");
        assert_eq!(digest.len(), 64);
        assert_eq!(
            digest,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_hash_token_deterministic() {
        let token = generate_session_token();
        assert_eq!(hash_token(&token), hash_token(&token));
    }

    #[test]
    fn test_hash_token_differs_per_token() {
        assert_ne!(hash_token("one"), hash_token("two"));
    }
}
