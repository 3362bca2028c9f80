//! Opaque token generation and hashing.
//!
//! Magic-link tokens and refresh tokens share the same shape: a random
//! alphanumeric string handed to the client, with only its SHA-256 hex
//! digest stored server-side.

use rand::Rng;

use crate::hashing::sha256_hex;

/// Length of generated tokens (alphanumeric characters).
pub const TOKEN_LENGTH: usize = 48;

/// A freshly generated token and the digest to store for it.
pub struct GeneratedToken {
    /// The plaintext token (sent to the user exactly once, never stored).
    pub plaintext: String,
    /// The SHA-256 hex digest of the plaintext (stored in the database).
    pub hash: String,
}

/// Generate a new random token.
pub fn generate_token() -> GeneratedToken {
    let plaintext: String = rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect();
    let hash = hash_token(&plaintext);
    GeneratedToken { plaintext, hash }
}

/// Compute the storage digest of a token.
///
/// Used both at creation and at lookup, so the two sides always agree.
pub fn hash_token(token: &str) -> String {
    sha256_hex(token.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_token_has_correct_length() {
        let token = generate_token();
        assert_eq!(token.plaintext.len(), TOKEN_LENGTH);
        assert!(token.plaintext.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn hash_matches_regeneration() {
        let token = generate_token();
        assert_eq!(token.hash, hash_token(&token.plaintext));
    }

    #[test]
    fn different_tokens_produce_different_hashes() {
        let a = generate_token();
        let b = generate_token();
        assert_ne!(a.plaintext, b.plaintext);
        assert_ne!(a.hash, b.hash);
    }
}
