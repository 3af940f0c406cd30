use crate::model::Token;
use anyhow::Result;
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{Duration, Utc};
use rand::TryRngCore;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

const TOKEN_BYTES: usize = 32;

/// SHA-256 of the plaintext; this is what the `tokens` table stores.
pub fn hash_token(plain: &str) -> Vec<u8> {
    Sha256::digest(plain.as_bytes()).to_vec()
}

pub fn generate_token(user_id: i64, ttl: Duration) -> Result<Token> {
    let mut random = [0u8; TOKEN_BYTES];
    OsRng.try_fill_bytes(&mut random)?;

    let plain = URL_SAFE_NO_PAD.encode(random);
    let hashed = hash_token(&plain);

    Ok(Token {
        plain,
        hashed,
        user_id,
        expiry: Utc::now() + ttl,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_token_is_url_safe_and_hashed() {
        let token = generate_token(7, Duration::hours(1)).unwrap();

        assert_eq!(token.plain.len(), 43);
        assert!(
            token
                .plain
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
        assert_eq!(token.hashed, hash_token(&token.plain));
        assert_eq!(token.hashed.len(), 32);
        assert_eq!(token.user_id, 7);
        assert!(token.expiry > Utc::now());
    }

    #[test]
    fn tokens_are_unique() {
        let a = generate_token(1, Duration::hours(1)).unwrap();
        let b = generate_token(1, Duration::hours(1)).unwrap();
        assert_ne!(a.plain, b.plain);
    }

    #[test]
    fn digest_is_deterministic() {
        assert_eq!(hash_token("abc"), hash_token("abc"));
        assert_ne!(hash_token("abc"), hash_token("abd"));
    }
}
