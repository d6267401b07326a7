/// Password-reset token generation
///
/// Tokens are opaque hex strings carrying 320 bits of OS entropy. They are
/// stored alongside a one-hour expiry and a single-use flag in the
/// `password_reset_tokens` table.

use chrono::Duration;
use rand::{rngs::OsRng, RngCore};

/// Number of random bytes per token (hex-encoded to twice this length).
const TOKEN_BYTES: usize = 40;

/// How long a freshly issued token stays valid.
pub fn token_ttl() -> Duration {
    Duration::hours(1)
}

/// Generates a cryptographically random reset token
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_length() {
        assert_eq!(generate_token().len(), TOKEN_BYTES * 2);
    }

    #[test]
    fn test_token_is_hex() {
        assert!(generate_token().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_tokens_are_unique() {
        assert_ne!(generate_token(), generate_token());
    }

    #[test]
    fn test_ttl_is_one_hour() {
        assert_eq!(token_ttl(), Duration::hours(1));
    }
}
