//! Challenge-response token derivation.
//!
//! The server's Hello carries a `(salt, challenge)` pair. The client answers
//! with `base64(SHA-256(base64(SHA-256(secret ++ salt)) ++ challenge))`:
//! concatenate as text, hash, base64-encode, twice. Both rounds operate on
//! the base64 *text* of the previous digest, not its raw bytes.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use sha2::{Digest, Sha256};

/// The shared secret, loaded once and immutable for the process lifetime.
///
/// # Security
///
/// - **Debug Redaction**: The `Debug` impl redacts the value to prevent
///   accidental logging of credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(Vec<u8>);

impl Secret {
    /// Wrap raw secret bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Borrow the secret bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self(value.as_bytes().to_vec())
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Secret(<redacted {} bytes>)", self.0.len())
    }
}

/// First derivation round: `base64(SHA-256(secret ++ salt))`.
pub fn secret_hash(secret: &Secret, salt: &str) -> String {
    hash_concat(secret.as_bytes(), salt.as_bytes())
}

/// Derive the authentication token for one session.
///
/// Pure function: identical `(secret, salt, challenge)` inputs always yield
/// the identical token.
pub fn derive_auth_token(secret: &Secret, salt: &str, challenge: &str) -> String {
    let hash = secret_hash(secret, salt);
    hash_concat(hash.as_bytes(), challenge.as_bytes())
}

fn hash_concat(left: &[u8], right: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(left);
    hasher.update(right);
    BASE64.encode(hasher.finalize())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use base64::Engine as _;
    use proptest::prelude::*;

    use super::*;

    // Vector computed independently:
    //   base64(sha256("hunter2" ++ "saltval")) and
    //   base64(sha256(that_text ++ "chalval"))
    const PINNED_SECRET_HASH: &str = "UHpPASRv7wDnXQhEF9yVobwhjJX0aPYO80Mfbo7YiqE=";
    const PINNED_TOKEN: &str = "6bXwbyMvJ7Y3HubncpIt3e60UHEiQMT/QTOrOMMmzdU=";

    #[test]
    fn pinned_vector() {
        let secret = Secret::from("hunter2");

        assert_eq!(secret_hash(&secret, "saltval"), PINNED_SECRET_HASH);
        assert_eq!(derive_auth_token(&secret, "saltval", "chalval"), PINNED_TOKEN);
    }

    #[test]
    fn derivation_is_deterministic() {
        let secret = Secret::from("correct horse battery staple");

        let first = derive_auth_token(&secret, "salt", "challenge");
        let second = derive_auth_token(&secret, "salt", "challenge");

        assert_eq!(first, second);
    }

    #[test]
    fn single_byte_perturbations_change_token() {
        let base = derive_auth_token(&Secret::from("hunter2"), "saltval", "chalval");

        assert_ne!(derive_auth_token(&Secret::from("hunter3"), "saltval", "chalval"), base);
        assert_ne!(derive_auth_token(&Secret::from("hunter2"), "saltvbl", "chalval"), base);
        assert_ne!(derive_auth_token(&Secret::from("hunter2"), "saltval", "chalvbl"), base);
    }

    #[test]
    fn token_is_base64_of_sha256_digest() {
        let token = derive_auth_token(&Secret::from("s"), "a", "c");

        // 32-byte digest encodes to 44 base64 characters.
        assert_eq!(token.len(), 44);
        assert_eq!(BASE64.decode(&token).unwrap().len(), 32);
    }

    #[test]
    fn secret_debug_is_redacted() {
        let secret = Secret::from("hunter2");
        assert_eq!(format!("{secret:?}"), "Secret(<redacted 7 bytes>)");
    }

    proptest! {
        #[test]
        fn distinct_salts_yield_distinct_tokens(
            salt_a in "[a-zA-Z0-9]{1,32}",
            salt_b in "[a-zA-Z0-9]{1,32}",
        ) {
            prop_assume!(salt_a != salt_b);
            let secret = Secret::from("fixed");

            prop_assert_ne!(
                derive_auth_token(&secret, &salt_a, "chal"),
                derive_auth_token(&secret, &salt_b, "chal")
            );
        }

        #[test]
        fn distinct_secrets_yield_distinct_tokens(
            secret_a in prop::collection::vec(any::<u8>(), 1..64),
            secret_b in prop::collection::vec(any::<u8>(), 1..64),
        ) {
            prop_assume!(secret_a != secret_b);

            prop_assert_ne!(
                derive_auth_token(&Secret::new(secret_a), "salt", "chal"),
                derive_auth_token(&Secret::new(secret_b), "salt", "chal")
            );
        }
    }
}
