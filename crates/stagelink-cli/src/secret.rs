//! Shared-secret loading.
//!
//! The secret comes from a file (generated or copied out of the server's
//! settings dialog) or from the environment. It is loaded exactly once, in
//! `main`, and handed to the protocol layer as a value - the protocol crates
//! never read files or the environment.

use std::path::Path;

use stagelink_client::Secret;
use thiserror::Error;

/// Environment variable consulted when no secret file is given.
pub const SECRET_ENV_VAR: &str = "STAGELINK_SECRET";

/// Errors from secret loading.
#[derive(Debug, Error)]
pub enum SecretError {
    /// The secret file could not be read.
    #[error("failed to read secret file {path}: {reason}")]
    Unreadable {
        /// Path that was attempted.
        path: String,
        /// Description of the I/O failure.
        reason: String,
    },

    /// Neither a secret file nor the environment variable was provided.
    #[error("no secret: pass --secret-file or set {SECRET_ENV_VAR}")]
    Missing,

    /// The secret was present but blank.
    #[error("secret is empty")]
    Empty,
}

/// Load the shared secret: the file when given, the environment otherwise.
///
/// Surrounding whitespace is trimmed - secret files typically end with a
/// newline that is not part of the secret.
pub fn load_secret(path: Option<&Path>) -> Result<Secret, SecretError> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| SecretError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?,
        None => std::env::var(SECRET_ENV_VAR).map_err(|_| SecretError::Missing)?,
    };

    secret_from_raw(&raw)
}

fn secret_from_raw(raw: &str) -> Result<Secret, SecretError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SecretError::Empty);
    }
    Ok(Secret::from(trimmed))
}
