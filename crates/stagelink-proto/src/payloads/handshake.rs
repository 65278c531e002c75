//! Handshake payload types.
//!
//! These bodies cover session establishment: the server's opening Hello and
//! the client's Identify answer. The Identified reply carries no fields the
//! client consumes, so it has no typed body here — the establishment logic
//! only checks that its body is non-empty.

use serde::{Deserialize, Serialize};

/// Challenge material nested in the Hello body.
///
/// Consumed exactly once to derive the authentication token, then discarded.
///
/// # Security
///
/// - **Debug Redaction**: The `Debug` impl redacts both tokens to prevent
///   logging authentication nonces.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    /// Server-issued salt for the first hash round.
    pub salt: String,
    /// Server-issued challenge for the second hash round.
    pub challenge: String,
}

impl std::fmt::Debug for Challenge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Challenge")
            .field("salt", &format!("<redacted {} bytes>", self.salt.len()))
            .field("challenge", &format!("<redacted {} bytes>", self.challenge.len()))
            .finish()
    }
}

/// First server-to-client message of a session.
///
/// Only the `authentication` sub-object is consumed; a server that does not
/// require authentication omits it, which this client rejects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hello {
    /// Authentication challenge; absent when the server has auth disabled.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub authentication: Option<Challenge>,
    /// Protocol version the server speaks.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rpc_version: Option<u32>,
}

/// Client-to-server message proving secret knowledge.
///
/// # Security
///
/// - **Debug Redaction**: The `Debug` impl redacts `authentication` — the
///   derived token is as sensitive as the secret for the session lifetime.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identify {
    /// Protocol version the client speaks.
    pub rpc_version: u32,
    /// Derived authentication token.
    pub authentication: String,
    /// Event category bitmask; must be present and non-zero.
    pub event_subscriptions: u32,
}

impl std::fmt::Debug for Identify {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identify")
            .field("rpc_version", &self.rpc_version)
            .field("authentication", &format!("<redacted {} bytes>", self.authentication.len()))
            .field("event_subscriptions", &self.event_subscriptions)
            .finish()
    }
}
