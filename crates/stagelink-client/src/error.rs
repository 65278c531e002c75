//! Client error types.

use stagelink_proto::ProtoError;
use thiserror::Error;

use crate::transport::TransportError;

/// Errors from session establishment and request dispatch.
///
/// Every variant is fatal for the session: the connection must be closed
/// rather than reused. Operation-level failure (`success: false` in a
/// well-formed reply) is a normal [`crate::OperationResult`], never an error.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport open, read, or write failure, or a receive timeout.
    #[error("connection error: {reason}")]
    Connection {
        /// Description of the transport failure.
        reason: String,
    },

    /// Missing or malformed challenge, or the server rejected the identify.
    #[error("authentication failed: {reason}")]
    Auth {
        /// Description of the authentication failure.
        reason: String,
    },

    /// Malformed or unexpected message shape.
    #[error("protocol error: {reason}")]
    Protocol {
        /// Description of the protocol violation.
        reason: String,
    },
}

impl From<TransportError> for ClientError {
    fn from(err: TransportError) -> Self {
        Self::Connection { reason: err.to_string() }
    }
}

impl From<ProtoError> for ClientError {
    fn from(err: ProtoError) -> Self {
        Self::Protocol { reason: err.to_string() }
    }
}
