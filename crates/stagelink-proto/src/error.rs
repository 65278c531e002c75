//! Protocol encode/decode error types.

use thiserror::Error;

/// Errors from envelope and payload encoding or decoding.
#[derive(Debug, Error)]
pub enum ProtoError {
    /// Frame text is not a valid `{op, d}` envelope.
    #[error("malformed frame: {reason}")]
    MalformedFrame {
        /// Description of the decode failure.
        reason: String,
    },

    /// Envelope body does not match the expected shape for its message kind.
    #[error("malformed payload: {reason}")]
    MalformedPayload {
        /// Description of the payload mismatch.
        reason: String,
    },

    /// A payload could not be serialized into an envelope body.
    #[error("payload encoding failed: {reason}")]
    Encode {
        /// Description of the serialization failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ProtoError::MalformedFrame { reason: "not json".to_string() };
        assert_eq!(err.to_string(), "malformed frame: not json");

        let err = ProtoError::MalformedPayload { reason: "missing requestStatus".to_string() };
        assert_eq!(err.to_string(), "malformed payload: missing requestStatus");
    }
}
