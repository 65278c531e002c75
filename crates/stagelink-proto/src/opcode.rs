//! Message kind registry.

use serde_repr::{Deserialize_repr, Serialize_repr};

/// Numeric message kinds carried in the envelope `op` field.
///
/// The set is closed: a frame whose `op` is not listed here fails envelope
/// decoding. `Reidentify` and `Event` exist on the wire but carry no client
/// semantics — the client never sends a `Reidentify`, and `Event` frames are
/// skipped while waiting for a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum OpCode {
    /// First server-to-client message, carries the authentication challenge.
    Hello = 0,
    /// Client-to-server: protocol version plus proof of secret knowledge.
    Identify = 1,
    /// Server-to-client: identify accepted, session is ready.
    Identified = 2,
    /// Client-to-server: renegotiate session parameters (unused by this client).
    Reidentify = 3,
    /// Server-initiated event push.
    Event = 5,
    /// Client-to-server: invoke a named remote operation.
    Request = 6,
    /// Server-to-client: reply to a previously issued request.
    RequestResponse = 7,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn opcode_wire_values() {
        assert_eq!(serde_json::to_string(&OpCode::Hello).unwrap(), "0");
        assert_eq!(serde_json::to_string(&OpCode::Identify).unwrap(), "1");
        assert_eq!(serde_json::to_string(&OpCode::Identified).unwrap(), "2");
        assert_eq!(serde_json::to_string(&OpCode::Event).unwrap(), "5");
        assert_eq!(serde_json::to_string(&OpCode::Request).unwrap(), "6");
        assert_eq!(serde_json::to_string(&OpCode::RequestResponse).unwrap(), "7");
    }

    #[test]
    fn unknown_opcode_rejected() {
        let result: Result<OpCode, _> = serde_json::from_str("4");
        assert!(result.is_err());

        let result: Result<OpCode, _> = serde_json::from_str("42");
        assert!(result.is_err());
    }
}
