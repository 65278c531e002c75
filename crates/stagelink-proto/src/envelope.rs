//! The `{op, d}` message envelope.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{OpCode, ProtoError};

/// One protocol message: a tagged envelope carried in a WebSocket text frame.
///
/// `op` identifies the message kind; `d` is the kind-specific body, kept as
/// raw JSON here and interpreted through the typed payloads in
/// [`crate::payloads`]. Servers may omit `d` entirely, which decodes as
/// `Value::Null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Message kind.
    pub op: OpCode,
    /// Kind-specific body.
    #[serde(default)]
    pub d: Value,
}

impl Envelope {
    /// Create an envelope from a raw body value.
    pub fn new(op: OpCode, d: Value) -> Self {
        Self { op, d }
    }

    /// Create an envelope by serializing a typed payload into the body.
    pub fn encode<P: Serialize>(op: OpCode, payload: &P) -> Result<Self, ProtoError> {
        let d = serde_json::to_value(payload)
            .map_err(|e| ProtoError::Encode { reason: e.to_string() })?;
        Ok(Self { op, d })
    }

    /// Deserialize the body into a typed payload.
    ///
    /// Unknown body fields are ignored; a missing required field is a
    /// [`ProtoError::MalformedPayload`].
    pub fn decode<P: DeserializeOwned>(&self) -> Result<P, ProtoError> {
        serde_json::from_value(self.d.clone())
            .map_err(|e| ProtoError::MalformedPayload { reason: e.to_string() })
    }

    /// Serialize the envelope into frame text.
    pub fn to_text(&self) -> Result<String, ProtoError> {
        serde_json::to_string(self).map_err(|e| ProtoError::Encode { reason: e.to_string() })
    }

    /// Parse frame text into an envelope.
    ///
    /// Fails on invalid JSON, on an `op` outside the closed set, and on a
    /// missing `op` field.
    pub fn from_text(text: &str) -> Result<Self, ProtoError> {
        serde_json::from_str(text).map_err(|e| ProtoError::MalformedFrame { reason: e.to_string() })
    }

    /// True when the body is absent, null, or an empty object.
    ///
    /// The identify stage treats such a reply as authentication rejection.
    pub fn body_is_empty(&self) -> bool {
        match &self.d {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }
}
