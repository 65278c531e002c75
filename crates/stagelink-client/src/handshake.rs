//! Hello/identify handshake state machine.
//!
//! Pure state machine - receives inbound envelopes, returns outbound
//! envelopes as actions, caller handles I/O. The driver in
//! [`crate::Session`] runs it over a real transport.

use stagelink_auth::{Secret, derive_auth_token};
use stagelink_proto::{
    Envelope, EventSubscription, OpCode,
    payloads::{Hello, Identify},
};

use crate::error::ClientError;

/// Protocol version this client speaks.
pub const RPC_VERSION: u32 = 1;

/// Handshake progress.
///
/// The transport-opening phase happens before a `Handshake` exists, and the
/// terminal closed state belongs to the session driver; the machine itself
/// only covers the two authentication exchanges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeState {
    /// Waiting for the server's Hello with the challenge pair.
    AwaitingChallenge,
    /// Identify sent; waiting for the server's verdict.
    Authenticating,
    /// Identify accepted.
    Ready,
}

/// Outbound effect produced by one handshake step.
#[derive(Debug, Clone, PartialEq)]
pub enum HandshakeAction {
    /// Send this envelope, then feed the next inbound message.
    Send(Envelope),
    /// Authentication accepted; the session is ready.
    Established,
}

/// Challenge-response handshake.
///
/// The challenge pair is consumed the moment the Hello arrives: only the
/// derived token leaves this machine, and nothing secret is retained.
pub struct Handshake {
    secret: Secret,
    subscriptions: EventSubscription,
    state: HandshakeState,
}

impl Handshake {
    /// Create a handshake awaiting the server's Hello.
    pub fn new(secret: Secret, subscriptions: EventSubscription) -> Self {
        Self { secret, subscriptions, state: HandshakeState::AwaitingChallenge }
    }

    /// Current progress.
    pub fn state(&self) -> HandshakeState {
        self.state
    }

    /// Process one inbound envelope.
    ///
    /// # Errors
    ///
    /// `Auth` for a protocol-violating first message, a Hello without a
    /// challenge, or a rejected identify; `Protocol` for messages after the
    /// handshake completed. All errors are fatal - there is no
    /// resynchronization.
    pub fn on_message(&mut self, envelope: &Envelope) -> Result<HandshakeAction, ClientError> {
        match self.state {
            HandshakeState::AwaitingChallenge => self.on_hello(envelope),
            HandshakeState::Authenticating => self.on_identify_reply(envelope),
            HandshakeState::Ready => Err(ClientError::Protocol {
                reason: "handshake already complete".to_string(),
            }),
        }
    }

    fn on_hello(&mut self, envelope: &Envelope) -> Result<HandshakeAction, ClientError> {
        if envelope.op != OpCode::Hello {
            return Err(ClientError::Auth {
                reason: format!("expected hello as first message, got {:?}", envelope.op),
            });
        }

        let hello: Hello = envelope.decode()?;
        let Some(challenge) = hello.authentication else {
            return Err(ClientError::Auth {
                reason: "hello carried no authentication challenge".to_string(),
            });
        };

        let token = derive_auth_token(&self.secret, &challenge.salt, &challenge.challenge);
        let identify = Identify {
            rpc_version: RPC_VERSION,
            authentication: token,
            event_subscriptions: self.subscriptions.bits(),
        };

        self.state = HandshakeState::Authenticating;
        Ok(HandshakeAction::Send(Envelope::encode(OpCode::Identify, &identify)?))
    }

    fn on_identify_reply(&mut self, envelope: &Envelope) -> Result<HandshakeAction, ClientError> {
        // An empty body means the server broke off authentication, whatever
        // the opcode claims.
        if envelope.body_is_empty() {
            return Err(ClientError::Auth {
                reason: "identify rejected: empty response body".to_string(),
            });
        }

        if envelope.op != OpCode::Identified {
            return Err(ClientError::Auth {
                reason: format!("identify rejected: unexpected {:?} reply", envelope.op),
            });
        }

        self.state = HandshakeState::Ready;
        Ok(HandshakeAction::Established)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use serde_json::json;

    use super::*;

    fn handshake() -> Handshake {
        Handshake::new(Secret::from("hunter2"), EventSubscription::ALL)
    }

    fn hello_envelope() -> Envelope {
        Envelope::new(
            OpCode::Hello,
            json!({
                "rpcVersion": 1,
                "authentication": {"salt": "saltval", "challenge": "chalval"}
            }),
        )
    }

    fn identified_envelope() -> Envelope {
        Envelope::new(OpCode::Identified, json!({"negotiatedRpcVersion": 1}))
    }

    #[test]
    fn hello_then_identified_reaches_ready() {
        let mut handshake = handshake();
        assert_eq!(handshake.state(), HandshakeState::AwaitingChallenge);

        let action = handshake.on_message(&hello_envelope()).unwrap();
        assert!(matches!(action, HandshakeAction::Send(_)));
        assert_eq!(handshake.state(), HandshakeState::Authenticating);

        let action = handshake.on_message(&identified_envelope()).unwrap();
        assert_eq!(action, HandshakeAction::Established);
        assert_eq!(handshake.state(), HandshakeState::Ready);
    }

    #[test]
    fn identify_carries_derived_token() {
        let mut handshake = handshake();

        let action = handshake.on_message(&hello_envelope()).unwrap();
        let HandshakeAction::Send(identify) = action else {
            panic!("expected identify envelope");
        };

        assert_eq!(identify.op, OpCode::Identify);
        let expected =
            derive_auth_token(&Secret::from("hunter2"), "saltval", "chalval");
        assert_eq!(identify.d["authentication"], json!(expected));
        assert_eq!(identify.d["rpcVersion"], json!(1));
        assert_eq!(identify.d["eventSubscriptions"], json!(1023));
    }

    #[test]
    fn wrong_first_opcode_is_auth_error() {
        let mut handshake = handshake();

        let event = Envelope::new(OpCode::Event, json!({"eventType": "StudioModeChanged"}));
        let result = handshake.on_message(&event);

        assert!(matches!(result, Err(ClientError::Auth { .. })));
        assert_eq!(handshake.state(), HandshakeState::AwaitingChallenge);
    }

    #[test]
    fn hello_without_challenge_is_auth_error() {
        let mut handshake = handshake();

        let hello = Envelope::new(OpCode::Hello, json!({"rpcVersion": 1}));
        let result = handshake.on_message(&hello);

        assert!(matches!(result, Err(ClientError::Auth { .. })));
    }

    #[test]
    fn empty_identified_body_is_auth_error() {
        let mut handshake = handshake();
        handshake.on_message(&hello_envelope()).unwrap();

        let empty = Envelope::new(OpCode::Identified, json!({}));
        let result = handshake.on_message(&empty);

        assert!(matches!(result, Err(ClientError::Auth { .. })));
        assert_eq!(handshake.state(), HandshakeState::Authenticating);
    }

    #[test]
    fn non_identified_reply_is_auth_error() {
        let mut handshake = handshake();
        handshake.on_message(&hello_envelope()).unwrap();

        let reply = Envelope::new(OpCode::Hello, json!({"rpcVersion": 1}));
        let result = handshake.on_message(&reply);

        assert!(matches!(result, Err(ClientError::Auth { .. })));
    }

    #[test]
    fn message_after_ready_is_protocol_error() {
        let mut handshake = handshake();
        handshake.on_message(&hello_envelope()).unwrap();
        handshake.on_message(&identified_envelope()).unwrap();

        let result = handshake.on_message(&identified_envelope());

        assert!(matches!(result, Err(ClientError::Protocol { .. })));
        assert_eq!(handshake.state(), HandshakeState::Ready);
    }
}
