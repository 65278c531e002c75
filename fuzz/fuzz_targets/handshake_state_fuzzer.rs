//! Fuzz target for the [`Handshake`] state machine
//!
//! Prevent authentication bypass via invalid state transitions
//!
//! # Strategy
//!
//! - Message sequences: arbitrary interleavings of hellos (with and without
//!   challenges), identify replies, events, and raw opcodes
//! - State probing: out-of-order handshakes, duplicate hellos, traffic after
//!   completion
//!
//! # Invariants
//!
//! - `Ready` ONLY reachable via a challenge-bearing Hello followed by a
//!   non-empty Identified
//! - Errors never advance the handshake state
//! - The identify answer is only ever produced from `AwaitingChallenge`
//! - NEVER panic on unexpected message shapes

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use serde_json::json;
use stagelink_client::{Handshake, HandshakeAction, HandshakeState, Secret};
use stagelink_proto::{Envelope, EventSubscription, OpCode};

#[derive(Debug, Clone, Arbitrary)]
enum FuzzedMessage {
    HelloWithChallenge { salt: String, challenge: String },
    HelloWithoutChallenge,
    Identified { with_body: bool },
    Event,
    RequestResponse,
    RawOp { op: u8, empty_body: bool },
}

fn build(message: &FuzzedMessage) -> Option<Envelope> {
    match message {
        FuzzedMessage::HelloWithChallenge { salt, challenge } => Some(Envelope::new(
            OpCode::Hello,
            json!({"rpcVersion": 1, "authentication": {"salt": salt, "challenge": challenge}}),
        )),
        FuzzedMessage::HelloWithoutChallenge => {
            Some(Envelope::new(OpCode::Hello, json!({"rpcVersion": 1})))
        },
        FuzzedMessage::Identified { with_body } => {
            let body = if *with_body { json!({"negotiatedRpcVersion": 1}) } else { json!({}) };
            Some(Envelope::new(OpCode::Identified, body))
        },
        FuzzedMessage::Event => {
            Some(Envelope::new(OpCode::Event, json!({"eventType": "CaptureStarted"})))
        },
        FuzzedMessage::RequestResponse => Some(Envelope::new(
            OpCode::RequestResponse,
            json!({"requestStatus": {"result": true}}),
        )),
        // Arbitrary opcode via the text path; out-of-set values fail to
        // decode and are skipped.
        FuzzedMessage::RawOp { op, empty_body } => {
            let text = if *empty_body {
                format!("{{\"op\": {op}}}")
            } else {
                format!("{{\"op\": {op}, \"d\": {{\"x\": 1}}}}")
            };
            Envelope::from_text(&text).ok()
        },
    }
}

fuzz_target!(|messages: Vec<FuzzedMessage>| {
    let mut handshake = Handshake::new(Secret::from("fuzz-secret"), EventSubscription::ALL);
    let mut answered_challenge = false;

    for message in messages {
        let Some(envelope) = build(&message) else {
            continue;
        };

        let before = handshake.state();
        match handshake.on_message(&envelope) {
            Ok(HandshakeAction::Send(identify)) => {
                assert_eq!(before, HandshakeState::AwaitingChallenge);
                assert_eq!(identify.op, OpCode::Identify);
                assert_eq!(handshake.state(), HandshakeState::Authenticating);
                assert!(
                    matches!(message, FuzzedMessage::HelloWithChallenge { .. }),
                    "identify produced without a challenge hello"
                );
                answered_challenge = true;
            },
            Ok(HandshakeAction::Established) => {
                assert_eq!(before, HandshakeState::Authenticating);
                assert!(answered_challenge, "Ready reached without answering a challenge");
                assert_eq!(handshake.state(), HandshakeState::Ready);
            },
            Err(_) => {
                assert_eq!(handshake.state(), before, "errors must not advance the handshake");
            },
        }
    }
});
