//! Wire protocol for the stagelink control protocol.
//!
//! The control server speaks a text-framed protocol: every WebSocket text
//! frame carries one JSON envelope `{op, d}` where `op` is a numeric message
//! kind and `d` is a kind-specific body. This crate defines the closed opcode
//! set, the envelope itself, and typed payloads for the message kinds the
//! client consumes or produces.
//!
//! # Components
//!
//! - [`OpCode`]: numeric message kinds (closed set)
//! - [`Envelope`]: the `{op, d}` frame with encode/decode helpers
//! - [`payloads`]: typed bodies for handshake and request messages
//! - [`EventSubscription`]: event category bitmask sent during identify
//!
//! All types are plain data. I/O and session state live in
//! `stagelink-client`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod envelope;
mod error;
mod opcode;
pub mod payloads;
mod subscriptions;

pub use envelope::Envelope;
pub use error::ProtoError;
pub use opcode::OpCode;
pub use subscriptions::EventSubscription;
