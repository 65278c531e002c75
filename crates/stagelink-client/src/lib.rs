//! Client
//!
//! Session establishment and request dispatch for the stagelink control
//! protocol. Proves knowledge of the shared secret via challenge-response,
//! then issues named remote operations and correlates their replies.
//!
//! # Architecture
//!
//! The handshake is a pure state machine that:
//! - Receives inbound envelopes from the driver
//! - Produces outbound envelopes for the driver to send
//! - Performs no I/O itself (deterministic testing)
//!
//! [`Session`] drives the handshake over a [`Transport`] and is the only way
//! to reach the authenticated state: if you hold a `Session`, it is ready to
//! dispatch requests.
//!
//! # Components
//!
//! - [`Handshake`]: hello/identify state machine
//! - [`Session`]: authenticated connection, request dispatch, clean close
//! - [`Transport`]: text-frame transport seam (WebSocket in production)
//! - [`OperationResult`]: success flag plus opaque result payload

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod handshake;
mod request_id;
mod session;
mod transport;

pub use error::ClientError;
pub use handshake::{Handshake, HandshakeAction, HandshakeState, RPC_VERSION};
pub use session::{OperationResult, Session, SessionConfig};
pub use stagelink_auth::Secret;
pub use stagelink_proto::EventSubscription;
pub use transport::{Transport, TransportError};
