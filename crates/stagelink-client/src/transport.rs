//! Text-frame transport seam.
//!
//! The protocol layer never touches sockets directly. Anything that can
//! carry ordered text frames can back a session; production uses a WebSocket
//! implementation, tests use scripted in-memory transports.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the underlying transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The peer closed the connection.
    #[error("connection closed by peer")]
    Closed,

    /// Read or write failure.
    #[error("transport failure: {reason}")]
    Io {
        /// Description of the I/O failure.
        reason: String,
    },
}

/// An ordered, bidirectional text-frame transport.
///
/// Implementations must deliver frames in the order the peer sent them;
/// request/response correlation relies on it.
#[async_trait]
pub trait Transport: Send {
    /// Send one text frame.
    async fn send(&mut self, text: String) -> Result<(), TransportError>;

    /// Receive the next text frame, waiting until one arrives.
    async fn recv(&mut self) -> Result<String, TransportError>;

    /// Close the connection. Idempotent.
    async fn close(&mut self) -> Result<(), TransportError>;
}
