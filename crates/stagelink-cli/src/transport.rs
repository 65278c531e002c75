//! WebSocket transport implementation.

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use stagelink_client::{Transport, TransportError};
use tokio::net::TcpStream;
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async,
    tungstenite::{Error as WsError, Message},
};

/// Text-frame transport over a WebSocket connection.
pub struct WsTransport {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl WsTransport {
    /// Open a connection to the server endpoint (e.g. `ws://127.0.0.1:4455`).
    ///
    /// # Errors
    ///
    /// Any failure to open the underlying connection, surfaced as
    /// [`TransportError::Io`] - the caller maps it to a connection error and
    /// does not retry.
    pub async fn connect(url: &str) -> Result<Self, TransportError> {
        let (stream, _response) =
            connect_async(url).await.map_err(|e| TransportError::Io { reason: e.to_string() })?;
        Ok(Self { stream })
    }
}

#[async_trait]
impl Transport for WsTransport {
    async fn send(&mut self, text: String) -> Result<(), TransportError> {
        self.stream
            .send(Message::Text(text))
            .await
            .map_err(|e| TransportError::Io { reason: e.to_string() })
    }

    async fn recv(&mut self) -> Result<String, TransportError> {
        loop {
            match self.stream.next().await {
                None => return Err(TransportError::Closed),
                Some(Err(e)) => return Err(TransportError::Io { reason: e.to_string() }),
                Some(Ok(Message::Text(text))) => return Ok(text),
                Some(Ok(Message::Close(_))) => return Err(TransportError::Closed),
                // Ping/pong and binary frames are not protocol traffic.
                Some(Ok(_)) => {},
            }
        }
    }

    async fn close(&mut self) -> Result<(), TransportError> {
        match self.stream.close(None).await {
            Ok(()) | Err(WsError::ConnectionClosed | WsError::AlreadyClosed) => Ok(()),
            Err(e) => Err(TransportError::Io { reason: e.to_string() }),
        }
    }
}
