//! Authenticated session: establishment driver and request dispatch.

use std::time::Duration;

use serde_json::{Map, Value};
use stagelink_auth::Secret;
use stagelink_proto::{
    Envelope, EventSubscription, OpCode,
    payloads::{Request, RequestResponse},
};

use crate::{
    error::ClientError,
    handshake::{Handshake, HandshakeAction},
    request_id::RequestIdGen,
    transport::Transport,
};

/// Configuration for session establishment.
///
/// The secret is an explicit value here - loading and caching it is the
/// caller's concern, not the protocol layer's.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Shared secret proving authorization to the server.
    pub secret: Secret,
    /// Event category bitmask sent during identify. Must be non-zero; the
    /// default subscribes to every category.
    pub event_subscriptions: EventSubscription,
    /// Upper bound on every blocking receive, establishment included.
    pub recv_timeout: Duration,
    /// Stable prefix for correlation identifiers.
    pub request_id_prefix: String,
}

impl SessionConfig {
    /// Configuration with default subscriptions, timeout, and id prefix.
    pub fn new(secret: Secret) -> Self {
        Self {
            secret,
            event_subscriptions: EventSubscription::ALL,
            recv_timeout: Duration::from_secs(10),
            request_id_prefix: "stagelink".to_string(),
        }
    }
}

/// Outcome of one remote operation.
///
/// `success: false` is a normal value - the server executed the exchange but
/// reported the operation failed. The dispatcher never interprets it.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationResult {
    /// Whether the server reports the operation succeeded.
    pub success: bool,
    /// Result payload; empty when the server returned none.
    pub data: Map<String, Value>,
}

/// An authenticated, ready connection to the control server.
///
/// Only [`Session::establish`] produces one, and it completes the full
/// hello/identify exchange before returning - holding a `Session` means the
/// connection is ready for requests. Dispatch takes `&mut self`, so at most
/// one request is in flight per session.
pub struct Session<T: Transport> {
    transport: T,
    request_ids: RequestIdGen,
    recv_timeout: Duration,
}

impl<T: Transport> Session<T> {
    /// Authenticate an open transport and return a ready session.
    ///
    /// Exactly two receives and one send occur; there are no retries. On any
    /// failure the transport is closed before the error is surfaced.
    ///
    /// # Errors
    ///
    /// `Connection` for transport failures and receive timeouts, `Auth` for
    /// a missing challenge or rejected identify, `Protocol` for malformed
    /// frames.
    pub async fn establish(mut transport: T, config: SessionConfig) -> Result<Self, ClientError> {
        match run_handshake(&mut transport, &config).await {
            Ok(()) => {
                tracing::debug!("session established");
                Ok(Self {
                    transport,
                    request_ids: RequestIdGen::new(config.request_id_prefix),
                    recv_timeout: config.recv_timeout,
                })
            },
            Err(err) => {
                // Release the connection on every failed establishment path.
                let _ = transport.close().await;
                Err(err)
            },
        }
    }

    /// Invoke a named remote operation and wait for its reply.
    ///
    /// The operation name and result payload are opaque to this layer.
    /// Event frames arriving before the reply are skipped; the reply is
    /// matched by its correlation identifier.
    ///
    /// # Errors
    ///
    /// `Connection` for transport failures and timeouts, `Protocol` for a
    /// malformed reply or one correlating to a different request.
    pub async fn call(&mut self, request_type: &str) -> Result<OperationResult, ClientError> {
        let request_id = self.request_ids.next_id();
        let request = Request {
            request_type: request_type.to_string(),
            request_id: request_id.clone(),
        };

        tracing::debug!(request_type, request_id = %request_id, "dispatching request");
        let envelope = Envelope::encode(OpCode::Request, &request)?;
        self.transport.send(envelope.to_text()?).await?;

        loop {
            let text = recv_with_timeout(&mut self.transport, self.recv_timeout).await?;
            let envelope = Envelope::from_text(&text)?;

            match envelope.op {
                OpCode::Event => {
                    tracing::trace!("skipping event frame while awaiting reply");
                },
                OpCode::RequestResponse => {
                    let reply: RequestResponse = envelope.decode()?;
                    if let Some(id) = reply.request_id.as_deref() {
                        if id != request_id {
                            return Err(ClientError::Protocol {
                                reason: format!(
                                    "reply correlates to {id:?}, expected {request_id:?}"
                                ),
                            });
                        }
                    }

                    return Ok(OperationResult {
                        success: reply.request_status.result,
                        data: reply.response_data.unwrap_or_default(),
                    });
                },
                op => {
                    return Err(ClientError::Protocol {
                        reason: format!("unexpected {op:?} frame while awaiting reply"),
                    });
                },
            }
        }
    }

    /// Close the connection, consuming the session.
    pub async fn close(mut self) -> Result<(), ClientError> {
        self.transport.close().await.map_err(Into::into)
    }
}

async fn run_handshake<T: Transport>(
    transport: &mut T,
    config: &SessionConfig,
) -> Result<(), ClientError> {
    let mut handshake =
        Handshake::new(config.secret.clone(), config.event_subscriptions);

    let hello_text = recv_with_timeout(transport, config.recv_timeout).await?;
    let hello = Envelope::from_text(&hello_text)?;

    let HandshakeAction::Send(identify) = handshake.on_message(&hello)? else {
        return Err(ClientError::Protocol {
            reason: "handshake produced no identify message".to_string(),
        });
    };
    transport.send(identify.to_text()?).await?;

    let reply_text = recv_with_timeout(transport, config.recv_timeout).await?;
    if reply_text.trim().is_empty() {
        return Err(ClientError::Auth { reason: "identify rejected: empty reply".to_string() });
    }

    let reply = Envelope::from_text(&reply_text)?;
    match handshake.on_message(&reply)? {
        HandshakeAction::Established => Ok(()),
        HandshakeAction::Send(_) => Err(ClientError::Protocol {
            reason: "handshake expected completion, produced a send".to_string(),
        }),
    }
}

async fn recv_with_timeout<T: Transport>(
    transport: &mut T,
    timeout: Duration,
) -> Result<String, ClientError> {
    match tokio::time::timeout(timeout, transport.recv()).await {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(err)) => Err(err.into()),
        Err(_) => Err(ClientError::Connection {
            reason: format!("receive timed out after {timeout:?}"),
        }),
    }
}
