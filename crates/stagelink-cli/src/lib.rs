//! Stagelink production client surface.
//!
//! This crate wires the protocol layer to the real world:
//! - `WsTransport`: WebSocket text frames via `tokio-tungstenite`
//! - secret loading from a file or the environment
//! - the `stagelink` binary (argument parsing, logging, exit codes)
//!
//! ## Architecture
//!
//! ```text
//! stagelink-cli
//!   ├─ WsTransport        (WebSocket Transport impl)
//!   ├─ load_secret        (file / environment, loaded once in main)
//!   └─ main               (clap args, tracing init, one request)
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod secret;
mod transport;

pub use error::CliError;
pub use secret::{SECRET_ENV_VAR, SecretError, load_secret};
pub use transport::WsTransport;
