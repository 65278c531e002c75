//! CLI error types.

use stagelink_client::ClientError;
use thiserror::Error;

use crate::secret::SecretError;

/// Errors surfaced by the `stagelink` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// The shared secret could not be loaded.
    #[error(transparent)]
    Secret(#[from] SecretError),

    /// Session establishment or request dispatch failed.
    #[error(transparent)]
    Client(#[from] ClientError),
}
