//! Stagelink client binary.
//!
//! Sends one named request to a local control server and reports the
//! outcome through the exit status.
//!
//! # Usage
//!
//! ```bash
//! # Toggle the capture output
//! stagelink --request ToggleCapture --secret-file ~/.config/stagelink/secret
//!
//! # Save the replay buffer, secret from the environment
//! STAGELINK_SECRET=... stagelink --request SaveReplay
//! ```
//!
//! Typical setup binds these invocations to desktop shortcuts, so the exit
//! status is the whole user interface: 0 when the server reports success,
//! 1 when it reports failure, 2 on connection/authentication errors.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use stagelink_cli::{CliError, WsTransport, load_secret};
use stagelink_client::{ClientError, Session, SessionConfig};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Stagelink control client
#[derive(Parser, Debug)]
#[command(name = "stagelink")]
#[command(about = "Send one request to a local stagelink control server")]
#[command(version)]
struct Args {
    /// Name of the remote operation to invoke (e.g. ToggleCapture,
    /// ToggleReplay, SaveReplay)
    #[arg(short, long)]
    request: String,

    /// Server endpoint
    #[arg(long, default_value = "ws://127.0.0.1:4455")]
    url: String,

    /// File whose trimmed contents are the shared secret; falls back to the
    /// STAGELINK_SECRET environment variable
    #[arg(long)]
    secret_file: Option<PathBuf>,

    /// Per-receive timeout in seconds
    #[arg(long, default_value = "10")]
    timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    match run(args).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::from(2)
        },
    }
}

async fn run(args: Args) -> Result<bool, CliError> {
    // Loaded once per process; the protocol layer receives it as a value.
    let secret = load_secret(args.secret_file.as_deref())?;

    tracing::info!(url = %args.url, "connecting");
    let transport = WsTransport::connect(&args.url).await.map_err(ClientError::from)?;

    let mut config = SessionConfig::new(secret);
    config.recv_timeout = Duration::from_secs(args.timeout_secs);

    let mut session = Session::establish(transport, config).await?;
    let result = match session.call(&args.request).await {
        Ok(result) => result,
        Err(err) => {
            // Release the connection before surfacing the failure.
            let _ = session.close().await;
            return Err(err.into());
        },
    };

    if result.success {
        tracing::info!(request = %args.request, "operation succeeded");
    } else {
        tracing::warn!(request = %args.request, "server reported failure");
    }
    if !result.data.is_empty() {
        tracing::info!(data = %serde_json::Value::Object(result.data.clone()), "response data");
    }

    session.close().await.map_err(CliError::from)?;
    Ok(result.success)
}
