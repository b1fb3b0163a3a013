mod commands;
mod http;
mod store;

use std::path::PathBuf;

use authflow::Session;
use clap::Parser;

use crate::commands::Command;
use crate::http::{DEFAULT_BACKEND_URL, ReqwestAuthApi};
use crate::store::FileTokenStore;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Alert(String),
    #[error("not logged in; run `login` first")]
    NotLoggedIn,
    #[error("the server rejected the stored token; it was cleared, log in again")]
    TokenRejected,
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "gatehouse-cli", about = "Sign up, log in and read the private page from a terminal")]
struct Cli {
    #[arg(long, env = "BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    backend_url: String,

    /// Directory holding the `jwt_token` file. Defaults to `~/.gatehouse`.
    #[arg(long, env = "GATEHOUSE_STATE_DIR")]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let state_dir = cli.state_dir.unwrap_or_else(store::default_state_dir);
    tracing::debug!(backend = %cli.backend_url, state_dir = %state_dir.display(), "starting");

    let session = Session::new(FileTokenStore::new(state_dir), ReqwestAuthApi::new(&cli.backend_url)?);
    let output = commands::run(&session, cli.command).await?;
    println!("{output}");
    Ok(())
}
