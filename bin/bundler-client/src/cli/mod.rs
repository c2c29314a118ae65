use crate::utils::run_until_ctrl_c;
use bundler_client_rpc::connect_with_config;
use clap::{value_parser, Parser};
use tracing::debug;

pub mod args;
pub mod commands;

/// The bundler client CLI interface
#[derive(Debug, Parser)]
#[command(author, version, about = "ERC-4337 bundler JSON-RPC client", long_about = None)]
pub struct Cli {
    /// The command to execute
    #[clap(subcommand)]
    command: commands::Commands,

    /// Bundler connection args
    #[clap(flatten)]
    client: args::ClientArgs,

    /// The verbosity level
    #[clap(long, short, global = true, default_value_t = 2, value_parser = value_parser!(u8).range(..=4))]
    verbosity: u8,
}

impl Cli {
    /// Get the log level based on the verbosity level
    pub fn get_log_level(&self) -> String {
        match self.verbosity {
            0 => "error",
            1 => "warn",
            2 => "info",
            3 => "debug",
            _ => "trace",
        }
        .into()
    }
}

pub fn run() -> eyre::Result<()> {
    let cli = Cli::parse();

    let rust_log = match std::env::var("RUST_LOG") {
        Ok(val) => format!("{val},bundler_client={}", cli.get_log_level()),
        Err(_) => format!("bundler_client={}", cli.get_log_level()),
    };
    // stdout carries the command output
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(rust_log))
        .with_writer(std::io::stderr)
        .init();

    let rt = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
    rt.block_on(run_until_ctrl_c(execute(cli)))
}

async fn execute(cli: Cli) -> eyre::Result<()> {
    let client = connect_with_config(&cli.client.rpc_url, &cli.client.client_config()).await?;

    debug!(command = ?cli.command, "Executing command");
    cli.command.execute(&*client, cli.client.entry_point).await
}
