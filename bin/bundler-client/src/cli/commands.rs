use crate::utils::{print_json, read_json};
use bundler_client_primitives::{BundlingMode, StateOverride, UserOperation, UserOperationHash};
use bundler_client_rpc::{BundlerApi, DebugApi, EthApi};
use clap::{Parser, Subcommand};
use ethers::types::Address;
use expanded_pathbuf::ExpandedPathBuf;

/// Submit a user operation to the bundler
#[derive(Debug, Parser)]
pub struct SendUserOperationCommand {
    /// JSON file holding the user operation
    #[clap(long)]
    user_operation: ExpandedPathBuf,
}

impl SendUserOperationCommand {
    /// Execute the command
    pub async fn execute(self, client: &dyn BundlerApi, entry_point: Address) -> eyre::Result<()> {
        let uo: UserOperation = read_json(&self.user_operation)?;
        let hash = client.send_user_operation(&uo, entry_point).await?;
        print_json(&hash)
    }
}

/// Estimate the gas limits of a user operation
#[derive(Debug, Parser)]
pub struct EstimateUserOperationGasCommand {
    /// JSON file holding the user operation
    #[clap(long)]
    user_operation: ExpandedPathBuf,

    /// JSON file holding account state overrides, keyed by address
    #[clap(long)]
    state_overrides: Option<ExpandedPathBuf>,
}

impl EstimateUserOperationGasCommand {
    /// Execute the command
    pub async fn execute(self, client: &dyn BundlerApi, entry_point: Address) -> eyre::Result<()> {
        let uo: UserOperation = read_json(&self.user_operation)?;

        let estimation = match self.state_overrides {
            Some(path) => {
                let overrides: StateOverride = read_json(&path)?;
                client.estimate_user_operation_gas_with_overrides(&uo, entry_point, &overrides).await?
            }
            None => client.estimate_user_operation_gas(&uo, entry_point).await?,
        };
        print_json(&estimation)
    }
}

/// Commands to be executed
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the chain ID of the bundler
    #[command(name = "chain-id")]
    ChainId,

    /// List the entry points supported by the bundler
    #[command(name = "supported-entry-points")]
    SupportedEntryPoints,

    /// Submit a user operation to the bundler
    #[command(name = "send-user-operation")]
    SendUserOperation(SendUserOperationCommand),

    /// Estimate the gas limits of a user operation
    #[command(name = "estimate-user-operation-gas")]
    EstimateUserOperationGas(EstimateUserOperationGasCommand),

    /// Print the receipt of a user operation
    #[command(name = "get-user-operation-receipt")]
    GetUserOperationReceipt {
        /// User operation hash
        hash: UserOperationHash,
    },

    /// Print a user operation with its inclusion data
    #[command(name = "get-user-operation-by-hash")]
    GetUserOperationByHash {
        /// User operation hash
        hash: UserOperationHash,
    },

    /// Clear the bundler mempool and reputation
    #[command(name = "clear-state")]
    ClearState,

    /// Print the user operations in the bundler mempool for the entry point
    #[command(name = "dump-mempool")]
    DumpMempool,

    /// Make the bundler send a bundle right away
    #[command(name = "send-bundle-now")]
    SendBundleNow,

    /// Switch the bundler between automatic and manual bundling
    #[command(name = "set-bundling-mode")]
    SetBundlingMode {
        /// Bundling mode (auto, manual or a bundler-specific mode)
        mode: BundlingMode,
    },
}

impl Commands {
    /// Execute the command against `client`, printing the result as JSON
    pub async fn execute(self, client: &dyn BundlerApi, entry_point: Address) -> eyre::Result<()> {
        match self {
            Commands::ChainId => print_json(&client.chain_id().await?),
            Commands::SupportedEntryPoints => print_json(&client.supported_entry_points().await?),
            Commands::SendUserOperation(command) => command.execute(client, entry_point).await,
            Commands::EstimateUserOperationGas(command) => {
                command.execute(client, entry_point).await
            }
            Commands::GetUserOperationReceipt { hash } => {
                print_json(&client.get_user_operation_receipt(hash).await?)
            }
            Commands::GetUserOperationByHash { hash } => {
                print_json(&client.get_user_operation_by_hash(hash).await?)
            }
            Commands::ClearState => print_json(&client.clear_state().await?),
            Commands::DumpMempool => print_json(&client.dump_mempool(entry_point).await?),
            Commands::SendBundleNow => print_json(&client.send_bundle_now().await?),
            Commands::SetBundlingMode { mode } => {
                print_json(&client.set_bundling_mode(mode).await?)
            }
        }
    }
}
