//! `neo-cli`: dry-run contract calls and build deploy transactions against a
//! Neo N3 node.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use neo_config::{ClientConfig, LogFormat, LoggingSettings, NetworkType};
use neo_rpc::{ContractClient, RpcClientBuilder};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "neo-cli", version, about = "Neo N3 contract client")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, env = "NEO_CLI_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// JSON-RPC endpoint, overrides the configuration file
    #[arg(long, env = "NEO_RPC_URL", global = true)]
    rpc: Option<Url>,

    /// Network: mainnet, testnet or private
    #[arg(long, env = "NEO_NETWORK", global = true)]
    network: Option<NetworkType>,

    /// Basic auth user for the RPC endpoint
    #[arg(long, env = "NEO_RPC_USER", global = true)]
    rpc_user: Option<String>,

    /// Basic auth password for the RPC endpoint
    #[arg(long, env = "NEO_RPC_PASSWORD", hide_env_values = true, global = true)]
    rpc_password: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dry-run a contract method and print the VM result
    Invoke {
        /// Contract script hash (0x-prefixed hex) or address
        #[arg(long)]
        contract: String,

        /// Method name
        #[arg(long)]
        method: String,

        /// Arguments as a JSON array
        #[arg(long)]
        args: Option<String>,
    },

    /// Build a signed deploy transaction
    Deploy {
        /// Raw contract script file (VM bytecode, not a NEF container)
        #[arg(long)]
        script: PathBuf,

        /// Contract manifest JSON file
        #[arg(long)]
        manifest: PathBuf,

        /// WIF of the deploying account
        #[arg(long, env = "NEO_WIF", hide_env_values = true)]
        wif: String,

        /// Send the transaction instead of printing it
        #[arg(long)]
        broadcast: bool,
    },
}

impl Cli {
    /// Configuration file values with command line overrides applied.
    fn resolve_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::load(path)
                .with_context(|| format!("failed to load {}", path.display()))?,
            None => ClientConfig::default(),
        };

        if let Some(network) = self.network {
            config.network = network;
        }
        if let Some(url) = &self.rpc {
            config.rpc.url = Some(url.clone());
        }
        if self.rpc_user.is_some() {
            config.rpc.user = self.rpc_user.clone();
        }
        if self.rpc_password.is_some() {
            config.rpc.password = self.rpc_password.clone();
        }
        config.validate().context("invalid configuration")?;
        Ok(config)
    }

    /// Where the configuration came from, for the startup log line.
    fn config_source(&self) -> String {
        self.config
            .as_ref()
            .map_or_else(|| "defaults".to_string(), |path| path.display().to_string())
    }
}

fn init_tracing(settings: &LoggingSettings) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .context("invalid log filter")?;
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    match settings.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
    Ok(())
}

fn connect(config: &ClientConfig) -> Result<ContractClient> {
    let url = config.rpc_url()?;
    let rpc = RpcClientBuilder::from_settings(url, &config.rpc)
        .protocol_settings(config.protocol_settings())
        .build()
        .context("failed to create RPC client")?;
    debug!(url = %rpc.url(), network = rpc.protocol_settings().network, "connected");
    Ok(ContractClient::new(Arc::new(rpc)))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    init_tracing(&config.logging)?;
    debug!(
        source = %cli.config_source(),
        network = %config.network,
        "loaded client configuration"
    );

    let client = connect(&config)?;
    let output = match &cli.command {
        Command::Invoke {
            contract,
            method,
            args,
        } => {
            let hash = commands::parse_script_hash(contract, &config.protocol_settings())?;
            commands::invoke::execute(&client, &hash, method, args.as_deref()).await?
        }
        Command::Deploy {
            script,
            manifest,
            wif,
            broadcast,
        } => {
            let address_version = config.protocol_settings().address_version;
            commands::deploy::execute(&client, script, manifest, wif, *broadcast, address_version)
                .await?
        }
    };
    println!("{output}");
    Ok(())
}
