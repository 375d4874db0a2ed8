use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ethers::types::H160;

use crate::{
    config::{Env, Network, NetworkConfig},
    deploy::Deploy,
    interact::Interact,
    manifest,
};

#[derive(Debug, Parser)]
pub struct CommandLine {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Deploy the APOLLUMIA token contract and record its address
    Deploy {
        #[clap(short, long, value_enum, default_value_t = Network::Hardhat)]
        network: Network,

        /// Compiled contract artifact (ABI + creation bytecode)
        #[clap(short, long, default_value = "artifacts/APOLLUMIA.json")]
        artifact: PathBuf,

        #[clap(short, long, default_value = "deployments")]
        manifest_dir: PathBuf,
    },
    /// Query a deployed contract and open trading if it is closed
    Interact {
        #[clap(short, long, value_enum, default_value_t = Network::Hardhat)]
        network: Network,

        /// Contract address; defaults to the recorded deployment manifest
        #[clap(short, long)]
        address: Option<H160>,

        #[clap(short, long, default_value = "deployments")]
        manifest_dir: PathBuf,
    },
}

impl CommandLine {
    pub async fn execute(self) -> Result<()> {
        let env = Env::load();
        match self.command {
            Command::Deploy {
                network,
                artifact,
                manifest_dir,
            } => {
                let config = NetworkConfig::resolve(network, &env);
                let deploy = Deploy::new(config).await?;
                deploy.run(&artifact, &manifest_dir).await
            }
            Command::Interact {
                network,
                address,
                manifest_dir,
            } => {
                let config = NetworkConfig::resolve(network, &env);
                let address = manifest::resolve_address(address, &manifest_dir, network)?;
                let interact = Interact::new(config).await?;
                interact.run(address).await
            }
        }
    }
}
