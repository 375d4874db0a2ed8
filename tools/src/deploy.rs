use std::{path::Path, sync::Arc};

use anyhow::Result;
use ethers::{contract::ContractFactory, signers::Signer};
use tokio::time::timeout;

use crate::{
    config::NetworkConfig,
    contracts::ContractArtifact,
    error::ChainError,
    manifest::DeploymentManifest,
    utils::{connect, Client, CONFIRMATION_WAIT},
};

pub struct Deploy {
    client: Arc<Client>,
    config: NetworkConfig,
}

impl Deploy {
    pub async fn new(config: NetworkConfig) -> Result<Self> {
        let client = connect(&config).await?;
        Ok(Self { client, config })
    }

    pub async fn run(&self, artifact_path: &Path, manifest_dir: &Path) -> Result<()> {
        let artifact = ContractArtifact::load(artifact_path)?;

        println!("Deploying APOLLUMIA token...");
        let factory = ContractFactory::new(artifact.abi, artifact.bytecode, self.client.clone());
        let deployer = factory
            .deploy(())
            .map_err(|e| ChainError::Submission(e.to_string()))?;
        let (contract, receipt) = timeout(CONFIRMATION_WAIT, deployer.send_with_receipt())
            .await
            .map_err(|_| {
                ChainError::ConfirmationTimeout(format!(
                    "deployment not mined within {}s",
                    CONFIRMATION_WAIT.as_secs()
                ))
            })?
            .map_err(|e| ChainError::Submission(e.to_string()))?;

        println!("APOLLUMIA deployed to: {:?}", contract.address());
        if let Some(explorer) = self.config.network.explorer() {
            println!("Explorer: {}/address/{:?}", explorer, contract.address());
        }
        if self.config.etherscan_api_key.is_some() {
            log::debug!("etherscan api key loaded, source verification is available");
        }

        let manifest = DeploymentManifest {
            network: self.config.network.to_string(),
            chain_id: self.client.signer().chain_id(),
            address: contract.address(),
            transaction: Some(receipt.transaction_hash),
        };
        let path = DeploymentManifest::path_for(manifest_dir, self.config.network);
        manifest.write(&path)?;
        println!("Deployment manifest written to {}", path.display());

        Ok(())
    }
}
