use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};
use ethers::types::{H160, H256};
use serde::{Deserialize, Serialize};

use crate::config::Network;

/// Record of a completed deployment, one file per network. Written by the
/// deploy command and consulted by interact when no address is passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentManifest {
    pub network: String,
    pub chain_id: u64,
    pub address: H160,
    pub transaction: Option<H256>,
}

impl DeploymentManifest {
    pub fn path_for(dir: &Path, network: Network) -> PathBuf {
        dir.join(format!("{network}.json"))
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create manifest directory {}", parent.display())
            })?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)
            .with_context(|| format!("failed to write deployment manifest {}", path.display()))
    }

    pub fn read(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read deployment manifest {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse deployment manifest {}", path.display()))
    }
}

pub fn resolve_address(
    address: Option<H160>,
    manifest_dir: &Path,
    network: Network,
) -> Result<H160> {
    if let Some(address) = address {
        return Ok(address);
    }
    let path = DeploymentManifest::path_for(manifest_dir, network);
    if !path.exists() {
        return Err(anyhow!(
            "no deployment manifest for {network} at {}; deploy first or pass --address",
            path.display()
        ));
    }
    Ok(DeploymentManifest::read(&path)?.address)
}

#[cfg(test)]
mod tests {
    use ethers::types::H160;
    use tempfile::TempDir;

    use super::{resolve_address, DeploymentManifest};
    use crate::config::Network;

    fn sample() -> DeploymentManifest {
        DeploymentManifest {
            network: Network::Hardhat.to_string(),
            chain_id: 31337,
            address: H160::repeat_byte(0x42),
            transaction: None,
        }
    }

    #[test]
    fn manifest_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = DeploymentManifest::path_for(dir.path(), Network::Hardhat);
        let manifest = sample();
        manifest.write(&path).unwrap();
        assert_eq!(DeploymentManifest::read(&path).unwrap(), manifest);
    }

    #[test]
    fn explicit_address_wins_over_manifest() {
        let dir = TempDir::new().unwrap();
        sample()
            .write(&DeploymentManifest::path_for(dir.path(), Network::Hardhat))
            .unwrap();
        let explicit = H160::repeat_byte(0x07);
        let resolved = resolve_address(Some(explicit), dir.path(), Network::Hardhat).unwrap();
        assert_eq!(resolved, explicit);
    }

    #[test]
    fn manifest_supplies_address_when_flag_is_absent() {
        let dir = TempDir::new().unwrap();
        sample()
            .write(&DeploymentManifest::path_for(dir.path(), Network::Hardhat))
            .unwrap();
        let resolved = resolve_address(None, dir.path(), Network::Hardhat).unwrap();
        assert_eq!(resolved, H160::repeat_byte(0x42));
    }

    #[test]
    fn missing_manifest_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = resolve_address(None, dir.path(), Network::Goerli).unwrap_err();
        assert!(err.to_string().contains("--address"));
    }
}
