use std::{fs, path::Path};

use anyhow::{Context, Result};
use ethers::{abi::Abi, contract::abigen, types::Bytes};
use serde::Deserialize;

pub const TOKEN_DECIMALS: u32 = 9;

abigen!(
    APOLLUMIA,
    r#"[
        function totalSupply() external view returns (uint256)
        function tradingOpen() external view returns (bool)
        function openTrading() external
    ]"#
);

/// Compiled contract bundle in the hardhat/solc artifact layout. The ABI and
/// creation bytecode are all the deployment path needs; other fields are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractArtifact {
    pub abi: Abi,
    pub bytecode: Bytes,
}

impl ContractArtifact {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read contract artifact {}", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("failed to parse contract artifact {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::ContractArtifact;

    const ARTIFACT: &str = r#"{
        "contractName": "APOLLUMIA",
        "abi": [
            {
                "inputs": [],
                "name": "totalSupply",
                "outputs": [{ "internalType": "uint256", "name": "", "type": "uint256" }],
                "stateMutability": "view",
                "type": "function"
            },
            {
                "inputs": [],
                "name": "openTrading",
                "outputs": [],
                "stateMutability": "nonpayable",
                "type": "function"
            }
        ],
        "bytecode": "0x60806040526000600c55"
    }"#;

    #[test]
    fn parses_hardhat_style_artifact() {
        let artifact = ContractArtifact::from_json(ARTIFACT).unwrap();
        assert!(artifact.abi.function("totalSupply").is_ok());
        assert!(artifact.abi.function("openTrading").is_ok());
        assert!(!artifact.bytecode.is_empty());
    }

    #[test]
    fn rejects_artifact_without_bytecode() {
        assert!(ContractArtifact::from_json(r#"{ "abi": [] }"#).is_err());
    }
}
