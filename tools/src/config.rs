use std::{env, fmt};

use clap::ValueEnum;
use dotenv::dotenv;

const ALCHEMY_GOERLI_URL_VAR: &str = "ALCHEMY_GOERLI_URL";
const ALCHEMY_MAINNET_URL_VAR: &str = "ALCHEMY_MAINNET_URL";
const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";
const ETHERSCAN_API_KEY_VAR: &str = "ETHERSCAN_API_KEY";

const HARDHAT_RPC_URL: &str = "http://localhost:8545";
// First prefunded account of a stock hardhat/anvil dev node.
const HARDHAT_DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Network {
    Hardhat,
    Goerli,
    Mainnet,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Hardhat => "hardhat",
            Network::Goerli => "goerli",
            Network::Mainnet => "mainnet",
        }
    }

    pub fn explorer(&self) -> Option<&'static str> {
        match self {
            Network::Hardhat => None,
            Network::Goerli => Some("https://goerli.etherscan.io"),
            Network::Mainnet => Some("https://etherscan.io"),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the process environment, taken once at startup.
#[derive(Debug, Default)]
pub struct Env {
    pub alchemy_goerli_url: Option<String>,
    pub alchemy_mainnet_url: Option<String>,
    pub private_key: Option<String>,
    pub etherscan_api_key: Option<String>,
}

impl Env {
    pub fn load() -> Self {
        dotenv().ok();
        Self {
            alchemy_goerli_url: env::var(ALCHEMY_GOERLI_URL_VAR).ok(),
            alchemy_mainnet_url: env::var(ALCHEMY_MAINNET_URL_VAR).ok(),
            private_key: env::var(PRIVATE_KEY_VAR).ok(),
            etherscan_api_key: env::var(ETHERSCAN_API_KEY_VAR).ok(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NetworkConfig {
    pub network: Network,
    pub rpc_url: String,
    pub accounts: Vec<String>,
    pub etherscan_api_key: Option<String>,
}

impl NetworkConfig {
    /// Select a network profile. An unset endpoint resolves to an empty URL
    /// and an unset key to an empty account list; both fail at submission
    /// time rather than here, except on hardhat where the stock dev key
    /// applies.
    pub fn resolve(network: Network, env: &Env) -> Self {
        let (rpc_url, accounts) = match network {
            Network::Hardhat => (
                HARDHAT_RPC_URL.to_string(),
                vec![env
                    .private_key
                    .clone()
                    .unwrap_or_else(|| HARDHAT_DEV_KEY.to_string())],
            ),
            Network::Goerli => (
                env.alchemy_goerli_url.clone().unwrap_or_default(),
                env.private_key.clone().into_iter().collect(),
            ),
            Network::Mainnet => (
                env.alchemy_mainnet_url.clone().unwrap_or_default(),
                env.private_key.clone().into_iter().collect(),
            ),
        };

        Self {
            network,
            rpc_url,
            accounts,
            etherscan_api_key: env.etherscan_api_key.clone(),
        }
    }
}
