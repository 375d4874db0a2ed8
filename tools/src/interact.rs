use std::sync::Arc;

use anyhow::Result;
use ethers::{
    providers::Middleware,
    types::{H160, U64},
};

use crate::{
    config::NetworkConfig,
    contracts::APOLLUMIA,
    error::ChainError,
    utils::{connect, format_token_amount, wait_for_receipt, Client},
};

pub struct Interact {
    client: Arc<Client>,
}

impl Interact {
    pub async fn new(config: NetworkConfig) -> Result<Self> {
        let client = connect(&config).await?;
        Ok(Self { client })
    }

    pub async fn run(&self, address: H160) -> Result<()> {
        let code = self
            .client
            .get_code(address, None)
            .await
            .map_err(|e| ChainError::Read(e.to_string()))?;
        if code.is_empty() {
            return Err(ChainError::Read(format!("no contract code at {address:?}")).into());
        }

        let token = APOLLUMIA::new(address, self.client.clone());

        let total_supply = token
            .total_supply()
            .call()
            .await
            .map_err(|e| ChainError::Read(e.to_string()))?;
        println!(
            "Total Supply: {} APOLLUMIA",
            format_token_amount(total_supply)?
        );

        let trading_open = token
            .trading_open()
            .call()
            .await
            .map_err(|e| ChainError::Read(e.to_string()))?;
        println!("Trading Open: {trading_open}");

        if trading_open {
            println!("Trading is already enabled.");
            return Ok(());
        }

        println!("Trading is not open. Attempting to enable it...");
        let transaction_hash = token
            .open_trading()
            .send()
            .await
            .map_err(|e| ChainError::Submission(e.to_string()))?
            .tx_hash();
        log::info!("transaction hash:{:?}", transaction_hash);

        let receipt = wait_for_receipt(self.client.clone(), transaction_hash).await?;
        if receipt.status == Some(U64::zero()) {
            return Err(ChainError::Submission(format!(
                "openTrading transaction {transaction_hash:?} reverted"
            ))
            .into());
        }
        println!("Trading has been successfully enabled.");

        Ok(())
    }
}
