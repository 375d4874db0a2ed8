use std::{sync::Arc, time::Duration};

use ethers::{
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
    types::{TransactionReceipt, H256, U256},
    utils::{format_units, hex},
};
use tokio::time::{sleep, Instant};

use crate::{config::NetworkConfig, contracts::TOKEN_DECIMALS, error::ChainError};

pub type Client = SignerMiddleware<Provider<Http>, LocalWallet>;

pub const CONFIRMATION_WAIT: Duration = Duration::from_secs(180);
const POLL_INTERVAL: Duration = Duration::from_secs(1);

pub async fn connect(config: &NetworkConfig) -> Result<Arc<Client>, ChainError> {
    if config.rpc_url.is_empty() {
        return Err(ChainError::Submission(format!(
            "no rpc endpoint configured for {}",
            config.network
        )));
    }
    let sk = config.accounts.first().ok_or_else(|| {
        ChainError::Submission(format!(
            "no signing credential configured for {}",
            config.network
        ))
    })?;

    let wallet = hex::decode(sk.strip_prefix("0x").unwrap_or(sk))
        .map_err(|e| ChainError::Submission(format!("invalid signing credential: {e}")))
        .and_then(|bytes| {
            LocalWallet::from_bytes(&bytes)
                .map_err(|e| ChainError::Submission(format!("invalid signing credential: {e}")))
        })?;
    let provider = Provider::<Http>::try_from(config.rpc_url.as_str())
        .map_err(|e| ChainError::Submission(format!("invalid rpc endpoint: {e}")))?;
    let chain_id = provider
        .get_chainid()
        .await
        .map_err(|e| ChainError::Submission(format!("rpc endpoint unreachable: {e}")))?;

    Ok(Arc::new(SignerMiddleware::new(
        provider,
        wallet.with_chain_id(chain_id.as_u64()),
    )))
}

pub async fn wait_for_receipt(
    client: Arc<Client>,
    transaction_hash: H256,
) -> Result<TransactionReceipt, ChainError> {
    let deadline = Instant::now() + CONFIRMATION_WAIT;
    loop {
        let receipt = client
            .get_transaction_receipt(transaction_hash)
            .await
            .map_err(|e| ChainError::Submission(format!("rpc endpoint unreachable: {e}")))?;
        if let Some(receipt) = receipt {
            return Ok(receipt);
        }
        if Instant::now() >= deadline {
            return Err(ChainError::ConfirmationTimeout(format!(
                "transaction {transaction_hash:?} not mined within {}s",
                CONFIRMATION_WAIT.as_secs()
            )));
        }
        sleep(POLL_INTERVAL).await;
    }
}

pub fn format_token_amount(raw: U256) -> Result<String, ChainError> {
    format_units(raw, TOKEN_DECIMALS)
        .map_err(|e| ChainError::Read(format!("supply formatting failed: {e}")))
}

#[cfg(test)]
mod tests {
    use ethers::{types::U256, utils::parse_units};

    use super::format_token_amount;
    use crate::contracts::TOKEN_DECIMALS;

    #[test]
    fn formats_with_nine_decimals() {
        assert_eq!(
            format_token_amount(U256::from(1_000_000_000u64)).unwrap(),
            "1.000000000"
        );
        assert_eq!(
            format_token_amount(U256::from(123_456_789u64)).unwrap(),
            "0.123456789"
        );
        assert_eq!(format_token_amount(U256::zero()).unwrap(), "0.000000000");
    }

    #[test]
    fn formatted_supply_round_trips() {
        let raw = U256::from(420_690_000_000_000_000u64);
        let formatted = format_token_amount(raw).unwrap();
        let parsed = U256::from(parse_units(&formatted, TOKEN_DECIMALS).unwrap());
        assert_eq!(parsed, raw);
    }
}
