/// Centralized RPC client for the token tracing client
///
/// Wraps the Solana RPC client so every module shares one connection and
/// one set of confirmation rules. Transactions are submitted over raw
/// JSON-RPC so the request parameters stay explicit.

use crate::arguments::is_debug_rpc_enabled;
use crate::config::Config;
use crate::constants::{
    LAMPORTS_PER_SOL,
    TRANSACTION_CONFIRMATION_MAX_ATTEMPTS,
    TRANSACTION_CONFIRMATION_RETRY_DELAY_MS,
};
use crate::errors::ClientError;
use crate::logger::{ log, LogTag };

use base64::{ engine::general_purpose, Engine as _ };
use once_cell::sync::OnceCell;
use solana_client::rpc_client::RpcClient as SolanaRpcClient;
use solana_sdk::{
    account::Account,
    commitment_config::CommitmentConfig,
    hash::Hash,
    pubkey::Pubkey,
    signature::Signature,
    transaction::Transaction,
};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Converts lamports to SOL
pub fn lamports_to_sol(lamports: u64) -> f64 {
    (lamports as f64) / (LAMPORTS_PER_SOL as f64)
}

/// Converts SOL to lamports
pub fn sol_to_lamports(sol_amount: f64) -> u64 {
    (sol_amount * (LAMPORTS_PER_SOL as f64)) as u64
}

/// Parse string to Pubkey
pub fn parse_pubkey(address: &str) -> Result<Pubkey, ClientError> {
    Pubkey::from_str(address)
        .map_err(|e| ClientError::ParseError(format!("Invalid pubkey '{}': {}", address, e)))
}

/// Shared RPC client with a fixed commitment level
pub struct RpcClient {
    client: Arc<SolanaRpcClient>,
    url: String,
}

impl RpcClient {
    pub fn new_with_url(rpc_url: &str) -> Self {
        let client = SolanaRpcClient::new_with_commitment(
            rpc_url.to_string(),
            CommitmentConfig::confirmed()
        );
        Self {
            client: Arc::new(client),
            url: rpc_url.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new_with_url(&config.rpc_url)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Queries the node version to prove the endpoint is reachable
    pub async fn establish_connection(&self) -> Result<(), ClientError> {
        let version = self.client
            .get_version()
            .map_err(|e| ClientError::RpcError(format!("Failed to query node version: {}", e)))?;

        log(
            LogTag::Rpc,
            "CONNECTED",
            &format!("Connection to cluster established: {} (core {})", self.url, version.solana_core)
        );
        Ok(())
    }

    /// Wallet balance in lamports
    pub async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64, ClientError> {
        self.client
            .get_balance(pubkey)
            .map_err(|e| ClientError::RpcError(format!("Failed to get balance for {}: {}", pubkey, e)))
    }

    /// Requests an airdrop and returns its signature without waiting
    pub async fn request_airdrop(
        &self,
        pubkey: &Pubkey,
        lamports: u64
    ) -> Result<Signature, ClientError> {
        self.client
            .request_airdrop(pubkey, lamports)
            .map_err(|e| ClientError::AirdropFailed(format!("Airdrop request rejected: {}", e)))
    }

    /// Fetches an account, returning None when it does not exist
    pub async fn get_account_optional(
        &self,
        pubkey: &Pubkey
    ) -> Result<Option<Account>, ClientError> {
        let response = self.client
            .get_account_with_commitment(pubkey, CommitmentConfig::confirmed())
            .map_err(|e| ClientError::RpcError(format!("Failed to fetch account {}: {}", pubkey, e)))?;
        Ok(response.value)
    }

    pub async fn get_latest_blockhash(&self) -> Result<Hash, ClientError> {
        self.client
            .get_latest_blockhash()
            .map_err(|e| ClientError::RpcError(format!("Failed to get latest blockhash: {}", e)))
    }

    /// Submits a signed transaction over raw JSON-RPC and returns its signature
    pub async fn send_transaction(&self, transaction: &Transaction) -> Result<String, ClientError> {
        let serialized_tx = bincode
            ::serialize(transaction)
            .map_err(|e|
                ClientError::TransactionError(format!("Failed to serialize transaction: {}", e))
            )?;

        let tx_base64 = general_purpose::STANDARD.encode(&serialized_tx);

        let rpc_payload =
            serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "sendTransaction",
            "params": [
                tx_base64,
                {
                    "encoding": "base64",
                    "skipPreflight": false,
                    "preflightCommitment": "processed"
                }
            ]
        });

        if is_debug_rpc_enabled() {
            log(
                LogTag::Rpc,
                "DEBUG",
                &format!("Submitting transaction ({} bytes serialized)", serialized_tx.len())
            );
        }

        let client = reqwest::Client::new();
        let response = client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(&rpc_payload)
            .send().await?;

        if !response.status().is_success() {
            return Err(
                ClientError::TransactionError(
                    format!("sendTransaction returned HTTP {}", response.status())
                )
            );
        }

        let rpc_response: serde_json::Value = response.json().await?;

        if let Some(error) = rpc_response.get("error") {
            let error_msg = error
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("Unknown RPC error");
            return Err(ClientError::TransactionError(format!("RPC error: {}", error_msg)));
        }

        match rpc_response.get("result").and_then(|r| r.as_str()) {
            Some(signature) => {
                log(LogTag::Rpc, "SENT", &format!("Transaction sent: {}", signature));
                Ok(signature.to_string())
            }
            None =>
                Err(
                    ClientError::TransactionError(
                        "sendTransaction response carried no signature".to_string()
                    )
                ),
        }
    }

    /// Polls until the signature reaches confirmed commitment or the
    /// attempt budget runs out
    pub async fn wait_for_confirmation(&self, signature: &str) -> Result<(), ClientError> {
        let signature = Signature::from_str(signature).map_err(|e|
            ClientError::ParseError(format!("Invalid signature '{}': {}", signature, e))
        )?;

        for attempt in 1..=TRANSACTION_CONFIRMATION_MAX_ATTEMPTS {
            let confirmed = self.client
                .confirm_transaction(&signature)
                .map_err(|e| ClientError::RpcError(format!("Confirmation query failed: {}", e)))?;

            if confirmed {
                log(LogTag::Rpc, "CONFIRMED", &format!("Transaction confirmed: {}", signature));
                return Ok(());
            }

            if is_debug_rpc_enabled() {
                log(
                    LogTag::Rpc,
                    "DEBUG",
                    &format!(
                        "Confirmation attempt {}/{} pending",
                        attempt,
                        TRANSACTION_CONFIRMATION_MAX_ATTEMPTS
                    )
                );
            }

            tokio::time::sleep(Duration::from_millis(TRANSACTION_CONFIRMATION_RETRY_DELAY_MS)).await;
        }

        Err(
            ClientError::TransactionError(
                format!(
                    "Transaction {} not confirmed after {} attempts",
                    signature,
                    TRANSACTION_CONFIRMATION_MAX_ATTEMPTS
                )
            )
        )
    }
}

/// Global RPC client shared by all modules
static GLOBAL_RPC_CLIENT: OnceCell<RpcClient> = OnceCell::new();

/// Initialize the global RPC client from the loaded config.
/// Safe to call once; later calls are ignored.
pub fn init_rpc_client(config: &Config) {
    let _ = GLOBAL_RPC_CLIENT.set(RpcClient::from_config(config));
}

/// Get the global RPC client. init_rpc_client must have run first.
pub fn get_rpc_client() -> &'static RpcClient {
    GLOBAL_RPC_CLIENT.get().expect("RPC client not initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rpc_client_creation() {
        let test_url = "https://api.devnet.solana.com";
        let client = RpcClient::new_with_url(test_url);
        assert!(!client.url().is_empty());
        assert_eq!(client.url(), test_url);
    }

    #[test]
    fn test_parse_pubkey() {
        let valid_pubkey = "So11111111111111111111111111111111111111112";
        assert!(parse_pubkey(valid_pubkey).is_ok());

        let invalid_pubkey = "invalid";
        assert!(parse_pubkey(invalid_pubkey).is_err());
    }

    #[test]
    fn test_lamports_conversions() {
        assert_eq!(sol_to_lamports(1.0), LAMPORTS_PER_SOL);
        assert_eq!(lamports_to_sol(LAMPORTS_PER_SOL), 1.0);
        assert_eq!(sol_to_lamports(0.5), LAMPORTS_PER_SOL / 2);
    }
}
