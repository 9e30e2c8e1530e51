/// Payer wallet handling: keypair parsing and fee funding
///
/// The payer is loaded from `main_wallet_private` in the config, which
/// accepts either a base58 string or a JSON-style byte array. Funding is
/// a single airdrop-if-underfunded check against a fixed fee budget.

use crate::constants::{ FEE_EXTRA_LAMPORTS, FEE_SIGNATURE_BUDGET, LAMPORTS_PER_SIGNATURE };
use crate::config::Config;
use crate::errors::ClientError;
use crate::logger::{ log, LogTag };
use crate::rpc::{ lamports_to_sol, RpcClient };

use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;

/// Parses a private key string in either supported format
pub fn parse_private_key(private_key: &str) -> Result<Keypair, ClientError> {
    let bytes = if private_key.starts_with('[') && private_key.ends_with(']') {
        // Handle array format like [1,2,3,4,...]
        let inner = private_key.trim_start_matches('[').trim_end_matches(']');
        inner
            .split(',')
            .map(|s| s.trim().parse::<u8>())
            .collect::<Result<Vec<u8>, _>>()
            .map_err(|e| {
                ClientError::KeypairError(format!("Failed to parse private key array: {}", e))
            })?
    } else {
        // Handle base58 format
        bs58
            ::decode(private_key)
            .into_vec()
            .map_err(|e| ClientError::KeypairError(format!("Invalid base58 private key: {}", e)))?
    };

    if bytes.len() != 64 {
        return Err(
            ClientError::KeypairError(
                format!("Invalid private key length: expected 64 bytes, got {}", bytes.len())
            )
        );
    }

    Keypair::try_from(&bytes[..]).map_err(|e| {
        ClientError::KeypairError(format!("Failed to create keypair: {}", e))
    })
}

/// Load the payer keypair from the config
pub fn load_payer(config: &Config) -> Result<Keypair, ClientError> {
    let payer = parse_private_key(&config.main_wallet_private)?;
    log(LogTag::Wallet, "LOADED", &format!("Payer wallet: {}", payer.pubkey()));
    Ok(payer)
}

/// Fee budget the payer must hold before any instruction is submitted
pub fn fee_budget_lamports() -> u64 {
    LAMPORTS_PER_SIGNATURE * FEE_SIGNATURE_BUDGET + FEE_EXTRA_LAMPORTS
}

/// Checks the payer balance and requests a top-up airdrop when it sits
/// below the fee budget. Returns the final balance in lamports.
pub async fn ensure_funded(rpc: &RpcClient, payer: &Keypair) -> Result<u64, ClientError> {
    let pubkey = payer.pubkey();
    let budget = fee_budget_lamports();
    let mut balance = rpc.get_balance(&pubkey).await?;

    log(
        LogTag::Wallet,
        "BALANCE",
        &format!("Current SOL is {:.6}", lamports_to_sol(balance))
    );

    if balance < budget {
        let shortfall = budget - balance;
        log(
            LogTag::Wallet,
            "AIRDROP",
            &format!("Requesting airdrop of {:.6} SOL", lamports_to_sol(shortfall))
        );

        let signature = rpc.request_airdrop(&pubkey, shortfall).await?;
        rpc
            .wait_for_confirmation(&signature.to_string()).await
            .map_err(|e| ClientError::AirdropFailed(format!("Airdrop not confirmed: {}", e)))?;

        balance = rpc.get_balance(&pubkey).await?;
    }

    log(
        LogTag::Wallet,
        "FUNDED",
        &format!(
            "Using account {} containing {:.6} SOL to pay for fees",
            pubkey,
            lamports_to_sol(balance)
        )
    );

    Ok(balance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base58_private_key() {
        let keypair = Keypair::new();
        let encoded = bs58::encode(keypair.to_bytes()).into_string();

        let parsed = parse_private_key(&encoded).unwrap();
        assert_eq!(parsed.pubkey(), keypair.pubkey());
    }

    #[test]
    fn test_parse_array_private_key() {
        let keypair = Keypair::new();
        let formatted = format!(
            "[{}]",
            keypair
                .to_bytes()
                .iter()
                .map(|b| b.to_string())
                .collect::<Vec<_>>()
                .join(",")
        );

        let parsed = parse_private_key(&formatted).unwrap();
        assert_eq!(parsed.pubkey(), keypair.pubkey());
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        let err = parse_private_key("[1,2,3]").unwrap_err();
        assert!(err.to_string().contains("expected 64 bytes"));
    }

    #[test]
    fn test_fee_budget_covers_signature_headroom() {
        assert_eq!(
            fee_budget_lamports(),
            LAMPORTS_PER_SIGNATURE * FEE_SIGNATURE_BUDGET + FEE_EXTRA_LAMPORTS
        );
    }
}
