/// Swap context resolution
///
/// Gathers the six addresses the encoder needs into one immutable bundle:
/// program id, payer, mint, vault PDA, and both associated token
/// accounts. Resolution happens once, in a fixed order, before any
/// instruction is built. The encoder never resolves anything itself.

use crate::config::Config;
use crate::constants::VAULT_SEED;
use crate::errors::ClientError;
use crate::logger::{ log, LogTag };
use crate::program::check_program;
use crate::rpc::{ parse_pubkey, RpcClient };

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use solana_sdk::transaction::Transaction;
use spl_associated_token_account::get_associated_token_address;
use spl_associated_token_account::instruction::create_associated_token_account_idempotent;

/// Everything the instruction encoder needs, fully resolved
pub struct SwapContext {
    pub program_id: Pubkey,
    pub payer: Keypair,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub vault_token_account: Pubkey,
    pub payer_token_account: Pubkey,
}

/// Derives the vault PDA from the fixed seed and the mint
pub fn derive_vault(mint: &Pubkey, program_id: &Pubkey) -> Pubkey {
    let (vault, _bump) = Pubkey::find_program_address(&[VAULT_SEED, mint.as_ref()], program_id);
    vault
}

/// Returns the owner's associated token account for the mint, creating
/// it on-chain when it does not exist yet
pub async fn ensure_token_account(
    rpc: &RpcClient,
    payer: &Keypair,
    owner: &Pubkey,
    mint: &Pubkey
) -> Result<Pubkey, ClientError> {
    let token_account = get_associated_token_address(owner, mint);

    if rpc.get_account_optional(&token_account).await?.is_some() {
        log(
            LogTag::Wallet,
            "ATA",
            &format!("Token account {} already exists for owner {}", token_account, owner)
        );
        return Ok(token_account);
    }

    log(
        LogTag::Wallet,
        "ATA",
        &format!("Creating token account {} for owner {}", token_account, owner)
    );

    let instruction = create_associated_token_account_idempotent(
        &payer.pubkey(),
        owner,
        mint,
        &spl_token::id()
    );

    let blockhash = rpc.get_latest_blockhash().await?;
    let transaction = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&payer.pubkey()),
        &[payer],
        blockhash
    );

    let signature = rpc.send_transaction(&transaction).await?;
    rpc.wait_for_confirmation(&signature).await?;

    Ok(token_account)
}

/// Resolves the full context in the fixed setup order: mint, payer token
/// account, program id, vault PDA, vault token account
pub async fn resolve(
    rpc: &RpcClient,
    config: &Config,
    payer: Keypair
) -> Result<SwapContext, ClientError> {
    let mint = parse_pubkey(&config.mint_address)?;
    log(LogTag::System, "MINT", &format!("Using mint {}", mint));

    let payer_token_account = ensure_token_account(rpc, &payer, &payer.pubkey(), &mint).await?;

    let program_id = check_program(rpc, config).await?;

    let vault = derive_vault(&mint, &program_id);
    log(LogTag::System, "VAULT", &format!("Vault: {}", vault));

    let vault_token_account = ensure_token_account(rpc, &payer, &vault, &mint).await?;

    Ok(SwapContext {
        program_id,
        payer,
        mint,
        vault,
        vault_token_account,
        payer_token_account,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_vault_is_deterministic() {
        let mint = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();

        let first = derive_vault(&mint, &program_id);
        let second = derive_vault(&mint, &program_id);
        assert_eq!(first, second);
    }

    #[test]
    fn test_derive_vault_depends_on_mint_and_program() {
        let mint = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();

        let vault = derive_vault(&mint, &program_id);
        assert_ne!(vault, derive_vault(&Pubkey::new_unique(), &program_id));
        assert_ne!(vault, derive_vault(&mint, &Pubkey::new_unique()));
    }

    #[test]
    fn test_derive_vault_matches_manual_derivation() {
        let mint = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();

        let (expected, _bump) =
            Pubkey::find_program_address(&[b"vault", mint.as_ref()], &program_id);
        assert_eq!(derive_vault(&mint, &program_id), expected);
    }
}
