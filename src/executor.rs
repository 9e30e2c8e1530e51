/// Execution orchestration
///
/// Maps the CLI selector to an encoded instruction, wraps it in a
/// single-instruction transaction, and hands it to the RPC layer. The
/// encoder runs exactly once per invocation and there is no retry on
/// submission failure - any error aborts the process.

use crate::arguments::{ is_debug_swap_enabled, is_dry_run_enabled };
use crate::constants::MINT_TO_PAYER_AMOUNT;
use crate::context::SwapContext;
use crate::errors::ClientError;
use crate::instructions::{ encode_initialize, encode_swap, EncodedInstruction };
use crate::logger::{ log, LogTag };
use crate::rpc::get_rpc_client;

use solana_sdk::signer::Signer;
use solana_sdk::transaction::Transaction;

/// Result of one execution attempt. An unrecognized selector is a
/// NotExecuted outcome, not an error - the caller decides whether that
/// is fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Executed {
        signature: Option<String>,
    },
    NotExecuted,
}

/// Encodes and submits the swap selected on the command line.
/// Unrecognized selectors return NotExecuted before any network call.
pub async fn execute(selector: &str, context: &SwapContext) -> Result<Outcome, ClientError> {
    let encoded = match encode_swap(selector, context) {
        Some(encoded) => encoded,
        None => {
            return Ok(Outcome::NotExecuted);
        }
    };

    let direction = if selector == "1" { "SOL -> token" } else { "token -> SOL" };
    log(LogTag::Swap, "EXECUTE", &format!("Submitting swap {} ({})", selector, direction));

    if is_debug_swap_enabled() {
        log(LogTag::Swap, "DEBUG", &format!("Payload bytes: {:?}", encoded.data));
    }

    if is_dry_run_enabled() {
        log(LogTag::Swap, "DRY-RUN", "Instruction built, submission skipped");
        return Ok(Outcome::Executed { signature: None });
    }

    let signature = submit(encoded, context).await?;
    Ok(Outcome::Executed { signature: Some(signature) })
}

/// Submits the opcode-0 initialize instruction
pub async fn initialize(context: &SwapContext) -> Result<Outcome, ClientError> {
    let encoded = encode_initialize(context);
    log(LogTag::Swap, "INITIALIZE", "Submitting initialize instruction");

    if is_dry_run_enabled() {
        log(LogTag::Swap, "DRY-RUN", "Instruction built, submission skipped");
        return Ok(Outcome::Executed { signature: None });
    }

    let signature = submit(encoded, context).await?;
    Ok(Outcome::Executed { signature: Some(signature) })
}

/// Mints demo tokens to the payer's token account. The payer must be
/// the mint authority for this to succeed on-chain.
pub async fn mint_to_payer(context: &SwapContext) -> Result<String, ClientError> {
    let instruction = spl_token::instruction
        ::mint_to(
            &spl_token::id(),
            &context.mint,
            &context.payer_token_account,
            &context.payer.pubkey(),
            &[],
            MINT_TO_PAYER_AMOUNT
        )
        .map_err(|e| {
            ClientError::TransactionError(format!("Failed to build mint_to instruction: {}", e))
        })?;

    let rpc = get_rpc_client();
    let blockhash = rpc.get_latest_blockhash().await?;
    let transaction = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&context.payer.pubkey()),
        &[&context.payer],
        blockhash
    );

    let signature = rpc.send_transaction(&transaction).await?;
    rpc.wait_for_confirmation(&signature).await?;

    log(
        LogTag::Swap,
        "MINTED",
        &format!("Minted tokens to payer account {}", context.payer_token_account)
    );
    Ok(signature)
}

/// Wraps one encoded instruction in a signed transaction and submits it
async fn submit(
    encoded: EncodedInstruction,
    context: &SwapContext
) -> Result<String, ClientError> {
    let rpc = get_rpc_client();
    let instruction = encoded.into_instruction(&context.program_id);

    let blockhash = rpc.get_latest_blockhash().await?;
    let transaction = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&context.payer.pubkey()),
        &[&context.payer],
        blockhash
    );

    let signature = rpc.send_transaction(&transaction).await?;
    rpc.wait_for_confirmation(&signature).await?;
    Ok(signature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::derive_vault;
    use solana_sdk::pubkey::Pubkey;
    use solana_sdk::signature::Keypair;

    fn test_context() -> SwapContext {
        let payer = Keypair::new();
        let program_id = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let vault = derive_vault(&mint, &program_id);
        SwapContext {
            program_id,
            payer,
            mint,
            vault,
            vault_token_account: Pubkey::new_unique(),
            payer_token_account: Pubkey::new_unique(),
        }
    }

    #[tokio::test]
    async fn test_unsupported_selector_is_not_executed() {
        // The global RPC client is never initialized in this test, so
        // reaching the network would panic. Getting NotExecuted back
        // proves the unsupported path stops before any RPC access.
        let context = test_context();

        for selector in ["", "3", "abc"] {
            let outcome = execute(selector, &context).await.unwrap();
            assert_eq!(outcome, Outcome::NotExecuted);
        }
    }
}
