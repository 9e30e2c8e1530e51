/// Instruction encoding for the token tracing program
///
/// Builds the wire-exact payload and account list for each program
/// opcode. Encoding is pure: no I/O, no clock, no randomness - the same
/// selector and context always produce byte-identical output.
///
/// Payload layout: one opcode byte, followed by a little-endian u32
/// amount for the two swap opcodes. Nothing else.

use crate::constants::SWAP_AMOUNT_LAMPORTS;
use crate::context::SwapContext;

use solana_sdk::instruction::{ AccountMeta, Instruction };
use solana_sdk::signer::Signer;
use solana_sdk::system_program;

/// Operations understood by the tracing program
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TracingInstruction {
    Initialize,
    SwapSolToToken { amount: u32 },
    SwapTokenToSol { amount: u32 },
}

impl TracingInstruction {
    pub fn opcode(&self) -> u8 {
        match self {
            TracingInstruction::Initialize => 0,
            TracingInstruction::SwapSolToToken { .. } => 1,
            TracingInstruction::SwapTokenToSol { .. } => 2,
        }
    }

    /// Serializes the payload: opcode byte, then the amount for swaps.
    /// The buffer is exactly 1 byte (Initialize) or 5 bytes (swaps).
    pub fn pack(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(5);
        data.push(self.opcode());
        match self {
            TracingInstruction::Initialize => {}
            TracingInstruction::SwapSolToToken { amount }
            | TracingInstruction::SwapTokenToSol { amount } => {
                data.extend_from_slice(&amount.to_le_bytes());
            }
        }
        data
    }
}

/// A packed payload plus its ordered account list, ready to be wrapped
/// in a single-instruction transaction
#[derive(Debug, Clone)]
pub struct EncodedInstruction {
    pub data: Vec<u8>,
    pub accounts: Vec<AccountMeta>,
}

impl EncodedInstruction {
    pub fn into_instruction(self, program_id: &solana_sdk::pubkey::Pubkey) -> Instruction {
        Instruction {
            program_id: *program_id,
            accounts: self.accounts,
            data: self.data,
        }
    }
}

/// Account list shared by both swap directions. The on-chain processor
/// walks these positionally, so the order is part of the wire contract.
fn swap_account_metas(context: &SwapContext) -> Vec<AccountMeta> {
    vec![
        AccountMeta::new(context.program_id, false),            // program
        AccountMeta::new(context.payer.pubkey(), true),         // payer (signer)
        AccountMeta::new(context.payer_token_account, false),   // payer token account
        AccountMeta::new(context.mint, false),                  // mint
        AccountMeta::new(context.vault, false),                 // vault PDA
        AccountMeta::new(context.vault_token_account, false),   // vault token account
        AccountMeta::new_readonly(spl_token::id(), false),      // token program
        AccountMeta::new_readonly(system_program::id(), false), // system program
    ]
}

/// Maps the CLI selector to an encoded swap instruction.
///
/// Only "1" (SOL -> token) and "2" (token -> SOL) are recognized; any
/// other selector yields None and the caller reports a not-executed
/// outcome. Both directions move the same fixed amount and carry the
/// same account list.
pub fn encode_swap(selector: &str, context: &SwapContext) -> Option<EncodedInstruction> {
    let instruction = match selector {
        "1" => TracingInstruction::SwapSolToToken { amount: SWAP_AMOUNT_LAMPORTS },
        "2" => TracingInstruction::SwapTokenToSol { amount: SWAP_AMOUNT_LAMPORTS },
        _ => {
            return None;
        }
    };

    Some(EncodedInstruction {
        data: instruction.pack(),
        accounts: swap_account_metas(context),
    })
}

/// Encodes the opcode-0 initialize instruction
pub fn encode_initialize(context: &SwapContext) -> EncodedInstruction {
    EncodedInstruction {
        data: TracingInstruction::Initialize.pack(),
        accounts: vec![
            AccountMeta::new(context.payer.pubkey(), true),         // payer (signer)
            AccountMeta::new(context.vault, false),                 // vault PDA
            AccountMeta::new_readonly(system_program::id(), false), // system program
            AccountMeta::new(context.mint, false)                   // mint
        ],
    }
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

    #[test]
    fn test_sol_to_token_payload_bytes() {
        let context = test_context();
        let encoded = encode_swap("1", &context).unwrap();

        assert_eq!(encoded.data.len(), 5);
        assert_eq!(encoded.data[0], 1);
        assert_eq!(&encoded.data[1..], &1_000_000_000u32.to_le_bytes());
    }

    #[test]
    fn test_token_to_sol_payload_bytes() {
        let context = test_context();
        let encoded = encode_swap("2", &context).unwrap();

        assert_eq!(encoded.data.len(), 5);
        assert_eq!(encoded.data[0], 2);
        assert_eq!(&encoded.data[1..], &1_000_000_000u32.to_le_bytes());
    }

    #[test]
    fn test_swap_account_list_order_and_flags() {
        let context = test_context();

        for selector in ["1", "2"] {
            let encoded = encode_swap(selector, &context).unwrap();
            assert_eq!(encoded.accounts.len(), 8);

            let signers: Vec<bool> = encoded.accounts.iter().map(|a| a.is_signer).collect();
            let writables: Vec<bool> = encoded.accounts.iter().map(|a| a.is_writable).collect();
            assert_eq!(signers, [false, true, false, false, false, false, false, false]);
            assert_eq!(writables, [true, true, true, true, true, true, false, false]);

            assert_eq!(encoded.accounts[0].pubkey, context.program_id);
            assert_eq!(encoded.accounts[1].pubkey, context.payer.pubkey());
            assert_eq!(encoded.accounts[2].pubkey, context.payer_token_account);
            assert_eq!(encoded.accounts[3].pubkey, context.mint);
            assert_eq!(encoded.accounts[4].pubkey, context.vault);
            assert_eq!(encoded.accounts[5].pubkey, context.vault_token_account);
            assert_eq!(encoded.accounts[6].pubkey, spl_token::id());
            assert_eq!(encoded.accounts[7].pubkey, system_program::id());
        }
    }

    #[test]
    fn test_both_directions_share_account_list() {
        // The on-chain program uses one positional account layout for
        // both directions, so the client mirrors it. Documented quirk,
        // not an accident: do not "fix" one side independently.
        let context = test_context();
        let buy = encode_swap("1", &context).unwrap();
        let sell = encode_swap("2", &context).unwrap();

        assert_eq!(buy.accounts, sell.accounts);
        assert_eq!(buy.data[1..], sell.data[1..]);
        assert_ne!(buy.data[0], sell.data[0]);
    }

    #[test]
    fn test_unsupported_selectors_produce_nothing() {
        let context = test_context();
        for selector in ["", "0", "3", "abc", "11", " 1"] {
            assert!(encode_swap(selector, &context).is_none());
        }
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let context = test_context();

        let first = encode_swap("1", &context).unwrap();
        let second = encode_swap("1", &context).unwrap();

        assert_eq!(first.data, second.data);
        assert_eq!(first.accounts, second.accounts);
    }

    #[test]
    fn test_payload_round_trip() {
        let context = test_context();

        for selector in ["1", "2"] {
            let encoded = encode_swap(selector, &context).unwrap();
            let amount_bytes: [u8; 4] = encoded.data[1..].try_into().unwrap();
            assert_eq!(u32::from_le_bytes(amount_bytes), 1_000_000_000);
        }
    }

    #[test]
    fn test_initialize_payload_and_accounts() {
        let context = test_context();
        let encoded = encode_initialize(&context);

        assert_eq!(encoded.data, vec![0]);
        assert_eq!(encoded.accounts.len(), 4);

        assert_eq!(encoded.accounts[0].pubkey, context.payer.pubkey());
        assert!(encoded.accounts[0].is_signer);
        assert!(encoded.accounts[0].is_writable);

        assert_eq!(encoded.accounts[1].pubkey, context.vault);
        assert_eq!(encoded.accounts[2].pubkey, system_program::id());
        assert!(!encoded.accounts[2].is_writable);
        assert_eq!(encoded.accounts[3].pubkey, context.mint);
    }

    #[test]
    fn test_pack_lengths() {
        assert_eq!(TracingInstruction::Initialize.pack().len(), 1);
        assert_eq!(TracingInstruction::SwapSolToToken { amount: 7 }.pack().len(), 5);
        assert_eq!(TracingInstruction::SwapTokenToSol { amount: 7 }.pack().len(), 5);
    }
}
