/// Global constants used across the token tracing client
///
/// This module contains system-wide constants that are not configurable
/// and are used across multiple modules.

// ============================================================================
// SOLANA BLOCKCHAIN CONSTANTS
// ============================================================================

/// Lamports per SOL (10^9)
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Number of decimal places for SOL
pub const SOL_DECIMALS: u8 = 9;

/// Lamports charged per transaction signature
pub const LAMPORTS_PER_SIGNATURE: u64 = 5_000;

// ============================================================================
// TOKEN TRACING PROGRAM CONSTANTS
// ============================================================================

/// Seed used to derive the vault PDA under the tracing program
pub const VAULT_SEED: &[u8] = b"vault";

/// Amount moved by either swap direction, in lamports.
/// The on-chain program reads this as a little-endian u32.
pub const SWAP_AMOUNT_LAMPORTS: u32 = 1_000_000_000;

/// Mint the demo trades against when the config does not override it
pub const DEFAULT_MINT: &str = "BWQvrPzZZVndXNYPv6VB5P6bbQsHyEvtBpNgDwNxicWi";

/// Default location of the deployed program's keypair file
pub const DEFAULT_PROGRAM_KEYPAIR_PATH: &str = "dist/program/tokentracing-keypair.json";

/// Tokens minted to the payer by --mint-to-payer (raw units)
pub const MINT_TO_PAYER_AMOUNT: u64 = 1_000 * LAMPORTS_PER_SOL;

// ============================================================================
// FUNDING CONSTANTS
// ============================================================================

/// Number of signatures the fee budget reserves headroom for
pub const FEE_SIGNATURE_BUDGET: u64 = 100;

/// Extra lamports kept on top of the signature budget (one SOL)
pub const FEE_EXTRA_LAMPORTS: u64 = LAMPORTS_PER_SOL;

// ============================================================================
// CONFIRMATION CONSTANTS
// ============================================================================

/// Maximum confirmation polls before a submission is declared lost
pub const TRANSACTION_CONFIRMATION_MAX_ATTEMPTS: u32 = 10;

/// Delay between confirmation polls in milliseconds
pub const TRANSACTION_CONFIRMATION_RETRY_DELAY_MS: u64 = 3_000;
