/// Deployed-program lookup
///
/// The tracing program's id comes from its deploy keypair file on disk.
/// Before any instruction is built the account is fetched and checked to
/// be a live, executable program.

use crate::arguments::is_debug_program_enabled;
use crate::config::Config;
use crate::errors::ClientError;
use crate::logger::{ log, LogTag };
use crate::rpc::RpcClient;

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use std::fs;

/// Reads a Solana keypair file (JSON array of 64 bytes)
pub fn read_program_keypair(path: &str) -> Result<Keypair, ClientError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        ClientError::ProgramNotDeployed(
            format!(
                "Failed to read program keypair at '{}': {}. Program may need to be deployed first",
                path,
                e
            )
        )
    })?;

    let bytes: Vec<u8> = serde_json
        ::from_str(&raw)
        .map_err(|e| {
            ClientError::KeypairError(format!("Malformed program keypair file '{}': {}", path, e))
        })?;

    if bytes.len() != 64 {
        return Err(
            ClientError::KeypairError(
                format!(
                    "Program keypair file '{}' holds {} bytes, expected 64",
                    path,
                    bytes.len()
                )
            )
        );
    }

    Keypair::try_from(&bytes[..]).map_err(|e| {
        ClientError::KeypairError(format!("Invalid program keypair in '{}': {}", path, e))
    })
}

/// Resolves the program id from disk and verifies the on-chain account
/// is deployed and executable
pub async fn check_program(rpc: &RpcClient, config: &Config) -> Result<Pubkey, ClientError> {
    let program_keypair = read_program_keypair(&config.program_keypair_path)?;
    let program_id = program_keypair.pubkey();

    if is_debug_program_enabled() {
        log(
            LogTag::Program,
            "DEBUG",
            &format!("Program keypair loaded from {}", config.program_keypair_path)
        );
    }

    let account = rpc.get_account_optional(&program_id).await?;

    let account = match account {
        Some(account) => account,
        None => {
            return Err(
                ClientError::ProgramNotDeployed(
                    format!(
                        "Program {} not found on cluster. Deploy it with `solana program deploy dist/program/tokentracing.so`",
                        program_id
                    )
                )
            );
        }
    };

    if !account.executable {
        return Err(
            ClientError::ProgramNotExecutable(format!("Account {} is not executable", program_id))
        );
    }

    log(LogTag::Program, "RESOLVED", &format!("Using program {}", program_id));
    Ok(program_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_program_keypair_roundtrip() {
        let keypair = Keypair::new();
        let json = serde_json::to_string(&keypair.to_bytes().to_vec()).unwrap();

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = read_program_keypair(file.path().to_str().unwrap()).unwrap();
        assert_eq!(loaded.pubkey(), keypair.pubkey());
    }

    #[test]
    fn test_read_program_keypair_missing_file() {
        let err = read_program_keypair("/nonexistent/path/keypair.json").unwrap_err();
        assert!(matches!(err, ClientError::ProgramNotDeployed(_)));
    }

    #[test]
    fn test_read_program_keypair_wrong_length() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[1,2,3]").unwrap();

        let err = read_program_keypair(file.path().to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("expected 64"));
    }
}
