use anyhow::{ Context, Result };
use serde::{ Deserialize, Serialize };
use std::fs;
use std::path::Path;

use crate::constants::{ DEFAULT_MINT, DEFAULT_PROGRAM_KEYPAIR_PATH };

/// Default config file location, overridable with --config <path>
pub const DEFAULT_CONFIG_PATH: &str = "configs.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub main_wallet_private: String,
    pub rpc_url: String,
    #[serde(default = "default_mint_address")]
    pub mint_address: String,
    #[serde(default = "default_program_keypair_path")]
    pub program_keypair_path: String,
}

fn default_mint_address() -> String {
    DEFAULT_MINT.to_string()
}

fn default_program_keypair_path() -> String {
    DEFAULT_PROGRAM_KEYPAIR_PATH.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            main_wallet_private: String::new(),
            rpc_url: "https://api.devnet.solana.com".to_string(),
            mint_address: default_mint_address(),
            program_keypair_path: default_program_keypair_path(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            let default_config = Self::default();
            default_config.save(path)?;
            anyhow::bail!(
                "Created default config at {} - fill in main_wallet_private and run again",
                path
            );
        }

        let content = fs
            ::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Self = serde_json
            ::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;

        // Validate required fields
        if config.main_wallet_private.is_empty() {
            return Err(anyhow::anyhow!("main_wallet_private is required in config"));
        }
        if config.rpc_url.is_empty() {
            return Err(anyhow::anyhow!("rpc_url is required in config"));
        }

        Ok(config)
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content = serde_json
            ::to_string_pretty(self)
            .with_context(|| "Failed to serialize config")?;

        fs::write(path, content).with_context(|| format!("Failed to write config file: {}", path))?;

        Ok(())
    }
}
