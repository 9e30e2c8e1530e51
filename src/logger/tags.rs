//! Log tags identifying which subsystem produced a message

/// Subsystem tag attached to every log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTag {
    System,
    Rpc,
    Wallet,
    Program,
    Swap,
}

impl LogTag {
    /// Key used to match `--debug-<key>` command-line flags
    pub fn to_debug_key(&self) -> &'static str {
        match self {
            LogTag::System => "system",
            LogTag::Rpc => "rpc",
            LogTag::Wallet => "wallet",
            LogTag::Program => "program",
            LogTag::Swap => "swap",
        }
    }

    /// Uncolored tag text
    pub fn to_plain_string(&self) -> &'static str {
        match self {
            LogTag::System => "SYSTEM",
            LogTag::Rpc => "RPC",
            LogTag::Wallet => "WALLET",
            LogTag::Program => "PROGRAM",
            LogTag::Swap => "SWAP",
        }
    }
}
