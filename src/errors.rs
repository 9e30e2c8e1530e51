/// Error types for the token tracing client
///
/// One enum covers the whole pipeline: config loading, wallet funding,
/// program lookup, and transaction submission. Setup failures abort the
/// process before any instruction is built.

/// Error type for setup, RPC and submission failures
#[derive(Debug)]
pub enum ClientError {
    ConfigError(String),
    KeypairError(String),
    RpcError(String),
    NetworkError(reqwest::Error),
    ProgramNotDeployed(String),
    ProgramNotExecutable(String),
    AirdropFailed(String),
    TransactionError(String),
    ParseError(String),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::ConfigError(msg) => write!(f, "Config Error: {}", msg),
            ClientError::KeypairError(msg) => write!(f, "Keypair Error: {}", msg),
            ClientError::RpcError(msg) => write!(f, "RPC Error: {}", msg),
            ClientError::NetworkError(err) => write!(f, "Network Error: {}", err),
            ClientError::ProgramNotDeployed(msg) => write!(f, "Program Not Deployed: {}", msg),
            ClientError::ProgramNotExecutable(msg) => {
                write!(f, "Program Not Executable: {}", msg)
            }
            ClientError::AirdropFailed(msg) => write!(f, "Airdrop Failed: {}", msg),
            ClientError::TransactionError(msg) => write!(f, "Transaction Error: {}", msg),
            ClientError::ParseError(msg) => write!(f, "Parse Error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::NetworkError(err)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::ParseError(format!("JSON parsing error: {}", err))
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::ConfigError(format!("I/O error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_category() {
        let err = ClientError::ProgramNotDeployed("deploy it first".to_string());
        assert!(err.to_string().contains("Program Not Deployed"));

        let err = ClientError::TransactionError("simulation failed".to_string());
        assert!(err.to_string().contains("simulation failed"));
    }

    #[test]
    fn test_serde_error_converts_to_parse_error() {
        let bad: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: ClientError = bad.unwrap_err().into();
        assert!(matches!(err, ClientError::ParseError(_)));
    }
}
