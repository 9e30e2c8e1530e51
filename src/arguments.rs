/// Centralized argument handling for the token tracing client
///
/// Consolidates command-line argument parsing and debug flag checking so
/// every module reads flags from the same place.
///
/// Features:
/// - Centralized CMD_ARGS storage with thread-safe access
/// - Debug flag checking functions for all modules
/// - Selector extraction for the positional opcode argument
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

/// Global command-line arguments storage
/// Thread-safe singleton that stores arguments for access throughout the application
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Sets the global command-line arguments
/// Used by tests to override the default env::args() collection
pub fn set_cmd_args(args: Vec<String>) {
    if let Ok(mut cmd_args) = CMD_ARGS.lock() {
        *cmd_args = args;
    }
}

/// Gets a copy of the current command-line arguments
/// Returns a vector clone to avoid holding the mutex lock
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        Err(_) => {
            // Fallback to env::args if mutex is poisoned
            env::args().collect()
        }
    }
}

/// Checks if a specific argument is present in the command line
pub fn has_arg(arg: &str) -> bool {
    get_cmd_args()
        .iter()
        .any(|a| a == arg)
}

/// Gets the value of a command-line argument that follows a flag
/// Returns None if the flag is not found or has no value
pub fn get_arg_value(flag: &str) -> Option<String> {
    let args = get_cmd_args();
    for (i, arg) in args.iter().enumerate() {
        if arg == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

/// Flags that consume the following argument as their value
const VALUE_FLAGS: [&str; 1] = ["--config"];

/// Extracts the positional opcode selector from an argument list.
/// Skips the program name, every `--flag`, and the value of flags that
/// take one. Returns the first remaining argument verbatim.
pub fn selector_from(args: &[String]) -> Option<String> {
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        if VALUE_FLAGS.contains(&arg.as_str()) {
            iter.next();
            continue;
        }
        if arg.starts_with("--") {
            continue;
        }
        return Some(arg.clone());
    }
    None
}

/// Gets the opcode selector from the global argument store
pub fn get_selector() -> Option<String> {
    selector_from(&get_cmd_args())
}

// =============================================================================
// DEBUG FLAG CHECKING FUNCTIONS
// These functions check for specific debug flags in the command-line arguments
// =============================================================================

/// RPC operations debug mode
pub fn is_debug_rpc_enabled() -> bool {
    has_arg("--debug-rpc")
}

/// Wallet operations debug mode
pub fn is_debug_wallet_enabled() -> bool {
    has_arg("--debug-wallet")
}

/// Swap encoding/submission debug mode
pub fn is_debug_swap_enabled() -> bool {
    has_arg("--debug-swap")
}

/// Program lookup debug mode
pub fn is_debug_program_enabled() -> bool {
    has_arg("--debug-program")
}

/// System operations debug mode
pub fn is_debug_system_enabled() -> bool {
    has_arg("--debug-system")
}

/// Verbose mode - enables every debug tag at once
pub fn is_verbose_enabled() -> bool {
    has_arg("--verbose")
}

/// Dry-run mode - builds instructions without submitting them
pub fn is_dry_run_enabled() -> bool {
    has_arg("--dry-run")
}

/// Initialize mode - submits the opcode-0 initialize instruction
pub fn is_initialize_enabled() -> bool {
    has_arg("--initialize")
}

/// Mint-to-payer mode - mints demo tokens to the payer's token account
pub fn is_mint_to_payer_enabled() -> bool {
    has_arg("--mint-to-payer")
}

/// Help request check
pub fn is_help_requested() -> bool {
    has_arg("--help") || has_arg("-h")
}

/// Prints usage information for the client binary
pub fn print_help() {
    println!("tokentracer - demo client for the token tracing program");
    println!();
    println!("USAGE:");
    println!("    tokentracer [FLAGS] <SELECTOR>");
    println!();
    println!("SELECTOR:");
    println!("    1    swap SOL -> token (1 SOL, fixed)");
    println!("    2    swap token -> SOL (1 SOL, fixed)");
    println!();
    println!("FLAGS:");
    println!("    --initialize         submit the initialize instruction before anything else");
    println!("    --mint-to-payer      mint demo tokens to the payer token account");
    println!("    --dry-run            build the instruction but skip submission");
    println!("    --config <path>      config file location (default: configs.json)");
    println!("    --debug-<module>     extra logging (rpc, wallet, swap, program, system)");
    println!("    --verbose            enable all debug tags");
    println!("    --help, -h           show this help");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_selector_is_first_positional() {
        assert_eq!(
            selector_from(&args(&["tokentracer", "1"])),
            Some("1".to_string())
        );
        assert_eq!(
            selector_from(&args(&["tokentracer", "--dry-run", "2"])),
            Some("2".to_string())
        );
    }

    #[test]
    fn test_selector_skips_config_value() {
        assert_eq!(
            selector_from(&args(&["tokentracer", "--config", "other.json", "1"])),
            Some("1".to_string())
        );
    }

    #[test]
    fn test_selector_missing() {
        assert_eq!(selector_from(&args(&["tokentracer"])), None);
        assert_eq!(selector_from(&args(&["tokentracer", "--initialize"])), None);
    }

    #[test]
    fn test_selector_passes_unrecognized_values_through() {
        // Validation happens in the encoder, not here
        assert_eq!(
            selector_from(&args(&["tokentracer", "abc"])),
            Some("abc".to_string())
        );
    }
}
