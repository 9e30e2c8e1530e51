use tokentracer::arguments::{
    get_arg_value,
    get_selector,
    is_help_requested,
    is_initialize_enabled,
    is_mint_to_payer_enabled,
    print_help,
};
use tokentracer::config::{ Config, DEFAULT_CONFIG_PATH };
use tokentracer::executor::{ self, Outcome };
use tokentracer::logger::{ self, LogTag };
use tokentracer::rpc::{ get_rpc_client, init_rpc_client };
use tokentracer::{ context, wallet };

/// Main entry point for the token tracing client
///
/// Runs the fixed setup sequence (connection, funding, context
/// resolution), then submits the instruction selected on the command
/// line. Every failure is terminal: the process exits non-zero.
#[tokio::main]
async fn main() {
    // Check for help request first (before any other processing)
    if is_help_requested() {
        print_help();
        std::process::exit(0);
    }

    logger::info(LogTag::System, "🚀 Token tracing client starting up...");

    match run().await {
        Ok(()) => {
            logger::info(LogTag::System, "✅ Success");
        }
        Err(e) => {
            logger::error(LogTag::System, &format!("❌ Run failed: {}", e));
            std::process::exit(1);
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config_path = get_arg_value("--config").unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = Config::load(&config_path)?;

    // Establish connection to the cluster
    init_rpc_client(&config);
    let rpc = get_rpc_client();
    rpc.establish_connection().await?;

    // Determine who pays for the fees
    let payer = wallet::load_payer(&config)?;
    wallet::ensure_funded(rpc, &payer).await?;

    // Resolve mint, token accounts, program id and vault
    let context = context::resolve(rpc, &config, payer).await?;

    // Optional auxiliary operations
    if is_initialize_enabled() {
        executor::initialize(&context).await?;
    }
    if is_mint_to_payer_enabled() {
        executor::mint_to_payer(&context).await?;
    }

    match get_selector() {
        Some(selector) => {
            match executor::execute(&selector, &context).await? {
                Outcome::Executed { signature: Some(signature) } => {
                    logger::info(LogTag::System, &format!("Swap confirmed: {}", signature));
                    Ok(())
                }
                Outcome::Executed { signature: None } => {
                    logger::info(LogTag::System, "Dry run complete, nothing submitted");
                    Ok(())
                }
                Outcome::NotExecuted => {
                    Err(
                        format!(
                            "Unsupported selector '{}'. Use 1 (SOL -> token) or 2 (token -> SOL)",
                            selector
                        ).into()
                    )
                }
            }
        }
        // Flags alone are a complete run; a bare invocation is not
        None if is_initialize_enabled() || is_mint_to_payer_enabled() => Ok(()),
        None => Err("Missing selector. Use 1 (SOL -> token) or 2 (token -> SOL)".into()),
    }
}
