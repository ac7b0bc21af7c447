use clap::Parser;
use dotenvy::dotenv;

mod commands;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;

/// CLI entry point.
///
/// Initializes logging, loads configuration, wires the dependency container
/// and dispatches one subcommand. All state lives on the backend; the
/// process-local stores only exist for the duration of a single command.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config);

    // 5. Run the requested command
    let cli = commands::Cli::parse();
    commands::run(cli, &container).await
}
