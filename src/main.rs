use std::path::Path;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use xanathar::infrastructure::adapters;
use xanathar::{CommandRelay, CommandService, Config, ConfigError, HttpDelivery, RelayServerError};

#[derive(Parser)]
#[command(name = "xanathar")]
#[command(about = "Slash-command relay for chat webhooks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Listen address (overrides config)
    #[arg(short, long)]
    bind: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the relay
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
    /// List supported slash commands
    Commands,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run => run_relay(&cli.config, cli.bind),
        Commands::Version => {
            println!("xanathar v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(&cli.config),
        Commands::Commands => {
            print!("{}", CommandService::new().get_help());
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run_relay(config_path: &str, bind_override: Option<String>) -> Result<(), RelayServerError> {
    let mut config = Config::resolve(config_path, |key| std::env::var(key).ok());
    if let Some(bind) = bind_override {
        config.server.bind = bind;
    }
    config.validate()?;

    tracing::info!(
        "Starting {} (delivery timeout {}s)",
        config.server.name,
        config.delivery.timeout_secs
    );

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let delivery = HttpDelivery::new(config.delivery.timeout())
            .map_err(|e| RelayServerError::Server(e.to_string()))?;
        let relay = Arc::new(CommandRelay::new(Arc::new(delivery)));

        adapters::serve(relay, &config.server).await
    })
}

fn init_config(config_path: &str) -> Result<(), RelayServerError> {
    if Path::new(config_path).exists() {
        return Err(ConfigError::InvalidValue(format!("{} already exists", config_path)).into());
    }

    let yaml = Config::default().to_yaml()?;
    std::fs::write(config_path, yaml)?;
    println!("Wrote default config to {}", config_path);
    Ok(())
}
