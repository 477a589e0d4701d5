//! Order Service - publishes order events.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::Profiles;
use order_service_lib::config::OrderServiceConfig;

#[derive(Parser)]
#[command(name = "order-service")]
#[command(about = "Order microservice publishing events to SQS")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(long, env = "ORDER_SERVICE_HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "ORDER_SERVICE_PORT", default_value = "8082")]
        port: u16,
        /// Comma-separated active profiles, e.g. "dev"
        #[arg(long, env = "ACTIVE_PROFILES")]
        profiles: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            profiles,
        } => {
            let mut config = OrderServiceConfig::from_env();
            if let Some(raw) = profiles {
                config.profiles = Profiles::parse(&raw);
            }
            order_service_lib::run_server_with_config(&host, port, config).await?;
        }
    }

    Ok(())
}
