//! Combined binary for development - runs both services in one process.

use clap::{Parser, Subcommand};
use tokio::task::JoinError;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "billing-order")]
#[command(about = "Billing and order services in a single process")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run both services (development mode)
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        #[arg(long, default_value = "8081")]
        billing_port: u16,
        #[arg(long, default_value = "8082")]
        order_port: u16,
    },
    /// Run billing database migrations
    Migrate {
        #[command(subcommand)]
        action: MigrateAction,
    },
}

#[derive(Subcommand, Clone, Copy)]
enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

/// Turn the first service exit into the process error.
fn service_exit(
    name: &str,
    result: Result<Result<(), String>, JoinError>,
) -> Box<dyn std::error::Error> {
    let message = match result {
        Ok(Ok(())) => format!("{} exited unexpectedly", name),
        Ok(Err(e)) => format!("{} failed: {}", name, e),
        Err(e) => format!("{} task aborted: {}", name, e),
    };
    error!("{}", message);
    message.into()
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
            billing_port,
            order_port,
        } => {
            info!("Starting combined services in development mode");
            info!("  Billing service: http://{}:{}", host, billing_port);
            info!("  Order service:   http://{}:{}", host, order_port);

            let billing_host = host.clone();
            let billing_handle = tokio::spawn(async move {
                billing_service_lib::run_embedded(&billing_host, billing_port)
                    .await
                    .map_err(|e| e.to_string())
            });

            let order_host = host.clone();
            let order_handle = tokio::spawn(async move {
                order_service_lib::run_embedded(&order_host, order_port)
                    .await
                    .map_err(|e| e.to_string())
            });

            // Either service stopping ends the process with an error
            let (name, result) = tokio::select! {
                result = billing_handle => ("Billing service", result),
                result = order_handle => ("Order service", result),
            };
            return Err(service_exit(name, result));
        }
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateAction::Up => billing_service_lib::MigrateAction::Up,
                MigrateAction::Down => billing_service_lib::MigrateAction::Down,
                MigrateAction::Status => billing_service_lib::MigrateAction::Status,
                MigrateAction::Fresh => billing_service_lib::MigrateAction::Fresh,
            };

            billing_service_lib::run_migrations(migrate_action).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_failure_is_an_error() {
        let err = service_exit(
            "Order service",
            Ok(Err("Configuration error: region".to_string())),
        );
        assert_eq!(err.to_string(), "Order service failed: Configuration error: region");
    }

    #[test]
    fn test_clean_exit_is_still_an_error() {
        let err = service_exit("Billing service", Ok(Ok(())));
        assert_eq!(err.to_string(), "Billing service exited unexpectedly");
    }
}
