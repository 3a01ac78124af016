//! # Firefly Relay
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Build the IHM client
//! - Create the relay service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{Config, LogFormat};
use ihm_client::IhmClient;
use relay_hex::{RelayService, inbound::HttpServer};

fn init_tracing(format: LogFormat) {
    let registry = tracing_subscriber::registry().with(
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,relay_app=debug,relay_hex=debug,ihm_client=debug".into()),
    );

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    init_tracing(config.log_format);

    tracing::info!("Starting relay on 0.0.0.0:{}", config.port);
    tracing::info!(ihm = ?config.ihm, "Forwarding bills to IHM");

    let client = IhmClient::new(config.ihm)?;
    tracing::info!("Bills endpoint: {}", client.bills_url());

    let service = RelayService::new(client).reject_unknown_payer(config.reject_unknown_payer);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
