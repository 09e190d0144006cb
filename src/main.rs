use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_grpc::server::{serve, shutdown_signal};
use api_grpc::ServerConfig;
use sample_core::InMemorySampleRepository;

/// Main entry point for the sample service.
///
/// Loads `.env`, initialises logging, resolves configuration once and serves the gRPC API
/// until Ctrl-C.
///
/// # Environment Variables
/// - `SAMPLE_ADDR`: gRPC server address (default: "0.0.0.0:50051")
/// - `SAMPLE_API_KEY`: API key required in the `x-api-key` header (unset disables auth)
/// - `RUST_LOG`: log filter (defaults add `sample=info` and `api_grpc=info`)
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sample=info".parse()?)
                .add_directive("api_grpc=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    let repository = Arc::new(InMemorySampleRepository::new());

    serve(&config, repository, shutdown_signal()).await?;

    tracing::info!("-- Sample gRPC stopped");
    Ok(())
}
