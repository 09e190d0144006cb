//! gRPC server bootstrap.

use crate::config::ServerConfig;
use crate::interceptor::ApiKeyInterceptor;
use crate::wiring::{build_sample_server, build_sample_service};
use sample_core::SampleRepository;
use std::future::Future;
use std::sync::Arc;
use tonic::transport::Server;

/// Serves `sample.v1.SampleService` on the configured address until `shutdown` resolves.
pub async fn serve(
    config: &ServerConfig,
    repository: Arc<dyn SampleRepository>,
    shutdown: impl Future<Output = ()>,
) -> Result<(), tonic::transport::Error> {
    let interceptor = ApiKeyInterceptor::new(config.api_key());
    if interceptor.is_enabled() {
        tracing::info!("API key authentication enabled");
    } else {
        tracing::warn!("SAMPLE_API_KEY not set; API key authentication disabled");
    }

    let service = build_sample_service(repository);

    tracing::info!("-- Starting sample gRPC on {}", config.addr());
    Server::builder()
        .add_service(build_sample_server(service, interceptor))
        .serve_with_shutdown(config.addr(), shutdown)
        .await
}

/// Resolves when the process receives Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
