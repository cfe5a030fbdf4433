//! Serve command - Starts the HTTP server.

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    let app_state = AppState::from_config(&config)?;
    tracing::info!(
        "Upstream: {} (nat={})",
        config.upstream_base_url,
        config.upstream_nationality
    );

    // Build router
    let app = create_router(app_state);

    // Start server
    let addr = bind_addr(args, &config);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

/// Resolve the listen address: CLI flags win over configuration.
fn bind_addr(args: ServeArgs, config: &Config) -> String {
    let config = Config {
        server_host: args.host.unwrap_or_else(|| config.server_host.clone()),
        server_port: args.port.unwrap_or(config.server_port),
        ..config.clone()
    };
    config.server_addr()
}
