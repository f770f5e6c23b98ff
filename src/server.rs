// ABOUTME: HTTP server assembly: router, middleware stack, listener, graceful shutdown
// ABOUTME: Request IDs, request tracing, and CORS wrap every route
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use crate::middleware::{create_request_span, setup_cors, PrefixedRequestId};
use crate::resources::ServerResources;
use crate::routes;
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Build the complete application router
///
/// Layers run outermost first: request ID assignment, tracing, request ID
/// propagation onto the response, then CORS.
pub fn build_router(resources: &Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);

    routes::api_routes(resources).layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(PrefixedRequestId))
            .layer(TraceLayer::new_for_http().make_span_with(create_request_span))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(cors),
    )
}

/// Bind the configured address and serve until Ctrl+C or SIGTERM
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn serve(resources: Arc<ServerResources>) -> Result<()> {
    let bind_address = resources.config.bind_address();
    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    info!(
        server.address = %bind_address,
        store.connected = resources.store.is_connected(),
        "SignifyLearn API listening"
    );
    display_endpoints(&bind_address);

    axum::serve(listener, build_router(&resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("SignifyLearn API stopped");
    Ok(())
}

fn display_endpoints(bind_address: &str) {
    info!("=== Available API Endpoints ===");
    info!("  GET|HEAD  http://{bind_address}/");
    info!("  GET|HEAD  http://{bind_address}/test");
    info!("  GET       http://{bind_address}/health");
    info!("  GET       http://{bind_address}/api/gestures?q=&category=&page=1&page_size=20");
    info!("  GET       http://{bind_address}/api/gestures/{{slug}}");
    info!("  GET       http://{bind_address}/api/modules");
    info!("  GET       http://{bind_address}/api/modules/{{slug}}");
    info!("  GET       http://{bind_address}/api/quizzes/{{module_slug}}");
    info!("  GET|POST  http://{bind_address}/api/favorites");
    info!("  GET       http://{bind_address}/api/profile?email=");
    info!("  GET|POST  http://{bind_address}/api/progress");
    info!("=== End of Endpoint List ===");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
