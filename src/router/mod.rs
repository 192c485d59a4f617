//! Routing module for the shopping item service

use crate::items::SharedState;
use axum::{body::Body, extract::Request, middleware::Next, Router};
use tower_http::trace::TraceLayer;

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: Log requests
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        let method = req.method().clone();
        let uri = req.uri().clone();
        tracing::debug!(%method, %uri, "request");

        let res = next.run(req).await;
        if !res.status().is_success() {
            tracing::info!(%method, %uri, status = %res.status(), "request not successful");
        }
        res
    });

    // Unmatched method/path pairs fall through to axum's 404/405 handling.
    Router::new()
        .merge(crate::items::routes())
        .layer(log_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
