//! Router construction with CORS and request tracing.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::web::handlers::{health, root, submit_business_inquiry, submit_contact, AppState};

/// Build the API router. CORS is open to any origin, method, and header.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api", get(root))
        .route("/api/health", get(health))
        .route("/api/business-inquiries", post(submit_business_inquiry))
        // Path used by the bundled web frontend
        .route("/api/businesses", post(submit_business_inquiry))
        .route("/api/contact", post(submit_contact))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
