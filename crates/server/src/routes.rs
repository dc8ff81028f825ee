pub mod companies;

use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use common::types::Health;

use crate::state::ServerState;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health probe plus the company endpoints.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let companies = Router::new()
        .route("/companies", get(companies::list))
        .route("/companies/list", get(companies::list))
        .route("/companies/register", post(companies::register))
        .route("/companies/register/", post(companies::register))
        .route("/companies/edit/:cnpj", put(companies::edit))
        .route("/companies/delete/:cnpj", delete(companies::remove));

    Router::new()
        .route("/health", get(health))
        .merge(companies)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
