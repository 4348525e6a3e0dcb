use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::DictionaryClient;
use crate::presentation::handlers::{
    health_handler, recover_handler, recover_pairs_handler, statistics_handler,
};
use crate::presentation::state::AppState;

/// Photos straight off a phone camera exceed the default body limit.
const MAX_IMAGE_BYTES: usize = 16 * 1024 * 1024;

pub fn create_router<D>(state: AppState<D>) -> Router
where
    D: DictionaryClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/recover", post(recover_handler::<D>))
        .route("/api/v1/recover/pairs", post(recover_pairs_handler::<D>))
        .route("/api/v1/statistics", get(statistics_handler::<D>))
        .layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
