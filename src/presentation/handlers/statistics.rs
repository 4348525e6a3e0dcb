use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::DictionaryClient;
use crate::presentation::handlers::recover::ErrorResponse;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct StatisticsResponse {
    pub images_processed: u64,
    pub words_parsed: u64,
}

pub async fn statistics_handler<D>(State(state): State<AppState<D>>) -> impl IntoResponse
where
    D: DictionaryClient + 'static,
{
    match state.usage_repository.snapshot().await {
        Ok(stats) => (
            StatusCode::OK,
            Json(StatisticsResponse {
                images_processed: stats.images_processed,
                words_parsed: stats.words_parsed,
            }),
        )
            .into_response(),
        Err(error) => {
            tracing::error!(%error, "Failed to read usage statistics");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Statistics unavailable: {error}"),
                }),
            )
                .into_response()
        }
    }
}
