use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::DictionaryClient;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecoverParams {
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct RecoveredWord {
    pub token: String,
    pub matches: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Flat mode: the image body comes back as one suggestion string per masked
/// token, in the order the tokens appear on the photo.
#[tracing::instrument(skip(state, image))]
pub async fn recover_handler<D>(
    State(state): State<AppState<D>>,
    Query(params): Query<RecoverParams>,
    image: Bytes,
) -> impl IntoResponse
where
    D: DictionaryClient + 'static,
{
    match recover_pairs(&state, &image, params.limit).await {
        Ok(paired) => {
            let matches: Vec<String> = paired.into_iter().map(|word| word.matches).collect();
            (StatusCode::OK, Json(matches)).into_response()
        }
        Err(response) => response,
    }
}

/// Paired mode: every suggestion string next to the masked token it answers.
#[tracing::instrument(skip(state, image))]
pub async fn recover_pairs_handler<D>(
    State(state): State<AppState<D>>,
    Query(params): Query<RecoverParams>,
    image: Bytes,
) -> impl IntoResponse
where
    D: DictionaryClient + 'static,
{
    match recover_pairs(&state, &image, params.limit).await {
        Ok(paired) => (StatusCode::OK, Json(paired)).into_response(),
        Err(response) => response,
    }
}

async fn recover_pairs<D>(
    state: &AppState<D>,
    image: &[u8],
    limit: Option<usize>,
) -> Result<Vec<RecoveredWord>, axum::response::Response>
where
    D: DictionaryClient + 'static,
{
    let limit = limit.unwrap_or(state.default_limit);

    let raw_text = match state.text_recognizer.recognize(image).await {
        Ok(text) => text,
        Err(error) => {
            tracing::error!(%error, "Text recognition failed");
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Text recognition failed: {error}"),
                }),
            )
                .into_response());
        }
    };

    let paired = match state
        .recovery_service
        .recover_paired(&raw_text, limit, None)
        .await
    {
        Ok(paired) => paired,
        Err(error) => {
            tracing::error!(%error, "Recovery failed");
            return Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: format!("Recovery failed: {error}"),
                }),
            )
                .into_response());
        }
    };

    tracing::info!(words = paired.len(), "Recovery successful");

    if let Err(error) = state
        .usage_repository
        .record_recovery(paired.len() as u64)
        .await
    {
        tracing::warn!(%error, "Failed to record usage");
    }

    Ok(paired
        .into_iter()
        .map(|(token, matches)| RecoveredWord {
            token: token.into_string(),
            matches: matches.display(),
        })
        .collect())
}
