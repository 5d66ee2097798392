use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::LanguageDetector;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct CleanRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct CleanResponse {
    pub cleaned_text: String,
    pub sections: Vec<String>,
    pub detected_language: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn clean_handler<D>(
    State(state): State<AppState<D>>,
    Json(request): Json<CleanRequest>,
) -> impl IntoResponse
where
    D: LanguageDetector + 'static,
{
    tracing::debug!(input_bytes = request.text.len(), "Cleaning text");

    let document = state.cleaning_service.clean(&request.text).await;

    tracing::info!(
        sections = document.sections.len(),
        language = %document.language,
        "Text cleaned"
    );

    (
        StatusCode::OK,
        Json(CleanResponse {
            cleaned_text: document.text,
            sections: document.sections,
            detected_language: document.language.into_string(),
        }),
    )
}
