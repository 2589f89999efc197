//! Route handlers

use super::AppState;
use super::error::ApiError;
use super::request::{AskForm, AskRequest};
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use boxai_domain::ModelListing;
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

#[derive(Serialize)]
pub struct ModelsResponse {
    pub models: Vec<ModelListing>,
}

pub async fn health() -> Json<Value> {
    Json(json!({ "message": "BoxAI API is running" }))
}

pub async fn list_models(State(state): State<Arc<AppState>>) -> Json<ModelsResponse> {
    Json(ModelsResponse {
        models: state.use_case.registry().list_available(),
    })
}

/// Body is taken as raw bytes so that malformed JSON goes through
/// [`ApiError`] instead of axum's own rejection.
pub async fn ask(State(state): State<Arc<AppState>>, body: Bytes) -> Result<Response, ApiError> {
    let request = AskRequest::parse(&body).map_err(|e| ApiError::from_request(e, state.mode))?;

    info!(
        models = ?request.query.model_keys(),
        form = ?request.form,
        "Received comparison request"
    );

    let responses = state.use_case.execute(&request.query).await;

    match request.form {
        AskForm::Multi => Ok(Json(responses).into_response()),
        AskForm::Single => responses
            .into_iter()
            .next()
            .map(|response| Json(response).into_response())
            .ok_or_else(|| ApiError::internal("Comparison returned no response", state.mode)),
    }
}
