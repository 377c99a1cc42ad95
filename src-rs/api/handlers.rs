use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::comparison::{ComparisonError, Preference, Ratings, Report, Round, Side};
use crate::llm::{CredentialSet, FailureKind, SummaryResult};
use crate::result::ErrorResponse;
use crate::showdown::Showdown;

pub type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub model: String,
    pub text: String,
    pub api_keys: Option<CredentialSet>,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub model_a: String,
    #[serde(default)]
    pub model_b: String,
    #[serde(default)]
    pub text: String,
    pub api_keys: Option<CredentialSet>,
}

#[derive(Debug, Deserialize)]
pub struct RatingsRequest {
    pub side: Side,
    #[serde(flatten)]
    pub ratings: Ratings,
}

#[derive(Debug, Deserialize)]
pub struct PreferenceRequest {
    pub preference: Option<Preference>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RoundsQuery {
    pub limit: Option<usize>,
}

pub async fn handle_health() -> Json<Value> {
    Json(json!({"status": "ok", "version": env!("CARGO_PKG_VERSION")}))
}

pub async fn handle_models(State(showdown): State<Arc<Showdown>>) -> Json<Value> {
    let (closed_source, open_source) = showdown.models();
    Json(json!({"closed_source": closed_source, "open_source": open_source}))
}

pub async fn handle_summarize(
    State(showdown): State<Arc<Showdown>>,
    Json(req): Json<SummarizeRequest>,
) -> Result<Json<SummaryResult>, ApiError> {
    showdown
        .summarize(&req.model, &req.text, req.api_keys.as_ref())
        .await
        .map(Json)
        .map_err(reject)
}

pub async fn handle_compare(
    State(showdown): State<Arc<Showdown>>,
    Json(req): Json<CompareRequest>,
) -> Result<Json<Round>, ApiError> {
    showdown
        .compare(&req.model_a, &req.model_b, &req.text, req.api_keys.as_ref())
        .await
        .map(Json)
        .map_err(reject)
}

pub async fn handle_rounds(
    State(showdown): State<Arc<Showdown>>,
    Query(query): Query<RoundsQuery>,
) -> Json<Value> {
    let rounds = showdown.rounds(query.limit.unwrap_or(10));
    Json(json!({"rounds": rounds}))
}

pub async fn handle_report(
    State(showdown): State<Arc<Showdown>>,
    Path(id): Path<String>,
) -> Result<Json<Report>, ApiError> {
    showdown.report(&id).map(Json).map_err(reject)
}

pub async fn handle_rate(
    State(showdown): State<Arc<Showdown>>,
    Path(id): Path<String>,
    Json(req): Json<RatingsRequest>,
) -> Result<Json<Round>, ApiError> {
    showdown.rate(&id, req.side, req.ratings).map(Json).map_err(reject)
}

pub async fn handle_prefer(
    State(showdown): State<Arc<Showdown>>,
    Path(id): Path<String>,
    Json(req): Json<PreferenceRequest>,
) -> Result<Json<Round>, ApiError> {
    showdown.prefer(&id, req.preference).map(Json).map_err(reject)
}

fn reject(err: ComparisonError) -> ApiError {
    let status = match &err {
        ComparisonError::Validation(_) | ComparisonError::InvalidRating { .. } => StatusCode::BAD_REQUEST,
        ComparisonError::RoundNotFound(_) => StatusCode::NOT_FOUND,
        ComparisonError::Dispatch(failure) => match failure.kind {
            FailureKind::UnknownModel | FailureKind::MissingCredential => StatusCode::BAD_REQUEST,
            FailureKind::TransientUpstream => StatusCode::SERVICE_UNAVAILABLE,
            FailureKind::UpstreamError | FailureKind::UnexpectedResponseShape => StatusCode::BAD_GATEWAY,
        },
    };
    (status, Json(ErrorResponse::from(&err)))
}
