use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use fizzbuzz_core::process::{process_batch, process_single, Conversion};
use fizzbuzz_core::validate::ValidationError;

#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    /// Missing and null both deserialize as `None` and classify as no input.
    pub numbers: Option<Vec<i32>>,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub results: Vec<Conversion>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Validation failures surface as 400 responses with a JSON error body.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] ValidationError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.0.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

pub fn router() -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/fizzbuzz/{number}", get(convert_number))
        .route("/api/fizzbuzz", post(convert_batch))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn convert_number(Path(number): Path<i32>) -> Result<Json<Conversion>, ApiError> {
    let conversion = process_single(number)?;
    Ok(Json(conversion))
}

async fn convert_batch(Json(request): Json<BatchRequest>) -> Result<Json<BatchResponse>, ApiError> {
    let numbers = request.numbers.unwrap_or_default();
    let results = process_batch(&numbers)?;
    Ok(Json(BatchResponse { results }))
}
