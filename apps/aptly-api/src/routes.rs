use aptly_service::{Error as ServiceError, RecommendItem, RecommendRequest};
use axum::{
	Json, Router,
	extract::State,
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/recommend", post(recommend))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn recommend(
	State(state): State<AppState>,
	Json(payload): Json<RecommendRequest>,
) -> Result<Json<Vec<RecommendItem>>, ApiError> {
	let items = state.service.recommend(&payload).await?;

	Ok(Json(items))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}
}
impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match &err {
			ServiceError::InvalidRequest { .. } =>
				Self::new(StatusCode::UNPROCESSABLE_ENTITY, "invalid_request", err.to_string()),
			ServiceError::Provider { .. } =>
				Self::new(StatusCode::BAD_GATEWAY, "embedding_provider", err.to_string()),
			ServiceError::Catalog { .. } =>
				Self::new(StatusCode::INTERNAL_SERVER_ERROR, "catalog", err.to_string()),
		}
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
