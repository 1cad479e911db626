// Mapping of dashboard errors to HTTP responses
use crate::domain::error::DashboardError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug)]
pub struct ApiError(pub DashboardError);

impl From<DashboardError> for ApiError {
    fn from(err: DashboardError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::BAD_REQUEST;
        let body = Json(json!({
            "error": self.0.code(),
            "message": self.0.to_string(),
            "status": status.as_u16(),
        }));
        (status, body).into_response()
    }
}
