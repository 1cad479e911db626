// HTTP request handlers
use crate::application::dashboard_service::DashboardInput;
use crate::domain::alert::AlertTypeFilter;
use crate::infrastructure::chunked_json::stream_from_receiver;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    #[serde(default)]
    pub alert_type: AlertTypeFilter,
    pub search: Option<String>,
}

impl From<DashboardQuery> for DashboardInput {
    fn from(query: DashboardQuery) -> Self {
        Self {
            from: query.from,
            to: query.to,
            alert_type: query.alert_type,
            search: query.search,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RangeRequest {
    pub from: String,
    pub to: String,
}

async fn respond<T: Serialize>(data: &T, compress: bool) -> Response {
    match json_response(StatusCode::OK, data, compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Full dashboard. When both `from` and `to` are given the range is applied
/// and replaces the held summary, like `PUT /dashboard/range`.
pub async fn get_dashboard(
    Query(query): Query<DashboardQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let dashboard = state.dashboard_service.build_dashboard(&query.into()).await?;
    Ok(respond(&dashboard, accepts_brotli(&headers)).await)
}

/// Currently held range and summary
pub async fn get_summary(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let snapshot = state.dashboard_service.current_summary().await;
    respond(&snapshot, accepts_brotli(&headers)).await
}

/// Change the selected range
pub async fn update_range(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(request): Json<RangeRequest>,
) -> Result<Response, ApiError> {
    let update = state
        .dashboard_service
        .update_range(&request.from, &request.to)
        .await?;
    Ok(respond(&update, accepts_brotli(&headers)).await)
}

/// Stream the dashboard widget by widget (progressive loading). A `from`/`to`
/// pair replaces the held summary before streaming starts.
pub async fn stream_dashboard(
    Query(query): Query<DashboardQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let rx = state
        .streaming_service
        .stream_dashboard(&query.into())
        .await?;
    Ok(stream_from_receiver(rx, accepts_brotli(&headers)).into_response())
}

pub async fn list_recent_alerts(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let rows = state.dashboard_service.recent_alerts().await;
    respond(&rows, accepts_brotli(&headers)).await
}

pub async fn list_top_alerts(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let rows = state.dashboard_service.top_alerts().await;
    respond(&rows, accepts_brotli(&headers)).await
}
