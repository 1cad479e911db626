// Router construction
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_dashboard, get_summary, health_check, list_recent_alerts, list_top_alerts,
    stream_dashboard, update_range,
};
use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/summary", get(get_summary))
        .route("/dashboard/range", put(update_range))
        .route("/dashboard/stream", get(stream_dashboard))
        .route("/alerts/recent", get(list_recent_alerts))
        .route("/alerts/top", get(list_top_alerts))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
