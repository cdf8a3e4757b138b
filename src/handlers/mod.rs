pub mod rates;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

use crate::services::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/orgs/:org_id/rates/simulate", post(rates::simulate))
        .route("/api/orgs/:org_id/rates/cities", get(rates::cities))
        .route(
            "/api/orgs/:org_id/rates/service-levels",
            get(rates::service_levels),
        )
        .route("/health", get(health_check))
        .with_state(state)
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
