use axum::extract::{Path, State};
use axum::Json;
use std::sync::Arc;

use crate::error::EngineError;
use crate::models::{CityOptions, SimulatedRate, SimulationRequest};
use crate::services::AppState;

pub async fn simulate(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<i64>,
    Json(request): Json<SimulationRequest>,
) -> Result<Json<Vec<SimulatedRate>>, EngineError> {
    let results = state.simulation.simulate(org_id, &request).await?;
    Ok(Json(results))
}

pub async fn cities(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<i64>,
) -> Result<Json<CityOptions>, EngineError> {
    let cities = state.simulation.available_cities(org_id).await?;
    Ok(Json(cities))
}

pub async fn service_levels(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<i64>,
) -> Result<Json<Vec<String>>, EngineError> {
    let levels = state.simulation.service_levels(org_id).await?;
    Ok(Json(levels))
}
