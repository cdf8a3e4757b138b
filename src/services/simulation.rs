//! Orchestrates a simulation run: one repository fetch, then the in-memory
//! pricing pipeline. Read-only; the only suspension point is the fetch.

use tracing::debug;

use crate::engine;
use crate::error::EngineError;
use crate::models::{CityOptions, SimulatedRate, SimulationRequest};
use crate::repository::{RateFilters, RateRepository};

pub struct RateSimulationService<R> {
    repo: R,
}

impl<R: RateRepository> RateSimulationService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Prices every applicable rate for the shipment and returns them
    /// cheapest-first. An empty list means no rates matched; repository
    /// failures surface as errors and are never coerced into an empty list.
    pub async fn simulate(
        &self,
        organization_id: i64,
        request: &SimulationRequest,
    ) -> Result<Vec<SimulatedRate>, EngineError> {
        engine::validate_request(request)?;

        let filters = RateFilters {
            carrier_id: request.carrier_id,
            service_level: request.service_level.clone(),
            origin_city: request.origin_city.clone(),
            destination_city: request.destination_city.clone(),
        };

        let candidates = self.repo.list_active_rates(organization_id, &filters).await?;
        debug!(
            organization_id,
            candidates = candidates.len(),
            "fetched candidate rates"
        );

        Ok(engine::simulate_rates(&candidates, request))
    }

    /// Distinct origin/destination cities across the tenant's active rates.
    pub async fn available_cities(
        &self,
        organization_id: i64,
    ) -> Result<CityOptions, EngineError> {
        let rates = self
            .repo
            .list_active_rates(organization_id, &RateFilters::default())
            .await?;
        Ok(engine::unique_cities(&rates))
    }

    /// Distinct service levels across the tenant's active rates.
    pub async fn service_levels(&self, organization_id: i64) -> Result<Vec<String>, EngineError> {
        let rates = self
            .repo
            .list_active_rates(organization_id, &RateFilters::default())
            .await?;
        Ok(engine::unique_service_levels(&rates))
    }
}
