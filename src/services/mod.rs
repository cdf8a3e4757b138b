pub mod simulation;

use sqlx::PgPool;

use crate::repository::PgRateRepository;
use simulation::RateSimulationService;

pub struct AppState {
    pub simulation: RateSimulationService<PgRateRepository>,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            simulation: RateSimulationService::new(PgRateRepository::new(pool)),
        }
    }
}
