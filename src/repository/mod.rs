pub mod rate_repo;

use async_trait::async_trait;

use crate::error::RepositoryError;
use crate::models::ShippingRate;

pub use rate_repo::PgRateRepository;

/// Narrowing filters applied server-side before the engine sees the
/// candidate set. Carrier and service level match exactly; cities match on
/// a case-insensitive substring.
#[derive(Debug, Clone, Default)]
pub struct RateFilters {
    pub carrier_id: Option<i64>,
    pub service_level: Option<String>,
    pub origin_city: Option<String>,
    pub destination_city: Option<String>,
}

/// The rate store, abstracted so tests can run against an in-memory
/// implementation. Implementations apply tenant isolation, the active
/// flag, and the validity window; the engine never re-checks those.
#[async_trait]
pub trait RateRepository: Send + Sync {
    async fn list_active_rates(
        &self,
        organization_id: i64,
        filters: &RateFilters,
    ) -> Result<Vec<ShippingRate>, RepositoryError>;
}
