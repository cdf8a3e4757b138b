//! PostgreSQL-backed rate store.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::{RateFilters, RateRepository};
use crate::error::RepositoryError;
use crate::models::{RawRate, ShippingRate};

pub struct PgRateRepository {
    pool: PgPool,
}

impl PgRateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RateRepository for PgRateRepository {
    async fn list_active_rates(
        &self,
        organization_id: i64,
        filters: &RateFilters,
    ) -> Result<Vec<ShippingRate>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, organization_id, carrier_id, origin_zone, destination_zone,
                    origin_city, destination_city, service_level, calculation_method,
                    base_rate, rate_per_kg, rate_per_m3, dimensional_factor,
                    min_weight_kg, max_weight_kg, min_charge,
                    fuel_surcharge_percent, insurance_percent,
                    is_active, valid_from, valid_until
             FROM shipping_rates
             WHERE organization_id = $1
               AND is_active = TRUE
               AND (valid_from IS NULL OR valid_from <= CURRENT_DATE)
               AND (valid_until IS NULL OR valid_until >= CURRENT_DATE)
               AND ($2::BIGINT IS NULL OR carrier_id = $2)
               AND ($3::TEXT IS NULL OR service_level = $3)
               AND ($4::TEXT IS NULL OR origin_city ILIKE '%' || $4 || '%')
               AND ($5::TEXT IS NULL OR destination_city ILIKE '%' || $5 || '%')
             ORDER BY id",
        )
        .bind(organization_id)
        .bind(filters.carrier_id)
        .bind(filters.service_level.as_deref())
        .bind(filters.origin_city.as_deref())
        .bind(filters.destination_city.as_deref())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(rate_from_row).collect())
    }
}

fn rate_from_row(row: &PgRow) -> ShippingRate {
    RawRate {
        id: row.get("id"),
        organization_id: row.get("organization_id"),
        carrier_id: row.get("carrier_id"),
        origin_zone: row.get("origin_zone"),
        destination_zone: row.get("destination_zone"),
        origin_city: row.get("origin_city"),
        destination_city: row.get("destination_city"),
        service_level: row.get("service_level"),
        calculation_method: row.get("calculation_method"),
        base_rate: row.get("base_rate"),
        rate_per_kg: row.get("rate_per_kg"),
        rate_per_m3: row.get("rate_per_m3"),
        dimensional_factor: row.get("dimensional_factor"),
        min_weight_kg: row.get("min_weight_kg"),
        max_weight_kg: row.get("max_weight_kg"),
        min_charge: row.get("min_charge"),
        fuel_surcharge_percent: row.get("fuel_surcharge_percent"),
        insurance_percent: row.get("insurance_percent"),
        is_active: row.get("is_active"),
        valid_from: row.get("valid_from"),
        valid_until: row.get("valid_until"),
    }
    .normalize()
}
