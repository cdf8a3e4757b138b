//! Rate configuration entity and load-time normalization.
//!
//! Rows come out of the store with nullable pricing columns. Everything is
//! normalized once, here, so the simulation math can assume fully populated
//! numeric fields and never has to coalesce or guard against division by
//! zero.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default divisor for converting volume (cm³) into volumetric weight (kg).
pub const DEFAULT_DIMENSIONAL_FACTOR: Decimal = dec!(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationMethod {
    Weight,
    Volume,
    Dimensional,
    Flat,
}

impl CalculationMethod {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "weight" => Some(CalculationMethod::Weight),
            "volume" => Some(CalculationMethod::Volume),
            "dimensional" => Some(CalculationMethod::Dimensional),
            "flat" => Some(CalculationMethod::Flat),
            _ => None,
        }
    }

    /// Legacy configurations may carry method strings we no longer
    /// recognize; those fall back to weight-based pricing rather than
    /// failing the whole simulation.
    pub fn parse_or_weight(value: &str) -> Self {
        Self::parse(value).unwrap_or_else(|| {
            warn!(method = %value, "unrecognized calculation method, falling back to weight");
            CalculationMethod::Weight
        })
    }
}

/// A rate row as stored: nullable pricing columns, free-form method string.
#[derive(Debug, Clone, Default)]
pub struct RawRate {
    pub id: i64,
    pub organization_id: i64,
    pub carrier_id: Option<i64>,
    pub origin_zone: Option<String>,
    pub destination_zone: Option<String>,
    pub origin_city: Option<String>,
    pub destination_city: Option<String>,
    pub service_level: Option<String>,
    pub calculation_method: String,
    pub base_rate: Option<Decimal>,
    pub rate_per_kg: Option<Decimal>,
    pub rate_per_m3: Option<Decimal>,
    pub dimensional_factor: Option<Decimal>,
    pub min_weight_kg: Option<Decimal>,
    pub max_weight_kg: Option<Decimal>,
    pub min_charge: Option<Decimal>,
    pub fuel_surcharge_percent: Option<Decimal>,
    pub insurance_percent: Option<Decimal>,
    pub is_active: bool,
    pub valid_from: Option<NaiveDate>,
    pub valid_until: Option<NaiveDate>,
}

impl RawRate {
    pub fn normalize(self) -> ShippingRate {
        ShippingRate {
            id: self.id,
            organization_id: self.organization_id,
            carrier_id: self.carrier_id,
            origin_zone: self.origin_zone,
            destination_zone: self.destination_zone,
            origin_city: self.origin_city,
            destination_city: self.destination_city,
            service_level: self.service_level,
            calculation_method: CalculationMethod::parse_or_weight(&self.calculation_method),
            base_rate: self.base_rate.unwrap_or(Decimal::ZERO),
            rate_per_kg: self.rate_per_kg.unwrap_or(Decimal::ZERO),
            rate_per_m3: self.rate_per_m3.unwrap_or(Decimal::ZERO),
            // A zero or negative factor would divide by zero (or flip the
            // sign of volumetric weight), so it gets the default too.
            dimensional_factor: match self.dimensional_factor {
                Some(factor) if factor > Decimal::ZERO => factor,
                _ => DEFAULT_DIMENSIONAL_FACTOR,
            },
            min_weight_kg: self.min_weight_kg,
            max_weight_kg: self.max_weight_kg,
            min_charge: self.min_charge,
            fuel_surcharge_percent: self.fuel_surcharge_percent.unwrap_or(Decimal::ZERO),
            insurance_percent: self.insurance_percent.unwrap_or(Decimal::ZERO),
            is_active: self.is_active,
            valid_from: self.valid_from,
            valid_until: self.valid_until,
        }
    }
}

/// A fully normalized rate configuration. Read-only to the engine.
#[derive(Debug, Clone, Serialize)]
pub struct ShippingRate {
    pub id: i64,
    pub organization_id: i64,
    pub carrier_id: Option<i64>,
    pub origin_zone: Option<String>,
    pub destination_zone: Option<String>,
    pub origin_city: Option<String>,
    pub destination_city: Option<String>,
    pub service_level: Option<String>,
    pub calculation_method: CalculationMethod,
    pub base_rate: Decimal,
    pub rate_per_kg: Decimal,
    pub rate_per_m3: Decimal,
    pub dimensional_factor: Decimal,
    pub min_weight_kg: Option<Decimal>,
    pub max_weight_kg: Option<Decimal>,
    pub min_charge: Option<Decimal>,
    pub fuel_surcharge_percent: Decimal,
    pub insurance_percent: Decimal,
    pub is_active: bool,
    pub valid_from: Option<NaiveDate>,
    pub valid_until: Option<NaiveDate>,
}
