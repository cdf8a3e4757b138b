use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rate::ShippingRate;

/// Shipment parameters for a simulation run. Not persisted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimulationRequest {
    pub weight_kg: Decimal,
    pub length_cm: Option<Decimal>,
    pub width_cm: Option<Decimal>,
    pub height_cm: Option<Decimal>,
    pub declared_value: Option<Decimal>,
    pub carrier_id: Option<i64>,
    pub service_level: Option<String>,
    pub origin_city: Option<String>,
    pub destination_city: Option<String>,
}

impl SimulationRequest {
    /// All three dimensions, when the caller supplied a complete box.
    pub fn dimensions(&self) -> Option<(Decimal, Decimal, Decimal)> {
        match (self.length_cm, self.width_cm, self.height_cm) {
            (Some(length), Some(width), Some(height)) => Some((length, width, height)),
            _ => None,
        }
    }
}

/// One priced candidate: the originating rate plus every cost component.
#[derive(Debug, Clone, Serialize)]
pub struct SimulatedRate {
    pub rate: ShippingRate,
    pub base_cost: Decimal,
    pub weight_cost: Decimal,
    pub volume_cost: Decimal,
    pub fuel_surcharge: Decimal,
    pub insurance_cost: Decimal,
    pub total_cost: Decimal,
    pub billable_weight: Decimal,
    pub calculation_details: String,
}

/// Distinct cities appearing in a tenant's active rates, for filter
/// dropdowns.
#[derive(Debug, Clone, Serialize)]
pub struct CityOptions {
    pub origins: Vec<String>,
    pub destinations: Vec<String>,
}
