//! Rate simulation engine.
//!
//! A pure pipeline over a tenant's rate configurations: filter candidates by
//! service level and weight bounds, price each one under its calculation
//! method, then return the whole set ordered cheapest-first. No state, no
//! I/O; the repository hands in the candidate rows and the caller gets a
//! freshly allocated, sorted list back.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeSet;

use crate::error::EngineError;
use crate::models::{
    CalculationMethod, CityOptions, ShippingRate, SimulatedRate, SimulationRequest,
};

const CM3_PER_M3: Decimal = dec!(1_000_000);
const HUNDRED: Decimal = dec!(100);

/// Rejects inputs that would produce nonsensical negative costs. Zero
/// weight is allowed: per-kg components degenerate to zero, which is
/// well-defined.
pub fn validate_request(request: &SimulationRequest) -> Result<(), EngineError> {
    if request.weight_kg < Decimal::ZERO {
        return Err(EngineError::InvalidRequest(
            "weight_kg must not be negative".to_string(),
        ));
    }

    for (name, value) in [
        ("length_cm", request.length_cm),
        ("width_cm", request.width_cm),
        ("height_cm", request.height_cm),
    ] {
        if let Some(value) = value {
            if value <= Decimal::ZERO {
                return Err(EngineError::InvalidRequest(format!(
                    "{name} must be positive"
                )));
            }
        }
    }

    if let Some(declared) = request.declared_value {
        if declared < Decimal::ZERO {
            return Err(EngineError::InvalidRequest(
                "declared_value must not be negative".to_string(),
            ));
        }
    }

    Ok(())
}

/// Prices every eligible rate and returns the results ordered by ascending
/// total cost. Ties keep the input order (stable sort), which is the
/// repository's return order. An empty result is a valid outcome.
pub fn simulate_rates(rates: &[ShippingRate], request: &SimulationRequest) -> Vec<SimulatedRate> {
    let mut results: Vec<SimulatedRate> = rates
        .iter()
        .filter_map(|rate| price_rate(rate, request))
        .collect();

    results.sort_by(|a, b| a.total_cost.cmp(&b.total_cost));
    results
}

/// Prices a single candidate, or returns `None` when the rate is not
/// applicable to this shipment.
fn price_rate(rate: &ShippingRate, request: &SimulationRequest) -> Option<SimulatedRate> {
    // The repository query already filters by service level, but a stale or
    // permissive store must not leak mismatched tiers into the results.
    if let Some(requested_level) = request.service_level.as_deref() {
        if rate.service_level.as_deref() != Some(requested_level) {
            return None;
        }
    }

    if let Some(min_weight) = rate.min_weight_kg {
        if request.weight_kg < min_weight {
            return None;
        }
    }
    if let Some(max_weight) = rate.max_weight_kg {
        if request.weight_kg > max_weight {
            return None;
        }
    }

    let dimensions = request.dimensions();

    let volumetric_weight = match dimensions {
        Some((length, width, height)) => (length * width * height) / rate.dimensional_factor,
        None => Decimal::ZERO,
    };

    let billable_weight = request.weight_kg.max(volumetric_weight);

    let base_cost = rate.base_rate;
    let mut weight_cost = Decimal::ZERO;
    let mut volume_cost = Decimal::ZERO;

    let method_detail = match rate.calculation_method {
        CalculationMethod::Weight => {
            weight_cost = billable_weight * rate.rate_per_kg;
            format!(
                "{} kg × {}/kg = {}",
                billable_weight, rate.rate_per_kg, weight_cost
            )
        }
        CalculationMethod::Volume => match dimensions {
            Some((length, width, height)) => {
                let volume_m3 = (length * width * height) / CM3_PER_M3;
                volume_cost = volume_m3 * rate.rate_per_m3;
                format!(
                    "{} m³ × {}/m³ = {}",
                    volume_m3, rate.rate_per_m3, volume_cost
                )
            }
            None => "no dimensions provided, no volume charge".to_string(),
        },
        CalculationMethod::Dimensional => {
            weight_cost = billable_weight * rate.rate_per_kg;
            format!(
                "billable {} kg (actual {} kg, volumetric {} kg) × {}/kg = {}",
                billable_weight, request.weight_kg, volumetric_weight, rate.rate_per_kg, weight_cost
            )
        }
        CalculationMethod::Flat => "flat rate".to_string(),
    };

    let subtotal = base_cost + weight_cost + volume_cost;
    let fuel_surcharge = subtotal * rate.fuel_surcharge_percent / HUNDRED;

    let declared_value = request.declared_value.unwrap_or(Decimal::ZERO);
    let insurance_cost = declared_value * rate.insurance_percent / HUNDRED;

    let mut total_cost = subtotal + fuel_surcharge + insurance_cost;

    let mut details = format!("base {}; {}", base_cost, method_detail);
    if rate.fuel_surcharge_percent != Decimal::ZERO {
        details.push_str(&format!(
            "; fuel surcharge {}% = {}",
            rate.fuel_surcharge_percent, fuel_surcharge
        ));
    }
    if insurance_cost != Decimal::ZERO {
        details.push_str(&format!(
            "; insurance {}% of {} = {}",
            rate.insurance_percent, declared_value, insurance_cost
        ));
    }

    if let Some(min_charge) = rate.min_charge {
        if total_cost < min_charge {
            total_cost = min_charge;
            details.push_str(&format!("; minimum charge {} applied", min_charge));
        }
    }

    Some(SimulatedRate {
        rate: rate.clone(),
        base_cost,
        weight_cost,
        volume_cost,
        fuel_surcharge,
        insurance_cost,
        total_cost,
        billable_weight,
        calculation_details: details,
    })
}

/// Distinct, sorted origin and destination cities across a rate set.
pub fn unique_cities(rates: &[ShippingRate]) -> CityOptions {
    CityOptions {
        origins: collect_distinct(rates.iter().map(|r| r.origin_city.as_deref())),
        destinations: collect_distinct(rates.iter().map(|r| r.destination_city.as_deref())),
    }
}

/// Distinct, sorted service levels across a rate set.
pub fn unique_service_levels(rates: &[ShippingRate]) -> Vec<String> {
    collect_distinct(rates.iter().map(|r| r.service_level.as_deref()))
}

fn collect_distinct<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    values
        .flatten()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
