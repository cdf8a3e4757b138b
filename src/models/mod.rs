pub mod rate;
pub mod simulation;

pub use rate::{CalculationMethod, RawRate, ShippingRate};
pub use simulation::{CityOptions, SimulatedRate, SimulationRequest};
