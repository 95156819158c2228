//! Unit-wrapped quantities for part scripts.
//!
//! Unit definitions and conversion coefficients come from `uom`; this crate
//! indexes them by label so quantities can be built and converted at run time,
//! and normalizes "number or quantity" arguments into the plain magnitudes a
//! geometry kernel accepts.

pub mod config;
pub mod dimension;
pub mod error;
pub mod quantity;
pub mod registry;
pub mod unit;

pub use config::{ParameterSet, ParameterValue, RegistryConfig, ResolvedParameters};
pub use dimension::Dimension;
pub use error::UnitError;
pub use quantity::{Magnitude, Quantity, ToBaseMagnitude};
pub use registry::{get_registry, EngineeringSystem, UnitRegistry};
pub use unit::Unit;
