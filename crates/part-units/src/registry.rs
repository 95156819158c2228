use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dimension::Dimension;
use crate::error::UnitError;
use crate::quantity::{Magnitude, Quantity, ToBaseMagnitude};
use crate::unit::{self, Unit};

/// Engineering unit systems.
///
/// Each system overrides a base system's length unit with one sized for part
/// dimensions. `SiEngineering` is SI with millimeters. `UsEngineering` is US
/// customary (pounds for mass) with thou for length. Other dimensions keep
/// their SI base unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineeringSystem {
    SiEngineering,
    UsEngineering,
}

impl EngineeringSystem {
    pub const ALL: [EngineeringSystem; 2] = [Self::SiEngineering, Self::UsEngineering];

    pub fn name(self) -> &'static str {
        match self {
            Self::SiEngineering => "si_engineering",
            Self::UsEngineering => "us_engineering",
        }
    }

    /// Names of all defined systems.
    pub fn system_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.name()).collect()
    }

    fn length_base(self) -> &'static str {
        match self {
            Self::SiEngineering => "millimeter",
            Self::UsEngineering => "mil",
        }
    }

    fn mass_base(self) -> &'static str {
        match self {
            Self::SiEngineering => "kilogram",
            Self::UsEngineering => "pound",
        }
    }
}

impl fmt::Display for EngineeringSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EngineeringSystem {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|system| system.name() == s)
            .ok_or_else(|| UnitError::ParameterParse(format!("unknown unit system: {s:?}")))
    }
}

/// Index of uom's units by label, plus the base units of the active system.
///
/// Immutable once built; share it by reference.
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    units: Vec<Unit>,
    index: HashMap<String, usize>,
    system: Option<EngineeringSystem>,
    length_base: usize,
    mass_base: usize,
}

impl UnitRegistry {
    /// A registry using plain SI base units (meter, kilogram, second).
    pub fn new() -> Self {
        Self::build(None)
    }

    pub fn with_system(system: EngineeringSystem) -> Self {
        Self::build(Some(system))
    }

    fn build(system: Option<EngineeringSystem>) -> Self {
        let units = unit::catalog();
        let mut index = HashMap::new();
        for (i, unit) in units.iter().enumerate() {
            for label in unit.labels() {
                index.entry(label).or_insert(i);
            }
        }
        for &(alias, target) in unit::ALIASES {
            if let Some(&i) = index.get(target) {
                index.entry(alias.to_string()).or_insert(i);
            }
        }

        let (length_label, mass_label) = match system {
            Some(system) => (system.length_base(), system.mass_base()),
            None => ("meter", "kilogram"),
        };
        // Both labels come from the catalog above.
        let length_base = index.get(length_label).copied().unwrap_or(0);
        let mass_base = index.get(mass_label).copied().unwrap_or(0);

        debug!(
            system = ?system,
            units = units.len(),
            labels = index.len(),
            "built unit registry"
        );

        Self {
            units,
            index,
            system,
            length_base,
            mass_base,
        }
    }

    pub fn system(&self) -> Option<EngineeringSystem> {
        self.system
    }

    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label.trim())
    }

    /// Look up a unit by singular name, plural name, symbol or alias.
    pub fn unit(&self, label: &str) -> Result<Unit, UnitError> {
        self.index
            .get(label.trim())
            .map(|&i| self.units[i].clone())
            .ok_or_else(|| UnitError::UnknownUnit {
                label: label.to_string(),
            })
    }

    /// Wrap a bare number in the unit named by `unit`.
    pub fn wrap(&self, value: f64, unit: &str) -> Result<Quantity, UnitError> {
        Ok(Quantity::new(value, self.unit(unit)?))
    }

    /// Express `value` as a bare number in `target_unit`.
    ///
    /// Plain numbers are assumed to already be in `target_unit` and are
    /// returned unchanged.
    pub fn strip_to_unit(
        &self,
        value: impl Into<Magnitude>,
        target_unit: &str,
    ) -> Result<f64, UnitError> {
        let target = self.unit(target_unit)?;
        value.into().magnitude_in(&target)
    }

    /// The active system's base unit for `dimension`.
    ///
    /// Uses a registered unit when one matches, otherwise a composed unit such
    /// as `millimeter ** 2 * kilogram / second ** 2`.
    pub fn base_unit(&self, dimension: Dimension) -> Unit {
        let length = &self.units[self.length_base];
        let mass = &self.units[self.mass_base];
        let coefficient = length.coefficient().powi(i32::from(dimension.length))
            * mass.coefficient().powi(i32::from(dimension.mass));

        if let Some(found) = self.units.iter().find(|u| {
            u.dimension() == dimension && relative_eq(u.coefficient(), coefficient)
        }) {
            return found.clone();
        }

        let name = compose_name(
            &[
                (length.name(), dimension.length),
                (mass.name(), dimension.mass),
                ("second", dimension.time),
                ("ampere", dimension.current),
                ("kelvin", dimension.temperature),
                ("mole", dimension.amount),
                ("candela", dimension.luminosity),
            ],
        );
        Unit::verbatim(name.clone(), name, dimension, coefficient)
    }

    /// Convert a quantity to the active system's base units.
    pub fn to_base_units(&self, quantity: &Quantity) -> Quantity {
        let base = self.base_unit(quantity.dimension());
        let magnitude = if quantity.unit().name() == base.name() {
            quantity.magnitude()
        } else {
            quantity.magnitude() * quantity.unit().coefficient() / base.coefficient()
        };
        debug!(
            value = %quantity,
            base = base.name(),
            magnitude,
            "normalized to base units"
        );
        Quantity::new(magnitude, base)
    }

    /// Magnitude of `value` in base units; plain numbers are returned unchanged.
    pub fn to_base_magnitude(&self, value: impl Into<Magnitude>) -> f64 {
        value.into().to_base_magnitude(self)
    }

    /// Reduce a group of arguments to base magnitudes in one call.
    pub fn normalize<M: ToBaseMagnitude + ?Sized>(&self, args: &M) -> M::Output {
        args.to_base_magnitude(self)
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Get a unit registry, with an optional engineering system.
///
/// Part libraries should leave the system unset and let the model script
/// choose it, so one model drives the units of every part it uses.
pub fn get_registry(system: Option<EngineeringSystem>) -> UnitRegistry {
    UnitRegistry::build(system)
}

fn relative_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-12 * a.abs().max(b.abs())
}

fn compose_name(parts: &[(&str, i8)]) -> String {
    let term = |name: &str, exp: i8| {
        if exp == 1 {
            name.to_string()
        } else {
            format!("{name} ** {exp}")
        }
    };
    let numerator: Vec<String> = parts
        .iter()
        .filter(|(_, exp)| *exp > 0)
        .map(|&(name, exp)| term(name, exp))
        .collect();
    let denominator: Vec<String> = parts
        .iter()
        .filter(|(_, exp)| *exp < 0)
        .map(|&(name, exp)| term(name, -exp))
        .collect();

    let mut name = if numerator.is_empty() {
        "1".to_string()
    } else {
        numerator.join(" * ")
    };
    for term in denominator {
        name.push_str(" / ");
        name.push_str(&term);
    }
    if name == "1" {
        name = "dimensionless".to_string();
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_names() {
        assert_eq!(
            EngineeringSystem::system_names(),
            vec!["si_engineering", "us_engineering"]
        );
        assert_eq!(
            "us_engineering".parse::<EngineeringSystem>().unwrap(),
            EngineeringSystem::UsEngineering
        );
        assert!("imperial".parse::<EngineeringSystem>().is_err());
    }

    #[test]
    fn test_base_unit_uses_registered_name() {
        let reg = UnitRegistry::with_system(EngineeringSystem::SiEngineering);
        assert_eq!(reg.base_unit(Dimension::LENGTH).name(), "millimeter");
        assert_eq!(reg.base_unit(Dimension::AREA).name(), "square_millimeter");
        assert_eq!(reg.base_unit(Dimension::MASS).name(), "kilogram");
        assert_eq!(reg.base_unit(Dimension::TIME).name(), "second");
    }

    #[test]
    fn test_base_unit_composes_unregistered_dimensions() {
        let reg = UnitRegistry::with_system(EngineeringSystem::SiEngineering);
        let force = reg.base_unit(Dimension::FORCE);
        assert_eq!(force.name(), "millimeter * kilogram / second ** 2");
        assert!((force.coefficient() - 1e-3).abs() < 1e-15);
    }

    #[test]
    fn test_compose_name_dimensionless() {
        assert_eq!(compose_name(&[("meter", 0)]), "dimensionless");
        assert_eq!(compose_name(&[("second", -1)]), "1 / second");
    }

    #[test]
    fn test_si_registry_is_meter_based() {
        let reg = get_registry(None);
        assert_eq!(reg.system(), None);
        assert_eq!(reg.base_unit(Dimension::LENGTH).name(), "meter");
    }
}
