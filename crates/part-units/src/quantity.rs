use std::fmt;

use tracing::debug;
use uom::si::f64::{Angle, Length};

use crate::dimension::Dimension;
use crate::error::UnitError;
use crate::registry::UnitRegistry;
use crate::unit::{self, Unit};

/// A magnitude paired with a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    magnitude: f64,
    unit: Unit,
}

impl Quantity {
    pub fn new(magnitude: f64, unit: Unit) -> Self {
        Self { magnitude, unit }
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    /// Convert to another unit of the same dimension.
    pub fn to(&self, target: &Unit) -> Result<Quantity, UnitError> {
        Ok(Quantity::new(self.magnitude_in(target)?, target.clone()))
    }

    /// The bare magnitude of this quantity expressed in `target`.
    pub fn magnitude_in(&self, target: &Unit) -> Result<f64, UnitError> {
        if !self.unit.is_compatible_with(target) {
            return Err(UnitError::DimensionMismatch {
                from: self.unit.name().to_string(),
                from_dimension: self.unit.dimension(),
                to: target.name().to_string(),
                to_dimension: target.dimension(),
            });
        }
        if self.unit.name() == target.name() {
            return Ok(self.magnitude);
        }
        let converted = self.magnitude * self.unit.coefficient() / target.coefficient();
        debug!(
            magnitude = self.magnitude,
            from = self.unit.name(),
            to = target.name(),
            converted,
            "converted quantity"
        );
        Ok(converted)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit)
    }
}

impl From<Length> for Quantity {
    fn from(length: Length) -> Self {
        Quantity::new(length.get::<uom::si::length::meter>(), unit::meter())
    }
}

impl From<Angle> for Quantity {
    fn from(angle: Angle) -> Self {
        Quantity::new(angle.get::<uom::si::angle::radian>(), unit::radian())
    }
}

/// Either a plain number or a unit-wrapped quantity.
///
/// Plain numbers carry no unit; whoever normalizes them decides which unit
/// they are already in.
#[derive(Debug, Clone, PartialEq)]
pub enum Magnitude {
    Plain(f64),
    Quantity(Quantity),
}

impl Magnitude {
    /// Express this value in `target`. Plain values are returned unchanged.
    pub fn magnitude_in(&self, target: &Unit) -> Result<f64, UnitError> {
        match self {
            Magnitude::Plain(value) => Ok(*value),
            Magnitude::Quantity(quantity) => quantity.magnitude_in(target),
        }
    }

    pub fn as_quantity(&self) -> Option<&Quantity> {
        match self {
            Magnitude::Plain(_) => None,
            Magnitude::Quantity(quantity) => Some(quantity),
        }
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Magnitude::Plain(value) => write!(f, "{value}"),
            Magnitude::Quantity(quantity) => write!(f, "{quantity}"),
        }
    }
}

impl From<f64> for Magnitude {
    fn from(value: f64) -> Self {
        Magnitude::Plain(value)
    }
}

impl From<i32> for Magnitude {
    fn from(value: i32) -> Self {
        Magnitude::Plain(f64::from(value))
    }
}

impl From<Quantity> for Magnitude {
    fn from(quantity: Quantity) -> Self {
        Magnitude::Quantity(quantity)
    }
}

impl From<&Quantity> for Magnitude {
    fn from(quantity: &Quantity) -> Self {
        Magnitude::Quantity(quantity.clone())
    }
}

impl From<&Magnitude> for Magnitude {
    fn from(value: &Magnitude) -> Self {
        value.clone()
    }
}

impl From<Length> for Magnitude {
    fn from(length: Length) -> Self {
        Magnitude::Quantity(length.into())
    }
}

impl From<Angle> for Magnitude {
    fn from(angle: Angle) -> Self {
        Magnitude::Quantity(angle.into())
    }
}

/// Values that can be reduced to magnitudes in a registry's base units.
///
/// A part function takes its dimensions as quantities and calls
/// [`UnitRegistry::normalize`] once on entry, so every part built against the
/// same registry hands the kernel numbers in the same units. Plain numbers
/// pass through untouched.
pub trait ToBaseMagnitude {
    type Output;

    fn to_base_magnitude(&self, registry: &UnitRegistry) -> Self::Output;
}

impl ToBaseMagnitude for f64 {
    type Output = f64;

    fn to_base_magnitude(&self, _registry: &UnitRegistry) -> f64 {
        *self
    }
}

impl ToBaseMagnitude for Quantity {
    type Output = f64;

    fn to_base_magnitude(&self, registry: &UnitRegistry) -> f64 {
        registry.to_base_units(self).magnitude()
    }
}

impl ToBaseMagnitude for Magnitude {
    type Output = f64;

    fn to_base_magnitude(&self, registry: &UnitRegistry) -> f64 {
        match self {
            Magnitude::Plain(value) => *value,
            Magnitude::Quantity(quantity) => quantity.to_base_magnitude(registry),
        }
    }
}

impl<T: ToBaseMagnitude, const N: usize> ToBaseMagnitude for [T; N] {
    type Output = [T::Output; N];

    fn to_base_magnitude(&self, registry: &UnitRegistry) -> Self::Output {
        self.each_ref().map(|v| v.to_base_magnitude(registry))
    }
}

impl<T: ToBaseMagnitude> ToBaseMagnitude for Vec<T> {
    type Output = Vec<T::Output>;

    fn to_base_magnitude(&self, registry: &UnitRegistry) -> Self::Output {
        self.iter().map(|v| v.to_base_magnitude(registry)).collect()
    }
}

impl<T: ToBaseMagnitude> ToBaseMagnitude for Option<T> {
    type Output = Option<T::Output>;

    fn to_base_magnitude(&self, registry: &UnitRegistry) -> Self::Output {
        self.as_ref().map(|v| v.to_base_magnitude(registry))
    }
}

impl<A: ToBaseMagnitude, B: ToBaseMagnitude> ToBaseMagnitude for (A, B) {
    type Output = (A::Output, B::Output);

    fn to_base_magnitude(&self, registry: &UnitRegistry) -> Self::Output {
        (
            self.0.to_base_magnitude(registry),
            self.1.to_base_magnitude(registry),
        )
    }
}

impl<A: ToBaseMagnitude, B: ToBaseMagnitude, C: ToBaseMagnitude> ToBaseMagnitude for (A, B, C) {
    type Output = (A::Output, B::Output, C::Output);

    fn to_base_magnitude(&self, registry: &UnitRegistry) -> Self::Output {
        (
            self.0.to_base_magnitude(registry),
            self.1.to_base_magnitude(registry),
            self.2.to_base_magnitude(registry),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::angle::degree;
    use uom::si::length::inch;

    #[test]
    fn test_plain_magnitude_is_unchanged() {
        let m = Magnitude::from(12.5);
        assert_eq!(m.magnitude_in(&unit::meter()).unwrap(), 12.5);
        assert!(m.as_quantity().is_none());
    }

    #[test]
    fn test_typed_length_becomes_meters() {
        let q = Quantity::from(Length::new::<inch>(1.0));
        assert_eq!(q.unit().name(), "meter");
        assert!((q.magnitude() - 0.0254).abs() < 1e-12);
    }

    #[test]
    fn test_typed_angle_becomes_radians() {
        let q = Quantity::from(Angle::new::<degree>(180.0));
        assert_eq!(q.unit().name(), "radian");
        assert!((q.magnitude() - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_incompatible_units_rejected() {
        let q = Quantity::from(Length::new::<inch>(1.0));
        let err = q.magnitude_in(&unit::radian()).unwrap_err();
        assert!(matches!(err, UnitError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_display() {
        let q = Quantity::new(25.4, unit::meter());
        assert_eq!(q.to_string(), "25.4 meter");
        assert_eq!(Magnitude::Plain(3.0).to_string(), "3");
    }
}
