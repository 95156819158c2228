//! The native unit convention of the kernel.

use part_units::{Dimension, Magnitude, Quantity, Unit, UnitError, UnitRegistry};
use tracing::debug;

/// Which units plain numbers handed to truck are in.
///
/// truck itself is unitless. By default lengths use the registry's base
/// length unit, so every part built against one registry agrees, and angles
/// use radians (what `Rad` expects). The registry is borrowed, never global.
#[derive(Debug, Clone)]
pub struct CadUnits<'r> {
    registry: &'r UnitRegistry,
    length: Unit,
    angle: Unit,
}

impl<'r> CadUnits<'r> {
    pub fn new(registry: &'r UnitRegistry) -> Self {
        Self {
            registry,
            length: registry.base_unit(Dimension::LENGTH),
            angle: Unit::radian(),
        }
    }

    /// Use `label` as the native length unit instead of the registry's base.
    pub fn with_length_unit(registry: &'r UnitRegistry, label: &str) -> Result<Self, UnitError> {
        let length = registry.unit(label)?;
        if length.dimension() != Dimension::LENGTH {
            return Err(UnitError::DimensionMismatch {
                from: length.name().to_string(),
                from_dimension: length.dimension(),
                to: Unit::meter().name().to_string(),
                to_dimension: Dimension::LENGTH,
            });
        }
        Ok(Self {
            registry,
            length,
            angle: Unit::radian(),
        })
    }

    pub fn registry(&self) -> &'r UnitRegistry {
        self.registry
    }

    pub fn length_unit(&self) -> &Unit {
        &self.length
    }

    pub fn angle_unit(&self) -> &Unit {
        &self.angle
    }

    /// A length as a plain number in native units.
    pub fn length(&self, value: impl Into<Magnitude>) -> Result<f64, UnitError> {
        let value = value.into();
        let native = value.magnitude_in(&self.length)?;
        debug!(%value, native, unit = self.length.name(), "normalized length");
        Ok(native)
    }

    /// An angle as a plain number of radians.
    pub fn angle(&self, value: impl Into<Magnitude>) -> Result<f64, UnitError> {
        let value = value.into();
        let native = value.magnitude_in(&self.angle)?;
        debug!(%value, native, "normalized angle");
        Ok(native)
    }

    /// Normalize several lengths at once.
    pub fn lengths<M: Into<Magnitude>, const N: usize>(
        &self,
        values: [M; N],
    ) -> Result<[f64; N], UnitError> {
        let mut out = [0.0; N];
        for (slot, value) in out.iter_mut().zip(values) {
            *slot = self.length(value)?;
        }
        Ok(out)
    }

    /// Wrap a native length back into a quantity.
    pub fn quantity(&self, native: f64) -> Quantity {
        Quantity::new(native, self.length.clone())
    }
}
