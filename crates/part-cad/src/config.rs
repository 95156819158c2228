//! Defaults for a modelling session.

use part_units::{UnitError, UnitRegistry};
use serde::{Deserialize, Serialize};
use truck_meshalgo::prelude::PolygonMesh;
use truck_modeling::topology::Solid;

use crate::boolean::fuse_all;
use crate::tessellation::tessellate;
use crate::types::CadError;
use crate::units::CadUnits;

/// Native units and kernel tolerances for a model script.
///
/// Tolerances are plain numbers in the native length unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CadConfig {
    /// Overrides the registry's base length unit when set.
    #[serde(default)]
    pub length_unit: Option<String>,
    #[serde(default = "default_tessellation_tolerance")]
    pub tessellation_tolerance: f64,
    #[serde(default = "default_boolean_tolerance")]
    pub boolean_tolerance: f64,
}

fn default_tessellation_tolerance() -> f64 {
    0.01
}

fn default_boolean_tolerance() -> f64 {
    0.05
}

impl Default for CadConfig {
    fn default() -> Self {
        Self {
            length_unit: None,
            tessellation_tolerance: default_tessellation_tolerance(),
            boolean_tolerance: default_boolean_tolerance(),
        }
    }
}

impl CadConfig {
    pub fn units<'r>(&self, registry: &'r UnitRegistry) -> Result<CadUnits<'r>, UnitError> {
        match &self.length_unit {
            Some(label) => CadUnits::with_length_unit(registry, label),
            None => Ok(CadUnits::new(registry)),
        }
    }

    /// [`tessellate`] at the configured tolerance.
    pub fn tessellate(&self, units: &CadUnits<'_>, solid: &Solid) -> Result<PolygonMesh, CadError> {
        tessellate(units, solid, self.tessellation_tolerance)
    }

    /// [`fuse_all`] at the configured tolerance.
    pub fn fuse_all(&self, units: &CadUnits<'_>, solids: &[Solid]) -> Result<Solid, CadError> {
        fuse_all(units, solids, self.boolean_tolerance)
    }
}
