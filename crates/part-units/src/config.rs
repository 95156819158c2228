//! Registry configuration and part parameter files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::UnitError;
use crate::quantity::Magnitude;
use crate::registry::{get_registry, EngineeringSystem, UnitRegistry};

/// Which unit registry a model script runs against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Engineering system for base units; `None` keeps plain SI.
    #[serde(default)]
    pub system: Option<EngineeringSystem>,
}

impl RegistryConfig {
    pub fn build(&self) -> UnitRegistry {
        get_registry(self.system)
    }
}

/// A parameter as written in a parameter file: a bare number, or a number
/// with a unit label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Plain(f64),
    WithUnit { value: f64, unit: String },
}

/// Named part parameters, loaded from JSON.
///
/// ```json
/// {
///   "registry": { "system": "si_engineering" },
///   "parameters": {
///     "width": { "value": 2, "unit": "inch" },
///     "count": 4
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub parameters: BTreeMap<String, ParameterValue>,
}

impl ParameterSet {
    pub fn from_json(json: &str) -> Result<Self, UnitError> {
        serde_json::from_str(json).map_err(|e| UnitError::ParameterParse(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, UnitError> {
        serde_json::to_string_pretty(self).map_err(|e| UnitError::ParameterParse(e.to_string()))
    }

    /// Resolve every unit label against `registry`.
    pub fn resolve(&self, registry: &UnitRegistry) -> Result<ResolvedParameters, UnitError> {
        let mut values = BTreeMap::new();
        for (name, value) in &self.parameters {
            let magnitude = match value {
                ParameterValue::Plain(v) => Magnitude::Plain(*v),
                ParameterValue::WithUnit { value, unit } => {
                    Magnitude::Quantity(registry.wrap(*value, unit)?)
                }
            };
            values.insert(name.clone(), magnitude);
        }
        Ok(ResolvedParameters { values })
    }
}

/// Parameters with their units resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedParameters {
    values: BTreeMap<String, Magnitude>,
}

impl ResolvedParameters {
    pub fn get(&self, name: &str) -> Result<&Magnitude, UnitError> {
        self.values
            .get(name)
            .ok_or_else(|| UnitError::MissingParameter {
                name: name.to_string(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Magnitude)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
