//! Run-time view of uom's unit definitions.

use crate::dimension::Dimension;
use std::fmt;

/// A unit of measure: its labels, dimension, and coefficient to the coherent
/// SI unit of that dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    name: String,
    plural: String,
    symbol: String,
    dimension: Dimension,
    coefficient: f64,
}

impl Unit {
    /// Build a unit from its labels. uom's multi-word names ("square meter",
    /// "pound-force") are stored with underscores.
    pub fn new(
        singular: &str,
        plural: &str,
        symbol: &str,
        dimension: Dimension,
        coefficient: f64,
    ) -> Self {
        Self {
            name: underscored(singular),
            plural: underscored(plural),
            symbol: symbol.to_string(),
            dimension,
            coefficient,
        }
    }

    /// Build a unit whose labels are kept exactly as given, such as the
    /// composed names of base units (`millimeter * kilogram / second ** 2`).
    pub(crate) fn verbatim(
        name: impl Into<String>,
        symbol: impl Into<String>,
        dimension: Dimension,
        coefficient: f64,
    ) -> Self {
        let name = name.into();
        Self {
            plural: name.clone(),
            name,
            symbol: symbol.into(),
            dimension,
            coefficient,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn plural(&self) -> &str {
        &self.plural
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Multiplier from this unit to the coherent SI unit of its dimension.
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// The SI length unit, available without a registry.
    pub fn meter() -> Unit {
        meter()
    }

    /// The SI angle unit, available without a registry.
    pub fn radian() -> Unit {
        radian()
    }

    pub fn is_compatible_with(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    /// Every label this unit answers to in a registry.
    /// Empty labels are never indexed.
    pub(crate) fn labels(&self) -> Vec<String> {
        let candidates = [
            self.name.clone(),
            self.plural.clone(),
            self.symbol.clone(),
            self.name.replace('_', " "),
            self.plural.replace('_', " "),
        ];
        let mut labels: Vec<String> = Vec::new();
        for label in candidates {
            if !label.is_empty() && !labels.contains(&label) {
                labels.push(label);
            }
        }
        labels
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn underscored(label: &str) -> String {
    label.replace(|c: char| c == ' ' || c == '-', "_")
}

/// Build a [`Unit`] from a uom unit type, e.g. `uom_unit!(length::millimeter, Dimension::LENGTH)`.
macro_rules! uom_unit {
    ($quantity:ident :: $unit:ident, $dimension:expr) => {{
        let coefficient: f64 = <uom::si::$quantity::$unit as uom::Conversion<f64>>::coefficient();
        $crate::unit::Unit::new(
            <uom::si::$quantity::$unit as uom::si::Unit>::singular(),
            <uom::si::$quantity::$unit as uom::si::Unit>::plural(),
            <uom::si::$quantity::$unit as uom::si::Unit>::abbreviation(),
            $dimension,
            coefficient,
        )
    }};
}

/// Extra labels accepted for units uom names differently.
pub(crate) const ALIASES: &[(&str, &str)] = &[
    ("thou", "mil"),
    ("thous", "mil"),
    ("metre", "meter"),
    ("millimetre", "millimeter"),
    ("centimetre", "centimeter"),
    ("deg", "degree"),
    ("dimensionless", "ratio"),
];

pub(crate) fn meter() -> Unit {
    uom_unit!(length::meter, Dimension::LENGTH)
}

pub(crate) fn radian() -> Unit {
    uom_unit!(angle::radian, Dimension::DIMENSIONLESS)
}

/// uom leaves the ratio unlabelled, so it is named here.
fn ratio() -> Unit {
    let coefficient: f64 = <uom::si::ratio::ratio as uom::Conversion<f64>>::coefficient();
    Unit::new("ratio", "ratio", "", Dimension::DIMENSIONLESS, coefficient)
}

/// All units a registry knows, in lookup priority order. When two units share
/// a label the earlier one wins, so time's `second` shadows any angular one.
pub(crate) fn catalog() -> Vec<Unit> {
    vec![
        meter(),
        uom_unit!(length::kilometer, Dimension::LENGTH),
        uom_unit!(length::centimeter, Dimension::LENGTH),
        uom_unit!(length::millimeter, Dimension::LENGTH),
        uom_unit!(length::micrometer, Dimension::LENGTH),
        uom_unit!(length::nanometer, Dimension::LENGTH),
        uom_unit!(length::inch, Dimension::LENGTH),
        uom_unit!(length::foot, Dimension::LENGTH),
        uom_unit!(length::yard, Dimension::LENGTH),
        uom_unit!(length::mile, Dimension::LENGTH),
        uom_unit!(length::mil, Dimension::LENGTH),
        uom_unit!(area::square_meter, Dimension::AREA),
        uom_unit!(area::square_centimeter, Dimension::AREA),
        uom_unit!(area::square_millimeter, Dimension::AREA),
        uom_unit!(area::square_inch, Dimension::AREA),
        uom_unit!(area::square_foot, Dimension::AREA),
        uom_unit!(volume::cubic_meter, Dimension::VOLUME),
        uom_unit!(volume::cubic_centimeter, Dimension::VOLUME),
        uom_unit!(volume::cubic_millimeter, Dimension::VOLUME),
        uom_unit!(volume::cubic_inch, Dimension::VOLUME),
        uom_unit!(volume::liter, Dimension::VOLUME),
        uom_unit!(mass::kilogram, Dimension::MASS),
        uom_unit!(mass::gram, Dimension::MASS),
        uom_unit!(mass::milligram, Dimension::MASS),
        uom_unit!(mass::pound, Dimension::MASS),
        uom_unit!(mass::ounce, Dimension::MASS),
        uom_unit!(time::second, Dimension::TIME),
        uom_unit!(time::millisecond, Dimension::TIME),
        uom_unit!(time::minute, Dimension::TIME),
        uom_unit!(time::hour, Dimension::TIME),
        uom_unit!(velocity::meter_per_second, Dimension::VELOCITY),
        uom_unit!(velocity::millimeter_per_second, Dimension::VELOCITY),
        uom_unit!(velocity::kilometer_per_hour, Dimension::VELOCITY),
        uom_unit!(velocity::foot_per_second, Dimension::VELOCITY),
        uom_unit!(force::newton, Dimension::FORCE),
        uom_unit!(force::kilonewton, Dimension::FORCE),
        uom_unit!(force::pound_force, Dimension::FORCE),
        uom_unit!(pressure::pascal, Dimension::PRESSURE),
        uom_unit!(pressure::kilopascal, Dimension::PRESSURE),
        uom_unit!(pressure::megapascal, Dimension::PRESSURE),
        uom_unit!(pressure::pound_force_per_square_inch, Dimension::PRESSURE),
        radian(),
        uom_unit!(angle::degree, Dimension::DIMENSIONLESS),
        uom_unit!(angle::revolution, Dimension::DIMENSIONLESS),
        uom_unit!(angle::gon, Dimension::DIMENSIONLESS),
        ratio(),
        uom_unit!(ratio::percent, Dimension::DIMENSIONLESS),
    ]
}
