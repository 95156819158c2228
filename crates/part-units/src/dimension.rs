use serde::{Deserialize, Serialize};
use std::fmt;

/// Exponents over the SI base dimensions.
///
/// Angles are dimensionless, matching uom: a radian is a ratio of lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Dimension {
    pub length: i8,
    pub mass: i8,
    pub time: i8,
    pub current: i8,
    pub temperature: i8,
    pub amount: i8,
    pub luminosity: i8,
}

impl Dimension {
    pub const DIMENSIONLESS: Self = Self {
        length: 0,
        mass: 0,
        time: 0,
        current: 0,
        temperature: 0,
        amount: 0,
        luminosity: 0,
    };

    pub const LENGTH: Self = Self::mechanical(1, 0, 0);
    pub const AREA: Self = Self::mechanical(2, 0, 0);
    pub const VOLUME: Self = Self::mechanical(3, 0, 0);
    pub const MASS: Self = Self::mechanical(0, 1, 0);
    pub const TIME: Self = Self::mechanical(0, 0, 1);
    pub const VELOCITY: Self = Self::mechanical(1, 0, -1);
    pub const FORCE: Self = Self::mechanical(1, 1, -2);
    pub const PRESSURE: Self = Self::mechanical(-1, 1, -2);

    /// A dimension built only from length, mass and time.
    pub const fn mechanical(length: i8, mass: i8, time: i8) -> Self {
        Self {
            length,
            mass,
            time,
            ..Self::DIMENSIONLESS
        }
    }

    pub fn is_dimensionless(&self) -> bool {
        *self == Self::DIMENSIONLESS
    }

    /// Exponents paired with the name of their base dimension, in SI order.
    pub fn exponents(&self) -> [(&'static str, i8); 7] {
        [
            ("length", self.length),
            ("mass", self.mass),
            ("time", self.time),
            ("current", self.current),
            ("temperature", self.temperature),
            ("substance", self.amount),
            ("luminosity", self.luminosity),
        ]
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "dimensionless");
        }
        let mut first = true;
        for (name, exp) in self.exponents() {
            if exp == 0 {
                continue;
            }
            if !first {
                write!(f, " * ")?;
            }
            first = false;
            if exp == 1 {
                write!(f, "[{name}]")?;
            } else {
                write!(f, "[{name}] ** {exp}")?;
            }
        }
        Ok(())
    }
}
