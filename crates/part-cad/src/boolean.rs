use part_units::Magnitude;
use tracing::debug;
use truck_modeling::topology::Solid;

use crate::types::{check_positive, CadError};
use crate::units::CadUnits;

/// Union of all `solids`, folded left to right with `truck_shapeops::or`.
///
/// `tolerance` is a length handed to truck's boolean engine.
pub fn fuse_all(
    units: &CadUnits<'_>,
    solids: &[Solid],
    tolerance: impl Into<Magnitude>,
) -> Result<Solid, CadError> {
    let tolerance = units.length(tolerance)?;
    check_positive("tolerance", tolerance)?;

    let (first, rest) = solids.split_first().ok_or_else(|| CadError::BooleanFailed {
        reason: "no solids to fuse".to_string(),
    })?;

    let mut result = first.clone();
    for (i, solid) in rest.iter().enumerate() {
        result = truck_shapeops::or(&result, solid, tolerance).ok_or_else(|| {
            CadError::BooleanFailed {
                reason: format!("truck or() returned None for solid {}", i + 1),
            }
        })?;
    }
    debug!(count = solids.len(), tolerance, "fused solids");
    Ok(result)
}
