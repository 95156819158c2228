//! Unit-aware wrapper over truck-meshalgo triangulation.

use part_units::Magnitude;
use tracing::debug;
use truck_meshalgo::prelude::*;
use truck_meshalgo::tessellation::{MeshableShape, MeshedShape};
use truck_modeling::topology::Solid;

use crate::types::{check_positive, CadError};
use crate::units::CadUnits;

/// Triangulate `solid` into a single polygon mesh.
///
/// `tolerance` is the maximum chordal deviation, as a length.
pub fn tessellate(
    units: &CadUnits<'_>,
    solid: &Solid,
    tolerance: impl Into<Magnitude>,
) -> Result<PolygonMesh, CadError> {
    let tolerance = units.length(tolerance)?;
    check_positive("tolerance", tolerance)?;

    let mesh = solid.triangulation(tolerance).to_polygon();
    debug!(
        tolerance,
        positions = mesh.positions().len(),
        triangles = mesh.tri_faces().len(),
        "tessellated solid"
    );
    Ok(mesh)
}
