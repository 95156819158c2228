use part_units::Magnitude;
use truck_modeling::builder;
use truck_modeling::topology::Vertex;
use truck_modeling::{Point3, Vector3};

use crate::types::CadError;
use crate::units::CadUnits;

/// A point from three lengths.
pub fn point(
    units: &CadUnits<'_>,
    x: impl Into<Magnitude>,
    y: impl Into<Magnitude>,
    z: impl Into<Magnitude>,
) -> Result<Point3, CadError> {
    let [x, y, z] = coords(units, x, y, z)?;
    Ok(Point3::new(x, y, z))
}

/// A displacement from three lengths.
pub fn vector(
    units: &CadUnits<'_>,
    x: impl Into<Magnitude>,
    y: impl Into<Magnitude>,
    z: impl Into<Magnitude>,
) -> Result<Vector3, CadError> {
    let [x, y, z] = coords(units, x, y, z)?;
    Ok(Vector3::new(x, y, z))
}

/// A topological vertex at the given position.
pub fn vertex(
    units: &CadUnits<'_>,
    x: impl Into<Magnitude>,
    y: impl Into<Magnitude>,
    z: impl Into<Magnitude>,
) -> Result<Vertex, CadError> {
    Ok(builder::vertex(point(units, x, y, z)?))
}

fn coords(
    units: &CadUnits<'_>,
    x: impl Into<Magnitude>,
    y: impl Into<Magnitude>,
    z: impl Into<Magnitude>,
) -> Result<[f64; 3], CadError> {
    Ok(units.lengths([x.into(), y.into(), z.into()])?)
}
