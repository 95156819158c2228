//! Rigid placements of truck objects.

use std::ops::Mul;

use part_units::{Magnitude, Quantity};
use truck_modeling::builder;
use truck_modeling::topology::{Edge, Face, Shell, Solid, Vertex, Wire};
use truck_modeling::{Matrix4, Point3, Rad, SquareMatrix, Transform, Vector3};

use crate::types::{check_axis, CadError};
use crate::units::CadUnits;

/// Anything truck can move with a 4x4 matrix.
pub trait Placeable: Sized {
    fn transformed_by(&self, matrix: &Matrix4) -> Self;
}

macro_rules! impl_placeable_topology {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Placeable for $ty {
                fn transformed_by(&self, matrix: &Matrix4) -> Self {
                    builder::transformed(self, *matrix)
                }
            }
        )+
    };
}

impl_placeable_topology!(Vertex, Edge, Wire, Face, Shell, Solid);

impl Placeable for Point3 {
    fn transformed_by(&self, matrix: &Matrix4) -> Self {
        matrix.transform_point(*self)
    }
}

impl Placeable for Vector3 {
    fn transformed_by(&self, matrix: &Matrix4) -> Self {
        matrix.transform_vector(*self)
    }
}

/// A rigid placement: rotation followed by translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    matrix: Matrix4,
}

impl Location {
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    pub fn from_matrix(matrix: Matrix4) -> Self {
        Self { matrix }
    }

    pub fn matrix(&self) -> Matrix4 {
        self.matrix
    }

    /// A pure translation by three lengths.
    pub fn translation(
        units: &CadUnits<'_>,
        x: impl Into<Magnitude>,
        y: impl Into<Magnitude>,
        z: impl Into<Magnitude>,
    ) -> Result<Self, CadError> {
        let [x, y, z] = units.lengths([x.into(), y.into(), z.into()])?;
        Ok(Self::from_matrix(Matrix4::from_translation(Vector3::new(
            x, y, z,
        ))))
    }

    /// A rotation of `angle` about the line through `origin` along `axis`.
    pub fn rotation<M: Into<Magnitude>>(
        units: &CadUnits<'_>,
        origin: [M; 3],
        axis: [f64; 3],
        angle: impl Into<Magnitude>,
    ) -> Result<Self, CadError> {
        let [ox, oy, oz] = units.lengths(origin)?;
        let angle = units.angle(angle)?;
        Ok(Self::from_matrix(rotation_about(
            Point3::new(ox, oy, oz),
            check_axis(axis)?,
            angle,
        )))
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::identity()
    }
}

/// `parent * child` places `child` inside `parent`'s frame.
impl Mul for Location {
    type Output = Location;

    fn mul(self, rhs: Location) -> Location {
        Location::from_matrix(self.matrix * rhs.matrix)
    }
}

pub(crate) fn rotation_about(origin: Point3, axis: [f64; 3], angle: f64) -> Matrix4 {
    let to_origin = Vector3::new(origin.x, origin.y, origin.z);
    Matrix4::from_translation(to_origin)
        * Matrix4::from_axis_angle(Vector3::new(axis[0], axis[1], axis[2]), Rad(angle))
        * Matrix4::from_translation(-to_origin)
}

/// The XYZ translation of a location, in native units.
///
/// Handy for printing locations while debugging, or turning them into vectors.
pub fn location_position(location: &Location) -> (f64, f64, f64) {
    let t = location.matrix.w.truncate();
    (t.x, t.y, t.z)
}

/// The XYZ translation of a location as quantities in the native length unit.
pub fn location_position_in(units: &CadUnits<'_>, location: &Location) -> [Quantity; 3] {
    let (x, y, z) = location_position(location);
    [units.quantity(x), units.quantity(y), units.quantity(z)]
}

/// Move `shape` by three lengths.
pub fn translate<T: Placeable>(
    units: &CadUnits<'_>,
    shape: &T,
    x: impl Into<Magnitude>,
    y: impl Into<Magnitude>,
    z: impl Into<Magnitude>,
) -> Result<T, CadError> {
    let location = Location::translation(units, x, y, z)?;
    Ok(shape.transformed_by(&location.matrix))
}

/// Rotate `shape` by `angle` about the line through `origin` along `axis`.
pub fn rotate<T: Placeable, M: Into<Magnitude>>(
    units: &CadUnits<'_>,
    shape: &T,
    origin: [M; 3],
    axis: [f64; 3],
    angle: impl Into<Magnitude>,
) -> Result<T, CadError> {
    let location = Location::rotation(units, origin, axis, angle)?;
    Ok(shape.transformed_by(&location.matrix))
}

/// Place `shape` at `location`.
pub fn transformed<T: Placeable>(shape: &T, location: &Location) -> T {
    shape.transformed_by(&location.matrix)
}

/// A copy of `shape` with fresh topology, sharing nothing with the original.
///
/// Useful when a shape produced in isolation (see
/// [`get_positioned_component`](crate::get_positioned_component)) has to be
/// worked on without touching the source.
pub fn shape_copy<T: Placeable>(shape: &T) -> T {
    shape.transformed_by(&Matrix4::identity())
}
