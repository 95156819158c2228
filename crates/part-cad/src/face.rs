//! Moving from topological faces to geometric planes.

use truck_modeling::geometry::{Curve, Plane, Surface};
use truck_modeling::topology::{Face, Wire};
use truck_modeling::{BoundedCurve, EuclideanSpace, ParametricCurve, Point3, Vector3};

use crate::types::CadError;

/// Points taken along each curved boundary edge when integrating face area.
const CURVE_SAMPLES: usize = 32;

/// Centre of mass of `face`.
///
/// Planar faces use the area centroid of their boundary, holes included, with
/// curved edges sampled as polylines. Other faces, and degenerate planar ones,
/// fall back to the centroid of the outer boundary's vertices.
pub fn face_center(face: &Face) -> Point3 {
    if let Surface::Plane(plane) = face.surface() {
        if let Some(center) = area_centroid(face, &plane) {
            return center;
        }
    }
    vertex_centroid(face)
}

fn area_centroid(face: &Face, plane: &Plane) -> Option<Point3> {
    // Shoelace sums in the plane's (u, v) frame; the centroid is affine invariant.
    let (mut twice_area, mut moment_u, mut moment_v) = (0.0, 0.0, 0.0);
    for wire in &face.boundaries() {
        let uv: Vec<Vector3> = boundary_points(wire)
            .into_iter()
            .map(|p| plane.get_parameter(p))
            .collect();
        for (a, b) in uv.iter().zip(uv.iter().cycle().skip(1)) {
            let cross = a.x * b.y - b.x * a.y;
            twice_area += cross;
            moment_u += (a.x + b.x) * cross;
            moment_v += (a.y + b.y) * cross;
        }
    }
    if twice_area.abs() < 1e-12 {
        return None;
    }
    let (u, v) = (moment_u / (3.0 * twice_area), moment_v / (3.0 * twice_area));
    Some(plane.origin() + u * plane.u_axis() + v * plane.v_axis())
}

/// The boundary of `wire` as a closed polyline, without repeating the start.
fn boundary_points(wire: &Wire) -> Vec<Point3> {
    let mut points = Vec::new();
    for edge in wire.edge_iter() {
        match edge.oriented_curve() {
            Curve::Line(_) => points.push(edge.front().point()),
            curve => {
                let (t0, t1) = curve.range_tuple();
                points.extend((0..CURVE_SAMPLES).map(|i| {
                    curve.subs(t0 + (t1 - t0) * i as f64 / CURVE_SAMPLES as f64)
                }));
            }
        }
    }
    points
}

fn vertex_centroid(face: &Face) -> Point3 {
    let boundaries = face.boundaries();
    let Some(outer) = boundaries.first() else {
        return Point3::origin();
    };

    let mut sum = Vector3::new(0.0, 0.0, 0.0);
    let mut count = 0usize;
    for edge in outer.edge_iter() {
        sum += edge.front().point().to_vec();
        count += 1;
    }
    if count == 0 {
        return Point3::origin();
    }
    Point3::from_vec(sum / count as f64)
}

/// A plane parallel to `face`, through the face's centre of mass.
///
/// The plane keeps the face's orientation, so its normal points out of the
/// solid the face bounds.
pub fn plane_from_face(face: &Face) -> Result<Plane, CadError> {
    let Surface::Plane(plane) = face.oriented_surface() else {
        return Err(CadError::NonPlanarFace);
    };
    let center = face_center(face);
    Ok(Plane::new(
        center,
        center + plane.u_axis(),
        center + plane.v_axis(),
    ))
}
