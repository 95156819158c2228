//! Linear, grid and polar arrays of copies.

use std::f64::consts::TAU;

use part_units::Magnitude;
use tracing::debug;
use truck_modeling::{Matrix4, Point3, Vector3};

use crate::transform::{rotation_about, Placeable};
use crate::types::{check_axis, CadError};
use crate::units::CadUnits;

/// `count` copies of `shape`, the i-th moved by `i * spacing`.
///
/// The first copy sits where `shape` is.
pub fn linear_pattern<T: Placeable, M: Into<Magnitude>>(
    units: &CadUnits<'_>,
    shape: &T,
    count: usize,
    spacing: [M; 3],
) -> Result<Vec<T>, CadError> {
    let [dx, dy, dz] = units.lengths(spacing)?;
    debug!(count, spacing = ?[dx, dy, dz], "linear pattern");
    Ok((0..count)
        .map(|i| {
            let k = i as f64;
            shape.transformed_by(&Matrix4::from_translation(Vector3::new(
                k * dx,
                k * dy,
                k * dz,
            )))
        })
        .collect())
}

/// An `nx` by `ny` grid of copies in the XY plane, row by row along X.
pub fn grid_pattern<T: Placeable, M: Into<Magnitude>>(
    units: &CadUnits<'_>,
    shape: &T,
    counts: (usize, usize),
    spacing: (M, M),
) -> Result<Vec<T>, CadError> {
    let (nx, ny) = counts;
    let [dx, dy] = units.lengths([spacing.0, spacing.1])?;
    debug!(nx, ny, dx, dy, "grid pattern");

    let mut copies = Vec::with_capacity(nx * ny);
    for j in 0..ny {
        for i in 0..nx {
            let offset = Vector3::new(i as f64 * dx, j as f64 * dy, 0.0);
            copies.push(shape.transformed_by(&Matrix4::from_translation(offset)));
        }
    }
    Ok(copies)
}

/// `count` copies of `shape` rotated about the line through `center` along `axis`.
///
/// A full turn is divided into `count` equal steps. Any other `total_angle`
/// is divided into `count - 1` steps, so the last copy lands on the end angle.
pub fn polar_pattern<T: Placeable, M: Into<Magnitude>>(
    units: &CadUnits<'_>,
    shape: &T,
    count: usize,
    center: [M; 3],
    axis: [f64; 3],
    total_angle: impl Into<Magnitude>,
) -> Result<Vec<T>, CadError> {
    let [cx, cy, cz] = units.lengths(center)?;
    let total = units.angle(total_angle)?;
    let axis = check_axis(axis)?;
    let step = polar_step(total, count);
    debug!(count, total, step, "polar pattern");

    let center = Point3::new(cx, cy, cz);
    Ok((0..count)
        .map(|i| shape.transformed_by(&rotation_about(center, axis, i as f64 * step)))
        .collect())
}

fn polar_step(total: f64, count: usize) -> f64 {
    if (total.abs() - TAU).abs() < 1e-9 {
        total / count.max(1) as f64
    } else if count > 1 {
        total / (count - 1) as f64
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use part_units::{EngineeringSystem, UnitRegistry};
    use std::f64::consts::PI;

    #[test]
    fn test_polar_step_full_turn() {
        assert!((polar_step(TAU, 4) - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_polar_step_partial_turn_ends_on_angle() {
        assert!((polar_step(PI, 3) - PI / 2.0).abs() < 1e-12);
        assert_eq!(polar_step(PI, 1), 0.0);
    }

    #[test]
    fn test_linear_pattern_of_points() {
        let reg = UnitRegistry::with_system(EngineeringSystem::SiEngineering);
        let units = CadUnits::new(&reg);
        let origin = Point3::new(0.0, 0.0, 0.0);
        let spacing: [Magnitude; 3] = [reg.wrap(1.0, "cm").unwrap().into(), 0.0.into(), 0.0.into()];
        let points = linear_pattern(&units, &origin, 3, spacing).unwrap();
        assert_eq!(points.len(), 3);
        assert!((points[2].x - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_count_is_empty() {
        let reg = UnitRegistry::new();
        let units = CadUnits::new(&reg);
        let p = Point3::new(1.0, 0.0, 0.0);
        assert!(linear_pattern(&units, &p, 0, [1.0, 0.0, 0.0]).unwrap().is_empty());
        assert!(polar_pattern(&units, &p, 0, [0.0; 3], [0.0, 0.0, 1.0], TAU)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_grid_pattern_row_major() {
        let reg = UnitRegistry::new();
        let units = CadUnits::new(&reg);
        let p = Point3::new(0.0, 0.0, 0.0);
        let points = grid_pattern(&units, &p, (3, 2), (1.0, 5.0)).unwrap();
        assert_eq!(points.len(), 6);
        assert_eq!(points[1], Point3::new(1.0, 0.0, 0.0));
        assert_eq!(points[3], Point3::new(0.0, 5.0, 0.0));
    }

    #[test]
    fn test_polar_pattern_quarter_turns() {
        let reg = UnitRegistry::new();
        let units = CadUnits::new(&reg);
        let p = Point3::new(1.0, 0.0, 0.0);
        let points = polar_pattern(
            &units,
            &p,
            4,
            [0.0; 3],
            [0.0, 0.0, 1.0],
            reg.wrap(360.0, "degree").unwrap(),
        )
        .unwrap();
        assert_eq!(points.len(), 4);
        assert!((points[1].x).abs() < 1e-9 && (points[1].y - 1.0).abs() < 1e-9);
        assert!((points[2].x + 1.0).abs() < 1e-9 && points[2].y.abs() < 1e-9);
    }
}
