//! Box, cylinder and sphere builders on top of truck's sweep API.
//!
//! truck has no built-in box/cylinder/sphere; everything is successive sweeps.

use std::f64::consts::PI;

use part_units::Magnitude;
use tracing::{info, instrument};
use truck_modeling::builder;
use truck_modeling::topology::{Solid, Wire};
use truck_modeling::{EuclideanSpace, Point3, Rad, Vector3};

use crate::types::{check_positive, CadError};
use crate::units::CadUnits;

/// Box solid with one corner at the origin, extending to (width, height, depth).
pub fn make_box(
    units: &CadUnits<'_>,
    width: impl Into<Magnitude>,
    height: impl Into<Magnitude>,
    depth: impl Into<Magnitude>,
) -> Result<Solid, CadError> {
    let [w, h, d] = units.lengths([width.into(), height.into(), depth.into()])?;
    box_solid(w, h, d)
}

/// Cylinder with its base centered at the origin in the XY plane, extending along +Z.
pub fn make_cylinder(
    units: &CadUnits<'_>,
    radius: impl Into<Magnitude>,
    height: impl Into<Magnitude>,
) -> Result<Solid, CadError> {
    let [r, h] = units.lengths([radius.into(), height.into()])?;
    cylinder_solid(r, h)
}

/// Sphere centered at the origin.
pub fn make_sphere(units: &CadUnits<'_>, radius: impl Into<Magnitude>) -> Result<Solid, CadError> {
    sphere_solid(units.length(radius)?)
}

#[instrument]
fn box_solid(w: f64, h: f64, d: f64) -> Result<Solid, CadError> {
    check_positive("width", w)?;
    check_positive("height", h)?;
    check_positive("depth", d)?;
    info!(size = ?[w, h, d], "creating box primitive");

    let v = builder::vertex(Point3::new(0.0, 0.0, 0.0));
    let edge = builder::tsweep(&v, Vector3::new(w, 0.0, 0.0));
    let face = builder::tsweep(&edge, Vector3::new(0.0, h, 0.0));
    Ok(builder::tsweep(&face, Vector3::new(0.0, 0.0, d)))
}

#[instrument]
fn cylinder_solid(radius: f64, height: f64) -> Result<Solid, CadError> {
    check_positive("radius", radius)?;
    check_positive("height", height)?;
    info!(radius, height, "creating cylinder primitive");

    let v = builder::vertex(Point3::new(radius, 0.0, 0.0));
    let wire = builder::rsweep(&v, Point3::origin(), Vector3::unit_z(), Rad(2.0 * PI));
    let face = builder::try_attach_plane(&[wire]).map_err(|e| CadError::FaceConstruction {
        reason: format!("circular face: {e}"),
    })?;
    Ok(builder::tsweep(&face, Vector3::new(0.0, 0.0, height)))
}

#[instrument]
fn sphere_solid(radius: f64) -> Result<Solid, CadError> {
    check_positive("radius", radius)?;
    info!(radius, "creating sphere primitive");

    // Meridian from the north pole over +X to the south pole, in the XZ plane
    let north = builder::vertex(Point3::new(0.0, 0.0, radius));
    let meridian: Wire = builder::rsweep(&north, Point3::origin(), Vector3::unit_y(), Rad(PI));

    // Both ends lie on the Z axis, so the revolution closes at the poles
    let shell = builder::cone(&meridian, Vector3::unit_z(), Rad(2.0 * PI));
    Solid::try_new(vec![shell]).map_err(|e| CadError::FaceConstruction {
        reason: format!("sphere shell: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use part_units::{EngineeringSystem, UnitRegistry};
    use std::collections::HashSet;

    fn extents(solid: &Solid) -> [f64; 3] {
        let mut min = [f64::MAX; 3];
        let mut max = [f64::MIN; 3];
        for shell in solid.boundaries() {
            for v in shell.vertex_iter() {
                let p = v.point();
                for i in 0..3 {
                    min[i] = min[i].min(p[i]);
                    max[i] = max[i].max(p[i]);
                }
            }
        }
        [max[0] - min[0], max[1] - min[1], max[2] - min[2]]
    }

    #[test]
    fn test_make_box_topology() {
        let reg = UnitRegistry::new();
        let units = CadUnits::new(&reg);
        let solid = make_box(&units, 1.0, 2.0, 3.0).unwrap();

        let boundaries = solid.boundaries();
        assert_eq!(boundaries.len(), 1, "Box should have 1 shell");

        let shell = &boundaries[0];
        let faces: Vec<_> = shell.face_iter().collect();
        let edge_ids: HashSet<_> = shell.edge_iter().map(|e| e.id()).collect();
        let vert_ids: HashSet<_> = shell.vertex_iter().map(|v| v.id()).collect();

        assert_eq!(faces.len(), 6, "Box should have 6 faces");
        assert_eq!(edge_ids.len(), 12, "Box should have 12 edges");
        assert_eq!(vert_ids.len(), 8, "Box should have 8 vertices");
    }

    #[test]
    fn test_make_box_dimensions_in_millimeters() {
        let reg = UnitRegistry::with_system(EngineeringSystem::SiEngineering);
        let units = CadUnits::new(&reg);
        let solid = make_box(
            &units,
            reg.wrap(2.0, "cm").unwrap(),
            reg.wrap(1.0, "inch").unwrap(),
            4.0,
        )
        .unwrap();

        let size = extents(&solid);
        let eps = 1e-9;
        assert!((size[0] - 20.0).abs() < eps, "Width should be 20mm");
        assert!((size[1] - 25.4).abs() < eps, "Height should be 25.4mm");
        assert!((size[2] - 4.0).abs() < eps, "Depth should be 4mm");
    }

    #[test]
    fn test_make_cylinder_topology() {
        let reg = UnitRegistry::new();
        let units = CadUnits::new(&reg);
        let solid = make_cylinder(&units, 1.0, 2.0).unwrap();

        let boundaries = solid.boundaries();
        assert_eq!(boundaries.len(), 1, "Cylinder should have 1 shell");
        // At minimum: top + bottom + side(s).
        assert!(boundaries[0].face_iter().count() >= 3);
    }

    #[test]
    fn test_make_sphere_single_shell() {
        let reg = UnitRegistry::new();
        let units = CadUnits::new(&reg);
        let solid = make_sphere(&units, 1.5).unwrap();
        assert_eq!(solid.boundaries().len(), 1);
        assert!(solid.boundaries()[0].face_iter().count() >= 1);
    }

    #[test]
    fn test_make_sphere_reaches_both_poles() {
        let reg = UnitRegistry::with_system(EngineeringSystem::SiEngineering);
        let units = CadUnits::new(&reg);
        let solid = make_sphere(&units, reg.wrap(1.0, "cm").unwrap()).unwrap();
        let size = extents(&solid);
        assert!((size[2] - 20.0).abs() < 1e-9, "Sphere should span 20mm along Z");
    }

    #[test]
    fn test_degenerate_dimensions_rejected() {
        let reg = UnitRegistry::new();
        let units = CadUnits::new(&reg);
        assert!(matches!(
            make_box(&units, 0.0, 1.0, 1.0),
            Err(CadError::InvalidParameter { .. })
        ));
        assert!(matches!(
            make_cylinder(&units, 1.0, f64::NAN),
            Err(CadError::InvalidParameter { .. })
        ));
        assert!(matches!(
            make_sphere(&units, -2.0),
            Err(CadError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_unit_errors_pass_through() {
        let reg = UnitRegistry::new();
        let units = CadUnits::new(&reg);
        let err = make_sphere(&units, reg.wrap(1.0, "kilogram").unwrap()).unwrap_err();
        assert!(matches!(err, CadError::Units(_)));
    }
}
