//! Unit-aware helpers over the truck B-rep kernel.
//!
//! Every helper accepts dimensions as plain numbers or unit-wrapped
//! quantities, normalizes them through a [`CadUnits`] context, and forwards
//! plain numbers to truck. Truck's objects come back unmodified.

pub mod assembly;
pub mod boolean;
pub mod config;
pub mod face;
pub mod pattern;
pub mod points;
pub mod primitives;
pub mod tessellation;
pub mod transform;
pub mod types;
pub mod units;

pub use assembly::{get_positioned_component, Assembly};
pub use boolean::fuse_all;
pub use config::CadConfig;
pub use face::{face_center, plane_from_face};
pub use pattern::{grid_pattern, linear_pattern, polar_pattern};
pub use points::{point, vector, vertex};
pub use primitives::{make_box, make_cylinder, make_sphere};
pub use tessellation::tessellate;
pub use transform::{
    location_position, location_position_in, rotate, shape_copy, transformed, translate,
    Location, Placeable,
};
pub use types::CadError;
pub use units::CadUnits;
