use part_units::UnitError;

/// Errors from CAD helpers.
///
/// Unit errors pass through untouched; kernel failures are reported under the
/// operation that failed.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CadError {
    #[error(transparent)]
    Units(#[from] UnitError),

    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },

    #[error("boolean operation failed: {reason}")]
    BooleanFailed { reason: String },

    #[error("face construction failed: {reason}")]
    FaceConstruction { reason: String },

    #[error("face is not planar")]
    NonPlanarFace,

    #[error("component not found in assembly: {name}")]
    ComponentNotFound { name: String },

    #[error("component has no shapes: {name}")]
    EmptyComponent { name: String },

    #[error("duplicate component name in assembly: {name}")]
    DuplicateComponent { name: String },
}

/// Reject dimensions truck would silently turn into degenerate geometry.
pub(crate) fn check_positive(name: &str, value: f64) -> Result<(), CadError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CadError::InvalidParameter {
            reason: format!("{name} must be positive and finite, got {value}"),
        })
    }
}

pub(crate) fn check_axis(axis: [f64; 3]) -> Result<[f64; 3], CadError> {
    let len = (axis[0] * axis[0] + axis[1] * axis[1] + axis[2] * axis[2]).sqrt();
    if !len.is_finite() || len < 1e-12 {
        return Err(CadError::InvalidParameter {
            reason: "axis has zero length".to_string(),
        });
    }
    Ok([axis[0] / len, axis[1] / len, axis[2] / len])
}
