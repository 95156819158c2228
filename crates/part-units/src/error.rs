use crate::dimension::Dimension;

/// Errors from unit lookup and conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnitError {
    #[error("unknown unit: {label:?}")]
    UnknownUnit { label: String },

    #[error("cannot convert from '{from}' ({from_dimension}) to '{to}' ({to_dimension})")]
    DimensionMismatch {
        from: String,
        from_dimension: Dimension,
        to: String,
        to_dimension: Dimension,
    },

    #[error("failed to parse parameters: {0}")]
    ParameterParse(String),

    #[error("missing parameter: {name}")]
    MissingParameter { name: String },
}
