use super::ConfigError;
use crate::models::FacetCode;

/// Top-level engine error.
#[derive(Debug, thiserror::Error)]
pub enum SpiralError {
    /// A facet score required by an aggregation step is absent.
    #[error("missing required facet score: {facet}")]
    MissingInput { facet: FacetCode },

    /// A score or confidence lies outside its documented range.
    #[error("{field} for {facet} out of range: {value}")]
    InvalidRange {
        facet: FacetCode,
        field: &'static str,
        value: f64,
    },

    /// A facet-score map holds a score under another facet's key.
    #[error("score keyed as {key} carries code {found}")]
    MismatchedFacet { key: FacetCode, found: FacetCode },

    /// The feature bag failed boundary validation.
    #[error("invalid feature {field}: {reason}")]
    InvalidFeature { field: String, reason: String },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Convenience alias used across the workspace.
pub type SpiralResult<T> = Result<T, SpiralError>;
