use bevy::render::mesh::PrimitiveTopology;
use thiserror::Error;

/// Failures while turning a mesh into a sampler.
///
/// All of these mean the asset cannot produce a particle cloud; callers do
/// not attempt partial recovery.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SamplerError {
    #[error("mesh has zero surface area")]
    ZeroSurfaceArea,
    #[error("mesh surface area is not finite ({0})")]
    NonFiniteSurfaceArea(f64),
    #[error("mesh topology {0:?} is not a triangle list")]
    UnsupportedTopology(PrimitiveTopology),
    #[error("mesh has no Float32x3 position attribute")]
    MissingPositions,
    #[error("index buffer is malformed: {0}")]
    MalformedIndices(String),
}
