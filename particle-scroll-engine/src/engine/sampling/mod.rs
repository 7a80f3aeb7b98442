//! Uniform surface sampling of triangle meshes.
//!
//! Converts decoded mesh geometry into a fixed-size set of points whose
//! density is uniform over the mesh's total surface area: triangles are
//! chosen with probability proportional to their area, then a point is drawn
//! uniformly inside the chosen triangle.

/// Error type shared by mesh extraction and sampler construction.
pub mod error;

/// Triangle primitive and immutable triangle mesh.
pub mod triangle;

/// Cumulative area table used to pick triangles by area.
pub mod distribution;

/// Area-weighted point sampler and the sampled point set it produces.
pub mod surface_sampler;

/// Conversion of engine meshes into world-space triangle lists.
pub mod mesh_extraction;

pub use distribution::AreaDistribution;
pub use error::SamplerError;
pub use surface_sampler::{SampledPoints, SurfaceSampler};
pub use triangle::{Triangle, TriangleMesh};
