/// Quad-per-particle mesh and its material.
pub mod particle_mesh;
/// Procedural circle sprite used to round off each particle quad.
pub mod sprite;
