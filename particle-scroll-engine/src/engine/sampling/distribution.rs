use rand::Rng;

use super::{SamplerError, TriangleMesh};

/// Running sum of triangle areas over a mesh.
///
/// Weights are accumulated in `f64` so that large meshes made of many tiny
/// triangles keep a strictly increasing table.
#[derive(Debug, Clone)]
pub struct AreaDistribution {
    cumulative: Box<[f64]>,
    total: f64,
}

impl AreaDistribution {
    pub fn new(mesh: &TriangleMesh) -> Result<Self, SamplerError> {
        let mut running = 0.0_f64;
        let cumulative: Box<[f64]> = mesh
            .triangles()
            .iter()
            .map(|triangle| {
                running += f64::from(triangle.area());
                running
            })
            .collect();

        if !running.is_finite() {
            return Err(SamplerError::NonFiniteSurfaceArea(running));
        }
        if running <= 0.0 {
            return Err(SamplerError::ZeroSurfaceArea);
        }

        Ok(Self {
            cumulative,
            total: running,
        })
    }

    /// Total surface area of the mesh.
    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// Index of the first triangle whose cumulative weight exceeds `r`.
    ///
    /// `r` is expected in `[0, total)`; values at or past the end select the
    /// last triangle.
    pub fn select(&self, r: f64) -> usize {
        let index = self.cumulative.partition_point(|&weight| weight <= r);
        index.min(self.cumulative.len() - 1)
    }

    pub fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.select(rng.gen_range(0.0..self.total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::sampling::Triangle;
    use bevy::math::Vec3;

    fn unit_triangle(offset: f32, scale: f32) -> Triangle {
        let base = Vec3::new(offset, 0.0, 0.0);
        Triangle::new(base, base + Vec3::X * scale, base + Vec3::Y * scale)
    }

    #[test]
    fn cumulative_weights_increase() {
        let mesh = TriangleMesh::from_triangles([
            unit_triangle(0.0, 1.0),
            unit_triangle(5.0, 2.0),
            unit_triangle(10.0, 1.0),
        ]);
        let distribution = AreaDistribution::new(&mesh).unwrap();

        assert_eq!(distribution.cumulative(), &[0.5, 2.5, 3.0]);
        assert_eq!(distribution.total(), 3.0);
    }

    #[test]
    fn select_picks_first_weight_above_value() {
        let mesh = TriangleMesh::from_triangles([unit_triangle(0.0, 1.0), unit_triangle(5.0, 2.0)]);
        let distribution = AreaDistribution::new(&mesh).unwrap();

        assert_eq!(distribution.select(0.0), 0);
        assert_eq!(distribution.select(0.49), 0);
        assert_eq!(distribution.select(0.5), 1);
        assert_eq!(distribution.select(2.49), 1);
        assert_eq!(distribution.select(2.5), 1);
    }

    #[test]
    fn degenerate_triangles_are_never_selected() {
        let flat = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::X * 2.0);
        let mesh = TriangleMesh::from_triangles([flat, unit_triangle(0.0, 1.0), flat]);
        let distribution = AreaDistribution::new(&mesh).unwrap();

        for r in [0.0, 0.1, 0.25, 0.49] {
            assert_eq!(distribution.select(r), 1);
        }
    }

    #[test]
    fn empty_mesh_has_zero_area() {
        let result = AreaDistribution::new(&TriangleMesh::default());
        assert_eq!(result.unwrap_err(), SamplerError::ZeroSurfaceArea);
    }

    #[test]
    fn nan_vertices_are_rejected() {
        let mesh = TriangleMesh::from_triangles([Triangle::new(
            Vec3::ZERO,
            Vec3::new(f32::NAN, 0.0, 0.0),
            Vec3::Y,
        )]);
        assert!(matches!(
            AreaDistribution::new(&mesh),
            Err(SamplerError::NonFiniteSurfaceArea(_))
        ));
    }
}
