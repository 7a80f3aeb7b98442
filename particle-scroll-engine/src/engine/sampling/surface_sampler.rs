use bevy::math::Vec3;
use rand::Rng;
use rand::distributions::Distribution;

use super::{AreaDistribution, SamplerError, Triangle, TriangleMesh};

/// Draws points uniformly over the surface of a [`TriangleMesh`].
#[derive(Debug, Clone)]
pub struct SurfaceSampler {
    mesh: TriangleMesh,
    distribution: AreaDistribution,
}

impl SurfaceSampler {
    /// Builds the area table for `mesh`.
    ///
    /// Fails for meshes without a finite, positive surface area.
    pub fn new(mesh: TriangleMesh) -> Result<Self, SamplerError> {
        let distribution = AreaDistribution::new(&mesh)?;
        Ok(Self { mesh, distribution })
    }

    pub fn mesh(&self) -> &TriangleMesh {
        &self.mesh
    }

    pub fn surface_area(&self) -> f64 {
        self.distribution.total()
    }

    /// Draws exactly `count` points.
    pub fn sample_points<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> SampledPoints {
        let mut points = Vec::with_capacity(count);
        for _ in 0..count {
            points.push(self.sample(rng));
        }
        SampledPoints(points.into_boxed_slice())
    }
}

impl Distribution<Vec3> for SurfaceSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let index = self.distribution.sample_index(rng);
        sample_triangle(&self.mesh.triangles()[index], rng)
    }
}

/// Uniform point inside `triangle`.
///
/// Two unit-square coordinates are folded back into the triangle when they
/// land in the far half of the square.
pub fn sample_triangle<R: Rng + ?Sized>(triangle: &Triangle, rng: &mut R) -> Vec3 {
    let mut u: f32 = rng.r#gen();
    let mut v: f32 = rng.r#gen();
    if u + v > 1.0 {
        u = 1.0 - u;
        v = 1.0 - v;
    }
    triangle.point_at(u, v)
}

/// Fixed-size set of sampled surface positions.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledPoints(Box<[Vec3]>);

impl SampledPoints {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Vec3] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec3> {
        self.0.iter()
    }
}

impl From<Vec<Vec3>> for SampledPoints {
    fn from(points: Vec<Vec3>) -> Self {
        Self(points.into_boxed_slice())
    }
}

impl<'a> IntoIterator for &'a SampledPoints {
    type Item = &'a Vec3;
    type IntoIter = std::slice::Iter<'a, Vec3>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn quad_mesh() -> TriangleMesh {
        TriangleMesh::from_triangles([
            Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y),
            Triangle::new(Vec3::X, Vec3::new(1.0, 1.0, 0.0), Vec3::Y),
        ])
    }

    #[test]
    fn returns_requested_count() {
        let sampler = SurfaceSampler::new(quad_mesh()).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for count in [0, 1, 20_000] {
            assert_eq!(sampler.sample_points(count, &mut rng).len(), count);
        }
    }

    #[test]
    fn samples_stay_on_unit_square() {
        let sampler = SurfaceSampler::new(quad_mesh()).unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        for point in &sampler.sample_points(2_000, &mut rng) {
            assert!((0.0..=1.0).contains(&point.x));
            assert!((0.0..=1.0).contains(&point.y));
            assert_eq!(point.z, 0.0);
        }
    }

    #[test]
    fn zero_area_mesh_fails_to_build() {
        let flat = Triangle::new(Vec3::ZERO, Vec3::ZERO, Vec3::X);
        let result = SurfaceSampler::new(TriangleMesh::from_triangles([flat, flat]));
        assert_eq!(result.unwrap_err(), SamplerError::ZeroSurfaceArea);
    }

    #[test]
    fn same_seed_same_points() {
        let sampler = SurfaceSampler::new(quad_mesh()).unwrap();
        let first = sampler.sample_points(64, &mut StdRng::seed_from_u64(3));
        let second = sampler.sample_points(64, &mut StdRng::seed_from_u64(3));
        assert_eq!(first, second);
    }
}
