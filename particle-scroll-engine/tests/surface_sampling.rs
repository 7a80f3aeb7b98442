use bevy::math::Vec3;
use particle_scroll_engine::engine::sampling::{
    SamplerError, SurfaceSampler, Triangle, TriangleMesh,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn sampler(triangles: Vec<Triangle>) -> Result<SurfaceSampler, SamplerError> {
    SurfaceSampler::new(TriangleMesh::from(triangles))
}

/// Barycentric weights of `p` with respect to `triangle`.
fn barycentric(triangle: &Triangle, p: Vec3) -> (f64, f64, f64) {
    let a = triangle.a.as_dvec3();
    let v0 = triangle.b.as_dvec3() - a;
    let v1 = triangle.c.as_dvec3() - a;
    let v2 = p.as_dvec3() - a;

    let d00 = v0.dot(v0);
    let d01 = v0.dot(v1);
    let d11 = v1.dot(v1);
    let d20 = v2.dot(v0);
    let d21 = v2.dot(v1);
    let denom = d00 * d11 - d01 * d01;

    let v = (d11 * d20 - d01 * d21) / denom;
    let w = (d00 * d21 - d01 * d20) / denom;
    (1.0 - v - w, v, w)
}

#[test]
fn samples_stay_inside_a_single_triangle() {
    let triangle = Triangle::new(
        Vec3::new(-1.0, 0.5, 2.0),
        Vec3::new(3.0, -1.0, 0.0),
        Vec3::new(0.5, 2.0, -1.5),
    );
    let sampler = sampler(vec![triangle]).unwrap();
    let normal = (triangle.b - triangle.a)
        .as_dvec3()
        .cross((triangle.c - triangle.a).as_dvec3())
        .normalize();

    let mut rng = StdRng::seed_from_u64(7);
    let points = sampler.sample_points(5_000, &mut rng);

    const TOLERANCE: f64 = 1e-4;
    for point in &points {
        let (u, v, w) = barycentric(&triangle, *point);
        for weight in [u, v, w] {
            assert!(
                (-TOLERANCE..=1.0 + TOLERANCE).contains(&weight),
                "{point} has weight {weight}"
            );
        }
        assert!((u + v + w - 1.0).abs() < TOLERANCE);

        let off_plane = (point.as_dvec3() - triangle.a.as_dvec3()).dot(normal);
        assert!(off_plane.abs() < TOLERANCE, "{point} is {off_plane} off plane");
    }
}

#[test]
fn triangles_are_chosen_in_proportion_to_area() {
    // Area 0.5 at z = 0 and area 1.5 at z = 5.
    let small = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y);
    let large = Triangle::new(
        Vec3::new(0.0, 0.0, 5.0),
        Vec3::new(3.0, 0.0, 5.0),
        Vec3::new(0.0, 1.0, 5.0),
    );
    let sampler = sampler(vec![small, large]).unwrap();
    assert!((sampler.surface_area() - 2.0).abs() < 1e-6);

    let mut rng = StdRng::seed_from_u64(2024);
    let draws = 100_000;
    let points = sampler.sample_points(draws, &mut rng);
    let on_large = points.iter().filter(|p| p.z > 2.5).count();

    let share = on_large as f64 / draws as f64;
    assert!((share - 0.75).abs() <= 0.01, "large triangle share {share}");
}

#[test]
fn returns_exactly_the_requested_count() {
    let sampler = sampler(vec![Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Z)]).unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    for count in [0, 1, 20_000] {
        let points = sampler.sample_points(count, &mut rng);
        assert_eq!(points.len(), count);
        assert!(points.iter().all(|p| p.is_finite()));
    }
}

#[test]
fn zero_area_mesh_fails_every_time() {
    let collapsed = vec![
        Triangle::new(Vec3::ZERO, Vec3::X, Vec3::X * 2.0),
        Triangle::new(Vec3::Y, Vec3::Y, Vec3::Y),
    ];
    for _ in 0..3 {
        assert_eq!(
            sampler(collapsed.clone()).unwrap_err(),
            SamplerError::ZeroSurfaceArea
        );
    }
    assert_eq!(sampler(Vec::new()).unwrap_err(), SamplerError::ZeroSurfaceArea);
}

#[test]
fn non_finite_geometry_is_rejected() {
    let poisoned = Triangle::new(Vec3::ZERO, Vec3::new(f32::NAN, 0.0, 0.0), Vec3::Y);
    let result = sampler(vec![Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y), poisoned]);
    assert!(matches!(result, Err(SamplerError::NonFiniteSurfaceArea(_))));

    let huge = Triangle::new(
        Vec3::ZERO,
        Vec3::new(f32::MAX, 0.0, 0.0),
        Vec3::new(0.0, f32::MAX, 0.0),
    );
    assert!(matches!(
        sampler(vec![huge]),
        Err(SamplerError::NonFiniteSurfaceArea(_))
    ));
}

#[test]
fn seeded_sampling_is_reproducible() {
    let sampler = sampler(vec![Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y)]).unwrap();
    let first = sampler.sample_points(64, &mut StdRng::seed_from_u64(99));
    let second = sampler.sample_points(64, &mut StdRng::seed_from_u64(99));
    assert_eq!(first, second);
}
