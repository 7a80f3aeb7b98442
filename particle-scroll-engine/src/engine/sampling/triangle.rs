use bevy::math::{Affine3A, Vec3};

/// A triangle given by three vertex positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
}

impl Triangle {
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// Half the magnitude of the edge cross product.
    pub fn area(&self) -> f32 {
        (self.b - self.a).cross(self.c - self.a).length() * 0.5
    }

    /// Point at barycentric weights `(1 - u - v, u, v)`.
    pub fn point_at(&self, u: f32, v: f32) -> Vec3 {
        self.a + (self.b - self.a) * u + (self.c - self.a) * v
    }

    pub fn transformed(&self, transform: &Affine3A) -> Self {
        Self {
            a: transform.transform_point3(self.a),
            b: transform.transform_point3(self.b),
            c: transform.transform_point3(self.c),
        }
    }
}

/// Ordered, immutable list of triangles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    triangles: Box<[Triangle]>,
}

impl TriangleMesh {
    pub fn from_triangles(triangles: impl IntoIterator<Item = Triangle>) -> Self {
        Self {
            triangles: triangles.into_iter().collect(),
        }
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Copy of the mesh with every vertex mapped through `transform`.
    pub fn transformed(&self, transform: &Affine3A) -> Self {
        Self::from_triangles(self.triangles.iter().map(|t| t.transformed(transform)))
    }
}

impl From<Vec<Triangle>> for TriangleMesh {
    fn from(triangles: Vec<Triangle>) -> Self {
        Self {
            triangles: triangles.into_boxed_slice(),
        }
    }
}
