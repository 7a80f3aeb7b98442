use bevy::math::{Affine3A, Vec3};
use bevy::prelude::Mesh;
use bevy::render::mesh::{PrimitiveTopology, VertexAttributeValues};

use super::{SamplerError, Triangle, TriangleMesh};

/// Reads the triangle list of `mesh` in its local space.
///
/// Indexed and non-indexed triangle lists are both accepted; a mesh without
/// indices is read as consecutive vertex triples.
pub fn triangles_from_mesh(mesh: &Mesh) -> Result<TriangleMesh, SamplerError> {
    let topology = mesh.primitive_topology();
    if topology != PrimitiveTopology::TriangleList {
        return Err(SamplerError::UnsupportedTopology(topology));
    }

    let Some(VertexAttributeValues::Float32x3(positions)) =
        mesh.attribute(Mesh::ATTRIBUTE_POSITION)
    else {
        return Err(SamplerError::MissingPositions);
    };

    let indices: Vec<usize> = match mesh.indices() {
        Some(indices) => indices.iter().collect(),
        None => (0..positions.len()).collect(),
    };

    if indices.len() % 3 != 0 {
        return Err(SamplerError::MalformedIndices(format!(
            "{} indices do not form whole triangles",
            indices.len()
        )));
    }

    let vertex = |index: usize| -> Result<Vec3, SamplerError> {
        positions.get(index).map(|&p| Vec3::from(p)).ok_or_else(|| {
            SamplerError::MalformedIndices(format!(
                "index {index} out of range for {} vertices",
                positions.len()
            ))
        })
    };

    let mut triangles = Vec::with_capacity(indices.len() / 3);
    for corner in indices.chunks_exact(3) {
        triangles.push(Triangle::new(
            vertex(corner[0])?,
            vertex(corner[1])?,
            vertex(corner[2])?,
        ));
    }

    Ok(TriangleMesh::from(triangles))
}

/// Reads the triangle list of `mesh` and maps it into world space.
pub fn world_triangles(mesh: &Mesh, world: &Affine3A) -> Result<TriangleMesh, SamplerError> {
    Ok(triangles_from_mesh(mesh)?.transformed(world))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::mesh::Indices;
    use bevy::render::render_asset::RenderAssetUsages;

    fn mesh_with(positions: Vec<[f32; 3]>, indices: Option<Vec<u32>>) -> Mesh {
        let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
        if let Some(indices) = indices {
            mesh.insert_indices(Indices::U32(indices));
        }
        mesh
    }

    #[test]
    fn reads_indexed_quad() {
        let mesh = mesh_with(
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]],
            Some(vec![0, 1, 2, 0, 2, 3]),
        );
        let triangles = triangles_from_mesh(&mesh).unwrap();

        assert_eq!(triangles.len(), 2);
        assert_eq!(triangles.triangles()[1].c, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn reads_vertex_triples_without_indices() {
        let mesh = mesh_with(
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            None,
        );
        assert_eq!(triangles_from_mesh(&mesh).unwrap().len(), 1);
    }

    #[test]
    fn rejects_out_of_range_index() {
        let mesh = mesh_with(
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            Some(vec![0, 1, 5]),
        );
        assert!(matches!(
            triangles_from_mesh(&mesh),
            Err(SamplerError::MalformedIndices(_))
        ));
    }

    #[test]
    fn rejects_line_topology() {
        let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default());
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vec![[0.0_f32; 3]; 2]);
        assert_eq!(
            triangles_from_mesh(&mesh).unwrap_err(),
            SamplerError::UnsupportedTopology(PrimitiveTopology::LineList)
        );
    }

    #[test]
    fn rejects_mesh_without_positions() {
        let mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
        assert_eq!(
            triangles_from_mesh(&mesh).unwrap_err(),
            SamplerError::MissingPositions
        );
    }

    #[test]
    fn world_transform_is_applied() {
        let mesh = mesh_with(
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            None,
        );
        let world = Affine3A::from_translation(Vec3::new(0.0, 0.0, 4.0));
        let triangles = world_triangles(&mesh, &world).unwrap();

        assert_eq!(triangles.triangles()[0].a, Vec3::new(0.0, 0.0, 4.0));
    }
}
