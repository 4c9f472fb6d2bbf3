//! Mesh combining utilities
//!
//! Functions for merging multiple meshes into a single mesh.

use crate::error::MeshError;
use crate::modifiers::{MeshModifier, Transform};
use crate::types::{Mesh, Topology};

/// Combine multiple meshes into one
///
/// Merges meshes by concatenating their vertex and index data. Index offsets are
/// adjusted automatically. All meshes must share a topology; combining an empty
/// slice gives an empty triangle mesh.
///
/// # Example
/// ```
/// use basic_shapes::*;
///
/// let box_mesh = cuboid(1.0, 1.0, 1.0);
/// let ball = sphere(0.5, 8, 4);
///
/// let combined = combine(&[&box_mesh, &ball])?;
/// assert_eq!(combined.vertex_count(), 24 + 26);
/// # Ok::<(), MeshError>(())
/// ```
pub fn combine(meshes: &[&Mesh]) -> Result<Mesh, MeshError> {
    let topology = meshes
        .first()
        .map(|m| m.topology())
        .unwrap_or(Topology::TriangleList);

    if let Some(other) = meshes.iter().find(|m| m.topology() != topology) {
        return Err(MeshError::TopologyMismatch {
            expected: topology,
            found: other.topology(),
        });
    }

    // Calculate total sizes
    let total_vertices: usize = meshes.iter().map(|m| m.vertex_count()).sum();
    let total_indices: usize = meshes.iter().map(|m| m.index_count()).sum();

    if total_vertices > Mesh::MAX_VERTICES {
        return Err(MeshError::TooManyVertices(total_vertices));
    }

    let mut result = Mesh::with_capacity(topology, total_vertices, total_indices);
    for mesh in meshes {
        let vertex_offset = result.vertex_count() as u32;

        for vertex in mesh.vertices() {
            result.push_vertex(*vertex);
        }

        let indices: Vec<u32> = mesh.indices().iter().map(|&i| vertex_offset + i).collect();
        result.extend_indices(&indices);
    }

    Ok(result)
}

/// Combine meshes, transforming each one first
///
/// # Example
/// ```
/// use basic_shapes::*;
///
/// let a = rectangle(1.0, 1.0);
/// let combined = combine_transformed(&[
///     (&a, Transform::translate(-1.0, 0.0, 0.0)),
///     (&a, Transform::translate(1.0, 0.0, 0.0)),
/// ])?;
/// assert_eq!(combined.primitive_count(), 4);
/// # Ok::<(), MeshError>(())
/// ```
pub fn combine_transformed(meshes: &[(&Mesh, Transform)]) -> Result<Mesh, MeshError> {
    let transformed: Vec<Mesh> = meshes
        .iter()
        .map(|(mesh, transform)| transform.apply(mesh))
        .collect();
    let refs: Vec<&Mesh> = transformed.iter().collect();
    combine(&refs)
}
