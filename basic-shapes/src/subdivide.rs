//! Midpoint subdivision, sphere projection and vertex welding
//!
//! Subdivision is flat: midpoints are plain averages, so a subdivided polyhedron
//! only becomes round after a single `spherify` pass at the end.

use glam::{Vec2, Vec3};
use hashbrown::HashMap;
use tracing::{debug, warn};

use crate::types::{Mesh, Topology, Vertex};

/// Subdivide every triangle into 4, `depth` times
///
/// # Algorithm
///
/// For each triangle (v0, v1, v2):
/// 1. Create midpoints m0 = mid(v0, v1), m1 = mid(v1, v2), m2 = mid(v0, v2),
///    interpolating position and UV
/// 2. Emit the block `[v0, v1, v2, m0, m1, m2]` at offset n
/// 3. Emit triangles `(n, n+3, n+5)`, `(n+3, n+4, n+5)`, `(n+5, n+4, n+2)`,
///    `(n+3, n+1, n+4)`
///
/// Vertices are never shared between blocks, so coincident vertices pile up along
/// shared edges. Use [`weld`] afterwards to merge them.
///
/// # Complexity
///
/// For an input of T triangles: `T × 4^depth` triangles and
/// `T × 6 × 4^(depth-1)` vertices.
///
/// A `depth` of 0 returns an identical copy. Line meshes are returned unchanged.
/// A depth whose output would not fit a 32-bit index buffer is lowered to the
/// deepest one that does.
pub fn subdivide(mesh: &Mesh, depth: u32) -> Mesh {
    if mesh.topology() != Topology::TriangleList {
        if depth > 0 {
            warn!("subdivide: {} meshes cannot be subdivided, returning input", mesh.topology());
        }
        return mesh.clone();
    }
    if mesh.index_count() == 0 {
        return mesh.clone();
    }

    let max_depth = max_subdivide_depth(mesh.primitive_count());
    let depth = if depth > max_depth {
        warn!("subdivide: depth {depth} overflows 32-bit indices, clamping to {max_depth}");
        max_depth
    } else {
        depth
    };

    let mut current = mesh.clone();
    for _ in 0..depth {
        current = subdivide_once(&current);
    }

    if depth > 0 {
        debug!(
            "subdivide: depth {depth}, {} -> {} triangles",
            mesh.primitive_count(),
            current.primitive_count()
        );
    }
    current
}

/// Deepest subdivision of `triangles` triangles whose vertices fit a 32-bit index
///
/// Pass `d` emits 6 vertices for each of the `triangles × 4^(d-1)` triangles it
/// splits.
pub(crate) fn max_subdivide_depth(triangles: usize) -> u32 {
    if triangles == 0 {
        return u32::MAX;
    }
    let triangles = triangles as u64;
    let mut depth = 0;
    while triangles.saturating_mul(6).saturating_mul(4u64.pow(depth)) <= Mesh::MAX_VERTICES as u64 {
        depth += 1;
    }
    depth
}

/// Perform a single subdivision pass
fn subdivide_once(mesh: &Mesh) -> Mesh {
    let triangles = mesh.primitive_count();
    let mut result = Mesh::with_capacity(Topology::TriangleList, triangles * 6, triangles * 12);

    let vertices = mesh.vertices();
    for tri in mesh.indices().chunks_exact(3) {
        let v0 = vertices[tri[0] as usize];
        let v1 = vertices[tri[1] as usize];
        let v2 = vertices[tri[2] as usize];

        let m0 = Vertex::midpoint(&v0, &v1);
        let m1 = Vertex::midpoint(&v1, &v2);
        let m2 = Vertex::midpoint(&v0, &v2);

        let n = result.vertex_count() as u32;
        for vertex in [v0, v1, v2, m0, m1, m2] {
            result.push_vertex(vertex);
        }

        result.add_triangle(n, n + 3, n + 5);
        result.add_triangle(n + 3, n + 4, n + 5);
        result.add_triangle(n + 5, n + 4, n + 2);
        result.add_triangle(n + 3, n + 1, n + 4);
    }

    result
}

/// Project every vertex onto the sphere of `radius` centered at the origin
///
/// UVs and indices are untouched. Vertices at the origin have no direction and
/// stay where they are.
pub fn spherify(mesh: &Mesh, radius: f32) -> Mesh {
    let mut result = mesh.clone();
    for vertex in result.vertices_mut() {
        vertex.position = vertex.position.normalize_or_zero() * radius;
    }
    result
}

/// Merge vertices with bit-identical position and UV
///
/// The first occurrence of each distinct vertex keeps its relative order; the index
/// list is remapped and the topology kept. Vertices that only differ in UV (seam
/// duplicates) stay separate.
pub fn weld(mesh: &Mesh) -> Mesh {
    type VertexKey = ([u32; 3], [u32; 2]);
    fn key(vertex: &Vertex) -> VertexKey {
        let Vec3 { x, y, z } = vertex.position;
        let Vec2 { x: u, y: v } = vertex.tex_coord;
        // +0.0 and -0.0 compare equal, so fold them onto one key
        let bits = |f: f32| if f == 0.0 { 0 } else { f.to_bits() };
        ([bits(x), bits(y), bits(z)], [bits(u), bits(v)])
    }

    let mut lookup: HashMap<VertexKey, u32> = HashMap::with_capacity(mesh.vertex_count());
    let mut remap = Vec::with_capacity(mesh.vertex_count());
    let mut result = Mesh::with_capacity(mesh.topology(), mesh.vertex_count(), mesh.index_count());

    for vertex in mesh.vertices() {
        let index = *lookup
            .entry(key(vertex))
            .or_insert_with(|| result.push_vertex(*vertex));
        remap.push(index);
    }

    let indices: Vec<u32> = mesh.indices().iter().map(|&i| remap[i as usize]).collect();
    result.extend_indices(&indices);

    debug!(
        "weld: {} -> {} vertices",
        mesh.vertex_count(),
        result.vertex_count()
    );
    result
}
