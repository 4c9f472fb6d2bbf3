//! Mesh types
//!
//! Shared types for procedural mesh generation.

use std::fmt;

use bytemuck::{Pod, Zeroable, cast_slice};
use glam::{Vec2, Vec3};

use crate::error::MeshError;

/// Vertex with position and texture coordinates
///
/// Laid out as `[f32; 3]` position followed by `[f32; 2]` UV, 20 bytes total, so a
/// vertex slice can be handed to a GPU vertex buffer as-is.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec3,
    pub tex_coord: Vec2,
}

impl Vertex {
    /// Create a new vertex
    pub fn new(position: Vec3, tex_coord: Vec2) -> Self {
        Self {
            position,
            tex_coord,
        }
    }

    /// Midpoint of two vertices, position and UV interpolated linearly
    pub fn midpoint(a: &Vertex, b: &Vertex) -> Self {
        Self {
            position: (a.position + b.position) * 0.5,
            tex_coord: (a.tex_coord + b.tex_coord) * 0.5,
        }
    }
}

/// How the index list of a mesh is grouped into primitives
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Every 3 indices form a triangle
    #[default]
    TriangleList,
    /// Every 2 indices form a line segment
    LineList,
}

impl Topology {
    /// Number of indices consumed by one primitive
    pub fn indices_per_primitive(self) -> usize {
        match self {
            Topology::TriangleList => 3,
            Topology::LineList => 2,
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topology::TriangleList => write!(f, "triangle-list"),
            Topology::LineList => write!(f, "line-list"),
        }
    }
}

/// Generated mesh data
///
/// A mesh is built whole by a generator or modifier and is read-only afterwards.
/// The vertex list is ordered: `indices` refer to it positionally, grouped by
/// `topology`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    topology: Topology,
}

impl Mesh {
    /// Size of one vertex in a GPU vertex buffer
    pub const VERTEX_STRIDE: usize = std::mem::size_of::<Vertex>();

    /// Size of one index in a GPU index buffer
    pub const INDEX_STRIDE: usize = std::mem::size_of::<u32>();

    /// Most vertices a mesh can address with 32-bit indices
    pub const MAX_VERTICES: usize = u32::MAX as usize;

    /// Create an empty mesh with room for `vertices` vertices and `indices` indices
    pub(crate) fn with_capacity(topology: Topology, vertices: usize, indices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
            topology,
        }
    }

    /// Build a mesh from raw parts, checking every index and the primitive grouping
    pub fn from_parts(
        vertices: Vec<Vertex>,
        indices: Vec<u32>,
        topology: Topology,
    ) -> Result<Self, MeshError> {
        let mesh = Self {
            vertices,
            indices,
            topology,
        };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Split the mesh back into its vertex list, index list and topology
    pub fn into_parts(self) -> (Vec<Vertex>, Vec<u32>, Topology) {
        (self.vertices, self.indices, self.topology)
    }

    /// Check the mesh invariants
    ///
    /// Every index must address an existing vertex, the index count must be a
    /// whole number of primitives, and the vertex count must fit a 32-bit index.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.vertices.len() > Self::MAX_VERTICES {
            return Err(MeshError::TooManyVertices(self.vertices.len()));
        }

        let stride = self.topology.indices_per_primitive();
        if self.indices.len() % stride != 0 {
            return Err(MeshError::IncompletePrimitive {
                topology: self.topology,
                len: self.indices.len(),
                stride,
            });
        }

        let vertex_count = self.vertices.len();
        if let Some((position, &index)) = self
            .indices
            .iter()
            .enumerate()
            .find(|(_, index)| **index as usize >= vertex_count)
        {
            return Err(MeshError::IndexOutOfRange {
                position,
                index,
                vertex_count,
            });
        }

        Ok(())
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get index count
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of triangles or line segments, depending on topology
    pub fn primitive_count(&self) -> usize {
        self.indices.len() / self.topology.indices_per_primitive()
    }

    /// Iterate over the vertex positions in order
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.vertices.iter().map(|v| v.position)
    }

    /// Axis-aligned extents as `(min, max)`, or `None` for an empty mesh
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut positions = self.positions();
        let first = positions.next()?;
        Some(positions.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }

    /// Byte size of the vertex list in a GPU buffer
    pub fn vertex_list_size(&self) -> usize {
        self.vertices.len() * Self::VERTEX_STRIDE
    }

    /// Byte size of the index list in a GPU buffer
    pub fn index_list_size(&self) -> usize {
        self.indices.len() * Self::INDEX_STRIDE
    }

    /// Vertex list as raw bytes, ready for a vertex buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        cast_slice(&self.vertices)
    }

    /// Index list as raw bytes (32-bit unsigned), ready for an index buffer upload
    pub fn index_bytes(&self) -> &[u8] {
        cast_slice(&self.indices)
    }

    /// Add a vertex and return its index
    pub(crate) fn add_vertex(&mut self, position: Vec3, tex_coord: Vec2) -> u32 {
        self.push_vertex(Vertex::new(position, tex_coord))
    }

    pub(crate) fn push_vertex(&mut self, vertex: Vertex) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(vertex);
        index
    }

    /// Add a triangle using three vertex indices
    pub(crate) fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        debug_assert_eq!(self.topology, Topology::TriangleList);
        self.indices.extend_from_slice(&[i0, i1, i2]);
    }

    /// Add a line segment using two vertex indices
    pub(crate) fn add_line(&mut self, i0: u32, i1: u32) {
        debug_assert_eq!(self.topology, Topology::LineList);
        self.indices.extend_from_slice(&[i0, i1]);
    }

    /// Append a raw index list, used by fixed index tables
    pub(crate) fn extend_indices(&mut self, indices: &[u32]) {
        self.indices.extend_from_slice(indices);
    }

    pub(crate) fn vertices_mut(&mut self) -> &mut [Vertex] {
        &mut self.vertices
    }
}
