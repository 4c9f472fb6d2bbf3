//! Mesh modifiers
//!
//! Modifiers take a mesh and return a new one; the input is never changed.
//!
//! # Fluent API
//!
//! Use the `MeshApply` extension trait for method chaining:
//! ```
//! use basic_shapes::*;
//!
//! let mesh = octahedron(1.0)
//!     .apply(Subdivide { depth: 2 })
//!     .apply(Spherify { radius: 1.0 })
//!     .apply(Transform::translate(0.0, 2.0, 0.0));
//! assert_eq!(mesh.primitive_count(), 8 * 16);
//! ```

use glam::{Mat4, Vec3};

use crate::subdivide::{spherify, subdivide, weld};
use crate::types::Mesh;

/// Trait for mesh modifiers
pub trait MeshModifier {
    /// Produce the modified mesh
    fn apply(&self, mesh: &Mesh) -> Mesh;
}

/// Extension trait for fluent modifier application
pub trait MeshApply {
    /// Apply a modifier, consuming the mesh and returning the result for chaining
    fn apply<M: MeshModifier>(self, modifier: M) -> Self;
}

impl MeshApply for Mesh {
    fn apply<M: MeshModifier>(self, modifier: M) -> Self {
        modifier.apply(&self)
    }
}

/// Unwelded midpoint subdivision, see [`subdivide`](crate::subdivide())
#[derive(Debug, Clone, Copy)]
pub struct Subdivide {
    /// Number of subdivision passes (each one multiplies triangle count by 4)
    pub depth: u32,
}

impl Default for Subdivide {
    fn default() -> Self {
        Self { depth: 1 }
    }
}

impl MeshModifier for Subdivide {
    fn apply(&self, mesh: &Mesh) -> Mesh {
        subdivide(mesh, self.depth)
    }
}

/// Project all vertices onto a sphere around the origin
#[derive(Debug, Clone, Copy)]
pub struct Spherify {
    pub radius: f32,
}

impl Default for Spherify {
    fn default() -> Self {
        Self { radius: 1.0 }
    }
}

impl MeshModifier for Spherify {
    fn apply(&self, mesh: &Mesh) -> Mesh {
        spherify(mesh, self.radius)
    }
}

/// Merge bit-identical vertices
#[derive(Debug, Clone, Copy, Default)]
pub struct Weld;

impl MeshModifier for Weld {
    fn apply(&self, mesh: &Mesh) -> Mesh {
        weld(mesh)
    }
}

/// Affine transform of vertex positions
///
/// Only positions move; UVs, indices and topology carry over. A mirroring matrix
/// (negative determinant) turns every triangle inside out, and that is left as is.
///
/// # Example
/// ```
/// use basic_shapes::*;
///
/// // A 2x1x1 slab, turned a quarter around Y so it runs along Z
/// let slab = cuboid(1.0, 1.0, 1.0)
///     .apply(Transform::scale(2.0, 1.0, 1.0).then(Transform::rotate_y(90.0)));
/// let (min, max) = slab.bounds().unwrap();
/// assert!((max.z - min.z - 2.0).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    matrix: Mat4,
}

impl Transform {
    /// Leaves positions where they are
    pub fn identity() -> Self {
        Self::from_matrix(Mat4::IDENTITY)
    }

    /// Wrap an arbitrary affine matrix; positions go through `transform_point3`
    pub fn from_matrix(matrix: Mat4) -> Self {
        Self { matrix }
    }

    /// Move every position by `(x, y, z)`
    pub fn translate(x: f32, y: f32, z: f32) -> Self {
        Self::from_matrix(Mat4::from_translation(Vec3::new(x, y, z)))
    }

    /// Per-axis scale about the origin
    pub fn scale(x: f32, y: f32, z: f32) -> Self {
        Self::from_matrix(Mat4::from_scale(Vec3::new(x, y, z)))
    }

    pub fn scale_uniform(factor: f32) -> Self {
        Self::scale(factor, factor, factor)
    }

    /// Right-handed rotation of `degrees` about `axis` (normalized here)
    pub fn rotate(axis: Vec3, degrees: f32) -> Self {
        Self::from_matrix(Mat4::from_axis_angle(axis.normalize_or_zero(), degrees.to_radians()))
    }

    pub fn rotate_x(degrees: f32) -> Self {
        Self::rotate(Vec3::X, degrees)
    }

    pub fn rotate_y(degrees: f32) -> Self {
        Self::rotate(Vec3::Y, degrees)
    }

    pub fn rotate_z(degrees: f32) -> Self {
        Self::rotate(Vec3::Z, degrees)
    }

    /// Chain two transforms: `self` runs first, `next` second
    pub fn then(self, next: Transform) -> Self {
        Self::from_matrix(next.matrix * self.matrix)
    }

    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl MeshModifier for Transform {
    fn apply(&self, mesh: &Mesh) -> Mesh {
        let mut result = mesh.clone();
        for vertex in result.vertices_mut() {
            vertex.position = self.matrix.transform_point3(vertex.position);
        }
        result
    }
}
