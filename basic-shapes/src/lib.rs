//! Procedural mesh generation
//!
//! Functions for generating simple geometric primitives as indexed vertex lists,
//! ready to be copied into GPU vertex and index buffers.
//!
//! Every vertex carries a position and a texture coordinate (20 bytes, see
//! [`Vertex`]). Triangles wind counter-clockwise when seen from outside, in a
//! right-handed, Y-up frame. The grid is the only line mesh; its [`Topology`] is
//! stored on the mesh itself.
//!
//! ```
//! use basic_shapes::*;
//!
//! let ball = sphere(1.0, 16, 8);
//! assert_eq!(ball.vertex_count(), 7 * 16 + 2);
//! assert_eq!(ball.topology(), Topology::TriangleList);
//!
//! let lines = grid(1.0, 4);
//! assert_eq!(lines.topology(), Topology::LineList);
//! ```

mod combine;
mod error;
mod export;
mod modifiers;
mod primitives;
mod shape;
mod subdivide;
mod types;


pub use error::MeshError;
pub use types::{Mesh, Topology, Vertex};

// Re-export generators
pub use primitives::{
    cuboid, cylinder, dodecahedron, dodecahedron_latitudes, grid, icosahedron, octahedron,
    rectangle, sphere, tetrahedron, triangle,
};

// Re-export subdivision and modifiers
pub use combine::{combine, combine_transformed};
pub use modifiers::{MeshApply, MeshModifier, Spherify, Subdivide, Transform, Weld};
pub use subdivide::{spherify, subdivide, weld};

pub use export::{write_obj, write_obj_to};
pub use shape::{ShapeDesc, ShapeKind, UnknownShape};

pub use glam::{Mat4, Vec2, Vec3};
