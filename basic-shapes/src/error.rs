//! Mesh errors

use thiserror::Error;

use crate::types::Topology;

/// Errors raised when a mesh breaks its invariants
///
/// Generators never produce these; they come from building a mesh out of raw
/// parts or from combining meshes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    #[error("index {index} at position {position} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        position: usize,
        index: u32,
        vertex_count: usize,
    },

    #[error("{topology} mesh has {len} indices, which is not a multiple of {stride}")]
    IncompletePrimitive {
        topology: Topology,
        len: usize,
        stride: usize,
    },

    #[error("cannot combine a {expected} mesh with a {found} mesh")]
    TopologyMismatch { expected: Topology, found: Topology },

    #[error("vertex count {0} does not fit a 32-bit index buffer")]
    TooManyVertices(usize),
}
