//! Procedural shape generators
//!
//! One function per shape. Every generator is pure and deterministic: the same
//! parameters always yield the same vertex order, UVs and index list.

mod flat;
mod parametric;
mod polyhedra;

pub use flat::{cuboid, grid, rectangle, triangle};
pub use parametric::{cylinder, sphere};
pub use polyhedra::{
    dodecahedron, dodecahedron_latitudes, icosahedron, octahedron, tetrahedron,
};

use tracing::warn;

use crate::types::Mesh;

/// Log a warning for a non-positive dimension, keeping the value
///
/// Degenerate dimensions give degenerate but memory-safe geometry, so they are
/// passed through untouched.
fn check_dimension(generator: &str, name: &str, value: f32) -> f32 {
    if value <= 0.0 || value.is_nan() {
        warn!("{generator}: {name} should be > 0.0 (got {value}), geometry will be degenerate");
    }
    value
}

/// Largest `n` for which `per_unit * n + fixed` vertices still fit a 32-bit index
pub(crate) fn max_units(per_unit: u64, fixed: u64) -> u32 {
    let available = (Mesh::MAX_VERTICES as u64).saturating_sub(fixed);
    (available / per_unit).min(u32::MAX as u64) as u32
}

/// Clamp a count into `[min, max]`, logging when it changes
fn clamp_count(generator: &str, name: &str, value: u32, min: u32, max: u32) -> u32 {
    let clamped = value.clamp(min, max);
    if clamped != value {
        warn!("{generator}: {name} must be in [{min}, {max}] (got {value}), clamping to {clamped}");
    }
    clamped
}
