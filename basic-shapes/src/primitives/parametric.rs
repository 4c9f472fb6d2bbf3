//! Parametric surfaces (UV sphere, cylinder)

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};
use tracing::{debug, warn};

use super::{check_dimension, clamp_count, max_units};
use crate::types::{Mesh, Topology};

/// Generate a UV sphere
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `slices` - Number of longitudinal divisions (min 3)
/// * `stacks` - Number of latitudinal divisions (min 2)
///
/// Counts whose vertices would not fit a 32-bit index buffer are clamped.
///
/// # Returns
/// One north pole vertex at `(0, radius, 0)`, `(stacks - 1) × slices` ring vertices,
/// and one south pole vertex at `(0, -radius, 0)`. Triangles fan from each pole and
/// form a quad strip between adjacent rings; the last slice of every ring wraps
/// back to the ring's first vertex instead of duplicating it.
///
/// # UV Mapping
/// - U: `slice / slices`
/// - V: `stack / stacks`, 0 at the north pole and 1 at the south pole
pub fn sphere(radius: f32, slices: u32, stacks: u32) -> Mesh {
    let r = check_dimension("sphere", "radius", radius);
    let stacks = clamp_count("sphere", "stacks", stacks, 2, max_units(3, 2).saturating_add(1));
    let slices = clamp_count("sphere", "slices", slices, 3, max_units((stacks - 1) as u64, 2));

    let polar_step = PI / stacks as f32;
    let azimuth_step = TAU / slices as f32;
    let du = 1.0 / slices as f32;
    let dv = 1.0 / stacks as f32;

    let vertex_count = (stacks - 1) as usize * slices as usize + 2;
    let index_count = 6 * slices as usize * (stacks - 1) as usize;
    let mut mesh = Mesh::with_capacity(Topology::TriangleList, vertex_count, index_count);

    let north = mesh.add_vertex(Vec3::new(0.0, r, 0.0), Vec2::new(0.0, 0.0));
    for stack in 1..stacks {
        let phi = stack as f32 * polar_step;
        let v = stack as f32 * dv;
        let (sin_phi, cos_phi) = phi.sin_cos();

        for slice in 0..slices {
            let theta = slice as f32 * azimuth_step;
            let position = Vec3::new(
                r * sin_phi * theta.cos(),
                r * cos_phi,
                r * sin_phi * theta.sin(),
            );
            mesh.add_vertex(position, Vec2::new(slice as f32 * du, v));
        }
    }
    let south = mesh.add_vertex(Vec3::new(0.0, -r, 0.0), Vec2::new(0.0, 1.0));

    // North pole fan over the first ring (indices 1..=slices)
    for i in 1..=slices {
        let next = if i == slices { 1 } else { i + 1 };
        mesh.add_triangle(north, next, i);
    }

    // Quad strip between ring j and ring j + 1
    for j in 0..stacks - 2 {
        let offset = j * slices + 1;
        for i in 0..slices {
            let current = offset + i;
            let below = current + slices;
            let last_slice = i == slices - 1;
            let next = if last_slice { offset } else { current + 1 };
            let below_next = if last_slice { offset + slices } else { below + 1 };

            mesh.add_triangle(current, next, below);
            mesh.add_triangle(below, next, below_next);
        }
    }

    // South pole fan over the last ring
    let last_ring = south - slices - 1;
    for i in 1..=slices {
        let current = last_ring + i;
        let next = if i == slices { last_ring + 1 } else { current + 1 };
        mesh.add_triangle(south, current, next);
    }

    debug!(
        "sphere: {slices}x{stacks}, {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.primitive_count()
    );
    mesh
}

/// Generate a cylinder (or truncated cone) along Y, centered at the origin
///
/// # Arguments
/// * `radius_top` - Radius of the ring at `y = +height/2`
/// * `radius_bottom` - Radius of the ring at `y = -height/2`
/// * `height` - Distance between the rings
/// * `slices` - Number of radial divisions (min 3)
/// * `cap` - Whether to close both ends with triangle fans
///
/// # Returns
/// When capped: `slices` top cap vertices, then `slices` bottom cap vertices, each
/// fanned from its first vertex. Then the body: `slices + 1` top/bottom vertex
/// pairs, the last pair repeating the first position so U runs 0→1 without a seam.
///
/// # UV Mapping
/// - Caps: discs of radius 0.25 centered at (0.25, 0.25) for the top and
///   (0.75, 0.25) for the bottom
/// - Body: U wraps 0→1 around the circumference; V runs from 0.5 (capped) or 0.0
///   (open) at the top ring to 1.0 at the bottom ring
pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, slices: u32, cap: bool) -> Mesh {
    if radius_top < 0.0 || radius_bottom < 0.0 {
        warn!(
            "cylinder: radii should be >= 0.0 (got top {radius_top}, bottom {radius_bottom})"
        );
    }
    let height = check_dimension("cylinder", "height", height);
    let vertices_per_slice = if cap { 4 } else { 2 };
    let slices = clamp_count("cylinder", "slices", slices, 3, max_units(vertices_per_slice, 2));

    let half_height = height * 0.5;
    let angle = TAU / slices as f32;

    let segments = slices as usize;
    let cap_vertices = if cap { 2 * segments } else { 0 };
    let cap_indices = if cap { 6 * (segments - 2) } else { 0 };
    let mut mesh = Mesh::with_capacity(
        Topology::TriangleList,
        cap_vertices + 2 * (segments + 1),
        cap_indices + 6 * segments,
    );

    if cap {
        // Top
        for i in 0..slices {
            let (sin, cos) = (i as f32 * angle).sin_cos();
            mesh.add_vertex(
                Vec3::new(radius_top * cos, half_height, radius_top * sin),
                Vec2::new(0.25 * cos + 0.25, 0.25 * sin + 0.25),
            );
        }
        for n in 1..slices - 1 {
            mesh.add_triangle(n + 1, n, 0);
        }

        // Bottom
        let first = mesh.vertex_count() as u32;
        for i in 0..slices {
            let (sin, cos) = (i as f32 * angle).sin_cos();
            mesh.add_vertex(
                Vec3::new(radius_bottom * cos, -half_height, radius_bottom * sin),
                Vec2::new(0.25 * cos + 0.75, 0.25 * sin + 0.25),
            );
        }
        for i in 1..slices - 1 {
            let n = first + i;
            mesh.add_triangle(first, n, n + 1);
        }
    }

    // Body
    let body = mesh.vertex_count() as u32;
    let top_v = if cap { 0.5 } else { 0.0 };
    for i in 0..=slices {
        let (sin, cos) = (i as f32 * angle).sin_cos();
        let u = i as f32 / slices as f32;

        mesh.add_vertex(
            Vec3::new(radius_top * cos, half_height, radius_top * sin),
            Vec2::new(u, top_v),
        );
        mesh.add_vertex(
            Vec3::new(radius_bottom * cos, -half_height, radius_bottom * sin),
            Vec2::new(u, 1.0),
        );
    }

    for i in 0..slices {
        let n = body + i * 2;
        mesh.add_triangle(n, n + 2, n + 1);
        mesh.add_triangle(n + 1, n + 2, n + 3);
    }

    debug!(
        "cylinder: {slices} slices (cap: {cap}), {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.primitive_count()
    );
    mesh
}
