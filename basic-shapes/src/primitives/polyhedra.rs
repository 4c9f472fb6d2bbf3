//! Polyhedra (tetrahedron, octahedron, icosahedron, dodecahedron)
//!
//! The icosahedron and dodecahedron are built from latitude rings and a fixed
//! index table, then refined by the subdivider and projected back onto the sphere.

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};
use tracing::debug;

use super::check_dimension;
use crate::subdivide::{spherify, subdivide};
use crate::types::{Mesh, Topology};

/// Azimuthal step between neighbouring vertices of a pentagonal ring
const PENTAGON_STEP: f32 = TAU / 5.0;

/// Polar step between the icosahedron's latitude rings
const ICOSAHEDRON_RING_STEP: f32 = PI / 3.0;

/// Generate an unfolded tetrahedron
///
/// The apex sits at `(0, radius, 0)` and three base points sample a circle of
/// `radius` at 120° steps on the plane `y = radius·cos(120°)`. The apex and first
/// base point are repeated at the end so a zig-zag UV strip (`u = i/6`, `v`
/// alternating 1/0) wraps without seam distortion.
///
/// The four triangles walk the strip `0,2,1 / 1,2,3 / 2,4,3 / 3,4,5`, which is an
/// open surface for texturing rather than a closed solid.
pub fn tetrahedron(radius: f32) -> Mesh {
    let radius = check_dimension("tetrahedron", "radius", radius);

    const BASE_POINTS: u32 = 3;
    let step = TAU / BASE_POINTS as f32;
    let base_y = radius * step.cos();

    let mut positions = Vec::with_capacity(6);
    positions.push(Vec3::new(0.0, radius, 0.0));
    for i in 0..BASE_POINTS {
        let theta = i as f32 * step;
        positions.push(Vec3::new(radius * theta.cos(), base_y, radius * theta.sin()));
    }
    // Seam duplicates
    positions.push(positions[0]);
    positions.push(positions[1]);

    let mut mesh = Mesh::with_capacity(Topology::TriangleList, 6, 12);
    for (i, position) in positions.into_iter().enumerate() {
        let v = if i % 2 == 0 { 1.0 } else { 0.0 };
        mesh.add_vertex(position, Vec2::new(i as f32 / 6.0, v));
    }
    mesh.extend_indices(&[0, 2, 1, 1, 2, 3, 2, 4, 3, 3, 4, 5]);

    mesh
}

#[rustfmt::skip]
const OCTAHEDRON_INDICES: [u32; 24] = [
    // Top
    0, 1, 2,
    2, 1, 3,
    3, 1, 5,
    5, 1, 0,
    // Bottom
    2, 4, 0,
    3, 4, 2,
    5, 4, 3,
    0, 4, 5,
];

/// Generate an octahedron with one vertex on each half-axis
///
/// Vertex order is `+X, +Y, +Z, -X, -Y, -Z`; four triangles fan around each pole.
pub fn octahedron(radius: f32) -> Mesh {
    let r = check_dimension("octahedron", "radius", radius);

    let mut mesh = Mesh::with_capacity(Topology::TriangleList, 6, 24);
    mesh.add_vertex(Vec3::new(r, 0.0, 0.0), Vec2::new(0.0, 0.5));
    mesh.add_vertex(Vec3::new(0.0, r, 0.0), Vec2::new(0.5, 0.0));
    mesh.add_vertex(Vec3::new(0.0, 0.0, r), Vec2::new(0.33, 0.5));
    mesh.add_vertex(Vec3::new(-r, 0.0, 0.0), Vec2::new(0.66, 0.5));
    mesh.add_vertex(Vec3::new(0.0, -r, 0.0), Vec2::new(0.5, 1.0));
    mesh.add_vertex(Vec3::new(0.0, 0.0, -r), Vec2::new(1.0, 0.5));

    mesh.extend_indices(&OCTAHEDRON_INDICES);

    mesh
}

/// Generate a subdivided icosahedron projected onto a sphere
///
/// # Arguments
/// * `radius` - Sphere radius every output vertex lies on
/// * `subdivide_level` - Midpoint subdivision passes, see [`subdivide`](crate::subdivide())
///
/// # Returns
/// 22 base vertices (5 north pole copies, two rings of 6, 5 south pole copies) wired
/// into 20 triangles, subdivided `subdivide_level` times, then renormalized once.
/// Pole copies and the repeated ring vertex carry distinct UVs for the seam.
pub fn icosahedron(radius: f32, subdivide_level: u32) -> Mesh {
    let radius = check_dimension("icosahedron", "radius", radius);

    let mut base = Mesh::with_capacity(Topology::TriangleList, 22, 60);
    let mut ring = |phi: f32, theta_start: f32, count: u32| {
        for i in 0..count {
            let theta = theta_start + i as f32 * PENTAGON_STEP;
            let position = Vec3::new(
                radius * theta.cos() * phi.sin(),
                radius * phi.cos(),
                radius * theta.sin() * phi.sin(),
            );
            base.add_vertex(position, Vec2::new(theta / TAU, phi / PI));
        }
    };

    ring(0.0, PENTAGON_STEP * 0.5, 5);
    ring(ICOSAHEDRON_RING_STEP, 0.0, 6);
    ring(2.0 * ICOSAHEDRON_RING_STEP, PENTAGON_STEP * 0.5, 6);
    ring(3.0 * ICOSAHEDRON_RING_STEP, PENTAGON_STEP, 5);

    // Each step covers one pole cap triangle, two band triangles and the opposite cap
    for i in 5..10u32 {
        let upper = i;
        let pole = i - 5;
        let upper_next = i + 1;
        let lower = i + 6;
        let lower_next = lower + 1;
        let south = lower + 6;

        base.add_triangle(upper, pole, upper_next);
        base.add_triangle(upper, upper_next, lower);
        base.add_triangle(lower, upper_next, lower_next);
        base.add_triangle(lower, lower_next, south);
    }

    let mesh = spherify(&subdivide(&base, subdivide_level), radius);
    debug!(
        "icosahedron: level {subdivide_level}, {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.primitive_count()
    );
    mesh
}

/// Latitudes of the dodecahedron's upper vertex rings, in radians
///
/// With a face pointing up, the dodecahedron's vertices lie on four latitude
/// rings at `±asin(√((5+2√5)/15))` (≈52.62263590°) and `±asin(√((5−2√5)/15))`
/// (≈10.81231754°). Returns `(upper, lower)` for the northern hemisphere.
pub fn dodecahedron_latitudes() -> (f32, f32) {
    let sqrt5 = 5.0f64.sqrt();
    let upper = ((5.0 + 2.0 * sqrt5) / 15.0).sqrt().asin();
    let lower = ((5.0 - 2.0 * sqrt5) / 15.0).sqrt().asin();
    (upper as f32, lower as f32)
}

/// The 12 pentagons, each split into a fan of 3 triangles
#[rustfmt::skip]
const DODECAHEDRON_INDICES: [u32; 108] = [
    // North cap pentagon
    1, 0, 2,
    2, 0, 3,
    3, 0, 4,

    // Upper belt pentagons
    7, 0, 1,     7, 6, 0,     7, 12, 6,
    8, 1, 2,     8, 7, 1,     8, 13, 7,
    9, 2, 3,     9, 8, 2,     9, 14, 8,
    10, 3, 4,    10, 9, 3,    10, 15, 9,
    11, 4, 5,    11, 10, 4,   11, 16, 10,

    // Lower belt pentagons
    12, 7, 13,   12, 13, 18,  18, 13, 19,
    13, 8, 14,   13, 14, 19,  19, 14, 20,
    14, 9, 15,   14, 15, 20,  20, 15, 21,
    15, 10, 16,  15, 16, 21,  21, 16, 22,
    16, 11, 17,  16, 17, 22,  22, 17, 23,

    // South cap pentagon
    18, 19, 20,
    18, 20, 21,
    18, 21, 22,
];

/// Generate a subdivided dodecahedron projected onto a sphere
///
/// # Arguments
/// * `radius` - Sphere radius every output vertex lies on
/// * `subdivide_level` - Midpoint subdivision passes, see [`subdivide`](crate::subdivide())
///
/// # Returns
/// 24 base vertices in four rings of 6 (the sixth repeats the first for the UV
/// seam), 36 triangles fanning the 12 pentagons, subdivided `subdivide_level` times
/// and renormalized once.
///
/// # UV Mapping
/// - U: `atan2(x, z) / -2π`, wrapped into [0, 1)
/// - V: latitude mapped from [-π/2, π/2] to [0, 1]
pub fn dodecahedron(radius: f32, subdivide_level: u32) -> Mesh {
    let radius = check_dimension("dodecahedron", "radius", radius);
    let (upper, lower) = dodecahedron_latitudes();

    let mut base = Mesh::with_capacity(Topology::TriangleList, 24, DODECAHEDRON_INDICES.len());
    let mut ring = |phi: f32, theta_start: f32| {
        for i in 0..6 {
            let theta = theta_start + i as f32 * PENTAGON_STEP;
            let (sin_theta, cos_theta) = theta.sin_cos();
            let position = Vec3::new(
                radius * cos_theta * phi.cos(),
                radius * phi.sin(),
                radius * sin_theta * phi.cos(),
            );

            let mut u = cos_theta.atan2(sin_theta) / -TAU;
            if u < 0.0 {
                u += 1.0;
            }
            let v = phi / PI + 0.5;

            base.add_vertex(position, Vec2::new(u, v));
        }
    };

    ring(upper, 0.0);
    ring(lower, 0.0);
    ring(-lower, PENTAGON_STEP * 0.5);
    ring(-upper, PENTAGON_STEP * 0.5);

    base.extend_indices(&DODECAHEDRON_INDICES);

    let mesh = spherify(&subdivide(&base, subdivide_level), radius);
    debug!(
        "dodecahedron: level {subdivide_level}, {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.primitive_count()
    );
    mesh
}
