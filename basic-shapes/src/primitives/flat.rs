//! Flat and box primitives (triangle, rectangle, box, grid)

use glam::{Vec2, Vec3};
use tracing::debug;

use super::{check_dimension, clamp_count, max_units};
use crate::types::{Mesh, Topology};

/// Generate a triangle in the z=0 plane
///
/// # Arguments
/// * `base` - Width of the bottom edge
/// * `height` - Distance from the bottom edge to the apex
/// * `tip_offset` - Horizontal apex shift as a fraction of `base` (0.0 = centered)
///
/// # Returns
/// 3 vertices `[base-left, base-right, apex]` and one triangle.
///
/// # UV Mapping
/// Base corners sit at v=1 (u=0 and u=1); the apex sits at v=0 with u shifted by
/// `tip_offset` so a skewed apex keeps a sane texture mapping.
pub fn triangle(base: f32, height: f32, tip_offset: f32) -> Mesh {
    let base = check_dimension("triangle", "base", base);
    let height = check_dimension("triangle", "height", height);

    let half_base = base * 0.5;
    let half_height = height * 0.5;

    let mut mesh = Mesh::with_capacity(Topology::TriangleList, 3, 3);
    let i0 = mesh.add_vertex(Vec3::new(-half_base, -half_height, 0.0), Vec2::new(0.0, 1.0));
    let i1 = mesh.add_vertex(Vec3::new(half_base, -half_height, 0.0), Vec2::new(1.0, 1.0));
    let i2 = mesh.add_vertex(
        Vec3::new(base * tip_offset, half_height, 0.0),
        Vec2::new(0.5 + tip_offset, 0.0),
    );
    mesh.add_triangle(i0, i1, i2);

    mesh
}

/// Generate an axis-aligned rectangle in the z=0 plane
///
/// Corners at `(±length/2, ±width/2)` starting bottom-left and walking
/// counter-clockwise, UVs mapped to the unit square. Two triangles fanned from
/// corner 0.
pub fn rectangle(length: f32, width: f32) -> Mesh {
    let length = check_dimension("rectangle", "length", length);
    let width = check_dimension("rectangle", "width", width);

    let l = length * 0.5;
    let w = width * 0.5;

    let mut mesh = Mesh::with_capacity(Topology::TriangleList, 4, 6);
    mesh.add_vertex(Vec3::new(-l, -w, 0.0), Vec2::new(0.0, 0.0));
    mesh.add_vertex(Vec3::new(l, -w, 0.0), Vec2::new(1.0, 0.0));
    mesh.add_vertex(Vec3::new(l, w, 0.0), Vec2::new(1.0, 1.0));
    mesh.add_vertex(Vec3::new(-l, w, 0.0), Vec2::new(0.0, 1.0));

    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);

    mesh
}

/// Generate a box centered at the origin
///
/// # Arguments
/// * `length` - Extent along X
/// * `width` - Extent along Y
/// * `height` - Extent along Z
///
/// # Returns
/// 24 vertices (4 per face, nothing shared) and 12 triangles. Each face carries its
/// own unit-square UV mapping.
pub fn cuboid(length: f32, width: f32, height: f32) -> Mesh {
    let length = check_dimension("cuboid", "length", length);
    let width = check_dimension("cuboid", "width", width);
    let height = check_dimension("cuboid", "height", height);

    let l = length * 0.5;
    let w = width * 0.5;
    let h = height * 0.5;

    // Corner order per face matches the unit-square UV walk below
    let faces: [[Vec3; 4]; 6] = [
        // Front (+Z)
        [
            Vec3::new(-l, -w, h),
            Vec3::new(l, -w, h),
            Vec3::new(l, w, h),
            Vec3::new(-l, w, h),
        ],
        // Bottom (-Y)
        [
            Vec3::new(-l, -w, -h),
            Vec3::new(l, -w, -h),
            Vec3::new(l, -w, h),
            Vec3::new(-l, -w, h),
        ],
        // Right (+X)
        [
            Vec3::new(l, -w, -h),
            Vec3::new(l, w, -h),
            Vec3::new(l, w, h),
            Vec3::new(l, -w, h),
        ],
        // Left (-X)
        [
            Vec3::new(-l, -w, -h),
            Vec3::new(-l, -w, h),
            Vec3::new(-l, w, h),
            Vec3::new(-l, w, -h),
        ],
        // Back (-Z)
        [
            Vec3::new(-l, -w, -h),
            Vec3::new(-l, w, -h),
            Vec3::new(l, w, -h),
            Vec3::new(l, -w, -h),
        ],
        // Top (+Y)
        [
            Vec3::new(-l, w, -h),
            Vec3::new(-l, w, h),
            Vec3::new(l, w, h),
            Vec3::new(l, w, -h),
        ],
    ];
    let uvs = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
    ];

    let mut mesh = Mesh::with_capacity(Topology::TriangleList, 24, 36);
    for corners in &faces {
        let base = mesh.vertex_count() as u32;
        for (corner, uv) in corners.iter().zip(uvs) {
            mesh.add_vertex(*corner, uv);
        }
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base, base + 2, base + 3);
    }

    mesh
}

/// Generate a line grid on the XZ plane (Y=0), centered on the origin
///
/// # Arguments
/// * `cell_size` - Spacing between adjacent lines
/// * `cell_count` - Number of cells along each axis
///
/// # Returns
/// A `LineList` mesh. Each of the `cell_count + 1` steps adds 4 vertices and
/// 2 segments: one running along Z at a fixed X, one running along X at a fixed Z.
/// UVs are all zero.
pub fn grid(cell_size: f32, cell_count: u32) -> Mesh {
    let cell_size = check_dimension("grid", "cell_size", cell_size);
    let cell_count = clamp_count("grid", "cell_count", cell_count, 0, max_units(4, 4));

    let start = cell_size * cell_count as f32 * 0.5;
    let steps = (cell_count + 1) as usize;

    let mut mesh = Mesh::with_capacity(Topology::LineList, steps * 4, steps * 4);
    for i in 0..=cell_count {
        let offset = -start + i as f32 * cell_size;

        let a = mesh.add_vertex(Vec3::new(offset, 0.0, -start), Vec2::ZERO);
        let b = mesh.add_vertex(Vec3::new(offset, 0.0, start), Vec2::ZERO);
        mesh.add_line(a, b);

        let c = mesh.add_vertex(Vec3::new(-start, 0.0, offset), Vec2::ZERO);
        let d = mesh.add_vertex(Vec3::new(start, 0.0, offset), Vec2::ZERO);
        mesh.add_line(c, d);
    }

    debug!(
        "grid: {} lines over {} vertices",
        mesh.primitive_count(),
        mesh.vertex_count()
    );

    mesh
}
