//! Properties every generated mesh must satisfy, checked through the public API

use basic_shapes::*;

fn all_shapes() -> Vec<(&'static str, Mesh)> {
    vec![
        ("triangle", triangle(1.0, 2.0, -0.3)),
        ("rectangle", rectangle(2.0, 1.0)),
        ("box", cuboid(1.0, 2.0, 3.0)),
        ("tetrahedron", tetrahedron(1.0)),
        ("octahedron", octahedron(1.0)),
        ("icosahedron", icosahedron(1.0, 2)),
        ("dodecahedron", dodecahedron(1.0, 1)),
        ("sphere", sphere(1.0, 12, 7)),
        ("cylinder", cylinder(1.0, 0.5, 2.0, 9, false)),
        ("capped cylinder", cylinder(1.0, 0.5, 2.0, 9, true)),
        ("grid", grid(0.5, 7)),
    ]
}

#[test]
fn indices_in_range_and_grouped() {
    for (name, mesh) in all_shapes() {
        mesh.validate()
            .unwrap_or_else(|e| panic!("{name} failed validation: {e}"));

        let count = mesh.vertex_count() as u32;
        assert!(
            mesh.indices().iter().all(|&i| i < count),
            "{name} has an out-of-range index"
        );

        let expected_group = if name == "grid" { 2 } else { 3 };
        assert_eq!(mesh.index_count() % expected_group, 0, "{name}");
        assert_eq!(mesh.topology().indices_per_primitive(), expected_group, "{name}");
    }
}

#[test]
fn sphere_counts_and_poles() {
    for (radius, slices, stacks) in [(1.0, 3, 2), (2.0, 16, 8), (0.5, 7, 13), (1.0, 2000, 4)] {
        let mesh = sphere(radius, slices, stacks);
        assert_eq!(mesh.vertex_count(), ((stacks - 1) * slices + 2) as usize);
        assert_eq!(mesh.index_count(), (6 * slices * (stacks - 1)) as usize);

        let v = mesh.vertices();
        assert_eq!(v.first().map(|v| v.position), Some(Vec3::new(0.0, radius, 0.0)));
        assert_eq!(v.last().map(|v| v.position), Some(Vec3::new(0.0, -radius, 0.0)));
    }
}

#[test]
fn polyhedra_stay_on_sphere() {
    for radius in [0.5f32, 1.0, 3.0] {
        for level in 0..=3 {
            for (name, mesh) in [
                ("icosahedron", icosahedron(radius, level)),
                ("dodecahedron", dodecahedron(radius, level)),
            ] {
                for p in mesh.positions() {
                    assert!(
                        (p.length() - radius).abs() < 1e-4 * radius,
                        "{name} level {level}: |{p}| = {} != {radius}",
                        p.length()
                    );
                }
            }
        }
    }
}

#[test]
fn subdivide_single_triangle() {
    let input = triangle(1.0, 1.0, 0.0);

    let once = subdivide(&input, 1);
    assert_eq!(once.primitive_count(), 4);
    assert_eq!(once.vertex_count(), 6);

    let twice = subdivide(&input, 2);
    assert_eq!(twice.primitive_count(), 16);
    assert_eq!(twice.vertex_count(), 6 * 4);
}

#[test]
fn subdivide_then_spherify_once() {
    // Renormalizing only at the end differs from renormalizing per level
    let base = octahedron(1.0);
    let at_end = spherify(&subdivide(&base, 2), 1.0);
    let per_level = spherify(&subdivide(&spherify(&subdivide(&base, 1), 1.0), 1), 1.0);

    assert_eq!(at_end.vertex_count(), per_level.vertex_count());
    assert_ne!(at_end, per_level);

    let via_modifiers = base.apply(Subdivide { depth: 2 }).apply(Spherify { radius: 1.0 });
    assert_eq!(via_modifiers, at_end);
}

#[test]
fn box_has_four_vertices_per_face() {
    let mesh = cuboid(1.0, 1.0, 1.0);
    assert_eq!(mesh.vertex_count(), 24);
    assert_eq!(mesh.primitive_count(), 12);
    assert_eq!(mesh.index_count(), 36);

    let directions = [Vec3::X, -Vec3::X, Vec3::Y, -Vec3::Y, Vec3::Z, -Vec3::Z];
    for dir in directions {
        let on_face = mesh
            .positions()
            .filter(|p| (p.dot(dir) - 0.5).abs() < 1e-6)
            .count();
        // Each corner touches three faces, so every face plane holds 12 of the 24 vertices
        assert_eq!(on_face, 12, "face {dir}");
    }

    for (face, chunk) in mesh.vertices().chunks_exact(4).enumerate() {
        let shared = directions
            .iter()
            .filter(|dir| chunk.iter().all(|v| (v.position.dot(**dir) - 0.5).abs() < 1e-6))
            .count();
        assert_eq!(shared, 1, "face {face} should be coplanar on exactly one side");
    }
}

#[test]
fn rectangle_exact_layout() {
    let mesh = rectangle(2.0, 1.0);
    let positions: Vec<Vec3> = mesh.positions().collect();
    assert_eq!(
        positions,
        vec![
            Vec3::new(-1.0, -0.5, 0.0),
            Vec3::new(1.0, -0.5, 0.0),
            Vec3::new(1.0, 0.5, 0.0),
            Vec3::new(-1.0, 0.5, 0.0),
        ]
    );
    let uvs: Vec<Vec2> = mesh.vertices().iter().map(|v| v.tex_coord).collect();
    assert_eq!(
        uvs,
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ]
    );
    assert_eq!(mesh.indices(), &[0, 1, 2, 0, 2, 3]);
}

#[test]
fn grid_counts() {
    let mesh = grid(1.0, 2);
    assert_eq!(mesh.vertex_count(), 12);
    assert_eq!(mesh.index_count(), 12);

    for n in [0u32, 1, 5, 64, 70_000] {
        let mesh = grid(0.25, n);
        assert_eq!(mesh.vertex_count(), 4 * (n as usize + 1));
        assert_eq!(mesh.index_count(), 4 * (n as usize + 1));
    }
}

#[test]
fn generators_are_deterministic() {
    assert_eq!(icosahedron(1.0, 2), icosahedron(1.0, 2));
    assert_eq!(cylinder(1.0, 2.0, 3.0, 11, true), cylinder(1.0, 2.0, 3.0, 11, true));
}

#[test]
fn shape_desc_from_toml() {
    let desc: ShapeDesc = toml::from_str(
        r#"
        shape = "box"
        length = 2.0
        "#,
    )
    .unwrap();
    assert_eq!(
        desc,
        ShapeDesc::Cuboid {
            length: 2.0,
            width: 1.0,
            height: 1.0
        }
    );
    assert_eq!(desc.name(), "box");
    assert_eq!(desc.generate().vertex_count(), 24);

    let desc: ShapeDesc = toml::from_str(r#"shape = "cylinder""#).unwrap();
    assert_eq!(desc.kind(), ShapeKind::Cylinder);
    assert_eq!(desc, ShapeKind::Cylinder.default_desc());

    assert!(toml::from_str::<ShapeDesc>(r#"shape = "torus""#).is_err());
}

#[test]
fn shape_kind_names_roundtrip() {
    for kind in ShapeKind::ALL {
        assert_eq!(kind.name().parse::<ShapeKind>(), Ok(kind));
        assert_eq!(kind.default_desc().kind(), kind);
        kind.default_desc().generate().validate().unwrap();
    }
    assert_eq!("Cuboid".parse::<ShapeKind>(), Ok(ShapeKind::Box));
    assert!("torus".parse::<ShapeKind>().is_err());
}

#[test]
fn obj_export_triangles() {
    let mut out = Vec::new();
    write_obj_to(&rectangle(2.0, 1.0), &mut out, "quad").unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("o quad\n"));
    assert!(text.contains("v -1 -0.5 0\n"));
    assert!(text.contains("vt 1 1\n"));
    assert!(text.contains("f 1/1 2/2 3/3\n"));
    assert!(text.contains("f 1/1 3/3 4/4\n"));
    assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 4);
    assert_eq!(text.lines().filter(|l| l.starts_with("vt ")).count(), 4);
}

#[test]
fn obj_export_lines_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.obj");

    write_obj(&grid(1.0, 1), &path, "grid").unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("l 1 2\n"));
    assert!(text.contains("l 7 8\n"));
    assert_eq!(text.lines().filter(|l| l.starts_with("l ")).count(), 4);
    assert!(!text.lines().any(|l| l.starts_with("f ")));
}
