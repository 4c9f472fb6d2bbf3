//! Wavefront OBJ export
//!
//! Writes positions (`v`), texture coordinates (`vt`) and either faces (`f`) or
//! line elements (`l`), depending on the mesh topology. OBJ indices are 1-based and
//! every vertex has exactly one UV, so face corners use the `a/a` form.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::types::{Mesh, Topology};

/// Write a mesh as an OBJ object named `name`
pub fn write_obj_to<W: Write>(mesh: &Mesh, mut writer: W, name: &str) -> io::Result<()> {
    writeln!(
        writer,
        "# basic-shapes: {} vertices, {} primitives ({})",
        mesh.vertex_count(),
        mesh.primitive_count(),
        mesh.topology()
    )?;
    writeln!(writer, "o {name}")?;

    for vertex in mesh.vertices() {
        let p = vertex.position;
        writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for vertex in mesh.vertices() {
        let uv = vertex.tex_coord;
        writeln!(writer, "vt {} {}", uv.x, uv.y)?;
    }

    match mesh.topology() {
        Topology::TriangleList => {
            for tri in mesh.indices().chunks_exact(3) {
                let (a, b, c) = (tri[0] + 1, tri[1] + 1, tri[2] + 1);
                writeln!(writer, "f {a}/{a} {b}/{b} {c}/{c}")?;
            }
        }
        Topology::LineList => {
            for line in mesh.indices().chunks_exact(2) {
                writeln!(writer, "l {} {}", line[0] + 1, line[1] + 1)?;
            }
        }
    }

    writer.flush()
}

/// Write a mesh to an OBJ file at `path`, replacing any existing file
///
/// # Example
/// ```no_run
/// use basic_shapes::*;
///
/// let mesh = icosahedron(1.0, 2);
/// write_obj(&mesh, "globe.obj", "globe")?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn write_obj(mesh: &Mesh, path: impl AsRef<Path>, name: &str) -> io::Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_obj_to(mesh, BufWriter::new(file), name)?;
    debug!("wrote {} ({} vertices)", path.display(), mesh.vertex_count());
    Ok(())
}
