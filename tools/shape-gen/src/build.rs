//! Build command - generate every shape listed in a manifest

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use basic_shapes::write_obj;
use clap::Args;
use tracing::{debug, info};

use crate::manifest::ShapeManifest;

/// Arguments for the build command
#[derive(Args)]
pub struct BuildArgs {
    /// Path to shapes.toml manifest file
    #[arg(default_value = "shapes.toml")]
    pub manifest: PathBuf,

    /// Output directory (overrides `output.dir` from the manifest)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

/// Execute the build command
pub fn execute(args: BuildArgs) -> Result<()> {
    let manifest = ShapeManifest::load(&args.manifest)?;

    // Manifest-relative output paths resolve against the manifest's directory
    let project_dir = args
        .manifest
        .parent()
        .unwrap_or_else(|| Path::new("."));
    let out_dir = args
        .out_dir
        .unwrap_or_else(|| project_dir.join(&manifest.output.dir));

    let written = build_all(&manifest, &out_dir)?;
    println!(
        "Built {} shape(s) into {}",
        written.len(),
        out_dir.display()
    );
    Ok(())
}

/// Generate and write every shape, returning the written paths in manifest order
pub fn build_all(manifest: &ShapeManifest, out_dir: &Path) -> Result<Vec<PathBuf>> {
    if manifest.shapes.is_empty() {
        info!("Manifest lists no shapes, nothing to build");
        return Ok(Vec::new());
    }

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let mut written = Vec::with_capacity(manifest.shapes.len());
    for entry in &manifest.shapes {
        let mesh = entry.build(manifest.output.weld);
        let path = out_dir.join(entry.file_name());

        write_obj(&mesh, &path, &entry.name)
            .with_context(|| format!("Failed to write shape '{}'", entry.name))?;

        debug!("{:?}", entry.desc);
        println!(
            "  {} ({}): {} vertices, {} primitives",
            entry.name,
            entry.desc.name(),
            mesh.vertex_count(),
            mesh.primitive_count()
        );
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_all_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = ShapeManifest::parse(
            r#"
[[shapes]]
name = "crate"
shape = "box"

[[shapes]]
name = "floor"
shape = "grid"
cell_count = 2
"#,
        )
        .unwrap();

        let out_dir = dir.path().join("out");
        let written = build_all(&manifest, &out_dir).unwrap();

        assert_eq!(written, vec![out_dir.join("crate.obj"), out_dir.join("floor.obj")]);

        let crate_obj = std::fs::read_to_string(&written[0]).unwrap();
        assert!(crate_obj.contains("o crate\n"));
        assert_eq!(crate_obj.lines().filter(|l| l.starts_with("f ")).count(), 12);

        let floor_obj = std::fs::read_to_string(&written[1]).unwrap();
        assert_eq!(floor_obj.lines().filter(|l| l.starts_with("l ")).count(), 6);
    }

    #[test]
    fn test_execute_relative_to_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let manifest_path = dir.path().join("shapes.toml");
        std::fs::write(
            &manifest_path,
            r#"
[output]
dir = "meshes"

[[shapes]]
name = "ball"
shape = "sphere"
slices = 8
stacks = 4
"#,
        )
        .unwrap();

        execute(BuildArgs {
            manifest: manifest_path,
            out_dir: None,
        })
        .unwrap();

        assert!(dir.path().join("meshes").join("ball.obj").is_file());
    }

    #[test]
    fn test_execute_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let result = execute(BuildArgs {
            manifest: dir.path().join("nope.toml"),
            out_dir: None,
        });
        assert!(result.is_err());
    }
}
