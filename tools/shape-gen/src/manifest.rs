//! shapes.toml manifest parsing

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use basic_shapes::{Mesh, MeshApply, ShapeDesc, Transform, Weld};
use serde::Deserialize;

/// shapes.toml manifest structure
#[derive(Debug, Deserialize)]
pub struct ShapeManifest {
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default)]
    pub shapes: Vec<ShapeEntry>,
}

/// Output configuration section
#[derive(Debug, Deserialize)]
pub struct OutputSection {
    /// Directory the OBJ files are written to, relative to the manifest.
    /// Default: "."
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Merge bit-identical vertices before export.
    /// Default: false (subdivided meshes keep their duplicated edge vertices)
    #[serde(default)]
    pub weld: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            weld: false,
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Single shape entry
#[derive(Debug, Deserialize)]
pub struct ShapeEntry {
    /// Object name, also used as the file stem
    pub name: String,

    /// Generator and parameters (`shape = "sphere"`, `radius = ...`)
    #[serde(flatten)]
    pub desc: ShapeDesc,

    /// Uniform scale applied before the translation
    #[serde(default)]
    pub scale: Option<f32>,

    /// Offset applied after scaling
    #[serde(default)]
    pub translate: Option<[f32; 3]>,

    /// Overrides `output.weld` for this shape
    #[serde(default)]
    pub weld: Option<bool>,
}

impl ShapeEntry {
    /// Generate the mesh, then apply the entry's transform and welding
    pub fn build(&self, weld_by_default: bool) -> Mesh {
        let mut transform = Transform::identity();
        if let Some(scale) = self.scale {
            transform = transform.then(Transform::scale_uniform(scale));
        }
        if let Some([x, y, z]) = self.translate {
            transform = transform.then(Transform::translate(x, y, z));
        }

        let mesh = self.desc.generate().apply(transform);
        if self.weld.unwrap_or(weld_by_default) {
            mesh.apply(Weld)
        } else {
            mesh
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.obj", self.name)
    }
}

impl ShapeManifest {
    /// Load manifest from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid manifest: {}", path.display()))
    }

    /// Parse manifest from string
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Self = toml::from_str(content).context("Failed to parse shapes.toml")?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Check that every shape has a usable, unique name
    fn validate(&self) -> Result<()> {
        let mut seen = Vec::with_capacity(self.shapes.len());
        for entry in &self.shapes {
            let name = entry.name.as_str();
            if name.is_empty() {
                bail!("Shape names must not be empty");
            }
            if name.contains(['/', '\\']) || name == "." || name == ".." {
                bail!("Shape name '{}' is not a valid file name", name);
            }
            if seen.contains(&name) {
                bail!("Duplicate shape name '{}'", name);
            }
            seen.push(name);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basic_shapes::{ShapeKind, Vec3};

    #[test]
    fn test_manifest_minimal() {
        let manifest = ShapeManifest::parse(
            r#"
[[shapes]]
name = "ball"
shape = "sphere"
"#,
        )
        .unwrap();

        assert_eq!(manifest.output.dir, PathBuf::from("."));
        assert!(!manifest.output.weld);
        assert_eq!(manifest.shapes.len(), 1);

        let entry = &manifest.shapes[0];
        assert_eq!(entry.name, "ball");
        assert_eq!(entry.desc, ShapeKind::Sphere.default_desc());
        assert!(entry.scale.is_none());
        assert!(entry.translate.is_none());
    }

    #[test]
    fn test_manifest_full() {
        let manifest = ShapeManifest::parse(
            r#"
[output]
dir = "out"
weld = true

[[shapes]]
name = "globe"
shape = "icosahedron"
radius = 2.0
subdivide = 2
translate = [0.0, 1.0, 0.0]
scale = 0.5
weld = false

[[shapes]]
name = "floor"
shape = "grid"
cell_size = 0.5
cell_count = 8
"#,
        )
        .unwrap();

        assert_eq!(manifest.output.dir, PathBuf::from("out"));
        assert!(manifest.output.weld);

        let globe = &manifest.shapes[0];
        assert_eq!(
            globe.desc,
            ShapeDesc::Icosahedron {
                radius: 2.0,
                subdivide: 2
            }
        );
        assert_eq!(globe.translate, Some([0.0, 1.0, 0.0]));
        assert_eq!(globe.scale, Some(0.5));
        assert_eq!(globe.weld, Some(false));

        let floor = &manifest.shapes[1];
        assert_eq!(
            floor.desc,
            ShapeDesc::Grid {
                cell_size: 0.5,
                cell_count: 8
            }
        );
    }

    #[test]
    fn test_entry_build_transform() {
        let manifest = ShapeManifest::parse(
            r#"
[[shapes]]
name = "ball"
shape = "octahedron"
radius = 1.0
scale = 2.0
translate = [0.0, 10.0, 0.0]
"#,
        )
        .unwrap();

        let mesh = manifest.shapes[0].build(false);
        let (min, max) = mesh.bounds().unwrap();
        assert!(min.abs_diff_eq(Vec3::new(-2.0, 8.0, -2.0), 1e-6));
        assert!(max.abs_diff_eq(Vec3::new(2.0, 12.0, 2.0), 1e-6));
    }

    #[test]
    fn test_entry_build_weld() {
        let manifest = ShapeManifest::parse(
            r#"
[[shapes]]
name = "gem"
shape = "octahedron"
"#,
        )
        .unwrap();
        let entry = &manifest.shapes[0];
        assert_eq!(entry.build(false).vertex_count(), 6);

        let manifest = ShapeManifest::parse(
            r#"
[[shapes]]
name = "globe"
shape = "icosahedron"
subdivide = 1
"#,
        )
        .unwrap();
        let entry = &manifest.shapes[0];
        assert!(entry.build(true).vertex_count() < entry.build(false).vertex_count());
    }

    #[test]
    fn test_manifest_duplicate_names() {
        let result = ShapeManifest::parse(
            r#"
[[shapes]]
name = "a"
shape = "box"

[[shapes]]
name = "a"
shape = "sphere"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_manifest_bad_name() {
        let result = ShapeManifest::parse(
            r#"
[[shapes]]
name = "../escape"
shape = "box"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_manifest_unknown_shape() {
        let result = ShapeManifest::parse(
            r#"
[[shapes]]
name = "donut"
shape = "torus"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_manifest_empty() {
        let manifest = ShapeManifest::parse("").unwrap();
        assert!(manifest.shapes.is_empty());
    }
}
