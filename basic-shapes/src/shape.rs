//! Shape descriptors
//!
//! A [`ShapeDesc`] names a generator together with its parameters, so shapes can be
//! read from configuration files and generated later. Every parameter has a default,
//! so `shape = "sphere"` alone is a valid description.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::primitives;
use crate::types::Mesh;

/// A shape generator and its parameters
///
/// Internally tagged by `shape` when (de)serialized:
/// ```
/// use basic_shapes::ShapeDesc;
///
/// let desc: ShapeDesc = toml::from_str(r#"
///     shape = "sphere"
///     radius = 2.0
///     slices = 24
/// "#).unwrap();
/// assert_eq!(desc, ShapeDesc::Sphere { radius: 2.0, slices: 24, stacks: 8 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ShapeDesc {
    Triangle {
        #[serde(default = "default_extent")]
        base: f32,
        #[serde(default = "default_extent")]
        height: f32,
        #[serde(default)]
        tip_offset: f32,
    },
    Rectangle {
        #[serde(default = "default_extent")]
        length: f32,
        #[serde(default = "default_extent")]
        width: f32,
    },
    #[serde(rename = "box", alias = "cuboid")]
    Cuboid {
        #[serde(default = "default_extent")]
        length: f32,
        #[serde(default = "default_extent")]
        width: f32,
        #[serde(default = "default_extent")]
        height: f32,
    },
    Tetrahedron {
        #[serde(default = "default_radius")]
        radius: f32,
    },
    Octahedron {
        #[serde(default = "default_radius")]
        radius: f32,
    },
    Icosahedron {
        #[serde(default = "default_radius")]
        radius: f32,
        #[serde(default)]
        subdivide: u32,
    },
    Dodecahedron {
        #[serde(default = "default_radius")]
        radius: f32,
        #[serde(default)]
        subdivide: u32,
    },
    Sphere {
        #[serde(default = "default_radius")]
        radius: f32,
        #[serde(default = "default_slices")]
        slices: u32,
        #[serde(default = "default_stacks")]
        stacks: u32,
    },
    Cylinder {
        #[serde(default = "default_radius")]
        radius_top: f32,
        #[serde(default = "default_radius")]
        radius_bottom: f32,
        #[serde(default = "default_extent")]
        height: f32,
        #[serde(default = "default_slices")]
        slices: u32,
        #[serde(default = "default_cap")]
        cap: bool,
    },
    Grid {
        #[serde(default = "default_extent")]
        cell_size: f32,
        #[serde(default = "default_cell_count")]
        cell_count: u32,
    },
}

fn default_extent() -> f32 {
    1.0
}

fn default_radius() -> f32 {
    1.0
}

fn default_slices() -> u32 {
    16
}

fn default_stacks() -> u32 {
    8
}

fn default_cap() -> bool {
    true
}

fn default_cell_count() -> u32 {
    10
}

impl ShapeDesc {
    /// Run the generator this descriptor names
    pub fn generate(&self) -> Mesh {
        match *self {
            ShapeDesc::Triangle {
                base,
                height,
                tip_offset,
            } => primitives::triangle(base, height, tip_offset),
            ShapeDesc::Rectangle { length, width } => primitives::rectangle(length, width),
            ShapeDesc::Cuboid {
                length,
                width,
                height,
            } => primitives::cuboid(length, width, height),
            ShapeDesc::Tetrahedron { radius } => primitives::tetrahedron(radius),
            ShapeDesc::Octahedron { radius } => primitives::octahedron(radius),
            ShapeDesc::Icosahedron { radius, subdivide } => {
                primitives::icosahedron(radius, subdivide)
            }
            ShapeDesc::Dodecahedron { radius, subdivide } => {
                primitives::dodecahedron(radius, subdivide)
            }
            ShapeDesc::Sphere {
                radius,
                slices,
                stacks,
            } => primitives::sphere(radius, slices, stacks),
            ShapeDesc::Cylinder {
                radius_top,
                radius_bottom,
                height,
                slices,
                cap,
            } => primitives::cylinder(radius_top, radius_bottom, height, slices, cap),
            ShapeDesc::Grid {
                cell_size,
                cell_count,
            } => primitives::grid(cell_size, cell_count),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeDesc::Triangle { .. } => ShapeKind::Triangle,
            ShapeDesc::Rectangle { .. } => ShapeKind::Rectangle,
            ShapeDesc::Cuboid { .. } => ShapeKind::Box,
            ShapeDesc::Tetrahedron { .. } => ShapeKind::Tetrahedron,
            ShapeDesc::Octahedron { .. } => ShapeKind::Octahedron,
            ShapeDesc::Icosahedron { .. } => ShapeKind::Icosahedron,
            ShapeDesc::Dodecahedron { .. } => ShapeKind::Dodecahedron,
            ShapeDesc::Sphere { .. } => ShapeKind::Sphere,
            ShapeDesc::Cylinder { .. } => ShapeKind::Cylinder,
            ShapeDesc::Grid { .. } => ShapeKind::Grid,
        }
    }

    /// Lowercase shape name, as used in the `shape` tag
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }
}

/// The kinds of shape the generator can build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Triangle,
    Rectangle,
    Box,
    Tetrahedron,
    Octahedron,
    Icosahedron,
    Dodecahedron,
    Sphere,
    Cylinder,
    Grid,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 10] = [
        ShapeKind::Triangle,
        ShapeKind::Rectangle,
        ShapeKind::Box,
        ShapeKind::Tetrahedron,
        ShapeKind::Octahedron,
        ShapeKind::Icosahedron,
        ShapeKind::Dodecahedron,
        ShapeKind::Sphere,
        ShapeKind::Cylinder,
        ShapeKind::Grid,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Triangle => "triangle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Box => "box",
            ShapeKind::Tetrahedron => "tetrahedron",
            ShapeKind::Octahedron => "octahedron",
            ShapeKind::Icosahedron => "icosahedron",
            ShapeKind::Dodecahedron => "dodecahedron",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Grid => "grid",
        }
    }

    /// Descriptor for this kind with every parameter at its default
    pub fn default_desc(self) -> ShapeDesc {
        match self {
            ShapeKind::Triangle => ShapeDesc::Triangle {
                base: default_extent(),
                height: default_extent(),
                tip_offset: 0.0,
            },
            ShapeKind::Rectangle => ShapeDesc::Rectangle {
                length: default_extent(),
                width: default_extent(),
            },
            ShapeKind::Box => ShapeDesc::Cuboid {
                length: default_extent(),
                width: default_extent(),
                height: default_extent(),
            },
            ShapeKind::Tetrahedron => ShapeDesc::Tetrahedron {
                radius: default_radius(),
            },
            ShapeKind::Octahedron => ShapeDesc::Octahedron {
                radius: default_radius(),
            },
            ShapeKind::Icosahedron => ShapeDesc::Icosahedron {
                radius: default_radius(),
                subdivide: 0,
            },
            ShapeKind::Dodecahedron => ShapeDesc::Dodecahedron {
                radius: default_radius(),
                subdivide: 0,
            },
            ShapeKind::Sphere => ShapeDesc::Sphere {
                radius: default_radius(),
                slices: default_slices(),
                stacks: default_stacks(),
            },
            ShapeKind::Cylinder => ShapeDesc::Cylinder {
                radius_top: default_radius(),
                radius_bottom: default_radius(),
                height: default_extent(),
                slices: default_slices(),
                cap: default_cap(),
            },
            ShapeKind::Grid => ShapeDesc::Grid {
                cell_size: default_extent(),
                cell_count: default_cell_count(),
            },
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown shape name given to [`ShapeKind::from_str`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown shape '{0}'")]
pub struct UnknownShape(pub String);

impl FromStr for ShapeKind {
    type Err = UnknownShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        if name == "cuboid" {
            return Ok(ShapeKind::Box);
        }
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| UnknownShape(s.to_string()))
    }
}
