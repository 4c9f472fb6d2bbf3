//! Shape parameters shared by the `generate` and `info` commands

use basic_shapes::{ShapeDesc, ShapeKind};
use clap::Args;

/// Shape selection plus optional parameter overrides
///
/// Parameters that do not apply to the chosen shape are ignored; anything left
/// unset keeps the shape's default.
#[derive(Args, Debug)]
pub struct ShapeArgs {
    /// Shape to generate (triangle, rectangle, box, tetrahedron, octahedron,
    /// icosahedron, dodecahedron, sphere, cylinder, grid)
    pub kind: ShapeKind,

    /// Radius (polyhedra and sphere), or both cylinder radii
    #[arg(long)]
    pub radius: Option<f32>,

    /// Cylinder radius at +height/2
    #[arg(long)]
    pub radius_top: Option<f32>,

    /// Cylinder radius at -height/2
    #[arg(long)]
    pub radius_bottom: Option<f32>,

    /// Triangle base width
    #[arg(long)]
    pub base: Option<f32>,

    /// Horizontal apex shift of the triangle, as a fraction of its base
    #[arg(long, allow_hyphen_values = true)]
    pub tip_offset: Option<f32>,

    /// Extent along X (rectangle, box)
    #[arg(long)]
    pub length: Option<f32>,

    /// Extent along Y (rectangle, box)
    #[arg(long)]
    pub width: Option<f32>,

    /// Height (triangle, box, cylinder)
    #[arg(long)]
    pub height: Option<f32>,

    /// Longitudinal or radial divisions (sphere, cylinder)
    #[arg(long)]
    pub slices: Option<u32>,

    /// Latitudinal divisions (sphere)
    #[arg(long)]
    pub stacks: Option<u32>,

    /// Subdivision passes (icosahedron, dodecahedron)
    #[arg(long)]
    pub subdivide: Option<u32>,

    /// Leave the cylinder ends open
    #[arg(long)]
    pub no_cap: bool,

    /// Grid line spacing
    #[arg(long)]
    pub cell_size: Option<f32>,

    /// Grid cells along each axis
    #[arg(long)]
    pub cell_count: Option<u32>,
}

impl ShapeArgs {
    /// Build the descriptor: the shape's defaults with every given flag applied
    pub fn to_desc(&self) -> ShapeDesc {
        match self.kind.default_desc() {
            ShapeDesc::Triangle {
                base,
                height,
                tip_offset,
            } => ShapeDesc::Triangle {
                base: self.base.unwrap_or(base),
                height: self.height.unwrap_or(height),
                tip_offset: self.tip_offset.unwrap_or(tip_offset),
            },
            ShapeDesc::Rectangle { length, width } => ShapeDesc::Rectangle {
                length: self.length.unwrap_or(length),
                width: self.width.unwrap_or(width),
            },
            ShapeDesc::Cuboid {
                length,
                width,
                height,
            } => ShapeDesc::Cuboid {
                length: self.length.unwrap_or(length),
                width: self.width.unwrap_or(width),
                height: self.height.unwrap_or(height),
            },
            ShapeDesc::Tetrahedron { radius } => ShapeDesc::Tetrahedron {
                radius: self.radius.unwrap_or(radius),
            },
            ShapeDesc::Octahedron { radius } => ShapeDesc::Octahedron {
                radius: self.radius.unwrap_or(radius),
            },
            ShapeDesc::Icosahedron { radius, subdivide } => ShapeDesc::Icosahedron {
                radius: self.radius.unwrap_or(radius),
                subdivide: self.subdivide.unwrap_or(subdivide),
            },
            ShapeDesc::Dodecahedron { radius, subdivide } => ShapeDesc::Dodecahedron {
                radius: self.radius.unwrap_or(radius),
                subdivide: self.subdivide.unwrap_or(subdivide),
            },
            ShapeDesc::Sphere {
                radius,
                slices,
                stacks,
            } => ShapeDesc::Sphere {
                radius: self.radius.unwrap_or(radius),
                slices: self.slices.unwrap_or(slices),
                stacks: self.stacks.unwrap_or(stacks),
            },
            ShapeDesc::Cylinder {
                radius_top,
                radius_bottom,
                height,
                slices,
                cap,
            } => ShapeDesc::Cylinder {
                radius_top: self.radius_top.or(self.radius).unwrap_or(radius_top),
                radius_bottom: self.radius_bottom.or(self.radius).unwrap_or(radius_bottom),
                height: self.height.unwrap_or(height),
                slices: self.slices.unwrap_or(slices),
                cap: cap && !self.no_cap,
            },
            ShapeDesc::Grid {
                cell_size,
                cell_count,
            } => ShapeDesc::Grid {
                cell_size: self.cell_size.unwrap_or(cell_size),
                cell_count: self.cell_count.unwrap_or(cell_count),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        shape: ShapeArgs,
    }

    fn parse(args: &[&str]) -> ShapeDesc {
        let cli = TestCli::try_parse_from(std::iter::once("test").chain(args.iter().copied()))
            .unwrap();
        cli.shape.to_desc()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(parse(&["sphere"]), ShapeKind::Sphere.default_desc());
        assert_eq!(parse(&["cuboid"]), ShapeKind::Box.default_desc());
    }

    #[test]
    fn test_overrides() {
        assert_eq!(
            parse(&["sphere", "--radius", "2", "--slices", "24"]),
            ShapeDesc::Sphere {
                radius: 2.0,
                slices: 24,
                stacks: 8
            }
        );
        assert_eq!(
            parse(&["triangle", "--tip-offset", "-0.25"]),
            ShapeDesc::Triangle {
                base: 1.0,
                height: 1.0,
                tip_offset: -0.25
            }
        );
    }

    #[test]
    fn test_cylinder_radii() {
        let desc = parse(&["cylinder", "--radius", "2", "--radius-top", "0.5", "--no-cap"]);
        assert_eq!(
            desc,
            ShapeDesc::Cylinder {
                radius_top: 0.5,
                radius_bottom: 2.0,
                height: 1.0,
                slices: 16,
                cap: false
            }
        );
    }

    #[test]
    fn test_unknown_kind() {
        let result = TestCli::try_parse_from(["test", "torus"]);
        assert!(result.is_err());
    }
}
