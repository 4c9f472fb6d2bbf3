//! Generate command - build a single shape from flags and write it as OBJ

use std::path::PathBuf;

use anyhow::{Context, Result};
use basic_shapes::{MeshApply, Weld, write_obj};
use clap::Args;
use tracing::debug;

use crate::params::ShapeArgs;

/// Arguments for the generate command
#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub shape: ShapeArgs,

    /// Output .obj file path (default: <shape>.obj)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Merge bit-identical vertices before writing
    #[arg(long)]
    pub weld: bool,
}

/// Execute the generate command
pub fn execute(args: GenerateArgs) -> Result<()> {
    let desc = args.shape.to_desc();
    debug!("generating {:?}", desc);

    let mut mesh = desc.generate();
    if args.weld {
        mesh = mesh.apply(Weld);
    }

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{}.obj", desc.name())));
    let name = output
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(desc.name());

    write_obj(&mesh, &output, name)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "Wrote {} ({} vertices, {} {} primitives)",
        output.display(),
        mesh.vertex_count(),
        mesh.primitive_count(),
        mesh.topology()
    );
    Ok(())
}
