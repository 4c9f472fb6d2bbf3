//! Info command - print the size and extents of a shape without writing it

use anyhow::Result;
use clap::Args;

use crate::params::ShapeArgs;

/// Arguments for the info command
#[derive(Args)]
pub struct InfoArgs {
    #[command(flatten)]
    pub shape: ShapeArgs,
}

/// Execute the info command
pub fn execute(args: InfoArgs) -> Result<()> {
    let desc = args.shape.to_desc();
    let mesh = desc.generate();

    println!("Shape: {}", desc.name());
    println!("  Parameters: {:?}", desc);
    println!("  Topology:   {}", mesh.topology());
    println!("  Vertices:   {} ({} bytes)", mesh.vertex_count(), mesh.vertex_list_size());
    println!("  Indices:    {} ({} bytes)", mesh.index_count(), mesh.index_list_size());
    println!("  Primitives: {}", mesh.primitive_count());

    if let Some((min, max)) = mesh.bounds() {
        println!(
            "  Bounds:     ({:.3}, {:.3}, {:.3}) .. ({:.3}, {:.3}, {:.3})",
            min.x, min.y, min.z, max.x, max.y, max.z
        );
    }

    match mesh.validate() {
        Ok(()) => println!("  Valid:      yes"),
        Err(e) => println!("  Valid:      no ({e})"),
    }

    Ok(())
}
