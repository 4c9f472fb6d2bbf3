//! shape-gen - procedural mesh generator
//!
//! # Commands
//!
//! - `shape-gen generate <SHAPE>` - Generate one shape from flags and write it as OBJ
//! - `shape-gen build [MANIFEST]` - Generate every shape listed in a shapes.toml
//! - `shape-gen info <SHAPE>` - Print vertex/index counts and bounds of a shape
//!
//! # Usage
//!
//! ```bash
//! # A 32x16 UV sphere
//! shape-gen generate sphere --radius 2 --slices 32 --stacks 16 -o ball.obj
//!
//! # How big is a level-4 icosphere?
//! shape-gen info icosahedron --subdivide 4
//!
//! # Everything in shapes.toml
//! shape-gen build shapes.toml --out-dir meshes
//! ```
//!
//! # Manifest (shapes.toml)
//!
//! ```toml
//! [output]
//! dir = "meshes"
//! weld = false
//!
//! [[shapes]]
//! name = "globe"
//! shape = "icosahedron"
//! radius = 1.0
//! subdivide = 2
//! translate = [0.0, 1.0, 0.0]
//! ```
//!
//! Logging follows `RUST_LOG`; `-v` lowers the default level to debug.

mod build;
mod generate;
mod info;
mod manifest;
mod params;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// shape-gen - procedural mesh generator
#[derive(Parser)]
#[command(name = "shape-gen")]
#[command(about = "Generate procedural meshes and write them as OBJ files")]
#[command(version)]
struct Cli {
    /// Show debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one shape and write it as OBJ
    Generate(generate::GenerateArgs),

    /// Generate every shape listed in a manifest
    Build(build::BuildArgs),

    /// Print the size and extents of a shape
    Info(info::InfoArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate(args) => generate::execute(args),
        Commands::Build(args) => build::execute(args),
        Commands::Info(args) => info::execute(args),
    }
}
