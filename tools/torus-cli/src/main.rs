//! Nether Torus CLI - generate, inspect and upload torus meshes
//!
//! # Commands
//!
//! - `nether-torus generate` - Write a torus mesh as OBJ or JSON
//! - `nether-torus shaders` - Compile and link WGSL shaders, print locations
//! - `nether-torus upload` - Upload a torus to a headless GPU device
//! - `nether-torus init` - Write a default nether-torus.toml
//!
//! # Configuration (nether-torus.toml)
//!
//! ```toml
//! [mesh]
//! major_radius = 1.0
//! minor_radius = 0.4
//! major_segments = 48
//! minor_segments = 24
//!
//! [export]
//! format = "obj"
//! validate = true
//!
//! [render]
//! color_format = "rgba8_unorm_srgb"
//! depth = true
//! ```
//!
//! Command-line flags override the file.

mod generate;
mod init;
mod shaders;
mod upload;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use nether_torus::config::{self, Config};

/// Nether Torus - procedural torus meshes and WGSL helpers
#[derive(Parser)]
#[command(name = "nether-torus")]
#[command(about = "Procedural torus mesh generator")]
#[command(version)]
struct Cli {
    /// Path to a nether-torus.toml (defaults to the platform config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a torus mesh as OBJ or JSON
    Generate(generate::GenerateArgs),

    /// Compile and link WGSL shaders, print attribute and uniform locations
    Shaders(shaders::ShadersArgs),

    /// Upload a torus to a headless GPU device and build its pipeline
    Upload(upload::UploadArgs),

    /// Write a default nether-torus.toml
    Init(init::InitArgs),
}

/// Load the config from `--config`, or from the platform directory when unset
///
/// An explicit path must exist and parse; the platform file falls back to defaults.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => config::load_from(path),
        None => Ok(config::load()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Generate(args) => generate::execute(args, &load_config(config_path)?),
        Commands::Shaders(args) => shaders::execute(args),
        Commands::Upload(args) => upload::execute(args, &load_config(config_path)?),
        Commands::Init(args) => init::execute(args, config_path),
    }
}
