//! Init command - write a default nether-torus.toml

use anyhow::Result;
use clap::Args;
use std::path::Path;

use nether_torus::config::{self, Config};

/// Arguments for the init command
#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(short, long)]
    pub force: bool,
}

/// Execute the init command
///
/// Writes to `--config` when given, otherwise to the platform config directory.
pub fn execute(args: InitArgs, path: Option<&Path>) -> Result<()> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => config::config_path()?,
    };

    if path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    config::save_to(&Config::default(), &path)?;
    println!("Created {}", path.display());
    Ok(())
}
