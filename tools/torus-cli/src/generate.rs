//! Generate command - write a torus mesh to a file or stdout

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use nether_torus::config::Config;
use nether_torus::procedural::{ExportFormat, TorusMesh, TorusParams, write_mesh};

/// Arguments for the generate command
#[derive(Args)]
pub struct GenerateArgs {
    /// Distance from the torus center to the tube center
    #[arg(long)]
    pub major_radius: Option<f64>,

    /// Tube radius
    #[arg(long)]
    pub minor_radius: Option<f64>,

    /// Segments around the major ring
    #[arg(long)]
    pub major_segments: Option<u32>,

    /// Segments around the tube
    #[arg(long)]
    pub minor_segments: Option<u32>,

    /// Output format: obj or json
    #[arg(short, long)]
    pub format: Option<ExportFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip parameter validation
    #[arg(long)]
    pub unchecked: bool,
}

impl GenerateArgs {
    /// Config parameters with command-line overrides applied
    fn params(&self, config: &Config) -> TorusParams {
        let mesh = &config.mesh;
        TorusParams {
            major_radius: self.major_radius.unwrap_or(mesh.major_radius),
            minor_radius: self.minor_radius.unwrap_or(mesh.minor_radius),
            major_segments: self.major_segments.unwrap_or(mesh.major_segments),
            minor_segments: self.minor_segments.unwrap_or(mesh.minor_segments),
        }
    }

    fn format(&self, config: &Config) -> ExportFormat {
        self.format.unwrap_or(config.export.format)
    }
}

/// Build the mesh, validating unless disabled by flag or config
fn build_mesh(params: &TorusParams, validate: bool) -> Result<TorusMesh> {
    if validate {
        params.build_checked().context("Invalid torus parameters")
    } else {
        Ok(params.build())
    }
}

/// Execute the generate command
pub fn execute(args: GenerateArgs, config: &Config) -> Result<()> {
    let params = args.params(config);
    let format = args.format(config);
    let mesh = build_mesh(&params, config.export.validate && !args.unchecked)?;

    tracing::info!(
        "Generated torus: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_mesh(&mesh, format, &mut writer)
                .and_then(|()| writer.flush())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {} mesh to {}", format, path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_mesh(&mesh, format, &mut writer)
                .and_then(|()| writer.flush())
                .context("Failed to write mesh to stdout")?;
        }
    }

    Ok(())
}
