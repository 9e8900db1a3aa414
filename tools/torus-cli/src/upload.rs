//! Upload command - push a torus to a headless GPU device

use anyhow::{Context, Result};
use clap::Args;

use nether_torus::config::Config;
use nether_torus::graphics::{
    GpuContext, MeshBuffers, ShaderStage, TORUS_FRAGMENT_WGSL, TORUS_VERTEX_WGSL, compile_shader,
    link_program,
};

/// Arguments for the upload command
#[derive(Args)]
pub struct UploadArgs {
    /// Skip pipeline creation and only upload buffers
    #[arg(long)]
    pub buffers_only: bool,
}

/// Execute the upload command
pub fn execute(args: UploadArgs, config: &Config) -> Result<()> {
    let mesh = if config.export.validate {
        config
            .mesh
            .build_checked()
            .context("Invalid torus parameters")?
    } else {
        config.mesh.build()
    };

    let gpu = GpuContext::headless()?;
    let buffers = MeshBuffers::upload(&gpu.device, &mesh);
    tracing::info!(
        "Uploaded {} indices ({} bytes) to {}",
        buffers.index_count,
        buffers.byte_size(),
        gpu.adapter_name
    );

    if args.buffers_only {
        return Ok(());
    }

    let vertex = compile_shader(TORUS_VERTEX_WGSL, ShaderStage::Vertex)?;
    let fragment = compile_shader(TORUS_FRAGMENT_WGSL, ShaderStage::Fragment)?;
    let program = link_program(vertex, fragment)?;

    let targets = config.render.targets();
    let _pipeline = program.create_pipeline(&gpu.device, &targets);
    tracing::info!(
        "Created torus pipeline ({:?}, depth: {:?})",
        targets.color_format,
        targets.depth_format
    );

    Ok(())
}
