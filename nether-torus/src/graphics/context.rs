//! Headless wgpu device
//!
//! Used by tooling that needs a real device (buffer uploads, pipeline
//! creation) without a window.

use anyhow::{Context, Result};

/// Device and queue with no surface attached
pub struct GpuContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    /// Adapter name reported by the driver
    pub adapter_name: String,
}

impl GpuContext {
    /// Create a headless graphics context on any available backend
    pub fn headless() -> Result<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::LowPower,
            compatible_surface: None,
            force_fallback_adapter: false,
        }))
        .context("Failed to find suitable GPU adapter")?;

        let adapter_name = adapter.get_info().name;
        tracing::info!("Using GPU adapter: {:?}", adapter_name);

        let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: Some("Nether Torus Device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            memory_hints: wgpu::MemoryHints::Performance,
            experimental_features: Default::default(),
            trace: wgpu::Trace::Off,
        }))
        .context("Failed to create GPU device")?;

        Ok(Self {
            device,
            queue,
            adapter_name,
        })
    }
}
