//! Configuration management (nether-torus.toml)
//!
//! Handles loading, saving, and providing defaults for tool settings.
//! Settings are stored in TOML format in the platform-specific config directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::graphics::PipelineTargets;
use crate::procedural::{ExportFormat, TorusParams};

/// Config file name inside [`config_dir`]
pub const CONFIG_FILE_NAME: &str = "nether-torus.toml";

/// Tool configuration.
///
/// Every section falls back to its defaults when missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Torus generation parameters
    #[serde(default)]
    pub mesh: TorusParams,
    /// Mesh export settings
    #[serde(default)]
    pub export: ExportConfig,
    /// Pipeline target settings
    #[serde(default)]
    pub render: RenderConfig,
}

/// Mesh export configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Output format (default: obj)
    #[serde(default)]
    pub format: ExportFormat,
    /// Reject degenerate torus parameters before generating (default: true)
    #[serde(default = "default_true")]
    pub validate: bool,
}

/// Color target format for pipeline creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorFormat {
    #[default]
    Rgba8UnormSrgb,
    Bgra8UnormSrgb,
    Rgba8Unorm,
    Bgra8Unorm,
}

impl ColorFormat {
    pub fn to_wgpu(self) -> wgpu::TextureFormat {
        match self {
            ColorFormat::Rgba8UnormSrgb => wgpu::TextureFormat::Rgba8UnormSrgb,
            ColorFormat::Bgra8UnormSrgb => wgpu::TextureFormat::Bgra8UnormSrgb,
            ColorFormat::Rgba8Unorm => wgpu::TextureFormat::Rgba8Unorm,
            ColorFormat::Bgra8Unorm => wgpu::TextureFormat::Bgra8Unorm,
        }
    }
}

/// Render pipeline configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Color target format (default: rgba8_unorm_srgb)
    #[serde(default)]
    pub color_format: ColorFormat,
    /// Whether the pipeline writes a Depth24Plus buffer (default: true)
    #[serde(default = "default_true")]
    pub depth: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            validate: default_true(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            color_format: ColorFormat::default(),
            depth: default_true(),
        }
    }
}

impl RenderConfig {
    /// Pipeline targets described by this section
    pub fn targets(&self) -> PipelineTargets {
        PipelineTargets {
            color_format: self.color_format.to_wgpu(),
            depth_format: self.depth.then_some(wgpu::TextureFormat::Depth24Plus),
        }
    }
}

/// Returns the platform-specific configuration directory.
///
/// On Windows: `%APPDATA%\Nethercore\NetherTorus\config`
/// On macOS: `~/Library/Application Support/io.nethercore.NetherTorus`
/// On Linux: `~/.config/NetherTorus`
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.nethercore", "", "NetherTorus")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Loads the configuration from the platform config directory.
///
/// Returns default values if the file doesn't exist or cannot be parsed.
pub fn load() -> Config {
    match config_path() {
        Ok(path) => load_or_default(&path),
        Err(_) => Config::default(),
    }
}

/// Loads the configuration from `path`, falling back to defaults.
pub fn load_or_default(path: &Path) -> Config {
    match load_from(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::debug!("Using default config: {:#}", e);
            Config::default()
        }
    }
}

/// Loads the configuration from an explicit path.
///
/// # Errors
///
/// Unlike [`load`], a missing or malformed file is an error.
pub fn load_from(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Saves the configuration to the given path.
///
/// Creates the parent directory if it doesn't exist.
pub fn save_to(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let content = toml::to_string_pretty(config).context("Failed to serialize config")?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))
}

/// Full path of the config file in the platform config directory.
pub fn config_path() -> Result<PathBuf> {
    let dir = config_dir().context("Could not determine config directory")?;
    Ok(dir.join(CONFIG_FILE_NAME))
}
