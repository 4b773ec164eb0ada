//! Project configuration for forge.
//!
//! Reads `forge.toml` from the workspace root when present. Every field has
//! a default matching the conventional engine workspace layout, so a missing
//! file means a fully defaulted configuration, not an error.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "forge.toml";

#[derive(Debug, Deserialize)]
pub struct ForgeConfig {
    #[serde(default)]
    pub paths: PathsConfig,

    /// Vendored third-party dependencies, in build order. Order matters:
    /// later entries shadow earlier ones on the prefix path.
    #[serde(default = "default_externals")]
    pub external: Vec<ExternalConfig>,

    #[serde(default)]
    pub components: ComponentsConfig,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        ForgeConfig {
            paths: PathsConfig::default(),
            external: default_externals(),
            components: ComponentsConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PathsConfig {
    /// Where vendored dependency sources are checked out.
    #[serde(default = "default_vendor_dir")]
    pub vendor: PathBuf,

    /// Per-dependency cmake binary directories.
    #[serde(default = "default_build_dir")]
    pub build: PathBuf,

    /// Shared install root; each dependency installs under its own name.
    #[serde(default = "default_packages_dir")]
    pub packages: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            vendor: default_vendor_dir(),
            build: default_build_dir(),
            packages: default_packages_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalConfig {
    pub name: String,

    /// Extra cmake arguments, passed through uninterpreted.
    #[serde(default)]
    pub options: Vec<String>,
}

/// First-party source roots. Each holds its own `CMakePresets.json`,
/// regenerated by forge at the matching boundary.
#[derive(Debug, Deserialize)]
pub struct ComponentsConfig {
    #[serde(default = "default_engine")]
    pub engine: ComponentConfig,

    #[serde(default = "default_app")]
    pub app: ComponentConfig,
}

impl Default for ComponentsConfig {
    fn default() -> Self {
        ComponentsConfig {
            engine: default_engine(),
            app: default_app(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ComponentConfig {
    pub name: String,
    pub dir: PathBuf,
}

fn default_vendor_dir() -> PathBuf {
    PathBuf::from("vendor")
}
fn default_build_dir() -> PathBuf {
    PathBuf::from("build/config")
}
fn default_packages_dir() -> PathBuf {
    PathBuf::from("build/packages")
}
fn default_externals() -> Vec<ExternalConfig> {
    vec![ExternalConfig {
        name: "glfw".to_string(),
        options: Vec::new(),
    }]
}
fn default_engine() -> ComponentConfig {
    ComponentConfig {
        name: "engine".to_string(),
        dir: PathBuf::from("engine"),
    }
}
fn default_app() -> ComponentConfig {
    ComponentConfig {
        name: "app".to_string(),
        dir: PathBuf::from("app"),
    }
}

impl ForgeConfig {
    /// Load config from `<root>/forge.toml`, or defaults if absent.
    pub fn load(root: &Path) -> Result<Self> {
        let config_path = root.join(CONFIG_FILE);

        if !config_path.exists() {
            return Ok(ForgeConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: ForgeConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(config)
    }
}
