//! CMake preset document model.
//!
//! Three configure-preset shapes make up the hierarchy: one hidden common
//! base, one hidden base per host platform, and one visible leaf per
//! (platform, arch, build type). Build and test presets are derived mirrors.
//! Each shape has its own constructor so the inherits/condition invariants
//! hold by construction.

pub mod tree;
pub mod write;

use crate::request::{Arch, BuildType, HostPlatform};
use serde::Serialize;
use std::collections::BTreeMap;

/// Name of the hidden common base preset.
pub const COMMON_BASE: &str = "base";

/// Schema version of the generated document.
pub const DOCUMENT_VERSION: u32 = 3;

/// Host-identity equality test attached to each platform base.
#[derive(Debug, Clone, Serialize)]
pub struct Condition {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub lhs: &'static str,
    pub rhs: &'static str,
}

impl Condition {
    fn host_equals(host: HostPlatform) -> Self {
        Condition {
            kind: "equals",
            lhs: "${hostSystemName}",
            rhs: host.host_system_name(),
        }
    }
}

/// Architecture descriptor carried by leaf presets. The `external` strategy
/// keeps single-config generators from rejecting the field.
#[derive(Debug, Clone, Serialize)]
pub struct Architecture {
    pub value: &'static str,
    pub strategy: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurePreset {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inherits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub architecture: Option<Architecture>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub cache_variables: BTreeMap<String, String>,
}

impl ConfigurePreset {
    /// The hidden common base: binary/install directory templates shared by
    /// every other preset.
    pub fn common_base() -> Self {
        ConfigurePreset {
            name: COMMON_BASE.to_string(),
            hidden: Some(true),
            display_name: None,
            inherits: None,
            condition: None,
            binary_dir: Some("${sourceDir}/build/${presetName}".to_string()),
            install_dir: Some("${sourceDir}/build/packages".to_string()),
            architecture: None,
            cache_variables: BTreeMap::new(),
        }
    }

    /// A hidden per-platform base: inherits the common base, applies only on
    /// the matching host, and carries the absolute prefix path for that
    /// platform's separator convention.
    pub fn platform_base(host: HostPlatform, prefix_path: String) -> Self {
        let mut cache_variables = BTreeMap::new();
        cache_variables.insert("CMAKE_PREFIX_PATH".to_string(), prefix_path);
        ConfigurePreset {
            name: host.tag().to_string(),
            hidden: Some(true),
            display_name: None,
            inherits: Some(COMMON_BASE.to_string()),
            condition: Some(Condition::host_equals(host)),
            binary_dir: None,
            install_dir: None,
            architecture: None,
            cache_variables,
        }
    }

    /// A visible leaf selecting one concrete (platform, arch, build type).
    pub fn leaf(host: HostPlatform, arch: Arch, build_type: BuildType) -> Self {
        let mut cache_variables = BTreeMap::new();
        cache_variables.insert(
            "CMAKE_BUILD_TYPE_INIT".to_string(),
            build_type.as_str().to_string(),
        );
        ConfigurePreset {
            name: leaf_name(host, arch, build_type),
            hidden: None,
            display_name: Some(format!("{}-{}", arch.tag(), build_type.tag())),
            inherits: Some(host.tag().to_string()),
            condition: None,
            binary_dir: None,
            install_dir: None,
            architecture: Some(Architecture {
                value: arch.tag(),
                strategy: "external",
            }),
            cache_variables,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden.unwrap_or(false)
    }
}

/// A build- or test-preset entry; the two lists share one shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MirrorPreset {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inherits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configure_preset: Option<String>,
}

impl MirrorPreset {
    /// Hidden mirror of a hidden configure preset: same name, same parent.
    pub fn hidden(preset: &ConfigurePreset) -> Self {
        MirrorPreset {
            name: preset.name.clone(),
            hidden: Some(true),
            inherits: preset.inherits.clone(),
            display_name: None,
            configure_preset: None,
        }
    }

    /// Visible mirror of a leaf: applied to that exact configure preset by
    /// name, not to its parent.
    pub fn of_leaf(leaf: &ConfigurePreset) -> Self {
        MirrorPreset {
            name: leaf.name.clone(),
            hidden: None,
            inherits: leaf.inherits.clone(),
            display_name: leaf.display_name.clone(),
            configure_preset: Some(leaf.name.clone()),
        }
    }
}

/// The persisted document: fully rebuilt, never merged.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetDocument {
    pub version: u32,
    pub configure_presets: Vec<ConfigurePreset>,
    pub build_presets: Vec<MirrorPreset>,
    pub test_presets: Vec<MirrorPreset>,
}

/// Globally unique leaf preset name, `<platform>-<arch>-<buildtype>`.
pub fn leaf_name(host: HostPlatform, arch: Arch, build_type: BuildType) -> String {
    format!("{}-{}-{}", host.tag(), arch.tag(), build_type.tag())
}
