//! cmake invocation shapes.
//!
//! Externals are driven explicitly (`-S`/`-B` plus cache arguments) since
//! they carry no preset document of their own; first-party components are
//! driven through the leaf preset name in their regenerated document.

use crate::deps::Dependency;
use crate::exec::Invocation;
use crate::paths;
use crate::request::BuildType;
use std::path::Path;

const PROGRAM: &str = "cmake";

/// Configure one external dependency. The search path is the relative
/// composed variant (same run, same working directory); the install prefix
/// is absolute so installs land in the same tree regardless of how cmake
/// resolves its binary dir.
pub fn configure_external(
    root: &Path,
    dep: &Dependency,
    build_type: BuildType,
    prefix_path: &str,
) -> Invocation {
    let install_prefix = paths::display(&paths::absolutize(root, &dep.prefix_dir));
    let mut args = vec![
        "-S".to_string(),
        paths::display(&dep.source_dir),
        "-B".to_string(),
        paths::display(&dep.build_dir),
        format!("-DCMAKE_BUILD_TYPE={}", build_type.as_str()),
        format!("-DCMAKE_INSTALL_PREFIX={install_prefix}"),
        format!("-DCMAKE_PREFIX_PATH={prefix_path}"),
    ];
    args.extend(dep.options.iter().cloned());
    Invocation::new(PROGRAM, args).in_dir(root)
}

pub fn build_external(root: &Path, dep: &Dependency, build_type: BuildType) -> Invocation {
    Invocation::new(
        PROGRAM,
        vec![
            "--build".to_string(),
            paths::display(&dep.build_dir),
            "--config".to_string(),
            build_type.as_str().to_string(),
        ],
    )
    .in_dir(root)
}

pub fn install_external(root: &Path, dep: &Dependency, build_type: BuildType) -> Invocation {
    Invocation::new(
        PROGRAM,
        vec![
            "--install".to_string(),
            paths::display(&dep.build_dir),
            "--config".to_string(),
            build_type.as_str().to_string(),
        ],
    )
    .in_dir(root)
}

/// Configure a first-party component via its preset document. Runs in the
/// component's source root, where `CMakePresets.json` lives.
pub fn configure_preset(component_dir: &Path, preset: &str) -> Invocation {
    Invocation::new(PROGRAM, vec!["--preset".to_string(), preset.to_string()])
        .in_dir(component_dir)
}

pub fn build_preset(component_dir: &Path, preset: &str) -> Invocation {
    Invocation::new(
        PROGRAM,
        vec![
            "--build".to_string(),
            "--preset".to_string(),
            preset.to_string(),
        ],
    )
    .in_dir(component_dir)
}

pub fn install_preset(component_dir: &Path, preset: &str) -> Invocation {
    Invocation::new(
        PROGRAM,
        vec![
            "--build".to_string(),
            "--preset".to_string(),
            preset.to_string(),
            "--target".to_string(),
            "install".to_string(),
        ],
    )
    .in_dir(component_dir)
}
