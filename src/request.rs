//! The validated build request: configuration, architecture, scope and host.
//!
//! Everything downstream is gated on these four fields holding a recognized
//! value, so validation happens here, up front, and an unrecognized string is
//! a terminal [`ForgeError::InvalidArgument`] rather than a silent default.

use crate::error::ForgeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildType {
    Debug,
    Release,
}

impl BuildType {
    pub const ALL: [BuildType; 2] = [BuildType::Debug, BuildType::Release];

    pub fn parse(s: &str) -> Result<Self, ForgeError> {
        match s {
            "Debug" => Ok(BuildType::Debug),
            "Release" => Ok(BuildType::Release),
            _ => Err(ForgeError::InvalidArgument {
                flag: "--config",
                value: s.to_string(),
                valid: "Debug, Release",
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BuildType::Debug => "Debug",
            BuildType::Release => "Release",
        }
    }

    /// Lowercase form used in preset names.
    pub fn tag(self) -> &'static str {
        match self {
            BuildType::Debug => "debug",
            BuildType::Release => "release",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arch {
    X86,
    X64,
}

impl Arch {
    pub const ALL: [Arch; 2] = [Arch::X64, Arch::X86];

    pub fn parse(s: &str) -> Result<Self, ForgeError> {
        match s {
            "x86" => Ok(Arch::X86),
            "x64" => Ok(Arch::X64),
            _ => Err(ForgeError::InvalidArgument {
                flag: "--arch",
                value: s.to_string(),
                valid: "x86, x64",
            }),
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Arch::X86 => "x86",
            Arch::X64 => "x64",
        }
    }
}

/// The requested subset of the workspace to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    External,
    Internal,
    /// Accepted but not wired to a distinct boundary yet.
    Executables,
    All,
}

impl Scope {
    pub fn parse(s: &str) -> Result<Self, ForgeError> {
        match s {
            "external" => Ok(Scope::External),
            "internal" => Ok(Scope::Internal),
            "executables" => Ok(Scope::Executables),
            "all" => Ok(Scope::All),
            _ => Err(ForgeError::InvalidArgument {
                flag: "--target",
                value: s.to_string(),
                valid: "external, internal, executables, all",
            }),
        }
    }

    pub fn includes_external(self) -> bool {
        matches!(self, Scope::External | Scope::All)
    }

    pub fn includes_internal(self) -> bool {
        matches!(self, Scope::Internal | Scope::All)
    }
}

/// Host operating system, read from the running environment and never
/// overridable by flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostPlatform {
    Windows,
    MacOs,
    Linux,
}

impl HostPlatform {
    /// Fixed enumeration order used when generating cross-platform documents.
    pub const ALL: [HostPlatform; 3] = [
        HostPlatform::Linux,
        HostPlatform::Windows,
        HostPlatform::MacOs,
    ];

    pub fn detect() -> Result<Self, ForgeError> {
        match std::env::consts::OS {
            "windows" => Ok(HostPlatform::Windows),
            "macos" => Ok(HostPlatform::MacOs),
            "linux" => Ok(HostPlatform::Linux),
            other => Err(ForgeError::InvalidArgument {
                flag: "host platform",
                value: other.to_string(),
                valid: "windows, macos, linux",
            }),
        }
    }

    /// Lowercase form used in preset names.
    pub fn tag(self) -> &'static str {
        match self {
            HostPlatform::Windows => "windows",
            HostPlatform::MacOs => "macos",
            HostPlatform::Linux => "linux",
        }
    }

    /// The value `${hostSystemName}` takes on this platform.
    pub fn host_system_name(self) -> &'static str {
        match self {
            HostPlatform::Windows => "Windows",
            HostPlatform::MacOs => "Darwin",
            HostPlatform::Linux => "Linux",
        }
    }

    /// Terminator for prefix-path entries.
    pub fn path_separator(self) -> char {
        match self {
            HostPlatform::Windows => ';',
            HostPlatform::MacOs | HostPlatform::Linux => ':',
        }
    }
}

/// Immutable, fully validated input to one orchestration run.
#[derive(Clone, Copy, Debug)]
pub struct BuildRequest {
    pub build_type: BuildType,
    pub arch: Arch,
    pub scope: Scope,
    pub host: HostPlatform,
}

impl BuildRequest {
    pub fn parse(
        config: &str,
        arch: &str,
        target: &str,
        host: HostPlatform,
    ) -> Result<Self, ForgeError> {
        Ok(BuildRequest {
            build_type: BuildType::parse(config)?,
            arch: Arch::parse(arch)?,
            scope: Scope::parse(target)?,
            host,
        })
    }
}
