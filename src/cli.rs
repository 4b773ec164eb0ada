use clap::Parser;

/// Command-line surface.
///
/// The three flags are taken as raw strings and validated when the
/// `BuildRequest` is constructed, so an unrecognized value produces the
/// operator guidance text rather than a generic parse error.
#[derive(Parser)]
#[command(name = "forge")]
#[command(about = "Builds vendored dependencies and generates CMake preset documents")]
pub struct Cli {
    /// The build configuration to use: Debug or Release.
    #[arg(long = "config")]
    pub config: String,

    /// The target architecture: x86 or x64.
    #[arg(long = "arch")]
    pub arch: String,

    /// The scope to build: external, internal, executables or all.
    #[arg(long = "target")]
    pub target: String,
}
