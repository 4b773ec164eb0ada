//! # forge
//!
//! Build orchestrator for the engine workspace.
//!
//! ## Usage
//!
//! ```bash
//! forge --config Debug --arch x64 --target external    # vendored deps only
//! forge --config Debug --arch x64 --target internal    # engine (deps must be built)
//! forge --config Release --arch x64 --target all       # everything
//! ```
//!
//! forge never compiles anything itself: it verifies vendored sources are
//! checked out, drives `cmake` configure/build/install per dependency, and
//! regenerates the `CMakePresets.json` each first-party component consumes.

use anyhow::Result;
use clap::Parser;

mod app;
mod cli;
mod cmake;
mod config;
mod deps;
mod error;
mod exec;
mod orchestrator;
mod paths;
mod preset;
mod request;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    app::run(cli)
}
