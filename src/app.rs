use crate::config::ForgeConfig;
use crate::exec::SystemRunner;
use crate::orchestrator::Orchestrator;
use crate::request::{BuildRequest, HostPlatform};
use anyhow::{Context, Result};

pub fn run(cli: crate::cli::Cli) -> Result<()> {
    let host = HostPlatform::detect()?;
    let request = BuildRequest::parse(&cli.config, &cli.arch, &cli.target, host)?;

    let root = std::env::current_dir().context("Resolving the working directory")?;
    let cfg = ForgeConfig::load(&root)?;

    println!(
        "Building with configuration: {} ({}, {})",
        request.build_type.as_str(),
        request.arch.tag(),
        host.tag()
    );

    let mut runner = SystemRunner;
    Orchestrator::new(&root, &cfg, &mut runner).run(&request)
}
