//! Boundary sequencing.
//!
//! A run walks up to two boundaries in strict order, gated by the requested
//! scope: build every external dependency and regenerate the engine's preset
//! document, then build the engine through that document, fold it into the
//! dependency list and regenerate the application's document. Everything is
//! sequential and fail-fast; nothing already installed is rolled back.

use crate::cmake;
use crate::config::ForgeConfig;
use crate::deps::{self, Dependency};
use crate::error::ForgeError;
use crate::exec::CommandRunner;
use crate::paths;
use crate::preset::{self, tree, write};
use crate::request::BuildRequest;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const PRESET_FILE: &str = "CMakePresets.json";

pub struct Orchestrator<'a> {
    root: PathBuf,
    cfg: &'a ForgeConfig,
    runner: &'a mut dyn CommandRunner,
}

impl<'a> Orchestrator<'a> {
    pub fn new(root: &Path, cfg: &'a ForgeConfig, runner: &'a mut dyn CommandRunner) -> Self {
        Orchestrator {
            root: root.to_path_buf(),
            cfg,
            runner,
        }
    }

    pub fn run(&mut self, request: &BuildRequest) -> Result<()> {
        let mut dependencies: Vec<Dependency> = self
            .cfg
            .external
            .iter()
            .map(|ext| Dependency::external(self.cfg, ext))
            .collect();

        deps::verify(&self.root, &dependencies)?;

        if request.scope.includes_external() {
            self.build_externals(request, &dependencies)?;
            let document = tree::build_tree(&self.root, &self.cfg.paths.packages, &dependencies);
            write::write(&self.engine_preset_path(), &document)?;
        }

        if request.scope.includes_internal() {
            self.build_engine(request)?;

            let engine = &self.cfg.components.engine;
            dependencies.push(Dependency::component(&engine.name, &engine.dir));
            let document = tree::build_tree(&self.root, &self.cfg.paths.packages, &dependencies);
            write::write(&self.app_preset_path(), &document)?;
        }

        // Scope::Executables is reserved: validation accepts it but no
        // boundary is wired to it yet.

        Ok(())
    }

    /// First boundary: configure, build and install every external
    /// dependency in list order, then stop on the first failure.
    fn build_externals(&mut self, request: &BuildRequest, dependencies: &[Dependency]) -> Result<()> {
        let relative: Vec<String> = deps::prefix_dirs(&self.cfg.paths.packages, dependencies)
            .iter()
            .map(|dir| paths::display(dir))
            .collect();
        let prefix_path = paths::compose(request.host, &relative);

        for dep in dependencies {
            println!("BUILD   {}", dep.name);
            self.runner.run(&cmake::configure_external(
                &self.root,
                dep,
                request.build_type,
                &prefix_path,
            ))?;
            self.runner
                .run(&cmake::build_external(&self.root, dep, request.build_type))?;
            self.runner
                .run(&cmake::install_external(&self.root, dep, request.build_type))?;
        }
        Ok(())
    }

    /// Second boundary: drive the engine through its preset document, which
    /// the external boundary must already have produced.
    fn build_engine(&mut self, request: &BuildRequest) -> Result<()> {
        let preset_path = self.engine_preset_path();
        if !preset_path.is_file() {
            return Err(ForgeError::MissingPreset(preset_path).into());
        }

        let engine_dir = self.root.join(&self.cfg.components.engine.dir);
        let leaf = preset::leaf_name(request.host, request.arch, request.build_type);

        println!("BUILD   {}", self.cfg.components.engine.name);
        self.runner.run(&cmake::configure_preset(&engine_dir, &leaf))?;
        self.runner.run(&cmake::build_preset(&engine_dir, &leaf))?;
        self.runner.run(&cmake::install_preset(&engine_dir, &leaf))?;
        Ok(())
    }

    fn engine_preset_path(&self) -> PathBuf {
        self.root
            .join(&self.cfg.components.engine.dir)
            .join(PRESET_FILE)
    }

    fn app_preset_path(&self) -> PathBuf {
        self.root.join(&self.cfg.components.app.dir).join(PRESET_FILE)
    }
}
