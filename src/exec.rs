//! External command execution.
//!
//! Delegated commands are the only way forge affects the outside world for
//! builds; they are opaque, synchronous and observed only via exit status.

use crate::error::ForgeError;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// A single external command: program, arguments, working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: &str, args: Vec<String>) -> Self {
        Invocation {
            program: program.to_string(),
            args,
            cwd: None,
        }
    }

    pub fn in_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }

    /// Echoed before execution and in failure messages.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Seam between orchestration and the outside world. Production uses
/// [`SystemRunner`]; tests substitute a recording fake.
pub trait CommandRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<()>;
}

/// Runs commands synchronously via `std::process`, echoing each one first.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<()> {
        println!("RUN     {}", invocation.command_line());

        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        if let Some(dir) = &invocation.cwd {
            cmd.current_dir(dir);
        }

        let status = cmd
            .status()
            .with_context(|| format!("Spawning {}", invocation.program))?;
        if !status.success() {
            return Err(ForgeError::CommandFailed {
                command: invocation.command_line(),
                status: status.to_string(),
            }
            .into());
        }
        Ok(())
    }
}
