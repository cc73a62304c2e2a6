//! Pass/fail delegation to the external validator.
//!
//! The validator is an opaque oracle: it gets a directory list and its
//! configured arguments, and its exit status is the verdict. No retry
//! logic lives here; a failing verdict is handled by the run loop.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

/// Pass/fail oracle over a set of unpacked package directories.
pub trait Validator {
    /// `Ok(true)` is a pass, `Ok(false)` a fail; `Err` means the
    /// validator could not be run at all.
    fn check(&self, dirs: &[PathBuf]) -> Result<bool>;
}

/// [`Validator`] that runs an external command as
/// `program [args...] <dir>...` and reads the verdict off the exit
/// status.
#[derive(Debug)]
pub struct CommandValidator {
    program: String,
    args: Vec<String>,
}

impl CommandValidator {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl Validator for CommandValidator {
    fn check(&self, dirs: &[PathBuf]) -> Result<bool> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .args(dirs)
            .stdin(Stdio::null())
            .status()
            .with_context(|| format!("failed to launch validator {:?}", self.program))?;

        Ok(status.success())
    }
}
