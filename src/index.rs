//! Candidate discovery and acquisition via an external index tool.
//!
//! The upstream package index is consumed through a command-line tool
//! (`yolk` by default) with two operations: list names released in the
//! last N hours, and fetch a named package's artifacts into the current
//! working directory. Both are blocking subprocess calls.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use anyhow::{Context, Result};
use thiserror::Error;

/// A source of candidate packages.
///
/// Implemented by the subprocess-backed [`ToolIndex`] in production and by
/// in-memory stubs in tests.
pub trait PackageIndex {
    /// Names of packages released within the last `window_hours` hours,
    /// in the order the index reports them. Empty is a valid outcome.
    fn discover(&self, window_hours: u64) -> Result<Vec<String>>;

    /// Download `name`'s artifacts into `into`.
    fn acquire(&self, name: &str, into: &Path) -> Result<(), DownloadError>;
}

/// Recoverable download failure; the candidate is abandoned, the run
/// continues.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("download tool exited with {status}")]
    ToolFailed { status: ExitStatus },
    #[error("failed to launch download tool: {0}")]
    Spawn(#[from] io::Error),
}

/// [`PackageIndex`] backed by a yolk-style index tool.
#[derive(Debug)]
pub struct ToolIndex {
    program: String,
}

impl ToolIndex {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl PackageIndex for ToolIndex {
    fn discover(&self, window_hours: u64) -> Result<Vec<String>> {
        let output = Command::new(&self.program)
            .arg(format!("--latest-releases={window_hours}"))
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("failed to launch index tool {:?}", self.program))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_listing(&stdout))
    }

    fn acquire(&self, name: &str, into: &Path) -> Result<(), DownloadError> {
        let status = Command::new(&self.program)
            .arg(format!("--fetch-package={name}"))
            .current_dir(into)
            .stdin(Stdio::null())
            .status()?;

        if status.success() {
            Ok(())
        } else {
            Err(DownloadError::ToolFailed { status })
        }
    }
}

/// One package name per non-blank line; the name is the first
/// whitespace-separated token (the tool appends release metadata).
fn parse_listing(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_owned)
        .collect()
}
