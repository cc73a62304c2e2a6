//! Per-run scratch space with directory-creation claims.
//!
//! Each candidate gets one subdirectory under the run's scratch root.
//! Creating that subdirectory doubles as the deduplication marker: if it
//! already exists, the candidate was claimed by this run or a prior one
//! and must be skipped. Directories are never cleaned up here, precisely
//! so that reruns can detect prior claims.
//!
//! The existence check is best-effort, single-writer-assumed. Nothing
//! here guards against two concurrent runs racing on the same root.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Outcome of attempting to claim a candidate's working directory.
#[derive(Debug, PartialEq, Eq)]
pub enum Claim {
    /// The directory was created by this call; the candidate is ours.
    Fresh(PathBuf),
    /// The directory already existed; someone got here first.
    AlreadyClaimed,
}

/// Scratch root holding one subdirectory per claimed candidate.
#[derive(Debug)]
pub struct ScratchSpace {
    root: PathBuf,
}

impl ScratchSpace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the scratch root if needed. A pre-existing root is fine.
    pub fn ensure_root(&self) -> io::Result<()> {
        fs::create_dir_all(&self.root)
    }

    /// Try to reserve `root/<name>` for a candidate.
    ///
    /// `AlreadyExists` maps to [`Claim::AlreadyClaimed`]; any other
    /// filesystem error is surfaced so the caller can abandon the
    /// candidate without aborting the run.
    pub fn claim(&self, name: &str) -> io::Result<Claim> {
        let dir = self.root.join(name);
        match fs::create_dir(&dir) {
            Ok(()) => Ok(Claim::Fresh(dir)),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(Claim::AlreadyClaimed),
            Err(err) => Err(err),
        }
    }
}
