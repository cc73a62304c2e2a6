//! The acquisition loop: select, claim, download, extract, validate.
//!
//! One candidate at a time, fully sequential. Every per-candidate fault
//! (duplicate claim, failed fetch, malformed archive) is reported and
//! skipped; the only fatal condition is the validator saying no. The
//! loop exists to find that first failing verdict.

use std::collections::{HashSet, VecDeque};
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use log::{info, warn};

use crate::extract;
use crate::index::PackageIndex;
use crate::scratch::{Claim, ScratchSpace};
use crate::validate::Validator;

/// How a run ended, short of an operational error.
#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Explicit list exhausted or time budget spent.
    Completed,
    /// The validator rejected `package`; the run stopped there.
    ValidationFailed { package: String },
}

/// Drives the acquisition loop over an index and a validator.
///
/// The index and validator are borrowed so tests can keep inspecting
/// their doubles after the run finishes.
pub struct Runner<'a, I: PackageIndex, V: Validator> {
    index: &'a I,
    validator: &'a V,
    scratch: ScratchSpace,
    budget: Option<Duration>,
    checked: Vec<String>,
    skipped: HashSet<String>,
    window_hours: u64,
}

impl<'a, I: PackageIndex, V: Validator> Runner<'a, I, V> {
    pub fn new(
        index: &'a I,
        validator: &'a V,
        scratch: ScratchSpace,
        budget: Option<Duration>,
    ) -> Self {
        Self {
            index,
            validator,
            scratch,
            budget,
            checked: Vec::new(),
            skipped: HashSet::new(),
            window_hours: 1,
        }
    }

    /// Names that passed validation, in the order they were checked.
    pub fn checked(&self) -> &[String] {
        &self.checked
    }

    /// Current discovery window in hours. Starts at 1, doubles whenever
    /// a discovery pass yields nothing unseen.
    pub fn window_hours(&self) -> u64 {
        self.window_hours
    }

    /// Run until the explicit list is exhausted, the time budget is
    /// spent, or the validator fails a candidate.
    ///
    /// With a non-empty `explicit` list, candidates come from it in
    /// order and discovery is never consulted. Otherwise the index is
    /// polled with a geometrically widening window whenever the working
    /// buffer runs dry.
    pub fn run(&mut self, explicit: Vec<String>) -> Result<RunOutcome> {
        let explicit_mode = !explicit.is_empty();
        let mut pending: VecDeque<String> = explicit.into();
        let start = Instant::now();

        self.scratch.ensure_root()?;

        loop {
            if let Some(budget) = self.budget {
                if start.elapsed() > budget {
                    info!("time budget spent, stopping");
                    break;
                }
            }

            let name = if explicit_mode {
                match pending.pop_front() {
                    Some(name) => name,
                    None => break,
                }
            } else {
                self.refill(&mut pending)?
            };

            // Progress signal: the name goes out as soon as it is picked.
            println!("{name}");

            let dir = match self.scratch.claim(&name) {
                Ok(Claim::Fresh(dir)) => dir,
                Ok(Claim::AlreadyClaimed) => {
                    info!("skipping already claimed package {name}");
                    if !self.checked.contains(&name) {
                        self.skipped.insert(name);
                    }
                    continue;
                }
                Err(err) => {
                    warn!("could not claim directory for {name}: {err}");
                    continue;
                }
            };

            if let Err(err) = self.index.acquire(&name, &dir) {
                // The claimed directory already blocks an in-run retry,
                // so the name stays out of `skipped`.
                warn!("could not fetch {name}: {err}");
                continue;
            }

            if !unpack_downloads(&dir) {
                warn!("could not extract {name}");
                continue;
            }

            if self.validator.check(std::slice::from_ref(&dir))? {
                self.checked.push(name);
            } else {
                return Ok(RunOutcome::ValidationFailed { package: name });
            }
        }

        Ok(RunOutcome::Completed)
    }

    /// Top up the working buffer from discovery, widening the window
    /// until something unseen shows up. Deliberately unbounded: an index
    /// that never reports anything new keeps this polling.
    fn refill(&mut self, pending: &mut VecDeque<String>) -> Result<String> {
        loop {
            if let Some(name) = pending.pop_front() {
                return Ok(name);
            }

            let fresh: Vec<String> = self
                .index
                .discover(self.window_hours)?
                .into_iter()
                .filter(|n| !self.checked.contains(n) && !self.skipped.contains(n))
                .collect();

            if fresh.is_empty() {
                self.window_hours = self.window_hours.saturating_mul(2);
            } else {
                pending.extend(fresh);
            }
        }
    }
}

/// Extract every regular file the download left in `dir`, in place.
/// Any failure abandons the whole candidate; content extracted so far is
/// left behind but never reported as success.
fn unpack_downloads(dir: &Path) -> bool {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return false,
    };

    // Collect first: extraction adds entries to the directory being read.
    let mut artifacts = Vec::new();
    for entry in entries {
        match entry {
            Ok(entry) if entry.path().is_file() => artifacts.push(entry.path()),
            Ok(_) => {}
            Err(_) => return false,
        }
    }

    artifacts.iter().all(|artifact| extract::extract(artifact, dir))
}
