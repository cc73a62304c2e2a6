//! # acidrun
//!
//! A continuous validation harness: it discovers freshly released
//! packages from an upstream index, downloads and unpacks each one, and
//! feeds it to an external validator, stopping at the first failing
//! verdict or when a time budget runs out.
//!
//! The point is to stress the validator against a large, constantly
//! changing corpus of real-world inputs instead of a fixed fixture. The
//! harness itself stays deliberately simple: single-threaded, blocking
//! subprocess calls, no retries, no cleanup of its scratch space (the
//! leftover directories are what makes reruns skip already-seen work).
//!
//! ## Example
//!
//! ```no_run
//! use acidrun::{CommandValidator, Runner, ScratchSpace, ToolIndex};
//!
//! fn main() -> anyhow::Result<()> {
//!     let index = ToolIndex::new("yolk");
//!     let validator = CommandValidator::new("acid", Vec::new());
//!     let scratch = ScratchSpace::new("acidrun_tmp");
//!
//!     let mut runner = Runner::new(&index, &validator, scratch, None);
//!     let outcome = runner.run(vec!["requests".to_string()])?;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod extract;
pub mod index;
pub mod run;
pub mod scratch;
pub mod validate;

pub use cli::Cli;
pub use index::{DownloadError, PackageIndex, ToolIndex};
pub use run::{RunOutcome, Runner};
pub use scratch::{Claim, ScratchSpace};
pub use validate::{CommandValidator, Validator};
