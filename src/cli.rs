use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "acidrun")]
#[command(version)]
#[command(about = "Feed freshly released packages to an external validator", long_about = None)]
#[command(after_help = "Examples:\n  \
  acidrun --validator acid                       validate latest releases until acid fails\n  \
  acidrun --validator acid -t 3600               same, but stop after one hour\n  \
  acidrun --validator acid requests flask        validate two named packages and exit\n  \
  acidrun --validator acid --validator-arg -v    forward -v to the validator")]
pub struct Cli {
    /// Package names to validate (default: discover latest releases)
    #[arg(value_name = "PACKAGES")]
    pub packages: Vec<String>,

    /// External validator command; exit status 0 counts as a pass
    #[arg(long, value_name = "CMD")]
    pub validator: String,

    /// Extra argument forwarded to the validator before the directory list
    #[arg(long = "validator-arg", value_name = "ARG")]
    pub validator_args: Vec<String>,

    /// Package index query/download tool
    #[arg(long, value_name = "CMD", default_value = "yolk")]
    pub index_tool: String,

    /// Wall-clock budget in seconds (non-positive: unbounded)
    #[arg(short = 't', long, value_name = "SECONDS", default_value_t = 0.0)]
    pub timeout: f64,

    /// Scratch root for per-package working directories (kept across runs)
    #[arg(long, value_name = "DIR", default_value = "acidrun_tmp")]
    pub scratch_root: PathBuf,
}

impl Cli {
    /// Time budget for the run, `None` when unbounded.
    pub fn budget(&self) -> Option<Duration> {
        if self.timeout > 0.0 {
            Some(Duration::from_secs_f64(self.timeout))
        } else {
            None
        }
    }
}
