//! Option layering: defaults, then the rc file, then command-line flags.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use tdr_core::RunOptions;

use crate::Args;

/// Environment variable naming an rc file
pub const OPTIONS_ENV: &str = "THREEDAYS_OPTIONS";

const RC_NAME: &str = ".threedaysrc";

/// `$HOME/.threedaysrc`, if there is a home directory
pub fn default_rc_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(RC_NAME))
}

/// Resolve the options for this run.
///
/// An explicitly named rc file (flag or environment) must exist; the default
/// one is optional.
pub fn load(args: &Args) -> Result<RunOptions> {
    let mut options = match &args.config {
        Some(path) => RunOptions::load_from_file(path)
            .with_context(|| format!("loading options from {}", path.display()))?,
        None => match default_rc_path().filter(|p| p.exists()) {
            Some(path) => RunOptions::load_from_file(&path)
                .with_context(|| format!("loading options from {}", path.display()))?,
            None => RunOptions::default(),
        },
    };

    if let Some(days) = args.days {
        options.days = days;
    }
    if let Some(path) = &args.log {
        options.logfile = path.clone();
    }
    if args.seed.is_some() {
        options.seed = args.seed;
    }
    if args.no_status {
        options.status = false;
    }
    if args.no_intro {
        options.intro = false;
    }

    options.validate()?;
    debug!(?options, "options resolved");
    Ok(options)
}
