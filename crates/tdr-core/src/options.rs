//! Run options and configuration file loading
//!
//! The rc file is made of `OPTIONS=` lines holding
//! comma-separated options, `#` comments, `!name` or `noname` to turn a flag
//! off, and `name:value` or `name=value` for valued options.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::consts::{DEFAULT_DAYS, DEFAULT_LOGFILE};
use crate::event::EventKind;

/// User-configurable run options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Days to survive
    pub days: u32,
    /// Where run records are appended
    pub logfile: PathBuf,
    /// Fixed seed; `None` asks the player
    pub seed: Option<i64>,
    /// Print the status line before each decision
    pub status: bool,
    /// Print the opening text
    pub intro: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            logfile: PathBuf::from(DEFAULT_LOGFILE),
            seed: None,
            status: true,
            intro: true,
        }
    }
}

/// Options parsing error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("IO error reading {path}: {reason}")]
    IoError { path: String, reason: String },
    #[error("Unknown option: {0}")]
    UnknownOption(String),
    #[error("Invalid value '{1}' for option '{0}'")]
    InvalidValue(String, String),
    #[error("Missing value for option '{0}'")]
    MissingValue(String),
}

impl RunOptions {
    /// Load options from a file
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents = std::fs::read_to_string(path).map_err(|e| OptionsError::IoError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Self::parse_config(&contents)
    }

    /// Parse options from a config string
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();

        for line in contents.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(opts) = line.strip_prefix("OPTIONS=") {
                for opt in opts.split(',').map(str::trim).filter(|o| !o.is_empty()) {
                    options.parse_option(opt)?;
                }
            }
        }

        Ok(options)
    }

    /// Parse a single option
    fn parse_option(&mut self, opt: &str) -> Result<(), OptionsError> {
        if let Some((key, value)) = opt.split_once(':').or_else(|| opt.split_once('=')) {
            return self.set_option(key.trim(), value.trim());
        }

        let (negated, name) = if let Some(name) = opt.strip_prefix('!') {
            (true, name)
        } else if let Some(name) = opt.strip_prefix("no") {
            (true, name)
        } else {
            (false, opt)
        };

        self.set_bool_option(name, !negated)
    }

    fn set_bool_option(&mut self, name: &str, value: bool) -> Result<(), OptionsError> {
        match name {
            "status" => self.status = value,
            "intro" => self.intro = value,
            "days" | "logfile" | "seed" => {
                return Err(OptionsError::MissingValue(name.to_string()));
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), OptionsError> {
        let invalid = || OptionsError::InvalidValue(name.to_string(), value.to_string());

        match name {
            "days" => {
                let days: u32 = value.parse().map_err(|_| invalid())?;
                self.days = days;
                self.validate().map_err(|_| invalid())?;
            }
            "logfile" => {
                if value.is_empty() {
                    return Err(invalid());
                }
                self.logfile = PathBuf::from(value);
            }
            "seed" => self.seed = Some(value.parse().map_err(|_| invalid())?),
            "status" | "intro" => {
                let flag = match value.to_lowercase().as_str() {
                    "on" | "true" | "yes" | "1" => true,
                    "off" | "false" | "no" | "0" => false,
                    _ => return Err(invalid()),
                };
                self.set_bool_option(name, flag)?;
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Check cross-field limits
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.days == 0 || self.days as usize > EventKind::ALL.len() {
            return Err(OptionsError::InvalidValue(
                "days".to_string(),
                self.days.to_string(),
            ));
        }
        Ok(())
    }
}
