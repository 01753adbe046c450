//! Runtime settings: built-in defaults + optional TOML file.
//!
//! - `Settings::default()` → epsilon 1e-6, ask about unit tests, colors on
//! - `Settings::from_toml_file(path)` → user overrides, missing keys default
//! - `Settings::load(&cli_path)` → `--config FILE`, else ~/.quadratic/config.toml if present

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::core::compare::{Comparator, EPSILON};

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Tolerance used by every floating point comparison.
    pub epsilon: f64,
    /// Ask "Do you want to run unit test?" before the first equation.
    pub ask_unit_tests: bool,
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            epsilon: EPSILON,
            ask_unit_tests: true,
            color: true,
        }
    }
}

impl Settings {
    pub fn from_toml_str(txt: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(txt)?;
        settings.validate()
    }

    /// Load from TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&txt).with_context(|| format!("parsing {}", path.display()))
    }

    /// An explicit path must exist; the default path is optional.
    pub fn load(cli_path: &Option<PathBuf>) -> Result<Self> {
        match resolve_config_path(cli_path) {
            Some(p) if cli_path.is_some() || p.exists() => Self::from_toml_file(&p),
            _ => Ok(Self::default()),
        }
    }

    pub fn comparator(&self) -> Comparator {
        Comparator::new(self.epsilon)
    }

    fn validate(self) -> Result<Self> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            bail!("epsilon must be a finite non-negative number, got {}", self.epsilon);
        }
        Ok(self)
    }
}

/// ~/.quadratic/config.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::home_dir().map(|h| h.join(".quadratic").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}
