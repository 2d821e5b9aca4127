use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use karyo_core::models::RawFindings;
use karyo_core::source::{FALLBACK_TECHNICAL_NOTES, fallback_findings};

pub const DEFAULT_TECHNICAL_NOTES: &str = "Analysis performed using EXAONE-Path-2.0 model";
pub const DEFAULT_OUTPUT_DIR: &str = ".";

///
/// Settings for the `karyo` binary, read from a TOML file.
///
/// ```toml
/// technical_notes = "Analysis performed using EXAONE-Path-2.0 model"
/// output_dir = "reports"
///
/// [fallback]
/// chromosome_count = 46
/// sex_chromosomes = "XX"
/// confidence = 0.0
/// technical_notes = "FALLBACK: classifier offline"
/// ```
///
#[derive(Deserialize, Serialize, Debug, PartialEq, Default)]
pub struct KaryoConfig {
    /// Notes stamped on findings that arrive without any.
    pub technical_notes: Option<String>,
    pub output_dir: Option<PathBuf>,
    /// Findings substituted when the findings source fails.
    pub fallback: Option<RawFindings>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl TryFrom<&Path> for KaryoConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}

impl KaryoConfig {
    ///
    /// Load the config at `path`, or the defaults when no path is given.
    ///
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => KaryoConfig::try_from(path),
            None => Ok(KaryoConfig::default()),
        }
    }

    pub fn technical_notes(&self) -> &str {
        self.technical_notes
            .as_deref()
            .unwrap_or(DEFAULT_TECHNICAL_NOTES)
    }

    pub fn output_dir(&self) -> &Path {
        self.output_dir
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_OUTPUT_DIR))
    }

    ///
    /// Fallback findings for an analysis at `now`: the configured table if any,
    /// otherwise the built-in placeholder. A configured table without notes
    /// gets the fallback marker, never the regular model notes.
    ///
    pub fn fallback_findings(&self, now: DateTime<Utc>) -> RawFindings {
        match &self.fallback {
            Some(fallback) => {
                let mut findings = fallback.clone();
                findings.analysis_time.get_or_insert(now);
                findings
                    .technical_notes
                    .get_or_insert_with(|| FALLBACK_TECHNICAL_NOTES.to_string());
                findings
            }
            None => fallback_findings(now),
        }
    }
}
