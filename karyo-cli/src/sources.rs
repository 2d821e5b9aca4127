//! Findings sources available to the CLI, and the shared "obtain findings" step.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::ArgMatches;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use karyo_core::UpstreamError;
use karyo_core::models::{RawAbnormality, RawFindings};
use karyo_core::source::{FetchedFindings, FindingsSource, fetch_or_fallback};

use crate::config::KaryoConfig;

pub const SIMULATED_TECHNICAL_NOTES: &str = "Simulated findings (stand-in for EXAONE-Path-2.0 model)";

///
/// Reads findings exported by the classifier as JSON. The image payload is
/// ignored: the file already holds the classifier's answer for it.
///
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: &Path) -> Self {
        JsonFileSource {
            path: path.to_path_buf(),
        }
    }
}

impl FindingsSource for JsonFileSource {
    fn fetch(&self, _payload: &[u8]) -> Result<RawFindings, UpstreamError> {
        let json = read_to_string(&self.path)?;
        serde_json::from_str(&json).map_err(|e| UpstreamError::Unparseable(e.to_string()))
    }
}

///
/// Random stand-in for the classifier, for demos. Same seed, same findings.
///
pub struct SimulatedSource {
    seed: u64,
}

impl SimulatedSource {
    pub fn new(seed: Option<u64>) -> Self {
        SimulatedSource {
            seed: seed.unwrap_or_else(|| rand::rng().random()),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl FindingsSource for SimulatedSource {
    fn fetch(&self, _payload: &[u8]) -> Result<RawFindings, UpstreamError> {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let chromosome_count = [46, 47, 45][rng.random_range(0..3)];
        let sex_chromosomes = ["XX", "XY"][rng.random_range(0..2)];
        let confidence = rng.random_range(80.0..95.0);

        let mut findings = RawFindings::new(chromosome_count, sex_chromosomes, confidence)
            .with_technical_notes(SIMULATED_TECHNICAL_NOTES);

        match (chromosome_count, sex_chromosomes) {
            (47, _) => {
                let chromosome = [21, 18, 13][rng.random_range(0..3)];
                findings = findings.with_abnormality(
                    RawAbnormality::trisomy(chromosome)
                        .with_description(&format!("Trisomy {} detected", chromosome)),
                );
            }
            (45, "XX") => {
                findings = findings.with_abnormality(
                    RawAbnormality::monosomy("X").with_description("Turner syndrome (Monosomy X)"),
                );
            }
            (45, _) => {
                findings = findings.with_abnormality(RawAbnormality::monosomy("Y"));
            }
            _ => {
                if rng.random_bool(0.1) {
                    findings =
                        findings.with_abnormality(RawAbnormality::translocation("t(9;22)(q34;q11)"));
                }
            }
        }

        Ok(findings)
    }
}

///
/// Obtain findings for one analysis from the source selected on the command line.
///
/// `--findings <FILE>` reads a JSON export, otherwise findings are simulated.
/// The `--image` bytes are handed to the source as its payload; only an
/// image-reading classifier source makes use of them.
/// When the source fails, the configured fallback is used instead unless
/// `--no-fallback` is set. Findings missing a timestamp or technical notes are
/// completed from `now` and the config.
///
pub fn obtain_findings(
    matches: &ArgMatches,
    config: &KaryoConfig,
    now: DateTime<Utc>,
) -> Result<RawFindings> {
    let payload = match matches.get_one::<String>("image") {
        Some(image) => std::fs::read(image)
            .with_context(|| format!("Failed to read image file: {}", image))?,
        None => Vec::new(),
    };

    let source: Box<dyn FindingsSource> = match matches.get_one::<String>("findings") {
        Some(path) => {
            debug!(path = %path, "reading findings from file");
            Box::new(JsonFileSource::new(Path::new(path)))
        }
        None => {
            let source = SimulatedSource::new(matches.get_one::<u64>("seed").copied());
            debug!(seed = source.seed(), "simulating findings");
            Box::new(source)
        }
    };

    let fetched = if matches.get_flag("no-fallback") {
        FetchedFindings::Upstream(
            source
                .fetch(&payload)
                .context("Findings source failed and --no-fallback is set")?,
        )
    } else {
        fetch_or_fallback(source.as_ref(), &payload, config.fallback_findings(now))
    };

    if let FetchedFindings::Fallback { cause, .. } = &fetched {
        eprintln!("Findings source unavailable ({}), using fallback findings.", cause);
    }

    Ok(complete_findings(fetched.into_findings(), config, now))
}

pub fn complete_findings(
    mut findings: RawFindings,
    config: &KaryoConfig,
    now: DateTime<Utc>,
) -> RawFindings {
    findings.analysis_time.get_or_insert(now);
    if findings.technical_notes.is_none() {
        findings.technical_notes = Some(config.technical_notes().to_string());
    }
    findings
}
