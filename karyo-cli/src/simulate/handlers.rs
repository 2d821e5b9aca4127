use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::ArgMatches;

use karyo_core::source::FindingsSource;

use crate::config::KaryoConfig;
use crate::sources::{SimulatedSource, complete_findings};

pub fn run_simulate(matches: &ArgMatches, config: &KaryoConfig) -> Result<()> {
    let source = SimulatedSource::new(matches.get_one::<u64>("seed").copied());
    let findings = source
        .fetch(&[])
        .context("Simulated findings source failed")?;
    let findings = complete_findings(findings, config, Utc::now());

    eprintln!("Simulated findings with seed {}", source.seed());

    let json =
        serde_json::to_string_pretty(&findings).context("Failed to serialize findings to JSON")?;
    io::stdout().write_all(json.as_bytes())?;
    println!(); // trailing newline

    Ok(())
}
