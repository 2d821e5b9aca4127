use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::ArgMatches;

use karyo_core::{KaryotypeResult, classify};
use karyo_report::interpret;

use crate::config::KaryoConfig;
use crate::sources::obtain_findings;

///
/// Obtain findings and classify them. Validation failures abort the analysis.
///
pub fn analyze(matches: &ArgMatches, config: &KaryoConfig) -> Result<KaryotypeResult> {
    let findings = obtain_findings(matches, config, Utc::now())?;
    let result = classify(&findings).context("Findings failed validation")?;
    Ok(result)
}

pub fn run_classify(matches: &ArgMatches, config: &KaryoConfig) -> Result<()> {
    let result = analyze(matches, config)?;

    let json =
        serde_json::to_string_pretty(&result).context("Failed to serialize result to JSON")?;
    io::stdout().write_all(json.as_bytes())?;
    println!(); // trailing newline

    Ok(())
}

pub fn run_interpret(matches: &ArgMatches, config: &KaryoConfig) -> Result<()> {
    let result = analyze(matches, config)?;

    println!("{}", result.notation());
    println!("{}", interpret(&result));

    Ok(())
}
