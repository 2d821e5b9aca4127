use std::fs::{create_dir_all, read_to_string, write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use clap::ArgMatches;

use karyo_report::{Report, attach, parse_structured, render};

use crate::analysis::handlers::analyze;
use crate::config::KaryoConfig;

pub fn run_report(matches: &ArgMatches, config: &KaryoConfig) -> Result<()> {
    let output_dir = matches
        .get_one::<String>("output-dir")
        .map(PathBuf::from)
        .unwrap_or_else(|| config.output_dir().to_path_buf());

    let karyotype = attach(analyze(matches, config)?);
    let report = render(&karyotype, Utc::now());

    let (structured_path, text_path) = write_report(&report, &output_dir)?;

    println!("{}", karyotype.result.notation());
    eprintln!("Structured report written to {}", structured_path.display());
    eprintln!("Text report written to {}", text_path.display());

    Ok(())
}

pub fn run_parse(matches: &ArgMatches) -> Result<()> {
    let report_path = matches
        .get_one::<String>("report")
        .expect("A path to a structured report is required.");

    let document = read_to_string(report_path)
        .with_context(|| format!("Failed to read report: {}", report_path))?;
    let parsed = parse_structured(&document)
        .with_context(|| format!("Failed to load report: {}", report_path))?;

    println!("{}", parsed.karyotype.result.notation());
    println!("{}", parsed.karyotype.interpretation);
    println!(
        "Generated at {}",
        parsed.generated_at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    );

    Ok(())
}

///
/// Write both renderings of `report` into `output_dir`, creating it if needed.
///
/// # Returns
/// - paths of the structured and text files, in that order
///
pub fn write_report(report: &Report, output_dir: &Path) -> Result<(PathBuf, PathBuf)> {
    create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory: {}", output_dir.display())
    })?;

    let structured_path = output_dir.join(report.structured_file_name());
    let text_path = output_dir.join(report.text_file_name());

    write(&structured_path, &report.structured)
        .with_context(|| format!("Failed to write {}", structured_path.display()))?;
    write(&text_path, &report.text)
        .with_context(|| format!("Failed to write {}", text_path.display()))?;

    Ok((structured_path, text_path))
}
