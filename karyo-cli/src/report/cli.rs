use clap::{Arg, Command, arg};

use crate::analysis::cli::findings_args;

pub const REPORT_CMD: &str = "report";
pub const PARSE_CMD: &str = "parse";

pub fn create_report_cli() -> Command {
    Command::new(REPORT_CMD)
        .about("Analyze findings and write the JSON and text reports.")
        .args(findings_args())
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .required(false)
                .help("Directory for karyotype_analysis_<YYYYMMDD_HHMMSS>.{json,txt} (default: config output_dir or .)"),
        )
}

pub fn create_parse_cli() -> Command {
    Command::new(PARSE_CMD)
        .about("Read a structured JSON report back and print its notation and interpretation.")
        .arg_required_else_help(true)
        .arg(arg!(-r --report <REPORT> "Path to a karyotype_analysis_*.json report"))
}
