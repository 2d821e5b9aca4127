mod analysis;
mod config;
mod logging;
mod report;
mod simulate;
mod sources;

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command, arg};

use config::KaryoConfig;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "karyo";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Classify chromosome karyotype findings into ISCN-style notation, interpret them, and write reports.")
        .subcommand_required(true)
        .arg(
            arg!(-c --config <CONFIG> "Path to a karyo TOML configuration file")
                .required(false)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Log debug output to stderr (overridden by KARYO_LOG)"),
        )
        .subcommand(analysis::cli::create_classify_cli())
        .subcommand(analysis::cli::create_interpret_cli())
        .subcommand(report::cli::create_report_cli())
        .subcommand(report::cli::create_parse_cli())
        .subcommand(simulate::cli::create_simulate_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    logging::init_tracing(matches.get_flag("verbose"));

    let config_path = matches.get_one::<String>("config").map(Path::new);
    let config = KaryoConfig::load(config_path).context("Failed to load config")?;

    match matches.subcommand() {
        //
        // CLASSIFY
        //
        Some((analysis::cli::CLASSIFY_CMD, matches)) => {
            analysis::handlers::run_classify(matches, &config)?;
        }

        //
        // INTERPRET
        //
        Some((analysis::cli::INTERPRET_CMD, matches)) => {
            analysis::handlers::run_interpret(matches, &config)?;
        }

        //
        // REPORT
        //
        Some((report::cli::REPORT_CMD, matches)) => {
            report::handlers::run_report(matches, &config)?;
        }

        Some((report::cli::PARSE_CMD, matches)) => {
            report::handlers::run_parse(matches)?;
        }

        //
        // SIMULATED FINDINGS
        //
        Some((simulate::cli::SIMULATE_CMD, matches)) => {
            simulate::handlers::run_simulate(matches, &config)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
