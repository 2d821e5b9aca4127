use clap::{Command, arg, value_parser};

pub const SIMULATE_CMD: &str = "simulate";

pub fn create_simulate_cli() -> Command {
    Command::new(SIMULATE_CMD)
        .about("Emit simulated classifier findings as JSON, for demos and testing.")
        .arg(
            arg!(--seed <SEED> "Seed for the random generator")
                .required(false)
                .value_parser(value_parser!(u64)),
        )
}
