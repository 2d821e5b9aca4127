use clap::{Arg, ArgAction, Command, arg, value_parser};

pub const CLASSIFY_CMD: &str = "classify";
pub const INTERPRET_CMD: &str = "interpret";

///
/// Arguments selecting where findings come from, shared by every command that
/// runs an analysis.
///
pub fn findings_args() -> Vec<Arg> {
    vec![
        arg!(-f --findings <FINDINGS> "JSON findings exported by the chromosome classifier (simulated when omitted)")
            .required(false),
        arg!(--image <IMAGE> "Metaphase spread image passed through to the findings source (the file and simulated sources do not read it)")
            .required(false),
        arg!(--seed <SEED> "Seed for simulated findings")
            .required(false)
            .value_parser(value_parser!(u64)),
        Arg::new("no-fallback")
            .long("no-fallback")
            .action(ArgAction::SetTrue)
            .help("Fail instead of substituting fallback findings when the source is unavailable"),
    ]
}

pub fn create_classify_cli() -> Command {
    Command::new(CLASSIFY_CMD)
        .about("Validate findings and print the karyotype result as JSON.")
        .args(findings_args())
}

pub fn create_interpret_cli() -> Command {
    Command::new(INTERPRET_CMD)
        .about("Print the ISCN notation and clinical interpretation of findings.")
        .args(findings_args())
}
