pub const REPORT_FILE_PREFIX: &str = "karyotype_analysis_";
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
pub const STRUCTURED_EXT: &str = "json";
pub const TEXT_EXT: &str = "txt";

pub const REPORT_TITLE: &str = "CHROMOSOME KARYOTYPE ANALYSIS REPORT";
pub const NO_ABNORMALITIES: &str = "No chromosomal abnormalities detected.";

pub const DISCLAIMER: &[&str] = &[
    "This analysis is for educational and research purposes only.",
    "Results must be validated by qualified cytogenetics professionals.",
    "Do not use for clinical diagnosis or medical decision-making.",
];

pub const REPORT_FOOTER: &str = "Generated by Chromosome Karyotype Analyzer";
