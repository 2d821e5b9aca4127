use chrono::{DateTime, SecondsFormat, Utc};

use crate::consts::{REPORT_FILE_PREFIX, REPORT_TIMESTAMP_FORMAT, STRUCTURED_EXT, TEXT_EXT};
use crate::interpretation::InterpretedKaryotype;
use crate::structured::render_structured;
use crate::text::render_text;

///
/// The two renderings of one interpreted result, plus the shared file stem.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// JSON export, parseable with [`crate::parse_structured`].
    pub structured: String,
    /// Fixed-layout plain-text report.
    pub text: String,
    /// `karyotype_analysis_<YYYYMMDD_HHMMSS>`
    pub stem: String,
}

impl Report {
    pub fn structured_file_name(&self) -> String {
        format!("{}.{}", self.stem, STRUCTURED_EXT)
    }

    pub fn text_file_name(&self) -> String {
        format!("{}.{}", self.stem, TEXT_EXT)
    }
}

///
/// Render an interpreted result into its structured and text documents.
///
/// # Arguments
/// - karyotype: the result with its interpretation attached
/// - generated_at: wall-clock time of report generation, supplied by the caller
///
pub fn render(karyotype: &InterpretedKaryotype, generated_at: DateTime<Utc>) -> Report {
    Report {
        structured: render_structured(karyotype, generated_at),
        text: render_text(karyotype, generated_at),
        stem: report_stem(generated_at),
    }
}

/// File stem shared by both report files.
pub fn report_stem(generated_at: DateTime<Utc>) -> String {
    format!(
        "{}{}",
        REPORT_FILE_PREFIX,
        generated_at.format(REPORT_TIMESTAMP_FORMAT)
    )
}

/// RFC 3339, identical to how timestamps appear in the structured export.
pub(crate) fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
