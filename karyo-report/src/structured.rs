//! Structured (JSON) export of an interpreted result, and reading it back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use karyo_core::classify;
use karyo_core::models::{RawAbnormality, RawFindings};

use crate::errors::{ReportError, Result};
use crate::interpretation::InterpretedKaryotype;

///
/// On-disk shape of the structured report.
///
/// `confidence_level` is derived from `confidence` and is not read back.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredReport {
    pub notation: String,
    pub chromosome_count: i64,
    pub sex_chromosomes: String,
    pub abnormalities: Vec<RawAbnormality>,
    pub confidence: f64,
    #[serde(default)]
    pub confidence_level: String,
    pub analysis_time: DateTime<Utc>,
    pub technical_notes: String,
    pub interpretation: String,
    pub generated_at: DateTime<Utc>,
}

impl StructuredReport {
    pub fn new(karyotype: &InterpretedKaryotype, generated_at: DateTime<Utc>) -> Self {
        let result = &karyotype.result;
        StructuredReport {
            notation: result.notation().to_string(),
            chromosome_count: result.chromosome_count() as i64,
            sex_chromosomes: result.sex_chromosomes().to_string(),
            abnormalities: result
                .abnormalities()
                .iter()
                .map(RawAbnormality::from)
                .collect(),
            confidence: result.confidence(),
            confidence_level: result.confidence_level().to_string(),
            analysis_time: result.analysis_time(),
            technical_notes: result.technical_notes().to_string(),
            interpretation: karyotype.interpretation.clone(),
            generated_at,
        }
    }

    fn to_findings(&self) -> RawFindings {
        RawFindings {
            chromosome_count: self.chromosome_count,
            sex_chromosomes: self.sex_chromosomes.clone(),
            abnormalities: self.abnormalities.clone(),
            confidence: self.confidence,
            analysis_time: Some(self.analysis_time),
            technical_notes: Some(self.technical_notes.clone()),
        }
    }
}

///
/// A structured report read back from disk.
///
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedReport {
    pub karyotype: InterpretedKaryotype,
    pub generated_at: DateTime<Utc>,
}

pub(crate) fn render_structured(
    karyotype: &InterpretedKaryotype,
    generated_at: DateTime<Utc>,
) -> String {
    let report = StructuredReport::new(karyotype, generated_at);
    // only strings, numbers and string-keyed objects: serialization cannot fail
    serde_json::to_string_pretty(&report).expect("structured report is always valid JSON")
}

///
/// Parse a structured report back into the result it was rendered from.
///
/// The stored fields are re-validated through [`karyo_core::classify`], so a
/// hand-edited document gets exactly the checks fresh findings get, and the
/// stored notation must match the one derived from those fields.
///
pub fn parse_structured(document: &str) -> Result<ParsedReport> {
    let report: StructuredReport = serde_json::from_str(document)?;
    let result = classify(&report.to_findings())?;

    if result.notation() != report.notation {
        return Err(ReportError::NotationMismatch {
            stored: report.notation,
            derived: result.notation().to_string(),
        });
    }

    debug!(notation = result.notation(), "parsed structured report");

    Ok(ParsedReport {
        karyotype: InterpretedKaryotype {
            result,
            interpretation: report.interpretation,
        },
        generated_at: report.generated_at,
    })
}
