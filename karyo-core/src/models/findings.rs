use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::abnormality::RawAbnormality;

///
/// Unvalidated findings as produced by an upstream chromosome classifier.
///
/// This is the only input [`crate::classify`] accepts, whether the findings come
/// from a real model, a simulated stand-in, or a fallback value.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFindings {
    pub chromosome_count: i64,
    pub sex_chromosomes: String,
    #[serde(default)]
    pub abnormalities: Vec<RawAbnormality>,
    pub confidence: f64,
    #[serde(default, alias = "timestamp", skip_serializing_if = "Option::is_none")]
    pub analysis_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_notes: Option<String>,
}

impl RawFindings {
    pub fn new(chromosome_count: i64, sex_chromosomes: &str, confidence: f64) -> Self {
        RawFindings {
            chromosome_count,
            sex_chromosomes: sex_chromosomes.to_string(),
            abnormalities: Vec::new(),
            confidence,
            analysis_time: None,
            technical_notes: None,
        }
    }

    pub fn with_abnormality(mut self, abnormality: RawAbnormality) -> Self {
        self.abnormalities.push(abnormality);
        self
    }

    /// Stamp the findings with the time the analysis was performed.
    pub fn at(mut self, analysis_time: DateTime<Utc>) -> Self {
        self.analysis_time = Some(analysis_time);
        self
    }

    pub fn with_technical_notes(mut self, notes: &str) -> Self {
        self.technical_notes = Some(notes.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_deserialize_minimal_findings() {
        let json = r#"{"chromosome_count": 46, "sex_chromosomes": "XY", "confidence": 88.0}"#;
        let findings: RawFindings = serde_json::from_str(json).unwrap();

        assert_eq!(findings, RawFindings::new(46, "XY", 88.0));
    }

    #[rstest]
    fn test_deserialize_upstream_shape() {
        let json = r#"{
            "chromosome_count": 47,
            "sex_chromosomes": "XX",
            "abnormalities": [
                {"type": "trisomy", "chromosome": 21, "description": "Trisomy 21 detected"}
            ],
            "confidence": 91.5,
            "analysis_time": "2025-03-04T10:20:30Z",
            "technical_notes": "Analysis performed using EXAONE-Path-2.0 model"
        }"#;
        let findings: RawFindings = serde_json::from_str(json).unwrap();

        assert_eq!(findings.abnormalities.len(), 1);
        assert_eq!(findings.abnormalities[0].kind, "trisomy");
        assert!(findings.analysis_time.is_some());
    }
}
