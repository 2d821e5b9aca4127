use std::fmt::{self, Display};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::abnormality::AbnormalityEvent;
use crate::models::chromosome::SexChromosomes;
use crate::notation;

/// Chromosome count of a normal diploid human karyotype.
pub const NORMAL_CHROMOSOME_COUNT: u32 = 46;

///
/// Canonical, validated outcome of classifying one set of findings.
///
/// Only [`crate::classify`] can build one, and the notation is derived from the
/// other fields at construction, so a result can never disagree with its own
/// notation. There are no setters.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KaryotypeResult {
    notation: String,
    chromosome_count: u32,
    sex_chromosomes: SexChromosomes,
    abnormalities: Vec<AbnormalityEvent>,
    confidence: f64,
    analysis_time: DateTime<Utc>,
    technical_notes: String,
}

impl KaryotypeResult {
    pub(crate) fn assemble(
        chromosome_count: u32,
        sex_chromosomes: SexChromosomes,
        abnormalities: Vec<AbnormalityEvent>,
        confidence: f64,
        analysis_time: DateTime<Utc>,
        technical_notes: String,
    ) -> Self {
        let notation = notation::encode(chromosome_count, sex_chromosomes, &abnormalities);
        KaryotypeResult {
            notation,
            chromosome_count,
            sex_chromosomes,
            abnormalities,
            confidence,
            analysis_time,
            technical_notes,
        }
    }

    pub fn notation(&self) -> &str {
        &self.notation
    }

    pub fn chromosome_count(&self) -> u32 {
        self.chromosome_count
    }

    pub fn sex_chromosomes(&self) -> SexChromosomes {
        self.sex_chromosomes
    }

    pub fn abnormalities(&self) -> &[AbnormalityEvent] {
        &self.abnormalities
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn confidence_level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_score(self.confidence)
    }

    pub fn analysis_time(&self) -> DateTime<Utc> {
        self.analysis_time
    }

    pub fn technical_notes(&self) -> &str {
        &self.technical_notes
    }

    ///
    /// True for 46 chromosomes with no detected abnormality.
    ///
    pub fn is_normal(&self) -> bool {
        self.chromosome_count == NORMAL_CHROMOSOME_COUNT && self.abnormalities.is_empty()
    }
}

impl Display for KaryotypeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation)
    }
}

///
/// Coarse tier of a confidence score, used when presenting a result.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub const HIGH_THRESHOLD: f64 = 90.0;
    pub const MEDIUM_THRESHOLD: f64 = 75.0;

    pub fn from_score(confidence: f64) -> Self {
        if confidence >= Self::HIGH_THRESHOLD {
            ConfidenceLevel::High
        } else if confidence >= Self::MEDIUM_THRESHOLD {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::Low => "low",
        }
    }
}

impl Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(95.0, ConfidenceLevel::High)]
    #[case(90.0, ConfidenceLevel::High)]
    #[case(89.9, ConfidenceLevel::Medium)]
    #[case(75.0, ConfidenceLevel::Medium)]
    #[case(74.99, ConfidenceLevel::Low)]
    #[case(0.0, ConfidenceLevel::Low)]
    fn test_confidence_level(#[case] score: f64, #[case] expected: ConfidenceLevel) {
        assert_eq!(ConfidenceLevel::from_score(score), expected);
    }
}
