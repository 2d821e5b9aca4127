use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::chromosome::{Chromosome, RawChromosome};

///
/// The closed set of abnormality kinds the engine understands.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbnormalityKind {
    Trisomy,
    Monosomy,
    Translocation,
}

impl AbnormalityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AbnormalityKind::Trisomy => "trisomy",
            AbnormalityKind::Monosomy => "monosomy",
            AbnormalityKind::Translocation => "translocation",
        }
    }
}

impl Display for AbnormalityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AbnormalityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trisomy" => Ok(AbnormalityKind::Trisomy),
            "monosomy" => Ok(AbnormalityKind::Monosomy),
            "translocation" => Ok(AbnormalityKind::Translocation),
            _ => Err(format!(
                "unknown abnormality kind '{}', expected trisomy, monosomy or translocation",
                s
            )),
        }
    }
}

///
/// One validated deviation from a normal karyotype.
///
/// Numerical events name the affected chromosome; a translocation carries only
/// its breakpoint description, e.g. `t(9;22)(q34;q11)`.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AbnormalityEvent {
    Trisomy {
        chromosome: Chromosome,
        description: String,
    },
    Monosomy {
        chromosome: Chromosome,
        description: String,
    },
    Translocation {
        description: String,
    },
}

/// Identity of an event for duplicate detection within one result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum EventKey<'a> {
    Numerical(AbnormalityKind, Chromosome),
    Structural(&'a str),
}

impl AbnormalityEvent {
    pub fn kind(&self) -> AbnormalityKind {
        match self {
            AbnormalityEvent::Trisomy { .. } => AbnormalityKind::Trisomy,
            AbnormalityEvent::Monosomy { .. } => AbnormalityKind::Monosomy,
            AbnormalityEvent::Translocation { .. } => AbnormalityKind::Translocation,
        }
    }

    pub fn chromosome(&self) -> Option<Chromosome> {
        match self {
            AbnormalityEvent::Trisomy { chromosome, .. }
            | AbnormalityEvent::Monosomy { chromosome, .. } => Some(*chromosome),
            AbnormalityEvent::Translocation { .. } => None,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            AbnormalityEvent::Trisomy { description, .. }
            | AbnormalityEvent::Monosomy { description, .. }
            | AbnormalityEvent::Translocation { description } => description,
        }
    }

    ///
    /// Net change this event makes to the chromosome count.
    ///
    pub fn count_delta(&self) -> i64 {
        match self {
            AbnormalityEvent::Trisomy { .. } => 1,
            AbnormalityEvent::Monosomy { .. } => -1,
            AbnormalityEvent::Translocation { .. } => 0,
        }
    }

    pub(crate) fn key(&self) -> EventKey<'_> {
        match self {
            AbnormalityEvent::Trisomy { chromosome, .. }
            | AbnormalityEvent::Monosomy { chromosome, .. } => {
                EventKey::Numerical(self.kind(), *chromosome)
            }
            AbnormalityEvent::Translocation { description } => EventKey::Structural(description),
        }
    }
}

///
/// An abnormality event exactly as an upstream source reports it, before validation.
///
/// `kind` also accepts the key `type`.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAbnormality {
    #[serde(alias = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chromosome: Option<RawChromosome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RawAbnormality {
    pub fn trisomy(chromosome: impl Into<RawChromosome>) -> Self {
        RawAbnormality {
            kind: AbnormalityKind::Trisomy.to_string(),
            chromosome: Some(chromosome.into()),
            description: None,
        }
    }

    pub fn monosomy(chromosome: impl Into<RawChromosome>) -> Self {
        RawAbnormality {
            kind: AbnormalityKind::Monosomy.to_string(),
            chromosome: Some(chromosome.into()),
            description: None,
        }
    }

    pub fn translocation(description: &str) -> Self {
        RawAbnormality {
            kind: AbnormalityKind::Translocation.to_string(),
            chromosome: None,
            description: Some(description.to_string()),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

impl From<&AbnormalityEvent> for RawAbnormality {
    fn from(event: &AbnormalityEvent) -> Self {
        RawAbnormality {
            kind: event.kind().to_string(),
            chromosome: event.chromosome().map(RawChromosome::from),
            description: Some(event.description().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_kind_parsing_is_case_insensitive() {
        assert_eq!(
            "Trisomy".parse::<AbnormalityKind>().unwrap(),
            AbnormalityKind::Trisomy
        );
        assert!("inversion".parse::<AbnormalityKind>().is_err());
    }

    #[rstest]
    fn test_event_serializes_with_kind_tag() {
        let event = AbnormalityEvent::Trisomy {
            chromosome: Chromosome::Autosome(21),
            description: "Trisomy 21 detected".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "trisomy",
                "chromosome": 21,
                "description": "Trisomy 21 detected"
            })
        );
    }

    #[rstest]
    fn test_raw_abnormality_accepts_type_alias() {
        let raw: RawAbnormality =
            serde_json::from_str(r#"{"type": "monosomy", "chromosome": "X"}"#).unwrap();
        assert_eq!(raw, RawAbnormality::monosomy("X"));
    }

    #[rstest]
    fn test_raw_from_event_keeps_fields() {
        let event = AbnormalityEvent::Translocation {
            description: "t(9;22)(q34;q11)".to_string(),
        };
        let raw = RawAbnormality::from(&event);
        assert_eq!(raw, RawAbnormality::translocation("t(9;22)(q34;q11)"));
    }

    #[rstest]
    fn test_count_delta() {
        let monosomy = AbnormalityEvent::Monosomy {
            chromosome: Chromosome::X,
            description: String::new(),
        };
        assert_eq!(monosomy.count_delta(), -1);
        assert_eq!(monosomy.chromosome(), Some(Chromosome::X));
    }
}
