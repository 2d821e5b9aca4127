//! Validation and normalization of raw findings into a [`KaryotypeResult`].

use std::collections::HashSet;

use tracing::debug;

use crate::errors::ValidationError;
use crate::models::{
    AbnormalityEvent, AbnormalityKind, Chromosome, KaryotypeResult, NORMAL_CHROMOSOME_COUNT,
    RawAbnormality, RawFindings, SexChromosomes,
};

/// Largest chromosome count accepted (a tetraploid cell).
pub const MAX_CHROMOSOME_COUNT: i64 = 92;

pub const MIN_CONFIDENCE: f64 = 0.0;
pub const MAX_CONFIDENCE: f64 = 100.0;

///
/// Validate raw findings and build the canonical [`KaryotypeResult`].
///
/// The chromosome count must agree with the abnormality list: a count of
/// `46 + trisomies - monosomies` is required, and a disagreement is rejected on
/// `chromosome_count` rather than recomputed. A monosomy X collapses the sex
/// chromosomes to the single-X form.
///
/// # Arguments
/// - findings: raw findings from an upstream source (real, simulated or fallback)
///
/// # Returns
/// - the validated result, or the first [`ValidationError`] encountered
///
pub fn classify(findings: &RawFindings) -> Result<KaryotypeResult, ValidationError> {
    let chromosome_count = validate_chromosome_count(findings.chromosome_count)?;

    let declared_sex = findings
        .sex_chromosomes
        .parse::<SexChromosomes>()
        .map_err(|reason| ValidationError::new("sex_chromosomes", reason))?;

    let abnormalities = findings
        .abnormalities
        .iter()
        .enumerate()
        .map(|(index, raw)| validate_abnormality(index, raw))
        .collect::<Result<Vec<_>, _>>()?;

    reject_duplicates(&abnormalities)?;

    let sex_chromosomes = reconcile_sex_chromosomes(declared_sex, &abnormalities)?;

    validate_implied_count(chromosome_count, &abnormalities)?;

    let confidence = validate_confidence(findings.confidence)?;

    let analysis_time = findings
        .analysis_time
        .ok_or_else(|| ValidationError::new("analysis_time", "an analysis timestamp is required"))?;

    let technical_notes = findings.technical_notes.clone().unwrap_or_default();

    let result = KaryotypeResult::assemble(
        chromosome_count,
        sex_chromosomes,
        abnormalities,
        confidence,
        analysis_time,
        technical_notes,
    );

    debug!(
        notation = result.notation(),
        events = result.abnormalities().len(),
        "classified findings"
    );

    Ok(result)
}

fn validate_chromosome_count(count: i64) -> Result<u32, ValidationError> {
    if count < 1 || count > MAX_CHROMOSOME_COUNT {
        return Err(ValidationError::new(
            "chromosome_count",
            format!("{} is outside 1-{}", count, MAX_CHROMOSOME_COUNT),
        ));
    }
    Ok(count as u32)
}

fn validate_confidence(confidence: f64) -> Result<f64, ValidationError> {
    if !confidence.is_finite() || !(MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&confidence) {
        return Err(ValidationError::new(
            "confidence",
            format!(
                "{} is outside [{}, {}]",
                confidence, MIN_CONFIDENCE, MAX_CONFIDENCE
            ),
        ));
    }
    Ok(confidence)
}

fn validate_abnormality(
    index: usize,
    raw: &RawAbnormality,
) -> Result<AbnormalityEvent, ValidationError> {
    let kind = raw
        .kind
        .parse::<AbnormalityKind>()
        .map_err(|reason| ValidationError::abnormality(index, "kind", reason))?;

    let description = raw
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty());

    match kind {
        AbnormalityKind::Trisomy | AbnormalityKind::Monosomy => {
            let chromosome = raw
                .chromosome
                .as_ref()
                .ok_or_else(|| {
                    ValidationError::abnormality(
                        index,
                        "chromosome",
                        format!("a {} must name the affected chromosome", kind),
                    )
                })
                .and_then(|c| {
                    Chromosome::try_from(c)
                        .map_err(|reason| ValidationError::abnormality(index, "chromosome", reason))
                })?;

            if kind == AbnormalityKind::Trisomy {
                Ok(AbnormalityEvent::Trisomy {
                    chromosome,
                    description: description
                        .map(String::from)
                        .unwrap_or_else(|| format!("Trisomy {} detected", chromosome)),
                })
            } else {
                Ok(AbnormalityEvent::Monosomy {
                    chromosome,
                    description: description
                        .map(String::from)
                        .unwrap_or_else(|| format!("Monosomy {} detected", chromosome)),
                })
            }
        }
        AbnormalityKind::Translocation => {
            if raw.chromosome.is_some() {
                return Err(ValidationError::abnormality(
                    index,
                    "chromosome",
                    "a translocation is described by its breakpoints, not a single chromosome",
                ));
            }
            let description = description.ok_or_else(|| {
                ValidationError::abnormality(
                    index,
                    "description",
                    "a translocation needs its breakpoint notation, e.g. t(9;22)(q34;q11)",
                )
            })?;
            // the description becomes a notation token
            if description.contains(',') {
                return Err(ValidationError::abnormality(
                    index,
                    "description",
                    format!("'{}' must not contain a comma", description),
                ));
            }
            Ok(AbnormalityEvent::Translocation {
                description: description.to_string(),
            })
        }
    }
}

fn reject_duplicates(abnormalities: &[AbnormalityEvent]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for (index, event) in abnormalities.iter().enumerate() {
        if !seen.insert(event.key()) {
            return Err(ValidationError::new(
                format!("abnormalities[{}]", index),
                format!("duplicate {} event", event.kind()),
            ));
        }
    }
    Ok(())
}

fn reconcile_sex_chromosomes(
    declared: SexChromosomes,
    abnormalities: &[AbnormalityEvent],
) -> Result<SexChromosomes, ValidationError> {
    let lost = |target: Chromosome| {
        abnormalities.iter().any(|e| {
            matches!(e, AbnormalityEvent::Monosomy { chromosome, .. } if *chromosome == target)
        })
    };
    let monosomy_x = lost(Chromosome::X);
    let monosomy_y = lost(Chromosome::Y);

    let reject = |reason: &str| -> Result<SexChromosomes, ValidationError> {
        Err(ValidationError::new("sex_chromosomes", reason))
    };

    match declared {
        _ if monosomy_x && monosomy_y => reject("monosomy X and monosomy Y cannot both be present"),
        SexChromosomes::XX | SexChromosomes::X if monosomy_x => Ok(SexChromosomes::X),
        SexChromosomes::XY if monosomy_x => {
            reject("monosomy X requires an XX or single-X karyotype")
        }
        SexChromosomes::X => reject("a single X requires a monosomy X event"),
        SexChromosomes::XX if monosomy_y => reject("monosomy Y requires an XY karyotype"),
        other => Ok(other),
    }
}

fn validate_implied_count(
    chromosome_count: u32,
    abnormalities: &[AbnormalityEvent],
) -> Result<(), ValidationError> {
    let implied = NORMAL_CHROMOSOME_COUNT as i64
        + abnormalities
            .iter()
            .map(AbnormalityEvent::count_delta)
            .sum::<i64>();

    if implied != chromosome_count as i64 {
        return Err(ValidationError::new(
            "chromosome_count",
            format!(
                "count {} disagrees with the {} implied by the abnormality list",
                chromosome_count, implied
            ),
        ));
    }
    Ok(())
}
