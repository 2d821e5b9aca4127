use karyo_core::models::{
    AbnormalityEvent, AbnormalityKind, Chromosome, KaryotypeResult, NORMAL_CHROMOSOME_COUNT,
};

pub const NORMAL_INTERPRETATION: &str =
    "Normal male/female karyotype with no apparent numerical or structural abnormalities.";

pub const STRUCTURAL_PREFIX: &str = "Structural rearrangement detected: ";

///
/// A syndrome named after a numerical abnormality of one chromosome.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedSyndrome {
    pub kind: AbnormalityKind,
    pub chromosome: Chromosome,
    pub name: &'static str,
}

/// Numerical abnormalities that are reported by syndrome name.
pub const NAMED_SYNDROMES: &[NamedSyndrome] = &[
    NamedSyndrome {
        kind: AbnormalityKind::Trisomy,
        chromosome: Chromosome::Autosome(21),
        name: "Down syndrome",
    },
    NamedSyndrome {
        kind: AbnormalityKind::Trisomy,
        chromosome: Chromosome::Autosome(18),
        name: "Edwards syndrome",
    },
    NamedSyndrome {
        kind: AbnormalityKind::Trisomy,
        chromosome: Chromosome::Autosome(13),
        name: "Patau syndrome",
    },
    NamedSyndrome {
        kind: AbnormalityKind::Monosomy,
        chromosome: Chromosome::X,
        name: "Turner syndrome",
    },
];

pub fn syndrome_name(kind: AbnormalityKind, chromosome: Chromosome) -> Option<&'static str> {
    NAMED_SYNDROMES
        .iter()
        .find(|s| s.kind == kind && s.chromosome == chromosome)
        .map(|s| s.name)
}

///
/// A [`KaryotypeResult`] together with the interpretation derived from it.
///
#[derive(Debug, Clone, PartialEq)]
pub struct InterpretedKaryotype {
    pub result: KaryotypeResult,
    pub interpretation: String,
}

///
/// Derive the clinical interpretation of a result.
///
/// A normal result gets a single fixed sentence. Otherwise a numerical-abnormality
/// sentence (when the count is not 46) is followed by one sentence per event, in
/// event order, joined by single spaces.
///
pub fn interpret(result: &KaryotypeResult) -> String {
    if result.is_normal() {
        return NORMAL_INTERPRETATION.to_string();
    }

    let mut sentences: Vec<String> = Vec::with_capacity(result.abnormalities().len() + 1);

    if result.chromosome_count() != NORMAL_CHROMOSOME_COUNT {
        sentences.push(format!(
            "Numerical abnormality detected: {} chromosomes.",
            result.chromosome_count()
        ));
    }

    sentences.extend(result.abnormalities().iter().map(event_sentence));

    sentences.join(" ")
}

///
/// Produce the augmented value carrying the interpretation; `result` is moved,
/// not modified.
///
pub fn attach(result: KaryotypeResult) -> InterpretedKaryotype {
    let interpretation = interpret(&result);
    InterpretedKaryotype {
        result,
        interpretation,
    }
}

fn event_sentence(event: &AbnormalityEvent) -> String {
    match event {
        AbnormalityEvent::Trisomy { chromosome, .. } => {
            numerical_sentence("Trisomy", AbnormalityKind::Trisomy, *chromosome)
        }
        AbnormalityEvent::Monosomy { chromosome, .. } => {
            numerical_sentence("Monosomy", AbnormalityKind::Monosomy, *chromosome)
        }
        AbnormalityEvent::Translocation { description } => {
            format!("{}{}", STRUCTURAL_PREFIX, description)
        }
    }
}

fn numerical_sentence(label: &str, kind: AbnormalityKind, chromosome: Chromosome) -> String {
    match syndrome_name(kind, chromosome) {
        Some(name) => format!("{} {} ({}) detected.", label, chromosome, name),
        None => format!("{} {} detected.", label, chromosome),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{TimeZone, Utc};
    use karyo_core::classify;
    use karyo_core::models::{RawAbnormality, RawFindings};
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn result_of(findings: RawFindings) -> KaryotypeResult {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        classify(&findings.at(at)).unwrap()
    }

    #[rstest]
    #[case("XX")]
    #[case("XY")]
    fn test_normal(#[case] sex: &str) {
        let result = result_of(RawFindings::new(46, sex, 91.0));
        assert_eq!(interpret(&result), NORMAL_INTERPRETATION);
    }

    #[rstest]
    #[case(21, "Numerical abnormality detected: 47 chromosomes. Trisomy 21 (Down syndrome) detected.")]
    #[case(18, "Numerical abnormality detected: 47 chromosomes. Trisomy 18 (Edwards syndrome) detected.")]
    #[case(13, "Numerical abnormality detected: 47 chromosomes. Trisomy 13 (Patau syndrome) detected.")]
    #[case(8, "Numerical abnormality detected: 47 chromosomes. Trisomy 8 detected.")]
    fn test_trisomy(#[case] chromosome: i64, #[case] expected: &str) {
        let result = result_of(
            RawFindings::new(47, "XX", 91.0).with_abnormality(RawAbnormality::trisomy(chromosome)),
        );
        assert_eq!(interpret(&result), expected);
    }

    #[rstest]
    fn test_turner() {
        let result = result_of(
            RawFindings::new(45, "XX", 91.0).with_abnormality(RawAbnormality::monosomy("X")),
        );
        assert_eq!(
            interpret(&result),
            "Numerical abnormality detected: 45 chromosomes. Monosomy X (Turner syndrome) detected."
        );
    }

    #[rstest]
    fn test_generic_monosomy() {
        let result = result_of(
            RawFindings::new(45, "XY", 91.0).with_abnormality(RawAbnormality::monosomy("Y")),
        );
        assert_eq!(
            interpret(&result),
            "Numerical abnormality detected: 45 chromosomes. Monosomy Y detected."
        );
    }

    #[rstest]
    fn test_translocation_on_normal_count() {
        let result = result_of(
            RawFindings::new(46, "XX", 91.0)
                .with_abnormality(RawAbnormality::translocation("t(9;22)(q34;q11)")),
        );
        assert_eq!(
            interpret(&result),
            "Structural rearrangement detected: t(9;22)(q34;q11)"
        );
    }

    #[rstest]
    #[case("Balanced translocation t(9;22)(q34;q11)")]
    #[case("t(9;22)(q34;q11) balanced.")]
    fn test_translocation_description_is_verbatim(#[case] description: &str) {
        let result = result_of(
            RawFindings::new(46, "XX", 91.0)
                .with_abnormality(RawAbnormality::translocation(description)),
        );
        assert_eq!(
            interpret(&result),
            format!("Structural rearrangement detected: {}", description)
        );
    }

    #[rstest]
    fn test_sentence_order_follows_events() {
        let result = result_of(
            RawFindings::new(47, "XY", 91.0)
                .with_abnormality(RawAbnormality::translocation("t(9;22)(q34;q11)"))
                .with_abnormality(RawAbnormality::trisomy(21)),
        );
        let expected = "Numerical abnormality detected: 47 chromosomes. \
                        Structural rearrangement detected: t(9;22)(q34;q11) \
                        Trisomy 21 (Down syndrome) detected.";

        assert_eq!(interpret(&result), expected);
        assert_eq!(interpret(&result), interpret(&result));
    }

    #[rstest]
    fn test_attach_keeps_result() {
        let result = result_of(RawFindings::new(46, "XY", 77.0));
        let interpreted = attach(result.clone());

        assert_eq!(interpreted.result, result);
        assert_eq!(interpreted.interpretation, NORMAL_INTERPRETATION);
    }
}
