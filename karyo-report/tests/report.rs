use chrono::{DateTime, TimeZone, Utc};
use rstest::*;

use karyo_core::classify;
use karyo_core::models::{RawAbnormality, RawFindings};
use karyo_report::{InterpretedKaryotype, attach, parse_structured, render};

#[fixture]
fn generated_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 1, 8, 15, 42).unwrap()
}

fn interpreted(findings: RawFindings) -> InterpretedKaryotype {
    let at = Utc
        .with_ymd_and_hms(2025, 7, 1, 8, 14, 0)
        .unwrap()
        .checked_add_signed(chrono::Duration::nanoseconds(123_456_789))
        .unwrap();
    let findings = findings
        .at(at)
        .with_technical_notes("Analysis performed using EXAONE-Path-2.0 model");
    attach(classify(&findings).unwrap())
}

fn cases() -> Vec<RawFindings> {
    vec![
        RawFindings::new(46, "XX", 93.123456789),
        RawFindings::new(46, "XY", 0.1 + 0.2),
        RawFindings::new(47, "XX", 81.7).with_abnormality(RawAbnormality::trisomy(21)),
        RawFindings::new(47, "XY", 99.99).with_abnormality(RawAbnormality::trisomy("X")),
        RawFindings::new(45, "XX", 84.0).with_abnormality(
            RawAbnormality::monosomy("X").with_description("Turner syndrome (Monosomy X)"),
        ),
        RawFindings::new(45, "XY", 76.5).with_abnormality(RawAbnormality::monosomy("Y")),
        RawFindings::new(46, "XX", 100.0)
            .with_abnormality(RawAbnormality::translocation("t(9;22)(q34;q11)")),
        RawFindings::new(47, "XY", 12.0)
            .with_abnormality(RawAbnormality::translocation("t(15;17)(q24;q21)"))
            .with_abnormality(RawAbnormality::trisomy(8)),
    ]
}

mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[rstest]
    fn test_structured_round_trip(generated_at: DateTime<Utc>) {
        for findings in cases() {
            let karyotype = interpreted(findings);
            let report = render(&karyotype, generated_at);

            let parsed = parse_structured(&report.structured).unwrap();

            assert_eq!(parsed.karyotype, karyotype);
            assert_eq!(parsed.generated_at, generated_at);
        }
    }

    #[rstest]
    fn test_text_carries_every_structured_field(generated_at: DateTime<Utc>) {
        for findings in cases() {
            let karyotype = interpreted(findings);
            let report = render(&karyotype, generated_at);
            let value: serde_json::Value = serde_json::from_str(&report.structured).unwrap();

            for key in [
                "notation",
                "sex_chromosomes",
                "confidence_level",
                "analysis_time",
                "technical_notes",
                "interpretation",
                "generated_at",
            ] {
                let field = value[key].as_str().unwrap();
                assert!(
                    report.text.contains(field),
                    "text report is missing {key}: {field}"
                );
            }

            let count = value["chromosome_count"].to_string();
            assert!(report.text.contains(&format!("Chromosome Count: {}", count)));

            let confidence = value["confidence"].as_f64().unwrap();
            assert!(report.text.contains(&format!("{:.1}%", confidence)));

            let exact = report
                .text
                .lines()
                .find_map(|line| line.strip_prefix("Confidence (exact): "))
                .unwrap();
            assert_eq!(exact.parse::<f64>().unwrap(), confidence);

            for abnormality in value["abnormalities"].as_array().unwrap() {
                assert!(report
                    .text
                    .contains(abnormality["description"].as_str().unwrap()));
            }
        }
    }

    #[rstest]
    fn test_render_is_deterministic(generated_at: DateTime<Utc>) {
        let karyotype = interpreted(
            RawFindings::new(47, "XX", 81.7).with_abnormality(RawAbnormality::trisomy(18)),
        );

        assert_eq!(render(&karyotype, generated_at), render(&karyotype, generated_at));
    }

    #[rstest]
    fn test_file_names_follow_generated_at(generated_at: DateTime<Utc>) {
        let karyotype = interpreted(RawFindings::new(46, "XX", 90.0));
        let report = render(&karyotype, generated_at);

        assert_eq!(
            report.structured_file_name(),
            "karyotype_analysis_20250701_081542.json"
        );
        assert_eq!(
            report.text_file_name(),
            "karyotype_analysis_20250701_081542.txt"
        );
    }

    #[rstest]
    fn test_down_syndrome_report(generated_at: DateTime<Utc>) {
        let karyotype = interpreted(
            RawFindings::new(47, "XX", 81.7).with_abnormality(RawAbnormality::trisomy(21)),
        );
        let report = render(&karyotype, generated_at);

        assert!(report.text.contains("ISCN 2020 Notation: 47,XX,+21"));
        assert!(karyotype.interpretation.contains("Down syndrome"));
    }
}
