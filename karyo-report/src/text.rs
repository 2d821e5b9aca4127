//! Fixed-layout plain-text report.

use chrono::{DateTime, Utc};

use crate::consts::{DISCLAIMER, NO_ABNORMALITIES, REPORT_FOOTER, REPORT_TITLE};
use crate::interpretation::InterpretedKaryotype;
use crate::report::format_timestamp;

///
/// Render the text report. Sections, in order: header, notation, summary,
/// detected abnormalities, clinical interpretation, technical notes, disclaimer.
///
pub(crate) fn render_text(karyotype: &InterpretedKaryotype, generated_at: DateTime<Utc>) -> String {
    let result = &karyotype.result;
    let analysis_time = format_timestamp(result.analysis_time());
    let mut lines: Vec<String> = Vec::new();

    lines.push(REPORT_TITLE.to_string());
    lines.push("=".repeat(REPORT_TITLE.len()));
    lines.push(String::new());
    lines.push(format!("Analysis Date: {}", analysis_time));
    lines.push(format!("Report Generated: {}", format_timestamp(generated_at)));
    lines.push(String::new());
    lines.push(format!("ISCN 2020 Notation: {}", result.notation()));

    section(&mut lines, "SUMMARY");
    lines.push(format!("Chromosome Count: {}", result.chromosome_count()));
    lines.push(format!("Sex Chromosomes: {}", result.sex_chromosomes()));
    lines.push(format!(
        "Confidence Score: {:.1}% ({})",
        result.confidence(),
        result.confidence_level()
    ));
    lines.push(format!("Confidence (exact): {}", result.confidence()));

    section(&mut lines, "DETECTED ABNORMALITIES");
    if result.abnormalities().is_empty() {
        lines.push(NO_ABNORMALITIES.to_string());
    } else {
        for (i, event) in result.abnormalities().iter().enumerate() {
            lines.push(format!("{}. {}", i + 1, event.description()));
        }
    }

    section(&mut lines, "CLINICAL INTERPRETATION");
    lines.push(karyotype.interpretation.clone());

    section(&mut lines, "TECHNICAL NOTES");
    lines.push(format!(
        "{} (analysis performed at {})",
        result.technical_notes(),
        analysis_time
    ));

    section(&mut lines, "DISCLAIMER");
    lines.extend(DISCLAIMER.iter().map(|l| l.to_string()));
    lines.push(String::new());
    lines.push(REPORT_FOOTER.to_string());

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn section(lines: &mut Vec<String>, title: &str) {
    lines.push(String::new());
    lines.push(title.to_string());
    lines.push("-".repeat(title.len()));
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;
    use karyo_core::classify;
    use karyo_core::models::{RawAbnormality, RawFindings};
    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::interpretation::attach;

    #[fixture]
    fn generated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 20, 14, 3, 9).unwrap()
    }

    fn interpreted(findings: RawFindings) -> InterpretedKaryotype {
        let at = Utc.with_ymd_and_hms(2025, 5, 20, 14, 0, 0).unwrap();
        attach(classify(&findings.at(at).with_technical_notes("Model v2")).unwrap())
    }

    #[rstest]
    fn test_full_layout(generated_at: DateTime<Utc>) {
        let karyotype = interpreted(
            RawFindings::new(47, "XY", 92.34).with_abnormality(RawAbnormality::trisomy(21)),
        );
        let expected = "\
CHROMOSOME KARYOTYPE ANALYSIS REPORT
====================================

Analysis Date: 2025-05-20T14:00:00Z
Report Generated: 2025-05-20T14:03:09Z

ISCN 2020 Notation: 47,XY,+21

SUMMARY
-------
Chromosome Count: 47
Sex Chromosomes: XY
Confidence Score: 92.3% (high)
Confidence (exact): 92.34

DETECTED ABNORMALITIES
----------------------
1. Trisomy 21 detected

CLINICAL INTERPRETATION
-----------------------
Numerical abnormality detected: 47 chromosomes. Trisomy 21 (Down syndrome) detected.

TECHNICAL NOTES
---------------
Model v2 (analysis performed at 2025-05-20T14:00:00Z)

DISCLAIMER
----------
This analysis is for educational and research purposes only.
Results must be validated by qualified cytogenetics professionals.
Do not use for clinical diagnosis or medical decision-making.

Generated by Chromosome Karyotype Analyzer
";
        assert_eq!(render_text(&karyotype, generated_at), expected);
    }

    #[rstest]
    fn test_empty_abnormality_list(generated_at: DateTime<Utc>) {
        let karyotype = interpreted(RawFindings::new(46, "XX", 60.0));
        let text = render_text(&karyotype, generated_at);

        assert!(text.contains("DETECTED ABNORMALITIES\n----------------------\nNo chromosomal abnormalities detected.\n"));
        assert!(text.contains("Confidence Score: 60.0% (low)\nConfidence (exact): 60\n"));
    }

    #[rstest]
    fn test_abnormalities_are_numbered(generated_at: DateTime<Utc>) {
        let karyotype = interpreted(
            RawFindings::new(47, "XX", 80.0)
                .with_abnormality(RawAbnormality::trisomy(13))
                .with_abnormality(RawAbnormality::translocation("t(9;22)(q34;q11)")),
        );
        let text = render_text(&karyotype, generated_at);

        assert!(text.contains("1. Trisomy 13 detected\n2. t(9;22)(q34;q11)\n"));
    }
}
