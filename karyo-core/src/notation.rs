//! ISCN-style karyotype notation.
//!
//! A notation string is the chromosome count and the sex chromosomes followed by
//! one comma-separated token per abnormality event, in event order:
//!
//! | event                       | token               |
//! |-----------------------------|---------------------|
//! | trisomy 21                  | `+21`               |
//! | monosomy 7                  | `-7`                |
//! | monosomy Y                  | `-Y`                |
//! | monosomy X (single-X form)  | *(none, prefix is `45,X`)* |
//! | translocation               | the description, e.g. `t(9;22)(q34;q11)` |

use std::fmt::Write;

use crate::models::{AbnormalityEvent, Chromosome, SexChromosomes};

///
/// Encode a karyotype as an ISCN-style notation string.
///
/// The leading numeral is always `chromosome_count` as given; events are neither
/// reordered nor de-duplicated.
///
/// # Arguments
/// - chromosome_count: the observed chromosome count
/// - sex_chromosomes: normalized sex chromosomes (`X` when monosomy X is present)
/// - abnormalities: events in detection order
///
pub fn encode(
    chromosome_count: u32,
    sex_chromosomes: SexChromosomes,
    abnormalities: &[AbnormalityEvent],
) -> String {
    let mut notation = format!("{},{}", chromosome_count, sex_chromosomes);

    for event in abnormalities {
        match event {
            AbnormalityEvent::Trisomy { chromosome, .. } => {
                let _ = write!(notation, ",+{}", chromosome);
            }
            // the single-X prefix already expresses the loss
            AbnormalityEvent::Monosomy {
                chromosome: Chromosome::X,
                ..
            } if sex_chromosomes == SexChromosomes::X => {}
            AbnormalityEvent::Monosomy { chromosome, .. } => {
                let _ = write!(notation, ",-{}", chromosome);
            }
            AbnormalityEvent::Translocation { description } => {
                let _ = write!(notation, ",{}", description);
            }
        }
    }

    notation
}
