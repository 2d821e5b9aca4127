pub mod abnormality;
pub mod chromosome;
pub mod findings;
pub mod karyotype;

// re-export for cleaner imports
pub use self::abnormality::{AbnormalityEvent, AbnormalityKind, RawAbnormality};
pub use self::chromosome::{Chromosome, RawChromosome, SexChromosomes};
pub use self::findings::RawFindings;
pub use self::karyotype::{ConfidenceLevel, KaryotypeResult, NORMAL_CHROMOSOME_COUNT};
