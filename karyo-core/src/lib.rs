//! Core library for karyo: validation of karyotype findings and ISCN-style notation.
//!
//! This crate turns the structured findings produced by an upstream chromosome
//! classifier (count, sex chromosomes, abnormality events, confidence) into an
//! immutable, validated [`KaryotypeResult`] carrying its derived notation string:
//!
//! - Validating and normalizing raw findings ([`classify`])
//! - Encoding ISCN-style notation such as `47,XX,+21` or `45,X` ([`notation::encode`])
//! - Abstracting the findings source and its fallback policy ([`source`])
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use karyo_core::classify;
//! use karyo_core::models::{RawAbnormality, RawFindings};
//!
//! let findings = RawFindings::new(47, "XX", 92.5)
//!     .with_abnormality(RawAbnormality::trisomy(21))
//!     .at(Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap());
//!
//! let result = classify(&findings).unwrap();
//! assert_eq!(result.notation(), "47,XX,+21");
//! ```

pub mod classify;
pub mod errors;
pub mod models;
pub mod notation;
pub mod source;

// re-exports
pub use classify::classify;
pub use errors::{UpstreamError, ValidationError};
pub use models::{
    AbnormalityEvent, AbnormalityKind, Chromosome, ConfidenceLevel, KaryotypeResult,
    RawAbnormality, RawChromosome, RawFindings, SexChromosomes,
};
