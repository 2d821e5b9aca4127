//! # Interpretation and reports for karyotype results.
//!
//! Given a validated [`karyo_core::KaryotypeResult`], this crate derives a
//! clinical-style interpretation and renders the result into two
//! content-equivalent documents: a structured JSON export that can be parsed back
//! into the same result, and a fixed-layout plain-text report.
//!
//! Rendering is pure. The only outside input is the `generated_at` timestamp,
//! which the caller supplies and which also names the output files
//! (`karyotype_analysis_<YYYYMMDD_HHMMSS>.{json,txt}`).
//!
pub mod consts;
pub mod errors;
pub mod interpretation;
pub mod report;
pub mod structured;
pub mod text;

// re-exports
pub use errors::*;
pub use interpretation::{InterpretedKaryotype, attach, interpret};
pub use report::{Report, render, report_stem};
pub use structured::{ParsedReport, parse_structured};
