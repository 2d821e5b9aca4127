//! Karyotype classification and reporting.
//!
//! Enable the `core` feature for findings validation and notation, and `report`
//! for interpretation and report rendering (both are on by default).

#[cfg(feature = "core")]
#[doc(inline)]
pub use karyo_core as core;

#[cfg(feature = "report")]
#[doc(inline)]
pub use karyo_report as report;
