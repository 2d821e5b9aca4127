//! The seam between the engine and whatever produces findings.
//!
//! A [`FindingsSource`] stands for the external chromosome classifier (or a
//! stand-in for it). When it fails, [`fetch_or_fallback`] substitutes a clearly
//! marked fallback value; genuine and fallback findings then go through the same
//! [`crate::classify`] call.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::errors::UpstreamError;
use crate::models::{NORMAL_CHROMOSOME_COUNT, RawFindings};

/// Technical notes carried by the built-in fallback findings.
pub const FALLBACK_TECHNICAL_NOTES: &str =
    "FALLBACK FINDINGS: upstream classifier unavailable, values are a placeholder and not an analysis";

///
/// Anything able to turn an image payload into raw findings.
///
pub trait FindingsSource {
    fn fetch(&self, payload: &[u8]) -> Result<RawFindings, UpstreamError>;
}

/// Findings obtained through [`fetch_or_fallback`].
#[derive(Debug)]
pub enum FetchedFindings {
    Upstream(RawFindings),
    Fallback {
        findings: RawFindings,
        cause: UpstreamError,
    },
}

impl FetchedFindings {
    pub fn findings(&self) -> &RawFindings {
        match self {
            FetchedFindings::Upstream(findings) => findings,
            FetchedFindings::Fallback { findings, .. } => findings,
        }
    }

    pub fn into_findings(self) -> RawFindings {
        match self {
            FetchedFindings::Upstream(findings) => findings,
            FetchedFindings::Fallback { findings, .. } => findings,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FetchedFindings::Fallback { .. })
    }
}

///
/// Ask `source` for findings, substituting `fallback` if it fails.
///
pub fn fetch_or_fallback<S: FindingsSource + ?Sized>(
    source: &S,
    payload: &[u8],
    fallback: RawFindings,
) -> FetchedFindings {
    match source.fetch(payload) {
        Ok(findings) => FetchedFindings::Upstream(findings),
        Err(cause) => {
            warn!(error = %cause, "findings source failed, substituting fallback findings");
            FetchedFindings::Fallback {
                findings: fallback,
                cause,
            }
        }
    }
}

///
/// The built-in fallback: a normal karyotype with zero confidence, marked as a
/// placeholder in its technical notes.
///
pub fn fallback_findings(analysis_time: DateTime<Utc>) -> RawFindings {
    RawFindings::new(NORMAL_CHROMOSOME_COUNT as i64, "XX", 0.0)
        .at(analysis_time)
        .with_technical_notes(FALLBACK_TECHNICAL_NOTES)
}
