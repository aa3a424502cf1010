//! Collaborators that run after interpretation.
//!
//! The checking engine and the response serializer live outside this
//! workspace; the interpreter only needs these two seams.

use textcheck_calibration::ConfidenceTable;
use textcheck_model::{CheckSpec, RuleMatch};

use crate::error::EngineError;

/// Grammar and style checking engine.
pub trait CheckEngine: Send + Sync {
    fn check(&self, text: &str, spec: &CheckSpec) -> Result<Vec<RuleMatch>, EngineError>;
}

/// Turns matches into a response body.
///
/// `calibration` lets the serializer annotate or filter matches by their
/// calibrated confidence; a missing entry keeps the serializer's default.
pub trait ResultSerializer: Send + Sync {
    fn serialize(
        &self,
        spec: &CheckSpec,
        matches: &[RuleMatch],
        calibration: &ConfidenceTable,
    ) -> Result<String, EngineError>;
}
