//! Language detector trait.
//!
//! Detection is an external concern: production deployments plug in an
//! n-gram or fastText backed implementation. The interpreter only depends on
//! [`LanguageDetector`].

use textcheck_model::DetectedLanguage;

/// Inputs for one detection run.
#[derive(Debug, Clone, Copy)]
pub struct DetectionRequest<'a> {
    pub text: &'a str,
    /// Regional variants to report instead of a generic language.
    pub preferred_variants: &'a [String],
    /// Languages that, when detected, switch checking off.
    pub noop_languages: &'a [String],
    /// Languages the client expects the text to be in.
    pub preferred_languages: &'a [String],
    /// Only consider `preferred_languages`.
    pub force_preferred: bool,
    /// Server runs in test mode; detectors may skip expensive models.
    pub test_mode: bool,
}

impl<'a> DetectionRequest<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            preferred_variants: &[],
            noop_languages: &[],
            preferred_languages: &[],
            force_preferred: false,
            test_mode: false,
        }
    }
}

/// Statistical language detection over request text.
pub trait LanguageDetector: Send + Sync {
    /// Short name for logs (e.g. "commonwords").
    fn name(&self) -> &'static str;

    /// Detect the language of `request.text`.
    ///
    /// Detection always produces an answer; when nothing matches the
    /// implementation falls back to a default with low confidence.
    fn detect(&self, request: &DetectionRequest<'_>) -> DetectedLanguage;
}
