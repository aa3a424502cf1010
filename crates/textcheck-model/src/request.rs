//! Per-request resolution results.

use serde::{Deserialize, Serialize};

use crate::language::{DetectedLanguage, DetectionSource, Language};

/// What the client asked for regarding language choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSelection {
    /// Explicit code, `None` when the client asked for `language=auto`.
    pub requested_language: Option<String>,
    pub auto_detect: bool,
    pub preferred_variants: Vec<String>,
    pub force_preferred: bool,
}

/// The language a request will be checked against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLanguage {
    /// Language handed to the checking engine.
    pub chosen: Language,
    /// What detection concluded, even when the client pinned a language.
    pub detected: Language,
    pub detection_confidence: f32,
    pub detection_source: DetectionSource,
}

impl ResolvedLanguage {
    pub fn new(chosen: Language, detection: DetectedLanguage) -> Self {
        Self {
            chosen,
            detected: detection.language,
            detection_confidence: detection.confidence,
            detection_source: detection.source,
        }
    }

    /// True when an explicit language disagrees with detection.
    pub fn differs_from_detection(&self) -> bool {
        self.chosen != self.detected
    }
}

/// Rule ids the client switched on or off.
///
/// Order and duplicates are kept as sent; semantically both lists are sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleIdFilter {
    pub enabled: Vec<String>,
    pub disabled: Vec<String>,
    /// Only the enabled rules run.
    pub enabled_only: bool,
}

impl RuleIdFilter {
    /// Whether a rule runs, given whether it is on by default.
    pub fn is_active(&self, rule_id: &str, default_on: bool) -> bool {
        if self.disabled.iter().any(|id| id == rule_id) {
            return false;
        }
        if self.enabled.iter().any(|id| id == rule_id) {
            return true;
        }
        !self.enabled_only && default_on
    }
}

/// Fully resolved request, ready for the checking engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckSpec {
    pub language: ResolvedLanguage,
    pub selection: LanguageSelection,
    pub rules: RuleIdFilter,
    pub noop_languages: Vec<String>,
    pub preferred_languages: Vec<String>,
}

/// A single finding produced by the checking engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMatch {
    pub rule_id: String,
    pub message: String,
    /// Character offset into the checked text.
    pub offset: usize,
    pub length: usize,
}
