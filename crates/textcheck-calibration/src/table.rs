//! Rule confidence lookup table.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use textcheck_model::RuleMatch;

/// One parsed calibration line.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceEntry {
    pub rule_id: String,
    pub confidence: f32,
}

/// Calibrated confidence per rule id.
///
/// Built once by [`crate::load_confidence_table`] and never mutated
/// afterwards. Lookups on a shared `Arc<ConfidenceTable>` need no lock.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfidenceTable {
    entries: HashMap<String, f32>,
    source: Option<PathBuf>,
}

impl ConfidenceTable {
    /// Table without any calibration; every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_entries(
        entries: impl IntoIterator<Item = ConfidenceEntry>,
        source: Option<PathBuf>,
    ) -> Self {
        // Later entries overwrite earlier ones with the same id.
        let entries = entries
            .into_iter()
            .map(|entry| (entry.rule_id, entry.confidence))
            .collect();
        Self { entries, source }
    }

    pub fn get(&self, rule_id: &str) -> Option<f32> {
        self.entries.get(rule_id).copied()
    }

    /// Calibrated confidence for a match, `None` keeps the caller's default.
    pub fn confidence_for(&self, rule_match: &RuleMatch) -> Option<f32> {
        self.get(&rule_match.rule_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// File the table was loaded from.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Entries sorted by rule id.
    pub fn entries(&self) -> Vec<ConfidenceEntry> {
        let mut entries: Vec<ConfidenceEntry> = self
            .entries
            .iter()
            .map(|(rule_id, confidence)| ConfidenceEntry {
                rule_id: rule_id.clone(),
                confidence: *confidence,
            })
            .collect();
        entries.sort_by(|a, b| a.rule_id.cmp(&b.rule_id));
        entries
    }
}
