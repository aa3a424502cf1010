//! Supported languages and detection results.
//!
//! Language codes follow the `ll`, `ll-CC` or `ll-CC-variant` shape used by
//! the public API (`en`, `en-US`, `ca-ES-valencia`). Lookups are
//! case-insensitive; the registered spelling is what callers get back.

use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{RequestError, Result};

/// Code of the language that disables checking entirely.
pub const NOOP_LANGUAGE_CODE: &str = "zz";

/// A language (or regional variant) the checker can be asked to use.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Language {
    /// Full code, e.g. "en-US".
    pub code: String,
    /// Display name, e.g. "English (US)".
    pub name: String,
}

impl Language {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Language part of the code ("en" for "en-US").
    pub fn short_code(&self) -> &str {
        self.code.split('-').next().unwrap_or(&self.code)
    }

    /// Country part of the code, if any.
    pub fn country(&self) -> Option<&str> {
        self.code.split('-').nth(1)
    }

    pub fn is_noop(&self) -> bool {
        self.code == NOOP_LANGUAGE_CODE
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// Where a detection result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionSource {
    /// Character n-gram model.
    Ngram,
    /// fastText classifier.
    FastText,
    /// Common-word frequency lists.
    CommonWords,
    /// Nothing matched; a default was used.
    Fallback,
}

impl DetectionSource {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ngram => "ngram",
            Self::FastText => "fasttext",
            Self::CommonWords => "commonwords",
            Self::Fallback => "fallback",
        }
    }
}

/// Output of automatic language detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedLanguage {
    pub language: Language,
    /// Detection confidence between 0.0 and 1.0.
    pub confidence: f32,
    pub source: DetectionSource,
}

impl DetectedLanguage {
    pub fn new(language: Language, confidence: f32, source: DetectionSource) -> Self {
        Self {
            language,
            confidence,
            source,
        }
    }
}

const BUILTIN_LANGUAGES: &[(&str, &str)] = &[
    ("ar", "Arabic"),
    ("ast-ES", "Asturian"),
    ("be-BY", "Belarusian"),
    ("br-FR", "Breton"),
    ("ca-ES", "Catalan"),
    ("ca-ES-valencia", "Catalan (Valencian)"),
    ("zh-CN", "Chinese"),
    ("da-DK", "Danish"),
    ("nl", "Dutch"),
    ("nl-BE", "Dutch (Belgium)"),
    ("en", "English"),
    ("en-AU", "English (Australian)"),
    ("en-CA", "English (Canadian)"),
    ("en-GB", "English (GB)"),
    ("en-NZ", "English (New Zealand)"),
    ("en-ZA", "English (South African)"),
    ("en-US", "English (US)"),
    ("eo", "Esperanto"),
    ("fr", "French"),
    ("gl-ES", "Galician"),
    ("de", "German"),
    ("de-AT", "German (Austria)"),
    ("de-DE", "German (Germany)"),
    ("de-CH", "German (Swiss)"),
    ("el-GR", "Greek"),
    ("ga-IE", "Irish"),
    ("it", "Italian"),
    ("ja-JP", "Japanese"),
    ("km-KH", "Khmer"),
    ("fa", "Persian"),
    ("pl-PL", "Polish"),
    ("pt", "Portuguese"),
    ("pt-AO", "Portuguese (Angola)"),
    ("pt-BR", "Portuguese (Brazil)"),
    ("pt-MZ", "Portuguese (Moçambique)"),
    ("pt-PT", "Portuguese (Portugal)"),
    ("ro-RO", "Romanian"),
    ("ru-RU", "Russian"),
    ("sk-SK", "Slovak"),
    ("sl-SI", "Slovenian"),
    ("es", "Spanish"),
    ("sv", "Swedish"),
    ("tl-PH", "Tagalog"),
    ("ta-IN", "Tamil"),
    ("uk-UA", "Ukrainian"),
    (NOOP_LANGUAGE_CODE, "No-op"),
];

/// Set of languages a server instance accepts.
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
}

impl LanguageRegistry {
    pub fn new(languages: Vec<Language>) -> Self {
        Self { languages }
    }

    /// The languages shipped with the server, built once per process.
    pub fn builtin() -> &'static LanguageRegistry {
        static BUILTIN: OnceLock<LanguageRegistry> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Self::new(
                BUILTIN_LANGUAGES
                    .iter()
                    .map(|(code, name)| Language::new(*code, *name))
                    .collect(),
            )
        })
    }

    pub fn languages(&self) -> impl Iterator<Item = &Language> {
        self.languages.iter()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Resolve a client-supplied code to a registered language.
    ///
    /// An exact (case-insensitive) code match wins. A bare language code such
    /// as `de` or `pl` falls back to the entry without a country, or to the
    /// first registered variant of that language.
    pub fn parse(&self, code: &str) -> Result<&Language> {
        self.lookup(code)
            .ok_or_else(|| RequestError::UnknownLanguage {
                code: code.to_string(),
                supported: self.supported_codes(),
            })
    }

    pub fn lookup(&self, code: &str) -> Option<&Language> {
        if code.is_empty() {
            return None;
        }
        if let Some(exact) = self
            .languages
            .iter()
            .find(|lang| lang.code.eq_ignore_ascii_case(code))
        {
            return Some(exact);
        }
        if code.contains('-') {
            return None;
        }
        let mut same_language = self
            .languages
            .iter()
            .filter(|lang| lang.short_code().eq_ignore_ascii_case(code));
        let first = same_language.next()?;
        if first.country().is_none() {
            return Some(first);
        }
        same_language
            .find(|lang| lang.country().is_none())
            .or(Some(first))
    }

    /// First of `preferred_variants` that is a registered variant of
    /// `short_code`.
    pub fn variant_for(&self, short_code: &str, preferred_variants: &[String]) -> Option<&Language> {
        preferred_variants
            .iter()
            .filter_map(|variant| self.lookup(variant))
            .find(|lang| lang.short_code().eq_ignore_ascii_case(short_code))
    }

    pub fn noop(&self) -> Option<&Language> {
        self.lookup(NOOP_LANGUAGE_CODE)
    }

    fn supported_codes(&self) -> String {
        self.languages
            .iter()
            .map(|lang| lang.code.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_code_is_case_insensitive() {
        let registry = LanguageRegistry::builtin();
        assert_eq!(registry.parse("en-us").unwrap().code, "en-US");
        assert_eq!(registry.parse("DE-ch").unwrap().code, "de-CH");
    }

    #[test]
    fn bare_code_prefers_generic_entry() {
        let registry = LanguageRegistry::builtin();
        assert_eq!(registry.parse("en").unwrap().code, "en");
        assert_eq!(registry.parse("pl").unwrap().code, "pl-PL");
        assert_eq!(registry.parse("ca").unwrap().code, "ca-ES");
    }

    #[test]
    fn unknown_code_is_rejected() {
        let registry = LanguageRegistry::builtin();
        let err = registry.parse("xx-YY").unwrap_err();
        assert!(err.to_string().contains("'xx-YY'"));
        assert!(registry.parse("").is_err());
    }

    #[test]
    fn variant_for_uses_first_matching_preference() {
        let registry = LanguageRegistry::builtin();
        let preferred = vec!["de-AT".to_string(), "en-GB".to_string(), "en-US".to_string()];
        assert_eq!(registry.variant_for("en", &preferred).unwrap().code, "en-GB");
        assert!(registry.variant_for("fr", &preferred).is_none());
    }

    #[test]
    fn short_code_and_country() {
        let lang = Language::new("ca-ES-valencia", "Catalan (Valencian)");
        assert_eq!(lang.short_code(), "ca");
        assert_eq!(lang.country(), Some("ES"));
        assert!(LanguageRegistry::builtin().noop().unwrap().is_noop());
    }
}
