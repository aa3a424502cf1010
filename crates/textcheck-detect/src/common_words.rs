//! Detector based on short lists of very frequent words.
//!
//! Good enough for paragraphs of running text and for tests; short or
//! mixed-language snippets need a statistical model.

use std::collections::HashSet;

use textcheck_model::{DetectedLanguage, DetectionSource, Language, LanguageRegistry};
use tracing::debug;

use crate::detector::{DetectionRequest, LanguageDetector};

const FALLBACK_LANGUAGE: &str = "en";

const PROFILES: &[(&str, &[&str])] = &[
    (
        "en",
        &[
            "the", "and", "is", "are", "of", "to", "in", "that", "it", "with", "this", "was",
            "for", "have", "you", "not", "be", "on",
        ],
    ),
    (
        "de",
        &[
            "der", "die", "das", "und", "ist", "nicht", "ein", "eine", "mit", "ich", "sie",
            "auf", "für", "auch", "sich", "dem", "den", "wir",
        ],
    ),
    (
        "fr",
        &[
            "le", "les", "et", "est", "une", "des", "du", "pas", "que", "qui", "dans", "pour",
            "avec", "sur", "nous", "vous", "ce", "je",
        ],
    ),
    (
        "es",
        &[
            "el", "los", "las", "y", "es", "una", "del", "que", "por", "con", "para", "pero",
            "como", "muy", "está", "yo", "su", "al",
        ],
    ),
    (
        "it",
        &[
            "il", "gli", "e", "è", "della", "che", "non", "per", "con", "sono", "una", "di",
            "anche", "questo", "nel", "io", "ma", "lo",
        ],
    ),
    (
        "nl",
        &[
            "de", "het", "een", "en", "is", "niet", "van", "ik", "dat", "op", "zijn", "met",
            "voor", "maar", "ook", "wij", "heb", "naar",
        ],
    ),
    (
        "pt",
        &[
            "o", "os", "as", "e", "não", "uma", "do", "da", "que", "com", "para", "em", "mas",
            "muito", "você", "eu", "isso", "são",
        ],
    ),
    (
        "pl",
        &[
            "i", "jest", "nie", "się", "na", "że", "to", "w", "z", "jak", "ale", "czy", "jestem",
            "tak", "mnie", "dla", "był", "bardzo",
        ],
    ),
    (
        "sv",
        &[
            "och", "är", "att", "det", "som", "en", "inte", "jag", "på", "för", "med", "har",
            "av", "till", "den", "vi", "men", "om",
        ],
    ),
    (
        "da",
        &[
            "og", "er", "at", "det", "ikke", "jeg", "på", "en", "til", "med", "har", "af",
            "for", "den", "vi", "men", "som", "meget",
        ],
    ),
    (
        "ca",
        &[
            "el", "els", "les", "i", "és", "una", "amb", "per", "què", "no", "del", "als",
            "però", "molt", "jo", "aquest", "seu", "dels",
        ],
    ),
    (
        "ru",
        &[
            "и", "в", "не", "на", "что", "я", "с", "он", "как", "это", "по", "но", "они",
            "мы", "был", "она", "для", "так",
        ],
    ),
    (
        "uk",
        &[
            "і", "в", "не", "на", "що", "я", "з", "він", "як", "це", "але", "вони", "ми",
            "був", "вона", "для", "так", "та",
        ],
    ),
];

struct WordProfile {
    short_code: &'static str,
    words: HashSet<&'static str>,
}

/// Detects the language whose common words occur most often.
///
/// Confidence is the share of all common-word hits that went to the winning
/// language.
pub struct CommonWordsDetector {
    registry: LanguageRegistry,
    profiles: Vec<WordProfile>,
}

impl CommonWordsDetector {
    pub fn new(registry: LanguageRegistry) -> Self {
        let profiles = PROFILES
            .iter()
            .filter(|(code, _)| registry.lookup(code).is_some())
            .map(|(code, words)| WordProfile {
                short_code: *code,
                words: words.iter().copied().collect(),
            })
            .collect();
        Self { registry, profiles }
    }

    /// Short codes this detector can recognize.
    pub fn short_codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.profiles.iter().map(|profile| profile.short_code)
    }

    fn candidates<'p>(&'p self, request: &DetectionRequest<'_>) -> Vec<&'p WordProfile> {
        if !request.force_preferred || request.preferred_languages.is_empty() {
            return self.profiles.iter().collect();
        }
        self.profiles
            .iter()
            .filter(|profile| {
                request
                    .preferred_languages
                    .iter()
                    .any(|lang| short_code_of(lang).eq_ignore_ascii_case(profile.short_code))
            })
            .collect()
    }

    fn fallback_short_code<'r>(&self, request: &'r DetectionRequest<'_>) -> &'r str {
        request
            .preferred_languages
            .iter()
            .map(|lang| short_code_of(lang))
            .find(|code| self.registry.lookup(code).is_some())
            .unwrap_or(FALLBACK_LANGUAGE)
    }

    fn language_for(&self, short_code: &str, request: &DetectionRequest<'_>) -> Language {
        if request
            .noop_languages
            .iter()
            .any(|lang| short_code_of(lang).eq_ignore_ascii_case(short_code))
            && let Some(noop) = self.registry.noop()
        {
            return noop.clone();
        }
        self.registry
            .variant_for(short_code, request.preferred_variants)
            .or_else(|| self.registry.lookup(short_code))
            .cloned()
            .unwrap_or_else(|| Language::new(FALLBACK_LANGUAGE, "English"))
    }
}

impl Default for CommonWordsDetector {
    fn default() -> Self {
        Self::new(LanguageRegistry::builtin().clone())
    }
}

impl LanguageDetector for CommonWordsDetector {
    fn name(&self) -> &'static str {
        "commonwords"
    }

    fn detect(&self, request: &DetectionRequest<'_>) -> DetectedLanguage {
        let candidates = self.candidates(request);
        let mut hits = vec![0usize; candidates.len()];
        for token in tokens(request.text) {
            for (idx, profile) in candidates.iter().enumerate() {
                if profile.words.contains(token.as_str()) {
                    hits[idx] += 1;
                }
            }
        }

        let total: usize = hits.iter().sum();
        // Ties go to the profile listed first.
        let best = hits
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, usize)>, (idx, &count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ if count > 0 => Some((idx, count)),
                _ => best,
            });

        let (short_code, confidence, source) = match best {
            Some((idx, count)) => (
                candidates[idx].short_code,
                count as f32 / total as f32,
                DetectionSource::CommonWords,
            ),
            None => (
                self.fallback_short_code(request),
                0.0,
                DetectionSource::Fallback,
            ),
        };
        let language = self.language_for(short_code, request);
        debug!(
            detector = self.name(),
            language = %language.code,
            confidence,
            hits = total,
            text_chars = request.text.chars().count(),
            test_mode = request.test_mode,
            "detected language"
        );
        DetectedLanguage::new(language, confidence, source)
    }
}

fn short_code_of(code: &str) -> &str {
    code.split('-').next().unwrap_or(code)
}

fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|ch: char| !ch.is_alphabetic())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> DetectedLanguage {
        CommonWordsDetector::default().detect(&DetectionRequest::new(text))
    }

    #[test]
    fn detects_plain_english() {
        let detected = detect("This is the house that Jack built, and it is with you.");
        assert_eq!(detected.language.code, "en");
        assert_eq!(detected.source, DetectionSource::CommonWords);
        assert!(detected.confidence > 0.5);
    }

    #[test]
    fn detects_german() {
        let detected = detect("Das ist nicht die Frage, und wir haben auch keine Zeit.");
        assert_eq!(detected.language.code, "de");
    }

    #[test]
    fn no_hits_falls_back() {
        let detected = detect("12345 ?!");
        assert_eq!(detected.language.code, "en");
        assert_eq!(detected.confidence, 0.0);
        assert_eq!(detected.source, DetectionSource::Fallback);
    }

    #[test]
    fn tokens_are_lowercased() {
        let words: Vec<String> = tokens("The QUICK-brown fox").collect();
        assert_eq!(words, vec!["the", "quick", "brown", "fox"]);
    }
}
