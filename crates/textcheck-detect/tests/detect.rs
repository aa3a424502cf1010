//! Tests for the common-word detector.

use textcheck_detect::{CommonWordsDetector, DetectionRequest, LanguageDetector};
use textcheck_model::DetectionSource;

const ENGLISH: &str = "This is a test of the detector and it is working with the text you gave.";
const FRENCH: &str = "Nous avons une maison dans le village et les enfants sont avec vous.";

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

#[test]
fn preferred_variant_replaces_generic_language() {
    let detector = CommonWordsDetector::default();
    let variants = strings(&["de-AT", "en-GB"]);
    let request = DetectionRequest {
        preferred_variants: &variants,
        ..DetectionRequest::new(ENGLISH)
    };

    let detected = detector.detect(&request);

    assert_eq!(detected.language.code, "en-GB");
    assert_eq!(detected.source, DetectionSource::CommonWords);
}

#[test]
fn noop_language_disables_checking() {
    let detector = CommonWordsDetector::default();
    let noop = strings(&["fr"]);
    let request = DetectionRequest {
        noop_languages: &noop,
        ..DetectionRequest::new(FRENCH)
    };

    let detected = detector.detect(&request);

    assert!(detected.language.is_noop());
}

#[test]
fn force_preferred_restricts_candidates() {
    let detector = CommonWordsDetector::default();
    let preferred = strings(&["de-DE", "en-US"]);
    let request = DetectionRequest {
        preferred_languages: &preferred,
        force_preferred: true,
        ..DetectionRequest::new(FRENCH)
    };

    let detected = detector.detect(&request);

    assert_ne!(detected.language.short_code(), "fr");
}

#[test]
fn fallback_prefers_client_languages() {
    let detector = CommonWordsDetector::default();
    let preferred = strings(&["xx", "de-DE"]);
    let request = DetectionRequest {
        preferred_languages: &preferred,
        ..DetectionRequest::new("...")
    };

    let detected = detector.detect(&request);

    assert_eq!(detected.language.code, "de");
    assert_eq!(detected.source, DetectionSource::Fallback);
    assert_eq!(detected.confidence, 0.0);
}

#[test]
fn knows_the_profiled_languages() {
    let detector = CommonWordsDetector::default();
    let codes: Vec<&str> = detector.short_codes().collect();
    assert!(codes.contains(&"en"));
    assert!(codes.contains(&"uk"));
}
