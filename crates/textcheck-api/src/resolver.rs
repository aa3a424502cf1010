//! Language and rule-filter resolution for v2 of the API.

use textcheck_detect::{DetectionRequest, LanguageDetector};
use textcheck_model::params::{split_comma_whitespace, split_strict};
use textcheck_model::{
    LanguageRegistry, RequestError, RequestParams, ResolvedLanguage, Result, RuleIdFilter,
};
use tracing::debug;

/// Shared, read-only collaborators needed to resolve a language.
#[derive(Clone, Copy)]
pub struct ResolverEnv<'a> {
    pub registry: &'a LanguageRegistry,
    pub detector: &'a dyn LanguageDetector,
}

/// Per-request inputs to language resolution.
#[derive(Debug, Clone, Copy)]
pub struct LanguageQuery<'a> {
    pub text: &'a str,
    pub preferred_variants: &'a [String],
    pub noop_languages: &'a [String],
    pub preferred_languages: &'a [String],
    pub test_mode: bool,
}

pub fn language_auto_detect_v2(params: &RequestParams) -> bool {
    params.is_auto_language()
}

/// Resolve the language to check against.
///
/// Detection always runs so the response can report what it found, even
/// when the client pinned a language explicitly.
pub fn resolve_language_v2(
    env: ResolverEnv<'_>,
    params: &RequestParams,
    query: &LanguageQuery<'_>,
) -> Result<ResolvedLanguage> {
    let detection = env.detector.detect(&DetectionRequest {
        text: query.text,
        preferred_variants: query.preferred_variants,
        noop_languages: query.noop_languages,
        preferred_languages: query.preferred_languages,
        force_preferred: params.force_preferred(),
        test_mode: query.test_mode,
    });
    let chosen = if language_auto_detect_v2(params) {
        detection.language.clone()
    } else {
        env.registry
            .parse(params.language.as_deref().unwrap_or_default())?
            .clone()
    };
    debug!(
        chosen = %chosen.code,
        detected = %detection.language.code,
        confidence = detection.confidence,
        source = detection.source.label(),
        "resolved language"
    );
    Ok(ResolvedLanguage::new(chosen, detection))
}

/// `preferredVariants`, split on commas with optional following whitespace.
///
/// Only allowed together with `language=auto`, unless the request is
/// marked multilingual.
pub fn preferred_variants_v2(params: &RequestParams) -> Result<Vec<String>> {
    let Some(value) = params.preferred_variants.as_deref() else {
        return Ok(Vec::new());
    };
    let variants = split_comma_whitespace(value);
    if !params.is_auto_language() && !params.is_multilingual() {
        return Err(RequestError::bad_request(
            "You specified 'preferredVariants' but you didn't specify 'language=auto'",
        ));
    }
    Ok(variants)
}

/// `enabledRules`, split strictly on commas (entries are not trimmed).
pub fn enabled_rule_ids_v2(params: &RequestParams) -> Vec<String> {
    params
        .enabled_rules
        .as_deref()
        .map(split_strict)
        .unwrap_or_default()
}

/// `disabledRules`, split strictly on commas (entries are not trimmed).
pub fn disabled_rule_ids_v2(params: &RequestParams) -> Vec<String> {
    params
        .disabled_rules
        .as_deref()
        .map(split_strict)
        .unwrap_or_default()
}

/// Combine both rule lists with the `enabledOnly` switch.
pub fn rule_filter_v2(params: &RequestParams) -> Result<RuleIdFilter> {
    let filter = RuleIdFilter {
        enabled: enabled_rule_ids_v2(params),
        disabled: disabled_rule_ids_v2(params),
        enabled_only: params.enabled_only(),
    };
    if filter.enabled_only {
        if filter.enabled.is_empty() {
            return Err(RequestError::bad_request(
                "You must specify enabled rules when using enabledOnly=true",
            ));
        }
        if !filter.disabled.is_empty() {
            return Err(RequestError::bad_request(
                "You cannot specify disabled rules using enabledOnly=true",
            ));
        }
    }
    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use textcheck_model::RawParameters;

    fn params(pairs: &[(&str, &str)]) -> RequestParams {
        let raw: RawParameters = pairs.iter().copied().collect();
        RequestParams::from_raw(&raw)
    }

    #[test]
    fn auto_detect_is_exact_match() {
        assert!(language_auto_detect_v2(&params(&[("language", "auto")])));
        assert!(!language_auto_detect_v2(&params(&[("language", "Auto")])));
        assert!(!language_auto_detect_v2(&params(&[("language", "en")])));
    }

    #[test]
    fn preferred_variants_absent_is_empty() {
        let variants = preferred_variants_v2(&params(&[("language", "fr")])).unwrap();
        assert!(variants.is_empty());
    }

    #[test]
    fn preferred_variants_need_auto_or_multilingual() {
        let base = [("language", "fr"), ("preferredVariants", "en-US, en-GB")];
        assert!(preferred_variants_v2(&params(&base)).is_err());

        let off = [base[0], base[1], ("multilingual", "false")];
        assert!(preferred_variants_v2(&params(&off)).is_err());

        let on = [base[0], base[1], ("multilingual", "true")];
        assert_eq!(
            preferred_variants_v2(&params(&on)).unwrap(),
            vec!["en-US", "en-GB"]
        );
    }

    #[test]
    fn rule_lists_are_not_trimmed() {
        let p = params(&[("enabledRules", "RULE_A, RULE_B"), ("disabledRules", "C ,D")]);
        assert_eq!(enabled_rule_ids_v2(&p), vec!["RULE_A", " RULE_B"]);
        assert_eq!(disabled_rule_ids_v2(&p), vec!["C ", "D"]);
    }

    #[test]
    fn supplied_but_empty_rule_list_is_one_empty_entry() {
        let p = params(&[("enabledRules", ""), ("disabledRules", "")]);
        assert_eq!(enabled_rule_ids_v2(&p), vec![""]);
        assert_eq!(disabled_rule_ids_v2(&p), vec![""]);
        assert!(enabled_rule_ids_v2(&params(&[])).is_empty());
    }

    #[test]
    fn enabled_only_accepts_supplied_but_empty_rules() {
        let filter =
            rule_filter_v2(&params(&[("enabledOnly", "true"), ("enabledRules", "")])).unwrap();
        assert!(filter.enabled_only);
        assert_eq!(filter.enabled, vec![""]);
        assert!(!filter.is_active("EN_A_VS_AN", true));
    }

    #[test]
    fn enabled_only_requires_enabled_rules() {
        let err = rule_filter_v2(&params(&[("enabledOnly", "true")])).unwrap_err();
        assert!(err.to_string().contains("enabledOnly=true"));

        let err = rule_filter_v2(&params(&[
            ("enabledOnly", "true"),
            ("enabledRules", "A"),
            ("disabledRules", "B"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("disabled rules"));

        let filter =
            rule_filter_v2(&params(&[("enabledOnly", "true"), ("enabledRules", "A")])).unwrap();
        assert!(filter.enabled_only);
    }
}
