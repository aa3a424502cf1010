//! Parameter checks for v2 of the API.
//!
//! Besides the required `language` parameter, v2 rejects parameter names
//! that v1 clients used, pointing them at the replacement instead of
//! silently ignoring what they asked for.

use textcheck_model::{RequestError, RequestParams, Result, keys};

/// Retired parameter name and the message telling clients what replaced it.
const RETIRED_PARAMETERS: &[(&str, &str)] = &[
    (
        keys::RETIRED_ENABLED,
        "You specified 'enabled' but the parameter is now called 'enabledRules' in v2 of the API",
    ),
    (
        keys::RETIRED_DISABLED,
        "You specified 'disabled' but the parameter is now called 'disabledRules' in v2 of the API",
    ),
    (
        keys::RETIRED_PREFERRED_VARIANTS,
        "You specified 'preferredvariants' but the parameter is now called 'preferredVariants' (uppercase 'V') in v2 of the API",
    ),
    (
        keys::RETIRED_AUTODETECT,
        "You specified 'autodetect' but automatic language detection is now activated with 'language=auto' in v2 of the API",
    ),
];

const MISSING_LANGUAGE: &str = "Missing 'language' parameter, e.g. 'language=en-US' for American English or 'language=fr' for French";

/// Validate request parameters; the first violation wins.
pub fn validate_v2(params: &RequestParams) -> Result<()> {
    if params.language.as_deref().is_none_or(str::is_empty) {
        return Err(RequestError::bad_request(MISSING_LANGUAGE));
    }
    for (name, message) in RETIRED_PARAMETERS {
        if retired_value(params, name).is_some() {
            return Err(RequestError::bad_request(*message));
        }
    }
    Ok(())
}

fn retired_value<'p>(params: &'p RequestParams, name: &str) -> Option<&'p str> {
    let retired = &params.retired;
    match name {
        keys::RETIRED_ENABLED => retired.enabled.as_deref(),
        keys::RETIRED_DISABLED => retired.disabled.as_deref(),
        keys::RETIRED_PREFERRED_VARIANTS => retired.preferredvariants.as_deref(),
        keys::RETIRED_AUTODETECT => retired.autodetect.as_deref(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textcheck_model::RawParameters;

    fn validate(pairs: &[(&str, &str)]) -> Result<()> {
        let raw: RawParameters = pairs.iter().copied().collect();
        validate_v2(&RequestParams::from_raw(&raw))
    }

    #[test]
    fn language_is_required() {
        let err = validate(&[("text", "Hello")]).unwrap_err();
        assert!(err.to_string().contains("'language'"));
        let err = validate(&[("language", "")]).unwrap_err();
        assert!(err.to_string().contains("language=en-US"));
    }

    #[test]
    fn missing_language_is_reported_before_retired_names() {
        let err = validate(&[("enabled", "A")]).unwrap_err();
        assert!(err.to_string().contains("Missing 'language'"));
    }

    #[test]
    fn retired_names_point_to_replacements() {
        let cases = [
            ("enabled", "enabledRules"),
            ("disabled", "disabledRules"),
            ("preferredvariants", "preferredVariants"),
            ("autodetect", "language=auto"),
        ];
        for (name, replacement) in cases {
            let err = validate(&[("language", "en-US"), (name, "x")]).unwrap_err();
            assert!(
                err.to_string().contains(replacement),
                "{name}: {err}"
            );
        }
    }

    #[test]
    fn retired_name_with_empty_value_still_fails() {
        assert!(validate(&[("language", "en-US"), ("disabled", "")]).is_err());
    }

    #[test]
    fn current_names_pass() {
        validate(&[
            ("language", "auto"),
            ("enabledRules", "A"),
            ("disabledRules", "B"),
            ("preferredVariants", "en-GB"),
        ])
        .unwrap();
    }
}
