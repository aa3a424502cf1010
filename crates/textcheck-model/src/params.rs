//! Request parameters, raw and typed.
//!
//! The transport hands over every query/form field as a string map
//! ([`RawParameters`]). [`RequestParams::from_raw`] is the single place that
//! knows which keys the API recognizes; everything downstream works on the
//! typed struct.

use std::collections::BTreeMap;

/// Parameter names as they appear on the wire.
pub mod keys {
    pub const LANGUAGE: &str = "language";
    pub const ENABLED_RULES: &str = "enabledRules";
    pub const DISABLED_RULES: &str = "disabledRules";
    pub const ENABLED_ONLY: &str = "enabledOnly";
    pub const PREFERRED_VARIANTS: &str = "preferredVariants";
    pub const MULTILINGUAL: &str = "multilingual";
    pub const FORCE_PREFERRED_LANGUAGES: &str = "forcePreferredLanguages";
    pub const NOOP_LANGUAGES: &str = "noopLanguages";
    pub const PREFERRED_LANGUAGES: &str = "preferredLanguages";

    pub const RETIRED_ENABLED: &str = "enabled";
    pub const RETIRED_DISABLED: &str = "disabled";
    pub const RETIRED_PREFERRED_VARIANTS: &str = "preferredvariants";
    pub const RETIRED_AUTODETECT: &str = "autodetect";

    /// Language value that requests automatic detection.
    pub const AUTO_LANGUAGE: &str = "auto";
}

/// Query/form fields exactly as the client sent them.
///
/// Keys are case-sensitive. A missing key means "not supplied", which is
/// different from a key supplied with an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParameters {
    values: BTreeMap<String, String>,
}

impl RawParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawParameters
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Parameters that earlier API generations accepted.
///
/// They are only recorded so that clients still sending them get an
/// actionable error instead of being silently misread.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetiredParams {
    pub enabled: Option<String>,
    pub disabled: Option<String>,
    pub preferredvariants: Option<String>,
    pub autodetect: Option<String>,
}

/// Typed view over [`RawParameters`].
///
/// Each field is `None` when the client did not send the key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    pub language: Option<String>,
    pub enabled_rules: Option<String>,
    pub disabled_rules: Option<String>,
    pub enabled_only: Option<String>,
    pub preferred_variants: Option<String>,
    pub multilingual: Option<String>,
    pub force_preferred_languages: Option<String>,
    pub noop_languages: Option<String>,
    pub preferred_languages: Option<String>,
    pub retired: RetiredParams,
    /// Keys this layer does not interpret (text, data, client metadata).
    pub unrecognized: Vec<String>,
}

impl RequestParams {
    pub fn from_raw(raw: &RawParameters) -> Self {
        let take = |key: &str| raw.get(key).map(str::to_string);
        let mut params = Self {
            language: take(keys::LANGUAGE),
            enabled_rules: take(keys::ENABLED_RULES),
            disabled_rules: take(keys::DISABLED_RULES),
            enabled_only: take(keys::ENABLED_ONLY),
            preferred_variants: take(keys::PREFERRED_VARIANTS),
            multilingual: take(keys::MULTILINGUAL),
            force_preferred_languages: take(keys::FORCE_PREFERRED_LANGUAGES),
            noop_languages: take(keys::NOOP_LANGUAGES),
            preferred_languages: take(keys::PREFERRED_LANGUAGES),
            retired: RetiredParams {
                enabled: take(keys::RETIRED_ENABLED),
                disabled: take(keys::RETIRED_DISABLED),
                preferredvariants: take(keys::RETIRED_PREFERRED_VARIANTS),
                autodetect: take(keys::RETIRED_AUTODETECT),
            },
            unrecognized: Vec::new(),
        };
        params.unrecognized = raw
            .keys()
            .filter(|key| !is_recognized(key))
            .map(str::to_string)
            .collect();
        params
    }

    /// `language=auto` (exact, case-sensitive).
    pub fn is_auto_language(&self) -> bool {
        self.language.as_deref() == Some(keys::AUTO_LANGUAGE)
    }

    /// Present and anything other than the literal `false`.
    pub fn is_multilingual(&self) -> bool {
        self.multilingual
            .as_deref()
            .is_some_and(|value| value != "false")
    }

    pub fn force_preferred(&self) -> bool {
        self.force_preferred_languages.as_deref() == Some("true")
    }

    pub fn enabled_only(&self) -> bool {
        self.enabled_only.as_deref() == Some("true")
    }
}

fn is_recognized(key: &str) -> bool {
    matches!(
        key,
        keys::LANGUAGE
            | keys::ENABLED_RULES
            | keys::DISABLED_RULES
            | keys::ENABLED_ONLY
            | keys::PREFERRED_VARIANTS
            | keys::MULTILINGUAL
            | keys::FORCE_PREFERRED_LANGUAGES
            | keys::NOOP_LANGUAGES
            | keys::PREFERRED_LANGUAGES
            | keys::RETIRED_ENABLED
            | keys::RETIRED_DISABLED
            | keys::RETIRED_PREFERRED_VARIANTS
            | keys::RETIRED_AUTODETECT
    )
}

/// Split on `,` exactly as sent: entries are not trimmed and interior empty
/// entries are kept.
///
/// Trailing empty entries are dropped only when the value contains a comma,
/// so a value without any comma (including the empty value) is returned as
/// its single entry.
pub fn split_strict(value: &str) -> Vec<String> {
    drop_trailing_empty(value.split(',').map(str::to_string).collect())
}

/// Split on `,` followed by optional whitespace.
///
/// Whitespace after each comma is consumed; whitespace before the first
/// entry or before a comma is kept. Trailing empty entries follow the same
/// rule as [`split_strict`].
pub fn split_comma_whitespace(value: &str) -> Vec<String> {
    drop_trailing_empty(
        value
            .split(',')
            .enumerate()
            .map(|(idx, part)| {
                if idx == 0 {
                    part.to_string()
                } else {
                    part.trim_start().to_string()
                }
            })
            .collect(),
    )
}

fn drop_trailing_empty(mut parts: Vec<String>) -> Vec<String> {
    // Without a separator the value is its own single entry.
    if parts.len() == 1 {
        return parts;
    }
    while parts.last().is_some_and(String::is_empty) {
        parts.pop();
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_split_keeps_spaces() {
        assert_eq!(split_strict("RULE_A, RULE_B"), vec!["RULE_A", " RULE_B"]);
        assert_eq!(split_strict("A,,B,"), vec!["A", "", "B"]);
        assert_eq!(split_strict(""), vec![""]);
        assert_eq!(split_strict("A"), vec!["A"]);
        assert!(split_strict(",").is_empty());
        assert!(split_strict(",,").is_empty());
    }

    #[test]
    fn whitespace_split_trims_after_commas() {
        assert_eq!(split_comma_whitespace("en-US, en-GB"), vec!["en-US", "en-GB"]);
        assert_eq!(split_comma_whitespace("en-US,\t de-AT ,"), vec!["en-US", "de-AT "]);
        assert_eq!(split_comma_whitespace(" en-US"), vec![" en-US"]);
        assert_eq!(split_comma_whitespace(""), vec![""]);
    }

    #[test]
    fn from_raw_tracks_unrecognized_keys() {
        let raw = RawParameters::new()
            .with("language", "auto")
            .with("text", "Hello")
            .with("autodetect", "true");
        let params = RequestParams::from_raw(&raw);
        assert!(params.is_auto_language());
        assert_eq!(params.retired.autodetect.as_deref(), Some("true"));
        assert_eq!(params.unrecognized, vec!["text".to_string()]);
    }

    #[test]
    fn multilingual_flag() {
        let params = |value: Option<&str>| RequestParams {
            multilingual: value.map(str::to_string),
            ..RequestParams::default()
        };
        assert!(!params(None).is_multilingual());
        assert!(!params(Some("false")).is_multilingual());
        assert!(params(Some("true")).is_multilingual());
        assert!(params(Some("")).is_multilingual());
    }
}
