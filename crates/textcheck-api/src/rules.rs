//! Per-API-version request rules.
//!
//! Each API generation implements [`ApiRules`]; the server picks one
//! implementation from its configuration at startup through
//! [`ApiVersion::rules`] and uses it for every request.
//!
//! # Example
//!
//! ```ignore
//! use textcheck_api::ApiVersion;
//!
//! let rules = ApiVersion::V2.rules();
//! rules.validate(&params)?;
//! let filter = rules.rule_filter(&params)?;
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use textcheck_model::params::split_strict;
use textcheck_model::{RequestParams, ResolvedLanguage, Result, RuleIdFilter};

use crate::resolver::{
    LanguageQuery, ResolverEnv, disabled_rule_ids_v2, enabled_rule_ids_v2,
    language_auto_detect_v2, preferred_variants_v2, resolve_language_v2, rule_filter_v2,
};
use crate::validator::validate_v2;

/// API generations this server can speak.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    #[default]
    V2,
}

impl ApiVersion {
    /// Rule set implementing this API generation.
    pub fn rules(self) -> Box<dyn ApiRules> {
        match self {
            Self::V2 => Box::new(V2Rules),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::V2 => "v2",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Request interpretation capabilities of one API generation.
pub trait ApiRules: Send + Sync {
    fn version(&self) -> ApiVersion;

    /// Reject parameter sets this version does not accept.
    ///
    /// # Errors
    ///
    /// Returns a bad request naming the offending parameter.
    fn validate(&self, params: &RequestParams) -> Result<()>;

    /// Whether the client asked for automatic language detection.
    fn language_auto_detect(&self, params: &RequestParams) -> bool;

    /// Pick the language to check against and report detection results.
    fn resolve_language(
        &self,
        env: ResolverEnv<'_>,
        params: &RequestParams,
        query: &LanguageQuery<'_>,
    ) -> Result<ResolvedLanguage>;

    fn preferred_variants(&self, params: &RequestParams) -> Result<Vec<String>>;

    fn enabled_rule_ids(&self, params: &RequestParams) -> Vec<String>;

    fn disabled_rule_ids(&self, params: &RequestParams) -> Vec<String>;

    fn rule_filter(&self, params: &RequestParams) -> Result<RuleIdFilter> {
        Ok(RuleIdFilter {
            enabled: self.enabled_rule_ids(params),
            disabled: self.disabled_rule_ids(params),
            enabled_only: params.enabled_only(),
        })
    }

    fn noop_languages(&self, params: &RequestParams) -> Vec<String> {
        params
            .noop_languages
            .as_deref()
            .map(split_strict)
            .unwrap_or_default()
    }

    fn preferred_languages(&self, params: &RequestParams) -> Vec<String> {
        params
            .preferred_languages
            .as_deref()
            .map(split_strict)
            .unwrap_or_default()
    }
}

/// Version 2 of the API (JSON responses, `language=auto`).
#[derive(Debug, Clone, Copy, Default)]
pub struct V2Rules;

impl ApiRules for V2Rules {
    fn version(&self) -> ApiVersion {
        ApiVersion::V2
    }

    fn validate(&self, params: &RequestParams) -> Result<()> {
        validate_v2(params)
    }

    fn language_auto_detect(&self, params: &RequestParams) -> bool {
        language_auto_detect_v2(params)
    }

    fn resolve_language(
        &self,
        env: ResolverEnv<'_>,
        params: &RequestParams,
        query: &LanguageQuery<'_>,
    ) -> Result<ResolvedLanguage> {
        resolve_language_v2(env, params, query)
    }

    fn preferred_variants(&self, params: &RequestParams) -> Result<Vec<String>> {
        preferred_variants_v2(params)
    }

    fn enabled_rule_ids(&self, params: &RequestParams) -> Vec<String> {
        enabled_rule_ids_v2(params)
    }

    fn disabled_rule_ids(&self, params: &RequestParams) -> Vec<String> {
        disabled_rule_ids_v2(params)
    }

    fn rule_filter(&self, params: &RequestParams) -> Result<RuleIdFilter> {
        rule_filter_v2(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textcheck_model::RawParameters;

    #[test]
    fn version_selects_rules() {
        let rules = ApiVersion::V2.rules();
        assert_eq!(rules.version(), ApiVersion::V2);
        assert_eq!(ApiVersion::V2.to_string(), "v2");
    }

    #[test]
    fn language_lists_split_strictly() {
        let raw = RawParameters::new()
            .with("noopLanguages", "pl,ru")
            .with("preferredLanguages", "de, en");
        let params = RequestParams::from_raw(&raw);
        let rules = V2Rules;
        assert_eq!(rules.noop_languages(&params), vec!["pl", "ru"]);
        assert_eq!(rules.preferred_languages(&params), vec!["de", " en"]);
    }
}
