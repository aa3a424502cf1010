//! Request interpretation: validate, resolve, hand over.
//!
//! One [`RequestInterpreter`] is built per checker instance and shared by
//! all request workers. Everything it owns is read-only after construction
//! except the calibration table, which is replaced as a whole on reload.

use std::sync::Arc;

use textcheck_calibration::{CalibrationError, ConfidenceTable, SharedCalibration};
use textcheck_detect::LanguageDetector;
use textcheck_model::{
    CheckSpec, LanguageRegistry, LanguageSelection, RawParameters, RequestParams, Result,
};
use tracing::{debug, info, info_span, warn};

use crate::config::ServerConfig;
use crate::engine::{CheckEngine, ResultSerializer};
use crate::error::HandleError;
use crate::resolver::{LanguageQuery, ResolverEnv};
use crate::rules::ApiRules;

pub struct RequestInterpreter {
    rules: Box<dyn ApiRules>,
    registry: LanguageRegistry,
    detector: Arc<dyn LanguageDetector>,
    calibration: SharedCalibration,
    test_mode: bool,
}

impl RequestInterpreter {
    pub fn new(
        rules: Box<dyn ApiRules>,
        registry: LanguageRegistry,
        detector: Arc<dyn LanguageDetector>,
        calibration: SharedCalibration,
    ) -> Self {
        Self {
            rules,
            registry,
            detector,
            calibration,
            test_mode: false,
        }
    }

    /// Build the interpreter a server configuration describes.
    ///
    /// # Errors
    ///
    /// A configured but unreadable or malformed calibration file fails the
    /// whole instance; it is never replaced by an empty table.
    pub fn from_config(
        config: &ServerConfig,
        detector: Arc<dyn LanguageDetector>,
    ) -> std::result::Result<Self, CalibrationError> {
        let calibration = SharedCalibration::load(config.rule_id_to_confidence_file.as_deref())?;
        info!(
            api = %config.api_version,
            detector = detector.name(),
            calibrated_rules = calibration.snapshot().len(),
            test_mode = config.test_mode,
            "request interpreter ready"
        );
        Ok(Self::new(
            config.api_version.rules(),
            LanguageRegistry::builtin().clone(),
            detector,
            calibration,
        )
        .with_test_mode(config.test_mode))
    }

    #[must_use]
    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }

    pub fn rules(&self) -> &dyn ApiRules {
        self.rules.as_ref()
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Current calibration; stays valid for as long as the caller holds it.
    pub fn calibration(&self) -> Arc<ConfidenceTable> {
        self.calibration.snapshot()
    }

    /// Re-read the calibration file; the old table stays active on error.
    pub fn reload_calibration(&self) -> std::result::Result<Arc<ConfidenceTable>, CalibrationError> {
        self.calibration.reload()
    }

    /// Turn raw request parameters into a check specification.
    ///
    /// # Errors
    ///
    /// Returns a bad request for invalid parameters or an unknown language.
    pub fn interpret(&self, raw: &RawParameters, text: &str) -> Result<CheckSpec> {
        let span = info_span!(
            "interpret",
            api = %self.rules.version(),
            text_chars = text.chars().count()
        );
        let _guard = span.enter();

        let params = RequestParams::from_raw(raw);
        if !params.unrecognized.is_empty() {
            debug!(keys = ?params.unrecognized, "parameters not interpreted here");
        }
        let result = self.interpret_params(&params, text);
        if let Err(error) = &result {
            warn!(%error, "rejected check request");
        }
        result
    }

    fn interpret_params(&self, params: &RequestParams, text: &str) -> Result<CheckSpec> {
        self.rules.validate(params)?;
        let preferred_variants = self.rules.preferred_variants(params)?;
        let rules = self.rules.rule_filter(params)?;
        let noop_languages = self.rules.noop_languages(params);
        let preferred_languages = self.rules.preferred_languages(params);

        let env = ResolverEnv {
            registry: &self.registry,
            detector: self.detector.as_ref(),
        };
        let query = LanguageQuery {
            text,
            preferred_variants: &preferred_variants,
            noop_languages: &noop_languages,
            preferred_languages: &preferred_languages,
            test_mode: self.test_mode,
        };
        let language = self.rules.resolve_language(env, params, &query)?;

        let auto_detect = self.rules.language_auto_detect(params);
        let selection = LanguageSelection {
            requested_language: if auto_detect {
                None
            } else {
                params.language.clone()
            },
            auto_detect,
            preferred_variants,
            force_preferred: params.force_preferred(),
        };
        Ok(CheckSpec {
            language,
            selection,
            rules,
            noop_languages,
            preferred_languages,
        })
    }

    /// Interpret, check and serialize one request.
    ///
    /// Interpretation failures return before the engine is called.
    pub fn handle<E, S>(
        &self,
        raw: &RawParameters,
        text: &str,
        engine: &E,
        serializer: &S,
    ) -> std::result::Result<String, HandleError>
    where
        E: CheckEngine + ?Sized,
        S: ResultSerializer + ?Sized,
    {
        let spec = self.interpret(raw, text)?;
        let calibration = self.calibration.snapshot();
        let matches = engine
            .check(text, &spec)
            .map_err(HandleError::Engine)?;
        debug!(
            matches = matches.len(),
            language = %spec.language.chosen.code,
            "check finished"
        );
        serializer
            .serialize(&spec, &matches, &calibration)
            .map_err(HandleError::Serialize)
    }
}
