#![deny(unsafe_code)]

pub mod error;
pub mod language;
pub mod params;
pub mod request;

pub use error::{RequestError, Result};
pub use language::{
    DetectedLanguage, DetectionSource, Language, LanguageRegistry, NOOP_LANGUAGE_CODE,
};
pub use params::{RawParameters, RequestParams, RetiredParams, keys};
pub use request::{CheckSpec, LanguageSelection, ResolvedLanguage, RuleIdFilter, RuleMatch};
