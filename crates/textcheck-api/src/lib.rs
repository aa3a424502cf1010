//! Interpretation layer of the text-checking API.
//!
//! Raw query/form parameters go in; a validated [`CheckSpec`] with the
//! resolved language and rule filters comes out, ready for the external
//! checking engine and response serializer.
//!
//! [`CheckSpec`]: textcheck_model::CheckSpec

#![deny(unsafe_code)]

pub mod config;
pub mod engine;
pub mod error;
pub mod interpreter;
pub mod resolver;
pub mod rules;
pub mod validator;

pub use crate::config::{CONFIDENCE_FILE_ENV_VAR, ServerConfig};
pub use crate::engine::{CheckEngine, ResultSerializer};
pub use crate::error::{ConfigError, EngineError, HandleError};
pub use crate::interpreter::RequestInterpreter;
pub use crate::resolver::{LanguageQuery, ResolverEnv};
pub use crate::rules::{ApiRules, ApiVersion, V2Rules};
