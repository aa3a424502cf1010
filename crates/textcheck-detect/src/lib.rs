//! Language detection for check requests.

#![deny(unsafe_code)]

pub mod common_words;
pub mod detector;

pub use crate::common_words::CommonWordsDetector;
pub use crate::detector::{DetectionRequest, LanguageDetector};
