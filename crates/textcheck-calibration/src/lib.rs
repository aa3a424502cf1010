//! Per-rule confidence calibration.
//!
//! An operator can ship a file mapping rule ids to calibrated confidence
//! values. The table is loaded once when a checker is built and handed to the
//! result serializer with every response.

#![deny(unsafe_code)]

pub mod error;
pub mod loader;
pub mod shared;
pub mod table;

pub use crate::error::{CalibrationError, LINE_FORMAT};
pub use crate::loader::{load_confidence_table, read_confidence_table};
pub use crate::shared::SharedCalibration;
pub use crate::table::{ConfidenceEntry, ConfidenceTable};
