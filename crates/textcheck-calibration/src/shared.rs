//! Calibration shared across request workers.
//!
//! Readers take a snapshot and keep using it for the whole request. Taking
//! the snapshot holds a read lock only for the `Arc` clone; lookups on the
//! snapshot take no lock. A reload builds a complete new table first and
//! holds the write lock only for the pointer swap, so readers never observe
//! a partially loaded table.

use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{info, warn};

use crate::error::Result;
use crate::loader::load_confidence_table;
use crate::table::ConfidenceTable;

#[derive(Debug)]
pub struct SharedCalibration {
    current: RwLock<Arc<ConfidenceTable>>,
    path: Option<PathBuf>,
}

impl SharedCalibration {
    pub fn new(table: ConfidenceTable) -> Self {
        let path = table.source().map(Path::to_path_buf);
        Self {
            current: RwLock::new(Arc::new(table)),
            path,
        }
    }

    /// Load from the configured path; failures are fatal to the caller.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let table = load_confidence_table(path)?;
        Ok(Self {
            current: RwLock::new(Arc::new(table)),
            path: path.map(Path::to_path_buf),
        })
    }

    /// Current table; briefly takes the read lock to clone the `Arc`.
    pub fn snapshot(&self) -> Arc<ConfidenceTable> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Re-read the configured file and swap it in.
    ///
    /// On error the previous table stays active.
    pub fn reload(&self) -> Result<Arc<ConfidenceTable>> {
        let table = match load_confidence_table(self.path.as_deref()) {
            Ok(table) => Arc::new(table),
            Err(error) => {
                warn!(%error, "rule confidence reload failed, keeping previous map");
                return Err(error);
            }
        };
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::clone(&table);
        info!(entries = table.len(), "swapped rule confidence map");
        Ok(table)
    }
}

impl Default for SharedCalibration {
    fn default() -> Self {
        Self::new(ConfidenceTable::empty())
    }
}
