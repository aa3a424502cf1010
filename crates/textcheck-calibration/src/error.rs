use std::path::PathBuf;

/// Expected shape of every non-comment line.
pub const LINE_FORMAT: &str = "RULE_ID,float_value[,...]";

#[derive(Debug, thiserror::Error)]
pub enum CalibrationError {
    #[error("failed to read confidence file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse confidence file {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid line in {path}, expected 'RULE_ID,float_value[,...]': {line}")]
    InvalidLine { path: PathBuf, line: String },

    #[error("Invalid confidence float value in {path}, expected 'RULE_ID,float_value[,...]': {line}")]
    InvalidConfidence { path: PathBuf, line: String },
}

impl CalibrationError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalibrationError>;
