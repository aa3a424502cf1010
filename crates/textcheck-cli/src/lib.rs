//! Library side of the `textcheck` command-line tool.

pub mod config;
pub mod logging;
pub mod params;
