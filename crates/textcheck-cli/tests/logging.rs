//! Subscriber setup; one test per binary because the subscriber is global.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use textcheck_cli::logging::{LogConfig, LogFormat, init_logging_with_writer};
use tracing::level_filters::LevelFilter;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn json_format_filters_by_workspace_level() {
    let capture = Capture::default();
    let config = LogConfig {
        level_filter: LevelFilter::INFO,
        use_env_filter: false,
        format: LogFormat::Json,
        ..LogConfig::default()
    };
    let writer = capture.clone();
    init_logging_with_writer(&config, move || writer.clone());

    tracing::info!(target: "textcheck_api", entries = 3, "loaded rule confidence map");
    tracing::debug!(target: "textcheck_api", "resolved language");
    tracing::info!(target: "hyper", "external chatter");

    let output = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
    let lines: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 1, "{output}");
    assert_eq!(lines[0]["fields"]["message"], "loaded rule confidence map");
    assert_eq!(lines[0]["fields"]["entries"], 3);
    assert_eq!(lines[0]["level"], "INFO");
}
