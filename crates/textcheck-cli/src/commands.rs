use std::sync::Arc;

use anyhow::{Context, Result, bail};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use tracing::{debug, info_span};

use textcheck_api::{RequestInterpreter, ServerConfig};
use textcheck_calibration::load_confidence_table;
use textcheck_cli::params::raw_parameters;
use textcheck_detect::CommonWordsDetector;
use textcheck_model::LanguageRegistry;

use crate::cli::{CalibrationArgs, InterpretArgs};

/// Exit code for requests the API would answer with a 400.
pub const EXIT_BAD_REQUEST: i32 = 2;

pub fn run_interpret(config: &ServerConfig, args: &InterpretArgs) -> Result<i32> {
    let text = match (&args.text, &args.text_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("read text file {}", path.display()))?,
        (None, None) => bail!("either --text or --text-file is required"),
    };
    let detector = Arc::new(CommonWordsDetector::default());
    let interpreter = RequestInterpreter::from_config(config, detector)
        .context("build request interpreter")?
        .with_test_mode(config.test_mode || args.test_mode);

    let raw = raw_parameters(&args.params);
    let span = info_span!("cli_interpret", params = raw.len());
    let _guard = span.enter();
    match interpreter.interpret(&raw, &text) {
        Ok(spec) => {
            let json = serde_json::to_string_pretty(&spec).context("encode check spec")?;
            println!("{json}");
            Ok(0)
        }
        Err(error) => {
            debug!(status = error.status_code(), "request rejected");
            eprintln!("error: {error}");
            Ok(EXIT_BAD_REQUEST)
        }
    }
}

pub fn run_calibration(config: &ServerConfig, args: &CalibrationArgs) -> Result<()> {
    let Some(path) = config.rule_id_to_confidence_file.as_deref() else {
        bail!(
            "no calibration file configured (use --confidence-file, {} or the config file)",
            textcheck_api::CONFIDENCE_FILE_ENV_VAR
        );
    };
    let table = load_confidence_table(Some(path)).context("load calibration")?;

    let mut output = Table::new();
    output.set_header(vec![header_cell("Rule"), header_cell("Confidence")]);
    apply_table_style(&mut output);
    if let Some(column) = output.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    if args.rules.is_empty() {
        for entry in table.entries() {
            output.add_row(vec![Cell::new(entry.rule_id), Cell::new(entry.confidence)]);
        }
    } else {
        for rule_id in &args.rules {
            let confidence = match table.get(rule_id) {
                Some(value) => Cell::new(value),
                None => Cell::new("-").fg(Color::DarkGrey),
            };
            output.add_row(vec![Cell::new(rule_id), confidence]);
        }
    }
    println!("Calibration: {} ({} rules)", path.display(), table.len());
    println!("{output}");
    Ok(())
}

pub fn run_languages() {
    let registry = LanguageRegistry::builtin();
    let mut output = Table::new();
    output.set_header(vec![header_cell("Code"), header_cell("Name")]);
    apply_table_style(&mut output);
    for language in registry.languages() {
        let code = if language.is_noop() {
            Cell::new(&language.code).fg(Color::DarkGrey)
        } else {
            Cell::new(&language.code)
        };
        output.add_row(vec![code, Cell::new(&language.name)]);
    }
    println!("{output}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
