//! `--param key=value` handling.

use textcheck_model::RawParameters;

/// Split one `key=value` argument at the first `=`.
///
/// The value may be empty or contain further `=` characters; the key may
/// not be empty.
pub fn parse_param(arg: &str) -> Result<(String, String), String> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{arg}'"))?;
    if key.is_empty() {
        return Err(format!("missing parameter name in '{arg}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Collect parsed pairs; a repeated key keeps its last value.
pub fn raw_parameters(pairs: &[(String, String)]) -> RawParameters {
    pairs
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect()
}
