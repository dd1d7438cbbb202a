//! Reading values and type descriptors from the command line

use anyhow::{anyhow, Context, Result};
use std::io::Read;
use std::path::Path;

use typecoerce::{parse_text, parse_type_descriptor, TypeDescriptor, Value};

/// Parse a `--type` argument.
pub fn read_type(annotation: &str) -> Result<TypeDescriptor> {
    parse_type_descriptor(annotation)
        .ok_or_else(|| anyhow!("Invalid type descriptor: {:?}", annotation))
}

/// Resolve the input value.
///
/// `--value` is parsed as JSON and falls back to plain text. `--json-file`
/// must hold JSON; `-` reads stdin. With neither, stdin is read.
pub fn read_value(value: Option<&str>, json_file: Option<&Path>) -> Result<Value> {
    if let Some(raw) = value {
        return Ok(parse_text(raw).unwrap_or_else(|_| Value::Str(raw.to_string())));
    }

    let (content, source) = match json_file {
        Some(path) if path != Path::new("-") => (
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
            path.display().to_string(),
        ),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            (buf, "stdin".to_string())
        }
    };

    parse_text(content.trim()).with_context(|| format!("Invalid JSON in {}", source))
}
