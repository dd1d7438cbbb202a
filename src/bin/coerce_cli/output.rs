//! Output formatting for the typecoerce CLI
//!
//! Provides human-readable and JSON output formatting for all commands.

use serde::Serialize;

use typecoerce::{to_text, Origin, TextStyle, TypeDescriptor, Value};

/// Format a conversion result for display
pub fn format_value(value: &Value, target: &TypeDescriptor, style: TextStyle, json: bool) -> String {
    if json {
        #[derive(Serialize)]
        struct ValueJson {
            success: bool,
            #[serde(rename = "type")]
            target: String,
            kind: &'static str,
            value: serde_json::Value,
        }

        let out = ValueJson {
            success: true,
            target: target.to_string(),
            kind: value.kind().as_str(),
            value: value.to_json(),
        };
        serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
    } else {
        to_text(value, style)
    }
}

/// Format an inspected descriptor for display
pub fn format_inspection(
    target: &TypeDescriptor,
    origin: Origin,
    args: &[TypeDescriptor],
    json: bool,
) -> String {
    if json {
        #[derive(Serialize)]
        struct InspectJson {
            #[serde(rename = "type")]
            target: String,
            origin: &'static str,
            args: Vec<String>,
            optional: bool,
        }

        let out = InspectJson {
            target: target.to_string(),
            origin: origin.as_str(),
            args: args.iter().map(ToString::to_string).collect(),
            optional: target.is_optional(),
        };
        serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
    } else {
        let mut out = format!("Type:   {}\nOrigin: {}\n", target, origin);
        if !args.is_empty() {
            out.push_str("Args:\n");
            for (i, arg) in args.iter().enumerate() {
                out.push_str(&format!("  [{}] {}\n", i, arg));
            }
        }
        out.trim_end().to_string()
    }
}

/// Format an error for display
pub fn format_error(error: &anyhow::Error, json_output: bool) -> String {
    if json_output {
        #[derive(Serialize)]
        struct ErrorJson {
            success: bool,
            error: String,
            #[serde(skip_serializing_if = "Vec::is_empty")]
            causes: Vec<String>,
        }

        let err = ErrorJson {
            success: false,
            error: error.to_string(),
            causes: error.chain().skip(1).map(ToString::to_string).collect(),
        };
        let mut out = serde_json::to_string_pretty(&err).unwrap_or_else(|_| "{}".to_string());
        out.push('\n');
        out
    } else {
        let mut out = format!("Error: {}\n", error);
        let mut causes = error.chain().skip(1).peekable();
        if causes.peek().is_some() {
            out.push_str("Caused by:\n");
            for (idx, cause) in causes.enumerate() {
                out.push_str(&format!("  {}: {}\n", idx + 1, cause));
            }
        }
        out
    }
}
