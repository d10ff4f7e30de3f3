use crate::error::ToolError;
use confluence_protocol::ErrorEnvelope;
use rmcp::model::{CallToolResult, Content};
use serde_json::{json, Value};

const MAX_DETAIL_LINES: usize = 8;
const MAX_VALUE_CHARS: usize = 200;

fn render_details_value(value: &Value, max_chars: usize) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
            if collapsed.chars().count() > max_chars {
                let mut out: String = collapsed.chars().take(max_chars).collect();
                out.push('…');
                out
            } else {
                collapsed
            }
        }
        Value::Array(values) => format!("<array len={}>", values.len()),
        Value::Object(values) => format!("<object keys={}>", values.len()),
    }
}

fn render_details_notes(details: &Value) -> Vec<String> {
    match details {
        Value::Object(map) => {
            let mut out: Vec<String> = map
                .iter()
                .take(MAX_DETAIL_LINES)
                .map(|(key, value)| {
                    format!("details.{key}={}", render_details_value(value, MAX_VALUE_CHARS))
                })
                .collect();
            if map.len() > MAX_DETAIL_LINES {
                out.push(format!("details.more_keys={}", map.len() - MAX_DETAIL_LINES));
            }
            out
        }
        other => vec![format!("details={}", render_details_value(other, 400))],
    }
}

/// Error result: a short text report plus the envelope as structured content.
pub(in crate::tools::dispatch) fn tool_error_envelope(error: ErrorEnvelope) -> CallToolResult {
    let mut lines = vec![format!("error: {}", error.code), error.message.clone()];
    if let Some(hint) = error.hint.as_deref().filter(|h| !h.trim().is_empty()) {
        lines.push(format!("hint: {hint}"));
    }
    if let Some(details) = error.details.as_ref() {
        lines.extend(render_details_notes(details));
    }

    let mut result = CallToolResult::error(vec![Content::text(lines.join("\n"))]);
    result.structured_content = Some(json!({ "error": error }));
    result
}

pub(in crate::tools::dispatch) fn respond(
    tool: &str,
    outcome: Result<CallToolResult, ToolError>,
) -> CallToolResult {
    match outcome {
        Ok(result) => result,
        Err(err) => {
            match &err {
                ToolError::Validation(_) => log::debug!("{tool}: {err}"),
                _ => log::warn!("{tool} failed: {err}"),
            }
            tool_error_envelope(err.envelope())
        }
    }
}
