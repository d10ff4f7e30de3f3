use rmcp::model::{CallToolResult, Content};
use serde::Serialize;

use crate::error::ToolError;

/// Success result: YAML text plus the same record as structured content.
pub(crate) fn render<T: Serialize>(record: &T) -> Result<CallToolResult, ToolError> {
    let text = serde_yaml::to_string(record).map_err(|err| ToolError::Render(err.to_string()))?;
    let structured =
        serde_json::to_value(record).map_err(|err| ToolError::Render(err.to_string()))?;

    let mut result = CallToolResult::success(vec![Content::text(text)]);
    result.structured_content = Some(structured);
    Ok(result)
}
