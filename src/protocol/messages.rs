//! Request and result shapes of the `describe`/`call` contract.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::content::ContentItem;

// ============================================================================
// Call request
// ============================================================================

/// A tool-call request as marshalled by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallToolRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    pub params: CallParams,
}

/// Name and arguments of the requested tool.
///
/// Arguments are untyped at this boundary; each handler validates and
/// coerces the keys it needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallParams {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Map<String, Value>>,
}

impl CallToolRequest {
    pub fn new(name: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self {
            method: None,
            params: CallParams {
                name: name.into(),
                arguments: Some(arguments),
            },
        }
    }
}

// ============================================================================
// Call result
// ============================================================================

/// The outcome of one tool call: ordered content plus an error flag.
///
/// Ordering is significant; text items precede binary items so a host
/// rendering transcripts shows narrative first. A call either fully succeeds
/// or is wholly an error result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallToolResult {
    pub content: Vec<ContentItem>,

    #[serde(rename = "isError", default, skip_serializing_if = "is_false")]
    pub is_error: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl CallToolResult {
    pub fn success(content: Vec<ContentItem>) -> Self {
        Self {
            content,
            is_error: false,
        }
    }

    pub fn error(content: Vec<ContentItem>) -> Self {
        Self {
            content,
            is_error: true,
        }
    }
}

// ============================================================================
// Tool descriptions
// ============================================================================

/// A JSON-schema-backed declaration of a callable tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescription {
    /// Dispatch key, unique within a servlet.
    pub name: String,

    pub description: String,

    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// The full tool set of a servlet, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListToolsResult {
    pub tools: Vec<ToolDescription>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_from_wire_json() {
        let request: CallToolRequest = serde_json::from_value(json!({
            "method": "tools/call",
            "params": {
                "name": "get_file_contents",
                "arguments": { "filepath": "notes/today.md" }
            }
        }))
        .unwrap();
        assert_eq!(request.params.name, "get_file_contents");
        let args = request.params.arguments.unwrap();
        assert_eq!(args["filepath"], "notes/today.md");
    }

    #[test]
    fn test_request_arguments_optional() {
        let request: CallToolRequest =
            serde_json::from_value(json!({ "params": { "name": "list_files_in_vault" } }))
                .unwrap();
        assert!(request.params.arguments.is_none());
        assert!(request.method.is_none());
    }

    #[test]
    fn test_result_omits_is_error_when_false() {
        let result = CallToolResult::success(vec![ContentItem::text("ok")]);
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("isError").is_none());

        let result = CallToolResult::error(vec![ContentItem::text("bad")]);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["isError"], true);
    }

    #[test]
    fn test_result_is_error_defaults_false() {
        let result: CallToolResult = serde_json::from_value(json!({
            "content": [{ "type": "text", "text": "ok" }]
        }))
        .unwrap();
        assert!(!result.is_error);
    }

    #[test]
    fn test_tool_description_wire_shape() {
        let tool = ToolDescription {
            name: "eval".to_string(),
            description: "Evaluate code".to_string(),
            input_schema: json!({ "type": "object", "required": ["code"] }),
        };
        let value = serde_json::to_value(&tool).unwrap();
        assert_eq!(value["inputSchema"]["required"], json!(["code"]));
    }
}
