//! Patch tool: insert content relative to a heading, block reference, or
//! frontmatter field.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::protocol::ToolDescription;
use crate::servlets::input_schema_for;
use crate::servlets::vault::client::{VaultClient, VaultError};

/// How the patched content relates to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PatchOperation {
    Append,
    Prepend,
    Replace,
}

impl PatchOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Append => "append",
            Self::Prepend => "prepend",
            Self::Replace => "replace",
        }
    }
}

/// What kind of element the target identifier names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    Heading,
    Block,
    Frontmatter,
}

impl TargetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Heading => "heading",
            Self::Block => "block",
            Self::Frontmatter => "frontmatter",
        }
    }
}

/// Parameters for the patch tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PatchContentParams {
    #[schemars(description = "Path to the file (relative to vault root)")]
    pub filepath: String,

    #[schemars(description = "Operation to perform (append, prepend, or replace)")]
    pub operation: PatchOperation,

    #[schemars(description = "Type of target to patch")]
    pub target_type: TargetType,

    #[schemars(
        description = "Target identifier (heading path, block reference, or frontmatter field)"
    )]
    pub target: String,

    #[schemars(description = "Content to insert")]
    pub content: String,
}

/// Inserts content into an existing note relative to a target element.
pub struct PatchContentTool;

impl PatchContentTool {
    pub const NAME: &'static str = "patch_content";

    pub const DESCRIPTION: &'static str =
        "Insert content into an existing note relative to a heading, block reference, \
         or frontmatter field.";

    pub const REQUIRED: &'static [&'static str] =
        &["filepath", "operation", "target_type", "target", "content"];

    pub fn execute(
        params: &PatchContentParams,
        client: &VaultClient,
    ) -> Result<String, VaultError> {
        client.patch_content(
            &params.filepath,
            params.operation.as_str(),
            params.target_type.as_str(),
            &params.target,
            &params.content,
        )
    }

    pub fn to_tool() -> ToolDescription {
        ToolDescription {
            name: Self::NAME.to_string(),
            description: Self::DESCRIPTION.to_string(),
            input_schema: input_schema_for::<PatchContentParams>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_parses_lowercase() {
        let params: PatchContentParams = serde_json::from_value(json!({
            "filepath": "notes/today.md",
            "operation": "prepend",
            "target_type": "frontmatter",
            "target": "tags",
            "content": "daily"
        }))
        .unwrap();
        assert_eq!(params.operation, PatchOperation::Prepend);
        assert_eq!(params.target_type, TargetType::Frontmatter);
    }

    #[test]
    fn test_unknown_operation_rejected() {
        let result = serde_json::from_value::<PatchContentParams>(json!({
            "filepath": "notes/today.md",
            "operation": "insert",
            "target_type": "heading",
            "target": "Log",
            "content": "x"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_schema_closed_sets() {
        let tool = PatchContentTool::to_tool();
        let schema = serde_json::to_string(&tool.input_schema).unwrap();
        // Both enums appear as closed string sets in the schema.
        assert!(schema.contains("append"));
        assert!(schema.contains("prepend"));
        assert!(schema.contains("replace"));
        assert!(schema.contains("heading"));
        assert!(schema.contains("block"));
        assert!(schema.contains("frontmatter"));

        let required = tool.input_schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 5);
    }
}
