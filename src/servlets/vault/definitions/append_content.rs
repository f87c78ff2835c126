//! Append tool: add markdown to a new or existing file.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::protocol::ToolDescription;
use crate::servlets::input_schema_for;
use crate::servlets::vault::client::{VaultClient, VaultError};

/// Parameters for the append tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AppendContentParams {
    #[schemars(description = "Path to the file (relative to vault root)")]
    pub filepath: String,

    #[schemars(description = "Content to append to the file")]
    pub content: String,
}

/// Appends content to a new or existing file in the vault.
pub struct AppendContentTool;

impl AppendContentTool {
    pub const NAME: &'static str = "append_content";

    pub const DESCRIPTION: &'static str =
        "Append content to a new or existing file in the vault.";

    pub const REQUIRED: &'static [&'static str] = &["filepath", "content"];

    pub fn execute(
        params: &AppendContentParams,
        client: &VaultClient,
    ) -> Result<String, VaultError> {
        client.append_content(&params.filepath, &params.content)
    }

    pub fn to_tool() -> ToolDescription {
        ToolDescription {
            name: Self::NAME.to_string(),
            description: Self::DESCRIPTION.to_string(),
            input_schema: input_schema_for::<AppendContentParams>(),
        }
    }
}
