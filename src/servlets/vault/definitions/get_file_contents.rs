//! Single-file read tool.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::protocol::ToolDescription;
use crate::servlets::input_schema_for;
use crate::servlets::vault::client::{VaultClient, VaultError};

/// Parameters for the file read tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetFileContentsParams {
    #[schemars(description = "Path to the relevant file (relative to your vault root).")]
    pub filepath: String,
}

/// Returns the content of a single file in the vault.
pub struct GetFileContentsTool;

impl GetFileContentsTool {
    pub const NAME: &'static str = "get_file_contents";

    pub const DESCRIPTION: &'static str = "Return the content of a single file in your vault.";

    pub const REQUIRED: &'static [&'static str] = &["filepath"];

    pub fn execute(
        params: &GetFileContentsParams,
        client: &VaultClient,
    ) -> Result<String, VaultError> {
        client.get_file_contents(&params.filepath)
    }

    pub fn to_tool() -> ToolDescription {
        ToolDescription {
            name: Self::NAME.to_string(),
            description: Self::DESCRIPTION.to_string(),
            input_schema: input_schema_for::<GetFileContentsParams>(),
        }
    }
}
