//! Vault listing tools.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::protocol::ToolDescription;
use crate::servlets::input_schema_for;
use crate::servlets::vault::client::{VaultClient, VaultError};

// ============================================================================
// list_files_in_vault
// ============================================================================

/// Lists the vault root. Takes no arguments.
pub struct ListFilesInVaultTool;

impl ListFilesInVaultTool {
    pub const NAME: &'static str = "list_files_in_vault";

    pub const DESCRIPTION: &'static str =
        "Lists all files and directories in the root directory of your vault.";

    pub fn execute(client: &VaultClient) -> Result<String, VaultError> {
        client.list_files_in_vault()
    }

    pub fn to_tool() -> ToolDescription {
        ToolDescription {
            name: Self::NAME.to_string(),
            description: Self::DESCRIPTION.to_string(),
            input_schema: json!({ "type": "object" }),
        }
    }
}

// ============================================================================
// list_files_in_dir
// ============================================================================

/// Parameters for the directory listing tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListFilesInDirParams {
    #[schemars(
        description = "Path to list files from (relative to your vault root). Note that empty directories will not be returned."
    )]
    pub dirpath: String,
}

/// Lists one directory inside the vault.
pub struct ListFilesInDirTool;

impl ListFilesInDirTool {
    pub const NAME: &'static str = "list_files_in_dir";

    pub const DESCRIPTION: &'static str =
        "Lists all files and directories that exist in a specific vault directory.";

    pub const REQUIRED: &'static [&'static str] = &["dirpath"];

    pub fn execute(
        params: &ListFilesInDirParams,
        client: &VaultClient,
    ) -> Result<String, VaultError> {
        client.list_files_in_dir(&params.dirpath)
    }

    pub fn to_tool() -> ToolDescription {
        ToolDescription {
            name: Self::NAME.to_string(),
            description: Self::DESCRIPTION.to_string(),
            input_schema: input_schema_for::<ListFilesInDirParams>(),
        }
    }
}
