//! Vault search tools: plain text and JsonLogic.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::protocol::ToolDescription;
use crate::servlets::input_schema_for;
use crate::servlets::vault::client::{VaultClient, VaultError};

// ============================================================================
// simple_search
// ============================================================================

fn default_context_length() -> u32 {
    100
}

/// Parameters for the simple text search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SimpleSearchParams {
    #[schemars(description = "Text to search for in the vault.")]
    pub query: String,

    #[serde(default = "default_context_length")]
    #[schemars(
        description = "How much context to return around the matching string (default: 100)"
    )]
    pub context_length: u32,
}

/// Text search across all files in the vault.
pub struct SimpleSearchTool;

impl SimpleSearchTool {
    pub const NAME: &'static str = "simple_search";

    pub const DESCRIPTION: &'static str =
        "Simple search for documents matching a specified text query across all files in the vault. \
         Use this tool when you want to do a simple text search.";

    pub const REQUIRED: &'static [&'static str] = &["query"];

    pub fn execute(
        params: &SimpleSearchParams,
        client: &VaultClient,
    ) -> Result<String, VaultError> {
        client.search(&params.query, params.context_length)
    }

    pub fn to_tool() -> ToolDescription {
        ToolDescription {
            name: Self::NAME.to_string(),
            description: Self::DESCRIPTION.to_string(),
            input_schema: input_schema_for::<SimpleSearchParams>(),
        }
    }
}

// ============================================================================
// complex_search
// ============================================================================

/// Parameters for the JsonLogic search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ComplexSearchParams {
    #[schemars(
        description = "JsonLogic query object. Example: {\"glob\": [\"*.md\", {\"var\": \"path\"}]} matches all markdown files"
    )]
    pub query: Value,
}

/// JsonLogic search over vault documents.
pub struct ComplexSearchTool;

impl ComplexSearchTool {
    pub const NAME: &'static str = "complex_search";

    pub const DESCRIPTION: &'static str =
        "Complex search for documents using a JsonLogic query. \
         Supports standard JsonLogic operators plus 'glob' and 'regexp' for pattern matching. \
         Results must be non-falsy. Use this tool when you want to do a complex search, \
         e.g. for all documents with certain tags etc.";

    pub const REQUIRED: &'static [&'static str] = &["query"];

    pub fn execute(
        params: &ComplexSearchParams,
        client: &VaultClient,
    ) -> Result<String, VaultError> {
        client.complex_search(&params.query)
    }

    pub fn to_tool() -> ToolDescription {
        ToolDescription {
            name: Self::NAME.to_string(),
            description: Self::DESCRIPTION.to_string(),
            input_schema: input_schema_for::<ComplexSearchParams>(),
        }
    }
}
