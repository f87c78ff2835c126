//! Vault servlet: tools over a remote vault-file API.
//!
//! The registry and name dispatch live here; each tool's params, schema, and
//! handler live under `definitions/`. The HTTP collaborator is injected so
//! the whole dispatch path runs in tests without a network.

pub mod client;
pub mod definitions;

use serde_json::{Map, Value};
use tracing::info;

use crate::protocol::{CallToolRequest, CallToolResult, ContentItem, ListToolsResult};
use crate::servlets::Servlet;
use crate::servlets::args::parse_args;
use crate::servlets::error::ServletError;

use client::VaultClient;
use definitions::{
    AppendContentParams, AppendContentTool, ComplexSearchParams, ComplexSearchTool,
    GetFileContentsParams, GetFileContentsTool, ListFilesInDirParams, ListFilesInDirTool,
    ListFilesInVaultTool, PatchContentParams, PatchContentTool, SimpleSearchParams,
    SimpleSearchTool,
};

/// The vault servlet.
pub struct VaultServlet {
    client: VaultClient,
}

impl VaultServlet {
    pub const NAME: &'static str = "vault";

    pub fn new(client: VaultClient) -> Self {
        Self { client }
    }

    /// All tool names known to the dispatcher, in display order.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            ListFilesInVaultTool::NAME,
            ListFilesInDirTool::NAME,
            GetFileContentsTool::NAME,
            SimpleSearchTool::NAME,
            AppendContentTool::NAME,
            PatchContentTool::NAME,
            ComplexSearchTool::NAME,
        ]
    }

    /// Resolve a name, validate arguments, and run exactly one handler.
    fn dispatch(&self, name: &str, args: &Map<String, Value>) -> Result<String, ServletError> {
        match name {
            ListFilesInVaultTool::NAME => Ok(ListFilesInVaultTool::execute(&self.client)?),
            ListFilesInDirTool::NAME => {
                let params: ListFilesInDirParams =
                    parse_args(args, ListFilesInDirTool::REQUIRED)?;
                Ok(ListFilesInDirTool::execute(&params, &self.client)?)
            }
            GetFileContentsTool::NAME => {
                let params: GetFileContentsParams =
                    parse_args(args, GetFileContentsTool::REQUIRED)?;
                Ok(GetFileContentsTool::execute(&params, &self.client)?)
            }
            SimpleSearchTool::NAME => {
                let params: SimpleSearchParams = parse_args(args, SimpleSearchTool::REQUIRED)?;
                Ok(SimpleSearchTool::execute(&params, &self.client)?)
            }
            AppendContentTool::NAME => {
                let params: AppendContentParams = parse_args(args, AppendContentTool::REQUIRED)?;
                Ok(AppendContentTool::execute(&params, &self.client)?)
            }
            PatchContentTool::NAME => {
                let params: PatchContentParams = parse_args(args, PatchContentTool::REQUIRED)?;
                Ok(PatchContentTool::execute(&params, &self.client)?)
            }
            ComplexSearchTool::NAME => {
                let params: ComplexSearchParams = parse_args(args, ComplexSearchTool::REQUIRED)?;
                Ok(ComplexSearchTool::execute(&params, &self.client)?)
            }
            _ => Err(ServletError::unknown_tool(name)),
        }
    }
}

impl Servlet for VaultServlet {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn describe(&self) -> ListToolsResult {
        ListToolsResult {
            tools: vec![
                ListFilesInVaultTool::to_tool(),
                ListFilesInDirTool::to_tool(),
                GetFileContentsTool::to_tool(),
                SimpleSearchTool::to_tool(),
                AppendContentTool::to_tool(),
                PatchContentTool::to_tool(),
                ComplexSearchTool::to_tool(),
            ],
        }
    }

    fn call(&self, request: CallToolRequest) -> CallToolResult {
        let name = request.params.name;
        let args = request.params.arguments.unwrap_or_default();
        info!("vault servlet call: {}", name);

        match self.dispatch(&name, &args) {
            Ok(body) => CallToolResult::success(vec![ContentItem::text(body)]),
            Err(err) => err.into_result(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
