//! Wire types for the servlet host boundary.
//!
//! Everything that crosses the boundary between a servlet and its host is
//! defined here: the content model for tool output and the request/result
//! shapes of the `describe`/`call` contract. All types serialize to the
//! camelCase JSON the host marshals.

pub mod content;
pub mod messages;

pub use content::{Annotations, ContentItem, ResourceContents, Role};
pub use messages::{
    CallParams, CallToolRequest, CallToolResult, ListToolsResult, ToolDescription,
};
