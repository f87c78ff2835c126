//! Vault tool definitions.
//!
//! One file per tool (or per closely related pair): typed params, the
//! schema-backed `ToolDescription`, and the handler against the vault client.

pub mod append_content;
pub mod get_file_contents;
pub mod list_files;
pub mod patch_content;
pub mod search;

pub use append_content::{AppendContentParams, AppendContentTool};
pub use get_file_contents::{GetFileContentsParams, GetFileContentsTool};
pub use list_files::{ListFilesInDirParams, ListFilesInDirTool, ListFilesInVaultTool};
pub use patch_content::{PatchContentParams, PatchContentTool, PatchOperation, TargetType};
pub use search::{ComplexSearchParams, ComplexSearchTool, SimpleSearchParams, SimpleSearchTool};
