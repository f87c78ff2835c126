//! Servlet error taxonomy.
//!
//! Every failure a servlet can produce is classified here and rendered
//! in-band as a single text content item with `isError` set. The host never
//! receives an unstructured fault for a well-formed request.

use thiserror::Error;
use tracing::warn;

use crate::protocol::{CallToolResult, ContentItem};

/// Failure kinds that survive the host boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServletError {
    /// The requested name matched no tool in the servlet registry.
    #[error("Unknown tool {0}")]
    UnknownTool(String),

    /// One or more required argument keys were absent from the request.
    #[error("Argument {0} not provided")]
    MissingArgument(String),

    /// A handler failed at runtime.
    #[error("{kind}: {message}")]
    Failure {
        /// Failure type name, e.g. `NameError`.
        kind: String,
        message: String,
        /// Innermost call-site excerpt, when the collaborator supplies one.
        frame: Option<String>,
    },

    /// Binary output matched no known image signature.
    #[error("Unknown image format: {0}")]
    UnknownImageFormat(String),
}

impl ServletError {
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Missing-argument error naming every absent key.
    pub fn missing_argument(keys: &[&str]) -> Self {
        Self::MissingArgument(keys.join(" or "))
    }

    pub fn failure(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failure {
            kind: kind.into(),
            message: message.into(),
            frame: None,
        }
    }

    /// Render into the in-band error result the host expects.
    pub fn into_result(self) -> CallToolResult {
        let text = self.render();
        warn!("{}", text);
        CallToolResult::error(vec![ContentItem::text(text)])
    }

    /// Handler failures render as a traceback-style excerpt: a header line,
    /// the innermost frame when known, then `<kind>: <message>`. The other
    /// kinds render their display message directly.
    fn render(&self) -> String {
        match self {
            Self::Failure {
                kind,
                message,
                frame,
            } => {
                let mut lines = vec!["Traceback (most recent call last):".to_string()];
                if let Some(frame) = frame {
                    lines.push(frame.clone());
                }
                lines.push(format!("{kind}: {message}"));
                lines.join("\n")
            }
            other => other.to_string(),
        }
    }
}
