//! Content model for tool output.
//!
//! One `ContentItem` is a single unit of tool output: plain text, a base64
//! image payload, or an embedded resource. The host renders items in
//! sequence order.

use serde::{Deserialize, Serialize};

// ============================================================================
// Annotations
// ============================================================================

/// Intended audience for a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Optional display hints attached to a content item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Annotations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<Vec<Role>>,

    /// Relative importance, in `[0.0, 1.0]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<f32>,
}

// ============================================================================
// Resource contents
// ============================================================================

/// Contents of an embedded resource: inline text or a base64 blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceContents {
    Text {
        uri: String,
        #[serde(rename = "mimeType", skip_serializing_if = "Option::is_none")]
        mime_type: Option<String>,
        text: String,
    },
    Blob {
        uri: String,
        #[serde(rename = "mimeType", skip_serializing_if = "Option::is_none")]
        mime_type: Option<String>,
        /// Base64-encoded payload.
        blob: String,
    },
}

// ============================================================================
// Content items
// ============================================================================

/// One piece of tool output.
///
/// The `type` tag selects the variant, so exactly one payload shape exists
/// per item by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentItem {
    Text {
        text: String,
        #[serde(rename = "mimeType", default = "default_text_mime")]
        mime_type: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        annotations: Option<Annotations>,
    },
    Image {
        /// Base64-encoded payload.
        data: String,
        #[serde(rename = "mimeType")]
        mime_type: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        annotations: Option<Annotations>,
    },
    Resource {
        resource: ResourceContents,
        #[serde(skip_serializing_if = "Option::is_none")]
        annotations: Option<Annotations>,
    },
}

fn default_text_mime() -> String {
    "text/plain".to_string()
}

impl ContentItem {
    /// Plain-text item with the default `text/plain` mime type.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            mime_type: default_text_mime(),
            annotations: None,
        }
    }

    /// Image item from an already base64-encoded payload.
    pub fn image(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self::Image {
            data: data.into(),
            mime_type: mime_type.into(),
            annotations: None,
        }
    }

    /// The text payload, if this is a text item.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
