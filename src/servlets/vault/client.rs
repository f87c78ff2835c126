//! HTTP client for the remote vault-file API.
//!
//! The transport is a collaborator trait so dispatch can be exercised
//! without a network; the shipped implementation is a thin blocking reqwest
//! wrapper. `VaultClient` owns the base URL and bearer credential (read from
//! configuration at construction) and exposes one method per API call.

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::core::config::VaultConfig;
use crate::servlets::error::ServletError;

// ============================================================================
// Transport
// ============================================================================

/// The response surface the servlet consumes: status plus body text.
#[derive(Debug, Clone)]
pub struct VaultResponse {
    pub status: u16,
    pub body: String,
}

/// Errors from the vault HTTP boundary.
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("request failed: {0}")]
    Transport(String),
}

impl From<VaultError> for ServletError {
    fn from(err: VaultError) -> Self {
        ServletError::failure("VaultError", err.to_string())
    }
}

/// Blocking HTTP collaborator.
pub trait VaultTransport: Send + Sync {
    fn request(
        &self,
        method: &str,
        url: &str,
        headers: &[(String, String)],
        body: Option<String>,
    ) -> Result<VaultResponse, VaultError>;
}

/// reqwest-backed transport.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl VaultTransport for HttpTransport {
    fn request(
        &self,
        method: &str,
        url: &str,
        headers: &[(String, String)],
        body: Option<String>,
    ) -> Result<VaultResponse, VaultError> {
        let method = reqwest::Method::from_bytes(method.as_bytes())
            .map_err(|e| VaultError::Transport(e.to_string()))?;

        let mut request = self.client.request(method, url);
        for (name, value) in headers {
            request = request.header(name, value);
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request
            .send()
            .map_err(|e| VaultError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| VaultError::Transport(e.to_string()))?;

        Ok(VaultResponse { status, body })
    }
}

// ============================================================================
// Client
// ============================================================================

/// Vault API client.
pub struct VaultClient {
    base_url: String,
    bearer: String,
    transport: Box<dyn VaultTransport>,
}

impl VaultClient {
    pub fn new(config: &VaultConfig) -> Self {
        Self::with_transport(config, Box::new(HttpTransport::new()))
    }

    /// Construct with an explicit transport (used by tests).
    pub fn with_transport(config: &VaultConfig, transport: Box<dyn VaultTransport>) -> Self {
        Self {
            base_url: config.api_url.trim_end_matches('/').to_string(),
            bearer: format!("Bearer {}", config.api_key),
            transport,
        }
    }

    fn get(&self, path: &str) -> Result<String, VaultError> {
        info!("GET {}{}", self.base_url, path);
        let response = self.transport.request(
            "GET",
            &format!("{}{}", self.base_url, path),
            &self.base_headers(),
            None,
        )?;
        info!("-> {}", response.status);
        debug!("-> {}", response.body);
        Ok(response.body)
    }

    fn post(
        &self,
        path: &str,
        body: Option<String>,
        extra_headers: &[(&str, String)],
    ) -> Result<String, VaultError> {
        let mut headers = self.base_headers();
        for (name, value) in extra_headers {
            headers.push((name.to_string(), value.clone()));
        }

        info!("POST {}{}", self.base_url, path);
        let response = self.transport.request(
            "POST",
            &format!("{}{}", self.base_url, path),
            &headers,
            body,
        )?;
        info!("-> {}", response.status);
        debug!("-> {}", response.body);
        Ok(response.body)
    }

    fn base_headers(&self) -> Vec<(String, String)> {
        vec![("Authorization".to_string(), self.bearer.clone())]
    }

    /// `GET /vault/` — names in the vault root.
    pub fn list_files_in_vault(&self) -> Result<String, VaultError> {
        self.get("/vault/")
    }

    /// `GET /vault/<dirpath>/` — names under one directory.
    pub fn list_files_in_dir(&self, dirpath: &str) -> Result<String, VaultError> {
        self.get(&format!("/vault/{dirpath}/"))
    }

    /// `GET /vault/<filepath>` — one file's contents.
    pub fn get_file_contents(&self, filepath: &str) -> Result<String, VaultError> {
        self.get(&format!("/vault/{filepath}"))
    }

    /// `POST /search/simple/` with the query in the query string.
    pub fn search(&self, query: &str, context_length: u32) -> Result<String, VaultError> {
        let query_string = serde_urlencoded::to_string([
            ("query", query.to_string()),
            ("contextLength", context_length.to_string()),
        ])
        .map_err(|e| VaultError::Transport(e.to_string()))?;
        self.post(&format!("/search/simple/?{query_string}"), None, &[])
    }

    /// `POST /vault/<filepath>` appending markdown content.
    pub fn append_content(&self, filepath: &str, content: &str) -> Result<String, VaultError> {
        self.post(
            &format!("/vault/{filepath}"),
            Some(content.to_string()),
            &[("Content-Type", "text/markdown".to_string())],
        )
    }

    /// `POST /vault/<filepath>` patching relative to a target, addressed via
    /// the `Operation`, `Target-Type`, and `Target` headers.
    pub fn patch_content(
        &self,
        filepath: &str,
        operation: &str,
        target_type: &str,
        target: &str,
        content: &str,
    ) -> Result<String, VaultError> {
        self.post(
            &format!("/vault/{filepath}"),
            Some(content.to_string()),
            &[
                ("Content-Type", "text/markdown".to_string()),
                ("Operation", operation.to_string()),
                ("Target-Type", target_type.to_string()),
                ("Target", urlencoding::encode(target).into_owned()),
            ],
        )
    }

    /// `POST /search/` with a JsonLogic query body.
    pub fn complex_search(&self, query: &Value) -> Result<String, VaultError> {
        self.post(
            "/search/",
            Some(query.to_string()),
            &[(
                "Content-Type",
                "application/vnd.olrapi.jsonlogic+json".to_string(),
            )],
        )
    }
}

// ============================================================================
// Test support
// ============================================================================

/// Recording fake transport shared by the client and dispatch tests.
#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::{Arc, Mutex};

    use super::{VaultError, VaultResponse, VaultTransport};

    #[derive(Debug, Clone)]
    pub struct RecordedRequest {
        pub method: String,
        pub url: String,
        pub headers: Vec<(String, String)>,
        pub body: Option<String>,
    }

    impl RecordedRequest {
        pub fn header(&self, name: &str) -> Option<&str> {
            self.headers
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str())
        }
    }

    /// Transport that records every request and replies with a canned body.
    pub struct FakeTransport {
        pub requests: Mutex<Vec<RecordedRequest>>,
        pub reply: String,
    }

    impl FakeTransport {
        pub fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                requests: Mutex::new(Vec::new()),
                reply: reply.to_string(),
            })
        }

        pub fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    impl VaultTransport for Arc<FakeTransport> {
        fn request(
            &self,
            method: &str,
            url: &str,
            headers: &[(String, String)],
            body: Option<String>,
        ) -> Result<VaultResponse, VaultError> {
            self.requests.lock().unwrap().push(RecordedRequest {
                method: method.to_string(),
                url: url.to_string(),
                headers: headers.to_vec(),
                body,
            });
            Ok(VaultResponse {
                status: 200,
                body: self.reply.clone(),
            })
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
