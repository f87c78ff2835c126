//! MCP Servlet Library
//!
//! This crate provides pluggable tool servlets behind a uniform
//! `describe`/`call` contract: a host runtime asks a servlet which tools it
//! offers (as JSON schemas) and invokes one tool per call, receiving a
//! structured, possibly multi-part result.
//!
//! # Architecture
//!
//! - **core**: Shared infrastructure: configuration and error handling
//! - **protocol**: Wire types crossing the host boundary (content model,
//!   call request/result, tool descriptions)
//! - **servlets**: The servlet contract plus the shipped providers
//!   - **eval**: A single-tool code-evaluation servlet with dual-channel
//!     output capture and image sniffing
//!   - **vault**: Tools over a remote vault-file HTTP API
//!
//! # Example
//!
//! ```rust,no_run
//! use mcp_servlets::core::Config;
//! use mcp_servlets::servlets::vault::client::VaultClient;
//! use mcp_servlets::{Servlet, VaultServlet};
//!
//! let config = Config::from_env();
//! let servlet = VaultServlet::new(VaultClient::new(&config.vault));
//! let listing = servlet.describe();
//! println!("{} tools available", listing.tools.len());
//! ```

pub mod core;
pub mod protocol;
pub mod servlets;

// Re-export commonly used types for convenience
pub use core::{Config, Error, Result};
pub use protocol::{
    CallToolRequest, CallToolResult, ContentItem, ListToolsResult, ToolDescription,
};
pub use servlets::{EvalServlet, Servlet, ServletError, VaultServlet};
