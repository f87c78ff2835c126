//! Servlet contract and shared dispatch plumbing.
//!
//! A servlet exposes exactly two operations to the host: `describe`, a pure
//! listing of its tools, and `call`, which resolves one named tool, validates
//! its arguments, runs the handler, and shapes every outcome into a
//! `CallToolResult`. Failures never cross the boundary as anything else.
//!
//! ## Adding a New Servlet
//!
//! 1. Create a module under `servlets/` with the handlers and their params
//! 2. Implement [`Servlet`], using [`args::parse_args`] for validation and
//!    [`error::ServletError`] for every failure path
//! 3. Export it here and register it with the host harness

pub mod args;
pub mod error;
pub mod eval;
pub mod vault;

use schemars::JsonSchema;
use serde_json::json;

use crate::protocol::{CallToolRequest, CallToolResult, ListToolsResult};

pub use error::ServletError;
pub use eval::EvalServlet;
pub use vault::VaultServlet;

/// A self-contained tool provider.
pub trait Servlet {
    /// Servlet identity, used by hosts to select a provider.
    fn name(&self) -> &'static str;

    /// List the full, unconditional set of tools this servlet supports.
    ///
    /// Must not read runtime configuration; the host may invoke this before
    /// any configuration exists.
    fn describe(&self) -> ListToolsResult;

    /// Execute one tool call.
    ///
    /// Always returns a well-formed result; failures are rendered in-band
    /// with `isError` set.
    fn call(&self, request: CallToolRequest) -> CallToolResult;
}

/// JSON input schema for a params type.
pub fn input_schema_for<T: JsonSchema>() -> serde_json::Value {
    serde_json::to_value(schemars::schema_for!(T)).unwrap_or_else(|_| json!({ "type": "object" }))
}
