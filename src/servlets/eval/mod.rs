//! Code-evaluation servlet.
//!
//! A servlet with one implicit tool: it takes a `code` string, hands it to
//! the sandbox collaborator together with two output sinks, and encodes
//! whatever came back. Dispatch skips name resolution since there is only
//! one handler.

pub mod encoder;

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::protocol::{CallToolRequest, CallToolResult, ListToolsResult, ToolDescription};
use crate::servlets::args::parse_args;
use crate::servlets::error::ServletError;
use crate::servlets::{Servlet, input_schema_for};
use encoder::{OutputSinks, encode_output};

// ============================================================================
// Execution collaborator
// ============================================================================

/// A failure raised by the sandbox while running user code.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecFailure {
    /// Failure type name, e.g. `NameError`.
    pub kind: String,
    pub message: String,
    /// Innermost call-site excerpt for the traceback render.
    pub frame: Option<String>,
}

impl ExecFailure {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            frame: None,
        }
    }

    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.frame = Some(frame.into());
        self
    }
}

impl From<ExecFailure> for ServletError {
    fn from(failure: ExecFailure) -> Self {
        ServletError::Failure {
            kind: failure.kind,
            message: failure.message,
            frame: failure.frame,
        }
    }
}

/// Sandboxed code-execution collaborator.
///
/// The executor runs `code` with its standard output redirected into the
/// sinks: string writes to the text sink, raw bytes to the binary sink. It
/// must not write anywhere else, and it returns control to the dispatcher on
/// every path.
pub trait CodeExecutor: Send + Sync {
    fn execute(&self, code: &str, sinks: &mut OutputSinks) -> Result<(), ExecFailure>;
}

/// Stand-in executor for hosts that do not attach a sandbox.
pub struct NoSandbox;

impl CodeExecutor for NoSandbox {
    fn execute(&self, _code: &str, _sinks: &mut OutputSinks) -> Result<(), ExecFailure> {
        Err(ExecFailure::new(
            "RuntimeError",
            "no code execution sandbox is attached",
        ))
    }
}

// ============================================================================
// Servlet
// ============================================================================

/// Parameters for the eval tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EvalParams {
    #[schemars(
        description = "The code to evaluate in the sandbox. Text printed by the code and any binary image output are returned as content."
    )]
    pub code: String,
}

/// The code-evaluation servlet.
pub struct EvalServlet {
    executor: Box<dyn CodeExecutor>,
}

impl EvalServlet {
    /// Tool and servlet name.
    pub const NAME: &'static str = "eval";

    pub const DESCRIPTION: &'static str =
        "Evaluate some code in a sandbox and return its captured output. \
         Printed text comes back as a text item; binary image output comes back base64-encoded.";

    const REQUIRED: &'static [&'static str] = &["code"];

    pub fn new(executor: Box<dyn CodeExecutor>) -> Self {
        Self { executor }
    }

    fn run(&self, params: &EvalParams) -> CallToolResult {
        let mut sinks = OutputSinks::new();

        // The executor runs on a scoped thread so a panic inside user code is
        // contained at this boundary and the sinks survive for encoding on
        // the success path.
        let outcome = std::thread::scope(|scope| {
            scope
                .spawn(|| self.executor.execute(&params.code, &mut sinks))
                .join()
        });

        match outcome {
            Ok(Ok(())) => encode_output(sinks),
            Ok(Err(failure)) => ServletError::from(failure).into_result(),
            Err(panic) => ServletError::failure("Panic", panic_message(panic)).into_result(),
        }
    }
}

impl Servlet for EvalServlet {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn describe(&self) -> ListToolsResult {
        ListToolsResult {
            tools: vec![ToolDescription {
                name: Self::NAME.to_string(),
                description: Self::DESCRIPTION.to_string(),
                input_schema: input_schema_for::<EvalParams>(),
            }],
        }
    }

    fn call(&self, request: CallToolRequest) -> CallToolResult {
        // Single implicit tool: the name in the request is not consulted.
        let args = request.params.arguments.unwrap_or_default();
        match parse_args::<EvalParams>(&args, Self::REQUIRED) {
            Ok(params) => {
                info!("eval servlet running {} bytes of code", params.code.len());
                self.run(&params)
            }
            Err(err) => err.into_result(),
        }
    }
}

fn panic_message(panic: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "code execution panicked".to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ContentItem;
    use serde_json::{Map, json};

    const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// Test executor that replays a scripted sequence of sink writes.
    struct ScriptedExecutor {
        text: Option<&'static str>,
        binary: Option<&'static [u8]>,
        failure: Option<ExecFailure>,
        panic: bool,
    }

    impl ScriptedExecutor {
        fn writing(text: Option<&'static str>, binary: Option<&'static [u8]>) -> Self {
            Self {
                text,
                binary,
                failure: None,
                panic: false,
            }
        }

        fn failing(failure: ExecFailure) -> Self {
            Self {
                text: None,
                binary: None,
                failure: Some(failure),
                panic: false,
            }
        }

        fn panicking() -> Self {
            Self {
                text: None,
                binary: None,
                failure: None,
                panic: true,
            }
        }
    }

    impl CodeExecutor for ScriptedExecutor {
        fn execute(&self, _code: &str, sinks: &mut OutputSinks) -> Result<(), ExecFailure> {
            if self.panic {
                panic!("boom in user code");
            }
            if let Some(text) = self.text {
                sinks.write_str(text);
            }
            if let Some(binary) = self.binary {
                sinks.write_bytes(binary);
            }
            match &self.failure {
                Some(failure) => Err(failure.clone()),
                None => Ok(()),
            }
        }
    }

    fn call_with(executor: ScriptedExecutor, args: Map<String, serde_json::Value>) -> CallToolResult {
        let servlet = EvalServlet::new(Box::new(executor));
        servlet.call(CallToolRequest::new("eval", args))
    }

    fn code_args() -> Map<String, serde_json::Value> {
        json!({ "code": "print('ok')" }).as_object().unwrap().clone()
    }

    #[test]
    fn test_text_output() {
        let result = call_with(ScriptedExecutor::writing(Some("ok\n"), None), code_args());
        assert!(!result.is_error);
        assert_eq!(result.content.len(), 1);
        assert_eq!(result.content[0].as_text().unwrap(), "ok\n");
    }

    #[test]
    fn test_text_and_image_output() {
        let result = call_with(
            ScriptedExecutor::writing(Some("ok\n"), Some(PNG_MAGIC)),
            code_args(),
        );
        assert!(!result.is_error);
        assert_eq!(result.content.len(), 2);
        assert_eq!(result.content[0].as_text().unwrap(), "ok\n");
        match &result.content[1] {
            ContentItem::Image { mime_type, .. } => assert_eq!(mime_type, "image/png"),
            other => panic!("expected image item, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_code_argument_skips_executor() {
        let result = call_with(ScriptedExecutor::panicking(), Map::new());
        assert!(result.is_error);
        assert_eq!(
            result.content[0].as_text().unwrap(),
            "Argument code not provided"
        );
    }

    #[test]
    fn test_executor_failure_renders_traceback() {
        let failure = ExecFailure::new("NameError", "name 'x' is not defined")
            .with_frame("  File \"<code>\", line 1, in <module>");
        let result = call_with(ScriptedExecutor::failing(failure), code_args());
        assert!(result.is_error);
        let text = result.content[0].as_text().unwrap();
        assert!(text.starts_with("Traceback (most recent call last):"));
        assert!(text.ends_with("NameError: name 'x' is not defined"));
    }

    #[test]
    fn test_panic_is_contained() {
        let result = call_with(ScriptedExecutor::panicking(), code_args());
        assert!(result.is_error);
        let text = result.content[0].as_text().unwrap();
        assert!(text.contains("Panic: boom in user code"));
    }

    #[test]
    fn test_describe_requires_code() {
        let servlet = EvalServlet::new(Box::new(NoSandbox));
        let listing = servlet.describe();
        assert_eq!(listing.tools.len(), 1);
        assert_eq!(listing.tools[0].name, "eval");
        let required = listing.tools[0].input_schema["required"]
            .as_array()
            .unwrap();
        assert!(required.contains(&json!("code")));
    }

    #[test]
    fn test_describe_is_idempotent() {
        let servlet = EvalServlet::new(Box::new(NoSandbox));
        let first = serde_json::to_string(&servlet.describe()).unwrap();
        let second = serde_json::to_string(&servlet.describe()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_sandbox_reports_runtime_error() {
        let result = call_with(
            ScriptedExecutor::failing(ExecFailure::new(
                "RuntimeError",
                "no code execution sandbox is attached",
            )),
            code_args(),
        );
        assert!(result.is_error);
        assert!(
            result.content[0]
                .as_text()
                .unwrap()
                .contains("RuntimeError: no code execution sandbox is attached")
        );
    }
}
