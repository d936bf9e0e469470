//! Real JavaScript execution with console capture.
//!
//! Source is evaluated in a fresh `boa_engine` context per run. The engine
//! exposes no host I/O, so the only observable channel is the `console.log`
//! binding installed here, which appends into a per-thread capture sink.
//! The sink is installed and released by an RAII guard; the release happens
//! on the thrown-error path too, so a failed run can never leave the console
//! redirected for whoever logs next.

use std::cell::RefCell;

use boa_engine::object::ObjectInitializer;
use boa_engine::property::Attribute;
use boa_engine::{js_string, Context, JsResult, JsValue, NativeFunction, Source};

use super::{CodeExecutor, ExecutionOutput};
use crate::errors::SandboxError;

#[cfg(test)]
#[path = "javascript_test.rs"]
mod tests;

pub const NO_OUTPUT_NOTICE: &str = "Code executed successfully (no output)";

thread_local! {
    static CONSOLE_SINK: RefCell<Option<Vec<String>>> = const { RefCell::new(None) };
}

/// Redirects `console.log` capture for the duration of one run.
///
/// Constructing it installs a fresh buffer; dropping it uninstalls whatever
/// is there, which is what guarantees restoration when evaluation throws.
struct ConsoleCapture;

impl ConsoleCapture {
    fn begin() -> ConsoleCapture {
        CONSOLE_SINK.with(|sink| *sink.borrow_mut() = Some(Vec::new()));
        ConsoleCapture
    }

    fn take_lines(self) -> Vec<String> {
        CONSOLE_SINK
            .with(|sink| sink.borrow_mut().take())
            .unwrap_or_default()
    }
}

impl Drop for ConsoleCapture {
    fn drop(&mut self) {
        CONSOLE_SINK.with(|sink| {
            sink.borrow_mut().take();
        });
    }
}

fn console_log(_this: &JsValue, args: &[JsValue], context: &mut Context) -> JsResult<JsValue> {
    let mut rendered = Vec::with_capacity(args.len());
    for arg in args {
        rendered.push(arg.to_string(context)?.to_std_string_escaped());
    }
    CONSOLE_SINK.with(|sink| {
        if let Some(lines) = sink.borrow_mut().as_mut() {
            lines.push(rendered.join(" "));
        }
    });
    Ok(JsValue::undefined())
}

pub struct JavaScriptExecutor;

impl JavaScriptExecutor {
    /// Evaluates source and returns the captured log lines, or the error
    /// message when evaluation throws. Used directly by the markup executor
    /// for embedded `<script>` bodies.
    pub(crate) fn evaluate(source: &str) -> Result<Result<Vec<String>, String>, SandboxError> {
        let mut context = Context::default();
        install_console(&mut context)?;

        let capture = ConsoleCapture::begin();
        match context.eval(Source::from_bytes(source)) {
            Ok(_) => Ok(Ok(capture.take_lines())),
            Err(err) => Ok(Err(err.to_string())),
        }
    }
}

impl CodeExecutor for JavaScriptExecutor {
    fn run(&self, source: &str) -> Result<ExecutionOutput, SandboxError> {
        match JavaScriptExecutor::evaluate(source)? {
            Ok(lines) if lines.is_empty() => Ok(ExecutionOutput::from_line(NO_OUTPUT_NOTICE)),
            Ok(lines) => Ok(ExecutionOutput { lines }),
            Err(message) => Ok(ExecutionOutput::from_line(format!(
                "JavaScript Error: {message}"
            ))),
        }
    }
}

fn install_console(context: &mut Context) -> Result<(), SandboxError> {
    let console = ObjectInitializer::new(context)
        .function(NativeFunction::from_fn_ptr(console_log), js_string!("log"), 1)
        .build();

    context
        .register_global_property(js_string!("console"), console, Attribute::all())
        .map_err(|err| SandboxError::Engine(err.to_string()))?;

    Ok(())
}
