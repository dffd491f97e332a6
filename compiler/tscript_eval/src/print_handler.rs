//! Print handler for configurable output.
//!
//! `print` output and the interpreter's own diagnostics go through a
//! handler so they can be directed to different destinations:
//! - Stdout: the CLI (diagnostics on stderr)
//! - Buffer: tests and embedding hosts
//! - Silent: discard everything
//!
//! Uses enum dispatch instead of trait objects.

use std::sync::Arc;

use parking_lot::Mutex;

/// Writes output to stdout and diagnostics to stderr.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }

    pub fn report_error(&self, msg: &str) {
        eprintln!("{msg}");
    }
}

/// Captures output and diagnostics in separate buffers.
#[derive(Default)]
pub struct BufferPrintHandler {
    output: Mutex<String>,
    errors: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.output.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn report_error(&self, msg: &str) {
        let mut buf = self.errors.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn get_output(&self) -> String {
        self.output.lock().clone()
    }

    pub fn get_errors(&self) -> String {
        self.errors.lock().clone()
    }

    /// Clear both buffers.
    pub fn clear(&self) {
        self.output.lock().clear();
        self.errors.lock().clear();
    }
}

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
    Silent,
}

impl PrintHandlerImpl {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
            Self::Silent => {}
        }
    }

    /// Report an interpreter diagnostic.
    pub fn report_error(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.report_error(msg),
            Self::Buffer(h) => h.report_error(msg),
            Self::Silent => {}
        }
    }

    /// Captured output; empty for handlers that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    /// Captured diagnostics; empty for handlers that don't capture.
    pub fn get_errors(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_errors(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

/// Shared print handler that can be passed around.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

/// The default handler: stdout and stderr.
pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

/// A handler that captures everything for later inspection.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

/// A handler that discards all output.
pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}
