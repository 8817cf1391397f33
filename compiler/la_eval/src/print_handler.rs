//! Output sink for `println`.
//!
//! Output can go to different destinations:
//! - stdout (the `la` binary)
//! - an in-memory buffer (tests, embedders that want the text back)
//! - any `io::Write` (files, pipes)
//! - nowhere
//!
//! Each `println` reaches the sink as exactly one complete line, so output
//! from separate statements never interleaves mid-line.
//!
//! Dispatch is an enum match rather than a trait object.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Writes to the process stdout, flushing after every line.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(line.as_bytes())?;
        out.flush()
    }
}

/// Captures output in memory.
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler {
            buffer: Mutex::new(String::new()),
        }
    }

    pub fn write_line(&self, line: &str) {
        self.buffer.lock().push_str(line);
    }

    /// Everything written so far.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Default for BufferPrintHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Forwards output to an arbitrary writer.
pub struct WriterPrintHandler {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl WriterPrintHandler {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        WriterPrintHandler {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        writer.flush()
    }
}

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
    Writer(WriterPrintHandler),
    /// Discards all output.
    Silent,
}

impl PrintHandlerImpl {
    /// Write `line` as-is. `line` already carries its terminator.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        match self {
            Self::Stdout(h) => h.write_line(line),
            Self::Buffer(h) => {
                h.write_line(line);
                Ok(())
            }
            Self::Writer(h) => h.write_line(line),
            Self::Silent => Ok(()),
        }
    }

    /// Captured output. Empty for handlers that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) | Self::Writer(_) | Self::Silent => String::new(),
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

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

pub fn writer_handler(writer: impl Write + Send + 'static) -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Writer(WriterPrintHandler::new(writer)))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}
