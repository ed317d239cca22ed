//! The leaf implementation: direct writes to caller-supplied streams.

use std::cell::RefCell;
use std::fmt;
use std::io::{self, BufRead, BufReader, Write};

use crate::error::UiError;
use crate::ui::Ui;

/// The base [`Ui`]: writes each channel straight to one of two sinks.
///
/// Six channels (log, output, success, info, warn, running) go to the normal
/// sink; `error` goes to the error sink. No decoration is applied here. The
/// three streams are owned exclusively for the lifetime of the instance.
///
/// The sinks are not synchronized, so `BasicUi` is not shareable across
/// threads (`!Sync`); wrap it in [`ConcurrentUi`](crate::ConcurrentUi) when a
/// chain must be shared.
pub struct BasicUi<R, W, E> {
    reader: RefCell<R>,
    writer: RefCell<W>,
    error_writer: RefCell<E>,
}

impl<R: BufRead, W: Write, E: Write> BasicUi<R, W, E> {
    /// Create a base console over an input source and two output sinks.
    ///
    /// The sinks are not validated; a broken sink fails at its first write,
    /// and that write is dropped per the crate's write-failure policy.
    pub fn new(reader: R, writer: W, error_writer: E) -> Self {
        Self {
            reader: RefCell::new(reader),
            writer: RefCell::new(writer),
            error_writer: RefCell::new(error_writer),
        }
    }

    fn write_line(&self, message: &str) {
        let mut writer = self.writer.borrow_mut();
        if let Err(err) = writeln!(writer, "{message}") {
            tracing::warn!("console write failed: {err}");
        }
    }

    fn write_error_line(&self, message: &str) {
        let mut writer = self.error_writer.borrow_mut();
        if let Err(err) = writeln!(writer, "{message}") {
            tracing::warn!("console error-write failed: {err}");
        }
    }
}

impl BasicUi<BufReader<io::Stdin>, io::Stdout, io::Stderr> {
    /// Base console bound to the process stdio streams.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout(), io::stderr())
    }
}

impl<R: BufRead, W: Write, E: Write> Ui for BasicUi<R, W, E> {
    fn log(&self, message: &str) {
        self.write_line(message);
    }

    fn output(&self, message: &str) {
        self.write_line(message);
    }

    fn success(&self, message: &str) {
        self.write_line(message);
    }

    fn info(&self, message: &str) {
        self.write_line(message);
    }

    fn error(&self, message: &str) {
        self.write_error_line(message);
    }

    fn warn(&self, message: &str) {
        self.write_line(message);
    }

    fn running(&self, message: &str) {
        self.write_line(message);
    }

    fn ask(&self) -> Result<String, UiError> {
        let mut line = String::new();
        let read = self.reader.borrow_mut().read_line(&mut line)?;
        if read == 0 {
            return Err(UiError::InputClosed);
        }
        Ok(line.trim().to_owned())
    }
}

impl<R, W, E> fmt::Debug for BasicUi<R, W, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicUi").finish_non_exhaustive()
    }
}
