//! The capability contract every console implementation satisfies.

use crate::error::UiError;

/// The capability contract shared by the base console and every decorator.
///
/// Seven channel operations write one line each; [`Ui::ask`] reads one. The
/// channel split is semantic, not leveled: nothing is filtered, and the only
/// routing rule lives in the base implementation (`error` goes to the error
/// sink, everything else to the normal sink).
///
/// Writes are fire-and-forget; see the crate docs for the write-failure
/// policy. Decorators implement every method, delegating unchanged where they
/// add nothing, so the contract stays total at every layer of a chain.
pub trait Ui {
    /// Write a plain log line.
    fn log(&self, message: &str);

    /// Write a general output line.
    fn output(&self, message: &str);

    /// Write a success line.
    fn success(&self, message: &str);

    /// Write an informational line.
    fn info(&self, message: &str);

    /// Write an error line. The base implementation routes this to the error
    /// sink; every other channel goes to the normal sink.
    fn error(&self, message: &str);

    /// Write a warning line.
    fn warn(&self, message: &str);

    /// Write a progress ("running") line.
    fn running(&self, message: &str);

    /// Read one line of input, trimmed of surrounding whitespace. Blocks
    /// until a line is available.
    ///
    /// # Errors
    ///
    /// [`UiError::InputClosed`] once the input source reaches end of stream,
    /// [`UiError::Read`] if the underlying read fails.
    fn ask(&self) -> Result<String, UiError>;
}

// Boxed chains stay usable where a concrete layering is decided at runtime.
impl<U: Ui + ?Sized> Ui for Box<U> {
    fn log(&self, message: &str) {
        (**self).log(message);
    }

    fn output(&self, message: &str) {
        (**self).output(message);
    }

    fn success(&self, message: &str) {
        (**self).success(message);
    }

    fn info(&self, message: &str) {
        (**self).info(message);
    }

    fn error(&self, message: &str) {
        (**self).error(message);
    }

    fn warn(&self, message: &str) {
        (**self).warn(message);
    }

    fn running(&self, message: &str) {
        (**self).running(message);
    }

    fn ask(&self) -> Result<String, UiError> {
        (**self).ask()
    }
}
