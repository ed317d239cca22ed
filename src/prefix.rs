//! Prefix decorator: a per-channel tag prepended before delegation.

use crate::error::UiError;
use crate::ui::Ui;

/// Decorator that prepends a fixed per-channel prefix before delegating.
///
/// A non-empty prefix is joined to the message with a single space. An empty
/// prefix means "no prefix": the message passes through unmodified rather
/// than gaining a leading separator.
#[derive(Debug)]
pub struct PrefixUi<U> {
    /// Prefix for the log channel; empty disables it.
    pub log_prefix: String,
    /// Prefix for the output channel; empty disables it.
    pub output_prefix: String,
    /// Prefix for the success channel; empty disables it.
    pub success_prefix: String,
    /// Prefix for the info channel; empty disables it.
    pub info_prefix: String,
    /// Prefix for the error channel; empty disables it.
    pub error_prefix: String,
    /// Prefix for the warn channel; empty disables it.
    pub warn_prefix: String,
    /// Prefix for the running channel; empty disables it.
    pub running_prefix: String,
    inner: U,
}

impl<U: Ui> PrefixUi<U> {
    /// Wrap `inner`, tagging each channel with the given prefix.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        log: impl Into<String>,
        output: impl Into<String>,
        success: impl Into<String>,
        info: impl Into<String>,
        error: impl Into<String>,
        warn: impl Into<String>,
        running: impl Into<String>,
        inner: U,
    ) -> Self {
        Self {
            log_prefix: log.into(),
            output_prefix: output.into(),
            success_prefix: success.into(),
            info_prefix: info.into(),
            error_prefix: error.into(),
            warn_prefix: warn.into(),
            running_prefix: running.into(),
            inner,
        }
    }
}

/// Join a non-empty prefix to the message, or `None` for passthrough.
fn prefixed(prefix: &str, message: &str) -> Option<String> {
    if prefix.is_empty() {
        None
    } else {
        Some(format!("{prefix} {message}"))
    }
}

impl<U: Ui> Ui for PrefixUi<U> {
    fn log(&self, message: &str) {
        match prefixed(&self.log_prefix, message) {
            Some(tagged) => self.inner.log(&tagged),
            None => self.inner.log(message),
        }
    }

    fn output(&self, message: &str) {
        match prefixed(&self.output_prefix, message) {
            Some(tagged) => self.inner.output(&tagged),
            None => self.inner.output(message),
        }
    }

    fn success(&self, message: &str) {
        match prefixed(&self.success_prefix, message) {
            Some(tagged) => self.inner.success(&tagged),
            None => self.inner.success(message),
        }
    }

    fn info(&self, message: &str) {
        match prefixed(&self.info_prefix, message) {
            Some(tagged) => self.inner.info(&tagged),
            None => self.inner.info(message),
        }
    }

    fn error(&self, message: &str) {
        match prefixed(&self.error_prefix, message) {
            Some(tagged) => self.inner.error(&tagged),
            None => self.inner.error(message),
        }
    }

    fn warn(&self, message: &str) {
        match prefixed(&self.warn_prefix, message) {
            Some(tagged) => self.inner.warn(&tagged),
            None => self.inner.warn(message),
        }
    }

    fn running(&self, message: &str) {
        match prefixed(&self.running_prefix, message) {
            Some(tagged) => self.inner.running(&tagged),
            None => self.inner.running(message),
        }
    }

    fn ask(&self) -> Result<String, UiError> {
        self.inner.ask()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::BasicUi;
    use std::io::{empty, sink};

    #[test]
    fn test_prefix_joined_with_single_space() {
        assert_eq!(prefixed("[INFO]", "starting"), Some("[INFO] starting".to_owned()));
    }

    #[test]
    fn test_empty_prefix_is_passthrough() {
        assert_eq!(prefixed("", "starting"), None);
    }

    #[test]
    fn test_mixed_prefixes_preserve_order() {
        let mut out = Vec::new();
        {
            let ui = PrefixUi::new(
                "",
                "",
                "",
                "[INFO]",
                "",
                "",
                "",
                BasicUi::new(empty(), &mut out, sink()),
            );
            ui.info("starting");
            ui.log("debug line");
        }
        assert_eq!(out, b"[INFO] starting\ndebug line\n");
    }

    #[test]
    fn test_error_prefix_routes_to_error_sink() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        {
            let ui = PrefixUi::new(
                "",
                "",
                "",
                "",
                "error:",
                "",
                "",
                BasicUi::new(empty(), &mut out, &mut err),
            );
            ui.error("disk full");
        }
        assert_eq!(err, b"error: disk full\n");
        assert!(out.is_empty());
    }

    #[test]
    fn test_ask_is_pure_delegation() {
        let ui = PrefixUi::new(
            ">",
            ">",
            ">",
            ">",
            ">",
            ">",
            ">",
            BasicUi::new("yes\n".as_bytes(), sink(), sink()),
        );
        assert_eq!(ui.ask().unwrap(), "yes");
    }
}
