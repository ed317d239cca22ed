//! Thread-safety decorator: one lock around a whole inner chain.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::UiError;
use crate::ui::Ui;

/// Decorator that makes any inner [`Ui`] chain safe to share across threads.
///
/// Every operation locks, delegates, and releases; the guard is dropped on
/// every exit path, including a panic inside the inner call. This is the only
/// decorator that changes a chain's `Sync`-ness: `ConcurrentUi<U>` is `Sync`
/// whenever `U` is `Send`, which is exactly what lets a chain rooted in the
/// `!Sync` [`BasicUi`](crate::BasicUi) be shared.
///
/// Serialization holds per instance. Two `ConcurrentUi` values built over the
/// same underlying sink do not serialize against each other, and where the
/// wrapper sits in the chain decides what is atomic: outermost protects the
/// full prefix+color+write, innermost only the final stream write.
pub struct ConcurrentUi<U> {
    inner: Mutex<U>,
}

impl<U> ConcurrentUi<U> {
    /// Wrap `inner` behind a freshly created lock.
    pub fn new(inner: U) -> Self {
        Self {
            inner: Mutex::new(inner),
        }
    }

    fn lock(&self) -> MutexGuard<'_, U> {
        // A panicked writer poisons the lock; the sinks hold no invariant
        // worth abandoning output for, so recover the guard.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<U: Ui> Ui for ConcurrentUi<U> {
    fn log(&self, message: &str) {
        self.lock().log(message);
    }

    fn output(&self, message: &str) {
        self.lock().output(message);
    }

    fn success(&self, message: &str) {
        self.lock().success(message);
    }

    fn info(&self, message: &str) {
        self.lock().info(message);
    }

    fn error(&self, message: &str) {
        self.lock().error(message);
    }

    fn warn(&self, message: &str) {
        self.lock().warn(message);
    }

    fn running(&self, message: &str) {
        self.lock().running(message);
    }

    fn ask(&self) -> Result<String, UiError> {
        self.lock().ask()
    }
}

impl<U> fmt::Debug for ConcurrentUi<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcurrentUi").finish_non_exhaustive()
    }
}
