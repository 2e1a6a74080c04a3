//! One-shot setup guard

use once_cell::sync::OnceCell;

/// Outcome of an [`SetupGuard::initialize`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupOutcome {
    /// The closure ran and the guard is now set
    Performed,
    /// A previous call already initialized; the closure was skipped
    AlreadyDone,
}

/// Idempotent initialization guard
///
/// Replaces ad-hoc "already initialized" flags: the first successful
/// `initialize` call runs the closure, every later call is a skipped no-op.
/// There is no reset; the guard lives for the process. A failed closure
/// leaves the guard unset so initialization can be retried.
pub struct SetupGuard {
    done: OnceCell<()>,
}

impl SetupGuard {
    /// Create an unset guard
    pub const fn new() -> Self {
        Self {
            done: OnceCell::new(),
        }
    }

    /// Run `f` if no previous call has succeeded
    ///
    /// Concurrent callers are serialized; exactly one runs the closure and
    /// the rest observe [`SetupOutcome::AlreadyDone`].
    pub fn initialize<E>(&self, f: impl FnOnce() -> Result<(), E>) -> Result<SetupOutcome, E> {
        if self.done.get().is_some() {
            return Ok(SetupOutcome::AlreadyDone);
        }

        let mut ran = false;
        self.done.get_or_try_init(|| {
            ran = true;
            f()
        })?;

        Ok(if ran {
            SetupOutcome::Performed
        } else {
            SetupOutcome::AlreadyDone
        })
    }

    /// Whether a previous `initialize` call succeeded
    pub fn is_done(&self) -> bool {
        self.done.get().is_some()
    }
}

impl Default for SetupGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "lifecycle/lifecycle_tests.rs"]
mod lifecycle_tests;
