//! Scoped ownership of listeners, observers and timers
//!
//! Browser callbacks can fire after the component that registered them has
//! been disposed. Every registration is wrapped in a [`Teardown`] guard and
//! every callback checks a shared [`Liveness`] flag before touching state.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared "owner still mounted" flag
#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Mark the owner disposed. Safe to call any number of times.
    pub fn revoke(&self) {
        self.0.store(false, Ordering::Release);
    }

    /// Run `f` only while the owner is alive
    pub fn guard<R>(&self, f: impl FnOnce() -> R) -> Option<R> {
        if self.is_alive() { Some(f()) } else { None }
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// Releases a registration exactly once, on [`Teardown::cancel`] or drop
pub struct Teardown {
    liveness: Liveness,
    release: Option<Box<dyn FnOnce()>>,
}

impl Teardown {
    pub fn new(liveness: Liveness, release: impl FnOnce() + 'static) -> Self {
        Self {
            liveness,
            release: Some(Box::new(release)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    pub fn cancel(&mut self) {
        self.liveness.revoke();
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Teardown {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for Teardown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Teardown")
            .field("alive", &self.liveness.is_alive())
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_guard_runs_only_while_alive() {
        let liveness = Liveness::new();
        assert_eq!(liveness.guard(|| 1), Some(1));
        liveness.revoke();
        liveness.revoke();
        assert_eq!(liveness.guard(|| 1), None);
    }

    #[test]
    fn test_teardown_releases_once() {
        let released = Rc::new(Cell::new(0));
        let counter = released.clone();
        let liveness = Liveness::new();

        let mut teardown = Teardown::new(liveness.clone(), move || counter.set(counter.get() + 1));
        assert!(teardown.is_active());
        teardown.cancel();
        teardown.cancel();
        drop(teardown);

        assert_eq!(released.get(), 1);
        assert!(!liveness.is_alive());
    }

    #[test]
    fn test_drop_releases_and_revokes() {
        let released = Rc::new(Cell::new(false));
        let flag = released.clone();
        let liveness = Liveness::new();
        {
            let _teardown = Teardown::new(liveness.clone(), move || flag.set(true));
            assert!(liveness.is_alive());
        }
        assert!(released.get());
        assert!(!liveness.is_alive());
    }

    #[test]
    fn test_callback_after_teardown_is_noop() {
        let liveness = Liveness::new();
        let state = Rc::new(Cell::new(0));
        let teardown = Teardown::new(liveness.clone(), || {});

        let callback = {
            let liveness = liveness.clone();
            let state = state.clone();
            move || {
                liveness.guard(|| state.set(state.get() + 1));
            }
        };

        callback();
        drop(teardown);
        callback();
        assert_eq!(state.get(), 1);
    }
}
