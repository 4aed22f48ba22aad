//! Deferred values.
//!
//! A `Deferred<T>` postpones a computation until the value is first read and
//! caches the outcome for the rest of the invocation. Construction performs
//! no work, so handles can be created for every task at configuration time
//! without touching property stores or provisioning services.

use std::fmt;
use std::sync::{Mutex, OnceLock, PoisonError};

type Thunk<T> = Box<dyn FnOnce() -> T + Send>;

/// A lazily computed, memoized value.
///
/// The thunk runs at most once, on the first call to [`Deferred::force`];
/// every later call returns the cached result. Safe to share across threads.
pub struct Deferred<T> {
    cell: OnceLock<T>,
    thunk: Mutex<Option<Thunk<T>>>,
}

impl<T> Deferred<T> {
    /// Create a deferred value from a thunk. The thunk is not run.
    pub fn new<F>(thunk: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        Deferred {
            cell: OnceLock::new(),
            thunk: Mutex::new(Some(Box::new(thunk))),
        }
    }

    /// Create an already-resolved value. No thunk is stored.
    pub fn ready(value: T) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(value);
        Deferred {
            cell,
            thunk: Mutex::new(None),
        }
    }

    /// Force the value, running the thunk if this is the first read.
    pub fn force(&self) -> &T {
        self.cell.get_or_init(|| {
            let thunk = self
                .thunk
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .take()
                .expect("deferred thunk already consumed");
            thunk()
        })
    }

    /// Whether the value has been computed.
    pub fn is_forced(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Get the value if it has already been computed, without forcing.
    pub fn peek(&self) -> Option<&T> {
        self.cell.get()
    }
}

impl<T: fmt::Debug> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(value) => f.debug_tuple("Deferred").field(value).finish(),
            None => f.write_str("Deferred(<pending>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_construction_runs_nothing() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let deferred = Deferred::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            42
        });

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(!deferred.is_forced());
        assert_eq!(deferred.peek(), None);
    }

    #[test]
    fn test_force_memoizes() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let deferred = Deferred::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            "value".to_string()
        });

        assert_eq!(deferred.force(), "value");
        assert_eq!(deferred.force(), "value");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(deferred.is_forced());
        assert_eq!(deferred.peek().map(String::as_str), Some("value"));
    }

    #[test]
    fn test_ready_value() {
        let deferred = Deferred::ready(7);
        assert!(deferred.is_forced());
        assert_eq!(*deferred.force(), 7);
    }

    #[test]
    fn test_concurrent_force_runs_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let deferred = Arc::new(Deferred::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            1u32
        }));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let deferred = Arc::clone(&deferred);
                std::thread::spawn(move || *deferred.force())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
