//! Single-value handoff between a worker thread and a joining caller.
//!
//! A [`promise`] pair consists of a [`Completer`], held by the executing
//! worker, and a [`Promise`], held by the caller that scheduled the work.
//! The promise resolves exactly once:
//!
//! - the worker calls [`Completer::complete`] with the result, or
//! - the completer is dropped without completing (the worker died or
//!   unwound), which *abandons* the promise.
//!
//! [`Promise::wait`] blocks until one of the two happens and returns
//! `Some(value)` or `None` respectively. Abandonment is how a task failure
//! reaches the join site without crashing the process.

use std::sync::{Arc, Condvar, Mutex};

/// Creates a new promise pair.
pub fn promise<T>() -> (Completer<T>, Promise<T>) {
    let cell = Arc::new(Cell::new());
    (Completer(cell.clone()), Promise(cell))
}

/// The resolving half of a promise, held by the executing worker.
pub struct Completer<T>(Arc<Cell<T>>);

impl<T> Completer<T> {
    /// Resolves the promise with `value`, waking the joining caller.
    pub fn complete(self, value: T) {
        self.0.fulfill(value);
    }
}

impl<T> Drop for Completer<T> {
    fn drop(&mut self) {
        // No-op after a completed promise; abandons a pending one.
        self.0.abandon();
    }
}

/// The joining half of a promise, held by the caller that scheduled the work.
pub struct Promise<T>(Arc<Cell<T>>);

impl<T> Promise<T> {
    /// Returns `true` once the promise has been resolved or abandoned.
    /// Never blocks.
    pub fn is_ready(&self) -> bool {
        !self.0.is_pending()
    }

    /// Blocks until the promise resolves.
    ///
    /// Returns `Some(value)` if the worker completed the promise, `None` if
    /// the completer was dropped without producing a value.
    pub fn wait(self) -> Option<T> {
        self.0.wait()
    }
}

struct Cell<T> {
    slot: Mutex<Slot<T>>,
    resolved: Condvar,
}

enum Slot<T> {
    Pending,
    Ready(T),
    Abandoned,
}

impl<T> Cell<T> {
    fn new() -> Cell<T> {
        Cell {
            slot: Mutex::new(Slot::Pending),
            resolved: Condvar::new(),
        }
    }

    fn is_pending(&self) -> bool {
        matches!(*self.slot.lock().unwrap(), Slot::Pending)
    }

    fn fulfill(&self, value: T) {
        let mut slot = self.slot.lock().unwrap();
        if matches!(*slot, Slot::Pending) {
            *slot = Slot::Ready(value);
        }
        drop(slot);
        self.resolved.notify_all();
    }

    fn abandon(&self) {
        let mut slot = self.slot.lock().unwrap();
        if matches!(*slot, Slot::Pending) {
            *slot = Slot::Abandoned;
        }
        drop(slot);
        self.resolved.notify_all();
    }

    fn wait(&self) -> Option<T> {
        let slot = self.slot.lock().unwrap();
        let mut slot = self
            .resolved
            .wait_while(slot, |slot| matches!(slot, Slot::Pending))
            .unwrap();
        match std::mem::replace(&mut *slot, Slot::Abandoned) {
            Slot::Ready(value) => Some(value),
            Slot::Abandoned => None,
            Slot::Pending => unreachable!("promise resolved while pending"),
        }
    }
}
