//! A blocking multi-producer, multi-consumer work queue.
//!
//! This is the distribution channel between [`ThreadPool`](crate::thread_pool::ThreadPool)
//! and its workers, reduced to what the pool needs: unbounded `push`, blocking
//! `pop`, and an idempotent `close` that lets consumers drain the remaining
//! items before shutting down.

use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex};

/// A handle to the shared queue. Cloning produces another handle to the same
/// underlying queue; all handles may push and pop concurrently.
pub struct WorkQueue<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for WorkQueue<T> {
    fn clone(&self) -> Self {
        WorkQueue {
            shared: self.shared.clone(),
        }
    }
}

impl<T> WorkQueue<T> {
    /// Creates a new, open, empty queue.
    pub fn new() -> WorkQueue<T> {
        WorkQueue {
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    items: VecDeque::new(),
                    closed: false,
                }),
                ready: Condvar::new(),
            }),
        }
    }

    /// Enqueues an item. Never blocks.
    ///
    /// Returns `Err(item)` if the queue has been closed, handing the item
    /// back to the caller.
    pub fn push(&self, item: T) -> Result<(), T> {
        let mut state = self.shared.state.lock().unwrap();
        if state.closed {
            return Err(item);
        }
        state.items.push_back(item);
        drop(state);
        self.shared.ready.notify_one();
        Ok(())
    }

    /// Dequeues an item, blocking while the queue is empty and still open.
    ///
    /// Returns `None` once the queue is closed and fully drained. Items
    /// enqueued before the close are still handed out.
    pub fn pop(&self) -> Option<T> {
        let mut state = self.shared.state.lock().unwrap();
        loop {
            if let Some(item) = state.items.pop_front() {
                return Some(item);
            }
            if state.closed {
                return None;
            }
            state = self.shared.ready.wait(state).unwrap();
        }
    }

    /// Closes the queue. Subsequent pushes fail; consumers drain the
    /// remaining items and then observe `None`. Idempotent.
    pub fn close(&self) {
        let mut state = self.shared.state.lock().unwrap();
        state.closed = true;
        drop(state);
        self.shared.ready.notify_all();
    }

    /// Returns `true` if [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.shared.state.lock().unwrap().closed
    }
}

impl<T> Default for WorkQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

struct Shared<T> {
    state: Mutex<State<T>>,
    ready: Condvar,
}

struct State<T> {
    items: VecDeque<T>,
    closed: bool,
}
