//! A fixed-size pool of named worker threads for promise-based execution.
//!
//! Work items submitted through [`ThreadPool::spawn`] are distributed to the
//! workers over a shared [`WorkQueue`]; each spawn immediately returns a
//! [`Promise`] for the item's result. Dropping the pool closes the queue:
//! workers finish the items already in flight or queued, then exit. Nothing
//! is ever cancelled mid-run.

use std::sync::OnceLock;
use std::thread;

use crate::promise::{self, Promise};
use crate::queue::WorkQueue;

type WorkItem = Box<dyn FnOnce() + Send + 'static>;

/// A pool of worker threads consuming a shared work queue.
pub struct ThreadPool {
    queue: WorkQueue<WorkItem>,
    workers: usize,
}

impl ThreadPool {
    /// Creates a pool with `workers` threads, named `taskbench-worker-{i}`.
    ///
    /// # Panics
    ///
    /// Panics if `workers` is 0.
    pub fn new(workers: usize) -> ThreadPool {
        assert_ne!(workers, 0, "thread pool requires at least one worker");

        let queue = WorkQueue::<WorkItem>::new();
        for i in 0..workers {
            let queue = queue.clone();
            thread::Builder::new()
                .name(format!("taskbench-worker-{i}"))
                .spawn(move || Self::worker_loop(queue))
                .expect("spawn worker thread");
        }

        ThreadPool { queue, workers }
    }

    /// Returns the shared default-sized pool, lazily created on first use.
    ///
    /// The worker count is the available hardware parallelism, falling back
    /// to 8 when it cannot be determined. The shared pool lives for the rest
    /// of the process; callers that need an owned lifecycle should create
    /// their own pool with [`new`](Self::new).
    pub fn global() -> &'static ThreadPool {
        static POOL: OnceLock<ThreadPool> = OnceLock::new();
        POOL.get_or_init(|| ThreadPool::new(Self::default_pool_size()))
    }

    /// The number of worker threads in this pool.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Schedules `f` onto a worker thread and returns a promise for its
    /// result.
    ///
    /// The promise resolves when the worker finishes `f`. If the worker
    /// unwinds before producing a value, the promise is abandoned and
    /// [`Promise::wait`] returns `None`.
    pub fn spawn<F, R>(&self, f: F) -> Promise<R>
    where
        F: FnOnce() -> R + Send + 'static,
        R: Send + 'static,
    {
        let (completer, promise) = promise::promise::<R>();
        let item: WorkItem = Box::new(move || completer.complete(f()));
        self.queue
            .push(item)
            .unwrap_or_else(|_| panic!("pool accepts work while alive"));
        promise
    }

    fn default_pool_size() -> usize {
        thread::available_parallelism().map(|n| n.get()).unwrap_or(8)
    }

    fn worker_loop(queue: WorkQueue<WorkItem>) {
        while let Some(item) = queue.pop() {
            item();
        }
    }
}

impl Drop for ThreadPool {
    fn drop(&mut self) {
        self.queue.close();
    }
}
