//! Promise-based execution on a shared worker pool.

use std::sync::Arc;

use taskbench_common::{Error, Result};
use taskbench_pool::thread_pool::ThreadPool;

use crate::task::{Task, Work};

/// Schedules every task onto `pool`, then joins the promises in input order.
///
/// Scheduling is eager: all promise handles exist before the first join, so
/// tasks overlap up to the pool's worker count even though this strategy
/// does not size the pool itself. The pool is an injected handle; the driver
/// passes [`ThreadPool::global`].
///
/// A failed task surfaces at its join and halts collection. Tasks already
/// scheduled keep running to completion on the pool; their results are
/// dropped.
pub fn run(tasks: &[Task], pool: &ThreadPool, work: &Arc<dyn Work>) -> Result<Vec<u64>> {
    let promises: Vec<_> = tasks
        .iter()
        .map(|&task| {
            let work = Arc::clone(work);
            pool.spawn(move || task.execute(work.as_ref()))
        })
        .collect();

    promises
        .into_iter()
        .enumerate()
        .map(|(index, promise)| {
            promise
                .wait()
                .ok_or_else(|| Error::task_failed(format!("task {index}")))?
        })
        .collect()
}
