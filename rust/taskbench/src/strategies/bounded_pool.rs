//! Promise-based execution on a dedicated bounded worker pool.

use std::sync::Arc;

use taskbench_common::Result;
use taskbench_pool::thread_pool::ThreadPool;

use super::concurrent;
use crate::task::{Task, Work};

/// Upper bound on the dedicated pool's worker count. Batches of up to this
/// many tasks get full parallelism; larger batches run in waves.
pub const MAX_WORKERS: usize = 10;

/// Executes the tasks on a dedicated pool of `min(task count, MAX_WORKERS)`
/// workers, then releases the pool.
///
/// Scheduling and joining are identical to [`concurrent::run`]; only the
/// pool's ownership differs. Dropping the pool closes its queue on both the
/// success and failure paths, so the workers drain and exit even when a
/// failed join abandons the remaining results. An empty batch returns
/// without creating a pool.
pub fn run(tasks: &[Task], work: &Arc<dyn Work>) -> Result<Vec<u64>> {
    if tasks.is_empty() {
        return Ok(Vec::new());
    }
    let pool = ThreadPool::new(tasks.len().min(MAX_WORKERS));
    concurrent::run(tasks, &pool, work)
}

#[cfg(test)]
mod tests {
    use super::super::test_work::{FailOn, InstantWork, tasks};
    use super::*;
    use crate::task::SleepWork;
    use std::time::{Duration, Instant};
    use taskbench_common::error::ErrorKind;

    #[test]
    fn test_uniform_batch() {
        let tasks = tasks(&[1; 10]);
        let work: Arc<dyn Work> = Arc::new(InstantWork);
        assert_eq!(run(&tasks, &work).unwrap(), vec![1; 10]);
    }

    #[test]
    fn test_results_follow_input_order_not_completion_order() {
        let tasks = tasks(&[3, 1, 2]);
        let work: Arc<dyn Work> = Arc::new(SleepWork::new(Duration::from_millis(10)));
        assert_eq!(run(&tasks, &work).unwrap(), vec![3, 1, 2]);
    }

    #[test]
    fn test_oversized_batch_runs_in_waves() {
        // 15 tasks of one 20ms unit against at most 10 workers: two waves,
        // so at least 40ms in total, and nowhere near the sequential 300ms.
        let tasks = tasks(&[1; 15]);
        let work: Arc<dyn Work> = Arc::new(SleepWork::new(Duration::from_millis(20)));
        let start = Instant::now();
        assert_eq!(run(&tasks, &work).unwrap(), vec![1; 15]);
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(40));
        assert!(elapsed < Duration::from_millis(200));
    }

    #[test]
    fn test_failure_still_releases_pool() {
        let tasks = tasks(&[1, 2, 3]);
        let work: Arc<dyn Work> = Arc::new(FailOn { units: 2 });
        let err = run(&tasks, &work).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Interrupted { .. }));
        // A healthy follow-up run proves nothing leaked or deadlocked.
        let ok: Arc<dyn Work> = Arc::new(InstantWork);
        assert_eq!(run(&tasks, &ok).unwrap(), vec![1, 2, 3]);
    }
}
