//! Sequential execution on the calling thread.

use taskbench_common::Result;

use crate::task::{Task, Work};

/// Executes every task in input order on the calling thread.
///
/// No concurrency is involved; wall time is the sum of all task durations.
/// The first failing task aborts the run.
pub fn run(tasks: &[Task], work: &dyn Work) -> Result<Vec<u64>> {
    tasks.iter().map(|task| task.execute(work)).collect()
}
