//! Data-parallel execution on the rayon runtime.

use rayon::prelude::*;
use taskbench_common::Result;

use crate::task::{Task, Work};

/// Executes the tasks across rayon's implicit worker pool, which the runtime
/// sizes to the available hardware parallelism.
///
/// The indexed parallel map keeps result order equal to input order no
/// matter which tasks complete first. Wall time approaches the duration sum
/// divided by the effective parallelism, bounded below by the longest task.
pub fn run(tasks: &[Task], work: &dyn Work) -> Result<Vec<u64>> {
    tasks.par_iter().map(|task| task.execute(work)).collect()
}
