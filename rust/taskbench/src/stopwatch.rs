//! Wall-clock timing harness for strategy runs.

use std::time::Instant;

use taskbench_common::Result;

/// The measured outcome of a single strategy run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Wall-clock time of the run in whole milliseconds, truncated.
    pub elapsed_ms: u64,
    /// Per-task results in input order.
    pub results: Vec<u64>,
}

impl Outcome {
    /// The number of tasks the run processed.
    pub fn task_count(&self) -> usize {
        self.results.len()
    }
}

/// Runs `strategy` and captures its wall-clock elapsed time.
///
/// The elapsed time is the difference between monotonic clock readings taken
/// immediately before and after the run. The harness adds no concurrency of
/// its own; a failing run propagates its error and produces no outcome.
pub fn measure<F>(strategy: F) -> Result<Outcome>
where
    F: FnOnce() -> Result<Vec<u64>>,
{
    let start = Instant::now();
    let results = strategy()?;
    let elapsed_ms = start.elapsed().as_millis() as u64;
    Ok(Outcome {
        elapsed_ms,
        results,
    })
}
