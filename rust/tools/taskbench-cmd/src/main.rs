use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use taskbench::stopwatch::{self, Outcome};
use taskbench::strategies::{bounded_pool, concurrent, data_parallel, sequential};
use taskbench::task::{SleepWork, Task, Work};
use taskbench_common::error::Error;
use taskbench_pool::thread_pool::ThreadPool;

#[derive(Parser)]
#[command(name = "taskbench-cmd")]
#[command(about = "Benchmark of task execution strategies")]
#[command(version)]
struct Cli {
    /// Number of tasks in the batch
    #[arg(long, default_value_t = 10)]
    tasks: usize,

    /// Duration of each task, in time units
    #[arg(long, default_value_t = 1)]
    duration: u64,

    /// Length of one time unit in milliseconds
    #[arg(long, default_value_t = 1000)]
    unit_millis: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let tasks = (0..cli.tasks)
        .map(|_| Task::new(cli.duration))
        .collect::<Result<Vec<_>, _>>()?;
    let work: Arc<dyn Work> = Arc::new(SleepWork::new(Duration::from_millis(cli.unit_millis)));

    let mut failure = None;
    report(
        &mut failure,
        stopwatch::measure(|| sequential::run(&tasks, work.as_ref())),
    );
    report(
        &mut failure,
        stopwatch::measure(|| data_parallel::run(&tasks, work.as_ref())),
    );
    report(
        &mut failure,
        stopwatch::measure(|| concurrent::run(&tasks, ThreadPool::global(), &work)),
    );
    report(
        &mut failure,
        stopwatch::measure(|| bounded_pool::run(&tasks, &work)),
    );

    match failure {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

/// Prints a strategy's outcome, or records its failure so the remaining
/// strategies still run. The first failure decides the exit code.
fn report(failure: &mut Option<Error>, outcome: taskbench_common::Result<Outcome>) {
    match outcome {
        Ok(outcome) => {
            println!(
                "Processed {} tasks in {} millis",
                outcome.task_count(),
                outcome.elapsed_ms
            );
            println!("{:?}", outcome.results);
        }
        Err(err) => {
            eprintln!("strategy failed: {err}");
            failure.get_or_insert(err);
        }
    }
}
