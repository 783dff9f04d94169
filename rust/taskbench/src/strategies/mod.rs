//! The four execution strategies.
//!
//! Each strategy consumes the same task slice and produces the per-task
//! results in input order; they differ only in how the work is scheduled.

pub mod bounded_pool;
pub mod concurrent;
pub mod data_parallel;
pub mod sequential;

#[cfg(test)]
pub(crate) mod test_work {
    use taskbench_common::{Error, Result};

    use crate::task::{Task, Work};

    /// Completes without blocking; timing-free strategy tests use this.
    pub struct InstantWork;

    impl Work for InstantWork {
        fn perform(&self, _units: u64) -> Result<()> {
            Ok(())
        }
    }

    /// Fails the wait for tasks of one specific duration.
    pub struct FailOn {
        pub units: u64,
    }

    impl Work for FailOn {
        fn perform(&self, units: u64) -> Result<()> {
            if units == self.units {
                Err(Error::interrupted(format!("wait of {units} unit(s)")))
            } else {
                Ok(())
            }
        }
    }

    pub fn tasks(durations: &[u64]) -> Vec<Task> {
        durations
            .iter()
            .map(|&duration| Task::new(duration).unwrap())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use taskbench_pool::thread_pool::ThreadPool;

    use super::test_work::tasks;
    use super::{bounded_pool, concurrent, data_parallel, sequential};
    use crate::task::{SleepWork, Work};

    /// Durations chosen so completion order inverts input order under any
    /// parallel schedule; every strategy must still report input order.
    #[test]
    fn test_all_strategies_agree_on_result_order() {
        let tasks = tasks(&[3, 1, 2]);
        let work: Arc<dyn Work> = Arc::new(SleepWork::new(Duration::from_millis(10)));
        let pool = ThreadPool::new(3);

        let expected = vec![3, 1, 2];
        assert_eq!(sequential::run(&tasks, work.as_ref()).unwrap(), expected);
        assert_eq!(data_parallel::run(&tasks, work.as_ref()).unwrap(), expected);
        assert_eq!(concurrent::run(&tasks, &pool, &work).unwrap(), expected);
        assert_eq!(bounded_pool::run(&tasks, &work).unwrap(), expected);
    }

    #[test]
    fn test_all_strategies_handle_empty_batch() {
        let tasks = tasks(&[]);
        let work: Arc<dyn Work> = Arc::new(SleepWork::new(Duration::from_millis(1)));
        let pool = ThreadPool::new(1);

        assert_eq!(sequential::run(&tasks, work.as_ref()).unwrap(), vec![]);
        assert_eq!(data_parallel::run(&tasks, work.as_ref()).unwrap(), vec![]);
        assert_eq!(concurrent::run(&tasks, &pool, &work).unwrap(), vec![]);
        assert_eq!(bounded_pool::run(&tasks, &work).unwrap(), vec![]);
    }
}
