//! The synthetic unit of work and the blocking wait behind it.

use std::thread;
use std::time::Duration;

use taskbench_common::{Result, verify_arg};

/// A unit of work with a fixed synthetic processing duration, expressed in
/// abstract time units.
///
/// Executing a task blocks the calling thread for the task's duration and
/// returns the duration as confirmation of completion. Tasks are immutable
/// values with no identity beyond their position in the containing batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task {
    duration: u64,
}

impl Task {
    /// Creates a task with the given duration. The duration must be at
    /// least one time unit.
    pub fn new(duration: u64) -> Result<Task> {
        verify_arg!(duration, duration >= 1);
        Ok(Task { duration })
    }

    /// The task's duration in time units.
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Blocks for the task's duration via `work`, then returns the duration.
    ///
    /// The identifier of the executing thread is logged at debug level so
    /// the scheduling behavior of each strategy can be observed. An
    /// interrupted or failed wait surfaces as the error returned by `work`.
    pub fn execute(&self, work: &dyn Work) -> Result<u64> {
        let thread = thread::current();
        log::debug!(
            "task of {} unit(s) executing on {}",
            self.duration,
            thread.name().unwrap_or("<unnamed>")
        );
        work.perform(self.duration)?;
        Ok(self.duration)
    }
}

/// The blocking wait a task performs, injected so tests can substitute
/// instantaneous or failing work for real delays.
pub trait Work: Send + Sync {
    /// Blocks the calling thread for `units` time units.
    ///
    /// Implementations return [`ErrorKind::Interrupted`] when the wait is
    /// interrupted before running to completion.
    ///
    /// [`ErrorKind::Interrupted`]: taskbench_common::error::ErrorKind::Interrupted
    fn perform(&self, units: u64) -> Result<()>;
}

/// The real blocking wait: sleeps `units * unit` on the calling thread.
///
/// `std::thread::sleep` always runs to completion, so this implementation
/// never reports an interrupted wait.
pub struct SleepWork {
    unit: Duration,
}

impl SleepWork {
    /// A sleeper with the given length of one time unit.
    pub fn new(unit: Duration) -> SleepWork {
        SleepWork { unit }
    }

    /// The reference workload configuration: one time unit per second.
    pub fn seconds() -> SleepWork {
        SleepWork::new(Duration::from_secs(1))
    }
}

impl Work for SleepWork {
    fn perform(&self, units: u64) -> Result<()> {
        let units = u32::try_from(units).unwrap_or(u32::MAX);
        thread::sleep(self.unit.saturating_mul(units));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;
    use taskbench_common::error::{Error, ErrorKind};

    struct InstantWork;

    impl Work for InstantWork {
        fn perform(&self, _units: u64) -> Result<()> {
            Ok(())
        }
    }

    struct InterruptedWork;

    impl Work for InterruptedWork {
        fn perform(&self, _units: u64) -> Result<()> {
            Err(Error::interrupted("synthetic wait"))
        }
    }

    #[test]
    fn test_new_rejects_zero_duration() {
        let err = Task::new(0).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidArgument { .. }));
    }

    #[test]
    fn test_execute_echoes_duration() {
        let task = Task::new(3).unwrap();
        assert_eq!(task.execute(&InstantWork).unwrap(), 3);
        assert_eq!(task.duration(), 3);
    }

    #[test]
    fn test_execute_surfaces_interruption() {
        let task = Task::new(1).unwrap();
        let err = task.execute(&InterruptedWork).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Interrupted { .. }));
    }

    #[test]
    fn test_sleep_work_blocks_for_duration() {
        let task = Task::new(3).unwrap();
        let work = SleepWork::new(Duration::from_millis(10));
        let start = Instant::now();
        assert_eq!(task.execute(&work).unwrap(), 3);
        assert!(start.elapsed() >= Duration::from_millis(30));
    }
}
