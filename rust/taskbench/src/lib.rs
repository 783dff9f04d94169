//! Benchmark harness comparing strategies for executing a batch of
//! independent, latency-bound tasks.
//!
//! A [`task::Task`] blocks for a fixed synthetic duration and echoes the
//! duration back as its result. The [`stopwatch`] module measures the
//! wall-clock time of a whole batch run, and [`strategies`] provides four
//! ways to execute the batch:
//!
//! 1. [`strategies::sequential`] - one task at a time on the calling thread
//! 2. [`strategies::data_parallel`] - an order-preserving parallel map on
//!    the rayon runtime
//! 3. [`strategies::concurrent`] - promise-based execution on a shared
//!    worker pool
//! 4. [`strategies::bounded_pool`] - promise-based execution on a dedicated
//!    pool of at most [`strategies::bounded_pool::MAX_WORKERS`] workers
//!
//! Every strategy yields the per-task results in input order, independent of
//! completion order.

pub mod stopwatch;
pub mod strategies;
pub mod task;
