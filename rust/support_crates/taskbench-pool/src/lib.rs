//! Worker pool plumbing for promise-based task execution.
//!
//! This crate provides the pieces needed to schedule blocking work onto a
//! set of worker threads and collect the results later:
//!
//! - [`queue`] - a blocking multi-producer, multi-consumer work queue
//! - [`promise`] - single-value handoff between a worker and a joining caller
//! - [`thread_pool::ThreadPool`] - a fixed-size pool of named worker threads
//!
//! A spawned work item is represented by a [`promise::Promise`]: the caller
//! obtains the handle immediately and blocks only when joining it. A worker
//! that dies before producing a result abandons its promise rather than
//! taking the process down, so the failure surfaces at the join site.

pub mod promise;
pub mod queue;
pub mod thread_pool;
