//! Fan-out/join helper for independent test closures.
//!
//! ```rust
//! use structenum::parallel::{ExecutionMode, ParallelGroup};
//!
//! let mut group = ParallelGroup::new(ExecutionMode::Concurrent);
//! group.run("first", || assert_eq!(1, 1))?;
//! group.run("second", || assert_eq!(2, 2))?;
//! group.join();
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! Dropping a group joins whatever is still pending.

use std::any::Any;
use std::io;
use std::panic;
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

/// Whether scheduled work runs on its own worker or inline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Each unit of work gets its own thread.
    #[default]
    Concurrent,
    /// Work runs on the caller's thread inside `run`; useful when debugging.
    Sequential,
}

/// A set of independently running units of work with a single join point.
#[derive(Debug, Default)]
pub struct ParallelGroup {
    mode: ExecutionMode,
    workers: Vec<(String, JoinHandle<()>)>,
}

impl ParallelGroup {
    pub fn new(mode: ExecutionMode) -> Self {
        Self {
            mode,
            workers: Vec::new(),
        }
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Schedule `work`. Returns immediately in concurrent mode.
    ///
    /// In sequential mode a panic in `work` propagates out of this call.
    /// Fails only if the worker thread cannot be spawned.
    pub fn run<F>(&mut self, description: impl Into<String>, work: F) -> io::Result<()>
    where
        F: FnOnce() + Send + 'static,
    {
        let description = description.into();
        match self.mode {
            ExecutionMode::Sequential => {
                debug!(unit = %description, "running inline");
                work();
            }
            ExecutionMode::Concurrent => {
                let handle = thread::Builder::new()
                    .name(description.clone())
                    .spawn(work)?;
                self.workers.push((description, handle));
            }
        }
        Ok(())
    }

    /// Number of scheduled units not yet joined.
    pub fn pending(&self) -> usize {
        self.workers.len()
    }

    /// Block until every scheduled unit has finished.
    ///
    /// All workers are joined before the first worker panic, if any, is
    /// re-raised on the calling thread.
    pub fn join(&mut self) {
        if let Some(payload) = self.join_workers() {
            panic::resume_unwind(payload);
        }
    }

    /// Joins every worker, returning the first panic payload.
    fn join_workers(&mut self) -> Option<Box<dyn Any + Send>> {
        let mut first_panic = None;
        for (description, handle) in self.workers.drain(..) {
            if let Err(payload) = handle.join() {
                warn!(unit = %description, "worker panicked");
                first_panic.get_or_insert(payload);
            }
        }
        first_panic
    }
}

impl Drop for ParallelGroup {
    fn drop(&mut self) {
        let first_panic = self.join_workers();
        // A second panic during unwinding would abort.
        if let Some(payload) = first_panic {
            if !thread::panicking() {
                panic::resume_unwind(payload);
            }
        }
    }
}
