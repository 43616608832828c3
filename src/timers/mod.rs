//! Timer facilities consumed by the time-based decorators.
//!
//! [`delay`](crate::delay) and [`throttle`](crate::throttle) never touch a
//! clock themselves; they hand tasks to a [`Scheduler`]. Production code uses
//! [`TokioScheduler`], tests drive a [`ManualScheduler`] forward by hand.

pub mod manual;
#[cfg(feature = "native")]
pub mod native;

pub use manual::ManualScheduler;
#[cfg(feature = "native")]
pub use native::TokioScheduler;

use std::sync::Arc;
use std::time::Duration;

/// A one-shot unit of deferred work
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// "Run this after N milliseconds" facility.
///
/// A task must run no earlier than `wait` after it was scheduled, and at most
/// once. No ordering is promised between tasks beyond that.
pub trait Scheduler: Send + Sync {
    fn schedule(&self, wait: Duration, task: Task);
}

impl<S: Scheduler + ?Sized> Scheduler for Arc<S> {
    fn schedule(&self, wait: Duration, task: Task) {
        (**self).schedule(wait, task);
    }
}

impl<S: Scheduler + ?Sized> Scheduler for &S {
    fn schedule(&self, wait: Duration, task: Task) {
        (**self).schedule(wait, task);
    }
}
