//! Deferred, one-shot invocation.

use crate::timers::Scheduler;
use futures::channel::oneshot;
use std::time::Duration;
use tracing::{debug, trace};

/// Run `func(args)` once, no earlier than `wait` from now.
///
/// Returns immediately. The call's own return value is dropped; use
/// [`delay_with_result`] when it is needed.
pub fn delay<S, F, A, R>(scheduler: &S, func: F, wait: Duration, args: A)
where
    S: Scheduler + ?Sized,
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
{
    debug!("Delaying call by {:?}", wait);
    scheduler.schedule(
        wait,
        Box::new(move || {
            let _ = func(args);
        }),
    );
}

/// Like [`delay`], but hands the result back through a future.
///
/// The receiver resolves once the call has run, or with
/// [`oneshot::Canceled`] if the scheduler drops the task without running it.
pub fn delay_with_result<S, F, A, R>(
    scheduler: &S,
    func: F,
    wait: Duration,
    args: A,
) -> oneshot::Receiver<R>
where
    S: Scheduler + ?Sized,
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
    R: Send + 'static,
{
    let (tx, rx) = oneshot::channel();

    debug!("Delaying call by {:?} with result channel", wait);
    scheduler.schedule(
        wait,
        Box::new(move || {
            if tx.send(func(args)).is_err() {
                trace!("Delayed result dropped, receiver is gone");
            }
        }),
    );

    rx
}
