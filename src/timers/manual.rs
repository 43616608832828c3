//! A scheduler driven by hand, for deterministic tests of time-based code.

use super::{Scheduler, Task};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::trace;

#[derive(Default)]
struct Clock {
    now: Duration,
    next_seq: u64,
    /// Pending tasks keyed by (due time, registration order)
    queue: BTreeMap<(Duration, u64), Task>,
}

/// Fake clock implementing [`Scheduler`].
///
/// Time only moves when [`advance`](ManualScheduler::advance) is called.
/// Tasks fire in due-time order, ties broken by registration order.
#[derive(Default)]
pub struct ManualScheduler {
    clock: Mutex<Clock>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulated time elapsed since creation
    pub fn now(&self) -> Duration {
        self.clock.lock().now
    }

    /// Number of tasks waiting to fire
    pub fn pending(&self) -> usize {
        self.clock.lock().queue.len()
    }

    /// Move the clock forward, firing every task that comes due.
    ///
    /// Tasks scheduled by a firing task are picked up in the same call if they
    /// fall due before the new time. Returns the number of tasks fired.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.clock.lock().now + by;
        let mut fired = 0;

        loop {
            let task = {
                let mut clock = self.clock.lock();
                let key = match clock.queue.keys().next() {
                    Some(&key) if key.0 <= target => key,
                    _ => break,
                };
                clock.now = key.0;
                clock.queue.remove(&key)
            };

            // the lock is released here so the task may schedule more work
            if let Some(task) = task {
                task();
                fired += 1;
            }
        }

        self.clock.lock().now = target;
        trace!("Manual clock advanced to {:?}, {} task(s) fired", target, fired);
        fired
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, wait: Duration, task: Task) {
        let mut clock = self.clock.lock();
        let due = clock.now + wait;
        let seq = clock.next_seq;
        clock.next_seq += 1;
        clock.queue.insert((due, seq), task);
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let clock = self.clock.lock();
        f.debug_struct("ManualScheduler")
            .field("now", &clock.now)
            .field("pending", &clock.queue.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn recorder() -> (Arc<Mutex<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        let make = move |label: &'static str| -> Task {
            let sink = sink.clone();
            Box::new(move || sink.lock().push(label))
        };
        (log, make)
    }

    #[test]
    fn test_nothing_fires_before_due() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();

        scheduler.schedule(Duration::from_millis(100), task("a"));
        assert_eq!(scheduler.advance(Duration::from_millis(99)), 0);
        assert!(log.lock().is_empty());
        assert_eq!(scheduler.pending(), 1);

        assert_eq!(scheduler.advance(Duration::from_millis(1)), 1);
        assert_eq!(*log.lock(), vec!["a"]);
        assert_eq!(scheduler.now(), Duration::from_millis(100));
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_fires_in_due_order_then_registration_order() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();

        scheduler.schedule(Duration::from_millis(30), task("late"));
        scheduler.schedule(Duration::from_millis(10), task("early"));
        scheduler.schedule(Duration::from_millis(30), task("late-tie"));

        assert_eq!(scheduler.advance(Duration::from_secs(1)), 3);
        assert_eq!(*log.lock(), vec!["early", "late", "late-tie"]);
    }

    #[test]
    fn test_tasks_scheduled_while_firing_are_honoured() {
        let scheduler = Arc::new(ManualScheduler::new());
        let (log, task) = recorder();
        let follow_up = task("second");

        let inner = scheduler.clone();
        let sink = log.clone();
        scheduler.schedule(
            Duration::from_millis(10),
            Box::new(move || {
                sink.lock().push("first");
                inner.schedule(Duration::from_millis(10), follow_up);
            }),
        );

        assert_eq!(scheduler.advance(Duration::from_millis(15)), 1);
        assert_eq!(*log.lock(), vec!["first"]);

        assert_eq!(scheduler.advance(Duration::from_millis(5)), 1);
        assert_eq!(*log.lock(), vec!["first", "second"]);
    }
}
