//! Rate-limiting a function to one run per window.

use crate::options::ThrottleOptions;
use crate::timers::Scheduler;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

struct Window<A, R> {
    /// A window is open; leading calls are suppressed until it closes
    cooling: bool,
    /// Latest arguments waiting for the trailing edge
    pending: Option<A>,
    last: Option<R>,
}

struct Inner<F, A, R> {
    func: F,
    options: ThrottleOptions,
    scheduler: Arc<dyn Scheduler>,
    window: Mutex<Window<A, R>>,
}

/// Handle returned by [`throttle`].
///
/// With the default options the first call in a quiet period runs at once
/// and opens a window of `wait_ms`. Calls inside the window only record their
/// arguments; when the window closes the most recent ones run and a new
/// window opens. A window that closes with nothing pending ends the cycle.
pub struct Throttled<F, A, R> {
    inner: Arc<Inner<F, A, R>>,
}

/// Wrap `func` so it runs at most once per `options.wait_ms`
pub fn throttle<F, A, R>(
    scheduler: Arc<dyn Scheduler>,
    func: F,
    options: ThrottleOptions,
) -> Throttled<F, A, R>
where
    F: Fn(A) -> R + Send + Sync + 'static,
    A: Send + 'static,
    R: Clone + Send + 'static,
{
    Throttled {
        inner: Arc::new(Inner {
            func,
            options,
            scheduler,
            window: Mutex::new(Window {
                cooling: false,
                pending: None,
                last: None,
            }),
        }),
    }
}

impl<F, A, R> Throttled<F, A, R>
where
    F: Fn(A) -> R + Send + Sync + 'static,
    A: Send + 'static,
    R: Clone + Send + 'static,
{
    /// Offer a call to the throttled function.
    ///
    /// Returns the result of the most recent run, which is `None` until the
    /// function has run at least once.
    pub fn call(&self, args: A) -> Option<R> {
        let leading = {
            let mut window = self.inner.window.lock();
            if window.cooling {
                if self.inner.options.is_trailing() {
                    trace!("Throttled call deferred to trailing edge");
                    window.pending = Some(args);
                }
                return window.last.clone();
            }
            window.cooling = true;

            if self.inner.options.is_leading() {
                Some(args)
            } else {
                if self.inner.options.is_trailing() {
                    window.pending = Some(args);
                }
                None
            }
        };

        if let Some(args) = leading {
            self.inner.run(args);
        }
        Inner::open_window(&self.inner);

        self.last_result()
    }

    /// Result of the most recent run
    pub fn last_result(&self) -> Option<R> {
        self.inner.window.lock().last.clone()
    }
}

impl<F, A, R> Inner<F, A, R>
where
    F: Fn(A) -> R + Send + Sync + 'static,
    A: Send + 'static,
    R: Clone + Send + 'static,
{
    fn run(&self, args: A) {
        let result = (self.func)(args);
        self.window.lock().last = Some(result);
    }

    fn open_window(inner: &Arc<Self>) {
        let this = inner.clone();
        inner.scheduler.schedule(
            inner.options.get_wait(),
            Box::new(move || Inner::close_window(&this)),
        );
    }

    fn close_window(inner: &Arc<Self>) {
        let pending = inner.window.lock().pending.take();
        match pending {
            Some(args) => {
                debug!("Throttle window closed, running trailing call");
                inner.run(args);
                Inner::open_window(inner);
            }
            None => {
                trace!("Throttle window closed");
                inner.window.lock().cooling = false;
            }
        }
    }
}

impl<F, A, R> fmt::Debug for Throttled<F, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let window = self.inner.window.lock();
        f.debug_struct("Throttled")
            .field("options", &self.inner.options)
            .field("cooling", &window.cooling)
            .field("pending", &window.pending.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timers::ManualScheduler;
    use std::time::Duration;

    fn recording(
        options: ThrottleOptions,
    ) -> (
        Arc<ManualScheduler>,
        Arc<Mutex<Vec<u32>>>,
        Throttled<impl Fn(u32) -> u32 + Send + Sync + 'static, u32, u32>,
    ) {
        let scheduler = Arc::new(ManualScheduler::new());
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        let throttled = throttle(
            scheduler.clone(),
            move |n: u32| {
                sink.lock().push(n);
                n * 10
            },
            options,
        );
        (scheduler, calls, throttled)
    }

    #[test]
    fn test_leading_and_trailing() {
        let (scheduler, calls, throttled) = recording(ThrottleOptions::new(100));

        assert_eq!(throttled.call(1), Some(10));
        assert_eq!(throttled.call(2), Some(10));
        assert_eq!(throttled.call(3), Some(10));
        assert_eq!(*calls.lock(), vec![1]);

        scheduler.advance(Duration::from_millis(100));
        assert_eq!(*calls.lock(), vec![1, 3]);
        assert_eq!(throttled.last_result(), Some(30));

        // the trailing run opened a fresh window
        assert_eq!(throttled.call(4), Some(30));
        scheduler.advance(Duration::from_millis(100));
        assert_eq!(*calls.lock(), vec![1, 3, 4]);

        // quiet window closes the cycle; the next call leads again
        scheduler.advance(Duration::from_millis(100));
        assert_eq!(throttled.call(5), Some(50));
        assert_eq!(*calls.lock(), vec![1, 3, 4, 5]);
    }

    #[test]
    fn test_without_trailing_drops_calls_in_window() {
        let (scheduler, calls, throttled) = recording(ThrottleOptions::new(50).trailing(false));

        throttled.call(1);
        throttled.call(2);
        scheduler.advance(Duration::from_millis(50));
        assert_eq!(*calls.lock(), vec![1]);

        throttled.call(3);
        assert_eq!(*calls.lock(), vec![1, 3]);
    }

    #[test]
    fn test_without_leading_runs_latest_arguments() {
        let (scheduler, calls, throttled) = recording(ThrottleOptions::new(50).leading(false));

        assert_eq!(throttled.call(1), None);
        assert_eq!(throttled.call(2), None);
        assert_eq!(throttled.call(3), None);

        scheduler.advance(Duration::from_millis(50));
        assert_eq!(*calls.lock(), vec![3]);
        assert_eq!(throttled.last_result(), Some(30));
    }

    #[test]
    fn test_without_leading_concurrent_callers_run_once() {
        let (scheduler, calls, throttled) = recording(ThrottleOptions::new(50).leading(false));
        let throttled = Arc::new(throttled);

        let handles: Vec<_> = (1..=8_u32)
            .map(|n| {
                let throttled = throttled.clone();
                std::thread::spawn(move || throttled.call(n))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), None);
        }

        // every caller either opened the window or left pending arguments
        assert_eq!(scheduler.pending(), 1);
        scheduler.advance(Duration::from_millis(50));
        assert_eq!(calls.lock().len(), 1);
        scheduler.advance(Duration::from_millis(50));
        assert_eq!(calls.lock().len(), 1);
    }

    #[test]
    fn test_without_leading_defers_first_call() {
        let (scheduler, calls, throttled) = recording(ThrottleOptions::new(50).leading(false));

        assert_eq!(throttled.call(1), None);
        assert!(calls.lock().is_empty());

        scheduler.advance(Duration::from_millis(50));
        assert_eq!(*calls.lock(), vec![1]);
    }
}
