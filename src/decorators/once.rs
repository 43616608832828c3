//! A function that only ever runs once.

use crate::error::{Result, UnderbarError};
use parking_lot::Mutex;
use std::fmt;
use tracing::debug;

enum State<F, R> {
    Pending(F),
    Running,
    Done(R),
    /// The first run panicked; there is nothing left to run or return
    Poisoned,
}

/// Poisons the state if it is still `Running` when the first run ends,
/// which only happens when the wrapped function unwinds.
struct PoisonIfUnfinished<'a, F, R> {
    state: &'a Mutex<State<F, R>>,
}

impl<F, R> Drop for PoisonIfUnfinished<'_, F, R> {
    fn drop(&mut self) {
        let mut state = self.state.lock();
        if matches!(*state, State::Running) {
            *state = State::Poisoned;
        }
    }
}

/// Handle returned by [`once`].
///
/// The first [`call`](Once::call) runs the wrapped function and caches its
/// result; every later call returns that result without running anything,
/// whatever arguments it is given.
pub struct Once<F, R> {
    state: Mutex<State<F, R>>,
}

/// Wrap `func` so that it runs at most once
pub fn once<F, A, R>(func: F) -> Once<F, R>
where
    F: FnOnce(A) -> R,
{
    Once::new(func)
}

impl<F, R> Once<F, R> {
    pub fn new(func: F) -> Self {
        Self {
            state: Mutex::new(State::Pending(func)),
        }
    }

    /// Whether the wrapped function has completed its single run
    pub fn has_fired(&self) -> bool {
        matches!(*self.state.lock(), State::Done(_))
    }

    /// Run the wrapped function on first use, otherwise return its cached
    /// result.
    ///
    /// Calling back into the same handle from inside the wrapped function
    /// fails with [`UnderbarError::InvalidState`], as does every call after a
    /// first run that panicked.
    pub fn call<A>(&self, args: A) -> Result<R>
    where
        F: FnOnce(A) -> R,
        R: Clone,
    {
        let func = {
            let mut state = self.state.lock();
            match &*state {
                State::Done(result) => return Ok(result.clone()),
                State::Poisoned => {
                    return Err(UnderbarError::invalid_state(
                        "once-wrapped function panicked during its first run",
                    ))
                }
                State::Pending(_) | State::Running => {}
            }
            match std::mem::replace(&mut *state, State::Running) {
                State::Pending(func) => func,
                _ => {
                    return Err(UnderbarError::invalid_state(
                        "once-wrapped function called again before its first run returned",
                    ))
                }
            }
        };

        debug!("Running once-wrapped function");
        let _guard = PoisonIfUnfinished { state: &self.state };
        let result = func(args);
        *self.state.lock() = State::Done(result.clone());
        Ok(result)
    }
}

impl<F, R> fmt::Debug for Once<F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Once")
            .field("fired", &self.has_fired())
            .finish()
    }
}
