//! Caching results per distinct argument value.

use crate::error::Result;
use dashmap::DashMap;
use serde::Serialize;
use std::fmt;
use tracing::trace;

/// Handle returned by [`memoize`].
///
/// Results are cached under the JSON serialization of the argument value.
/// Pass several arguments as a tuple or a `Vec`: `(1, 2)` and `vec![1, 2]`
/// both key as `[1,2]`, while `(vec![1, 2],)` keys as `[[1,2]]`, so one
/// compound argument never collides with its unpacked components.
pub struct Memoized<F, R> {
    func: F,
    memo: DashMap<String, R>,
}

/// Wrap `func` with a private memo table
pub fn memoize<F, A, R>(func: F) -> Memoized<F, R>
where
    F: Fn(A) -> R,
    A: Serialize,
{
    Memoized::new(func)
}

impl<F, R> Memoized<F, R> {
    pub fn new(func: F) -> Self {
        Self {
            func,
            memo: DashMap::new(),
        }
    }

    /// Return the cached result for `args`, computing and storing it on a miss.
    ///
    /// Fails only when `args` cannot be serialized into a key.
    pub fn call<A>(&self, args: A) -> Result<R>
    where
        F: Fn(A) -> R,
        A: Serialize,
        R: Clone,
    {
        let key = serde_json::to_string(&args)?;

        if let Some(hit) = self.memo.get(&key) {
            trace!("Memo hit for {}", key);
            return Ok(hit.value().clone());
        }

        trace!("Memo miss for {}", key);
        let result = (self.func)(args);
        self.memo.insert(key, result.clone());
        Ok(result)
    }

    /// Number of distinct argument values cached so far
    pub fn cache_len(&self) -> usize {
        self.memo.len()
    }

    /// Forget every cached result
    pub fn clear(&self) {
        self.memo.clear();
    }
}

impl<F, R> fmt::Debug for Memoized<F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("cached", &self.memo.len())
            .finish()
    }
}
