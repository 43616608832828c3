//! # Underbar
//!
//! A small utility belt of collection helpers and function decorators.
//!
//! ## Features
//!
//! - One iteration primitive, [`each`], that walks sequences and string-keyed
//!   mappings alike, plus [`fold`] and [`reduce`] built on it
//! - Queries derived from those primitives: [`filter`], [`map`], [`uniq`],
//!   [`contains`], [`every`], [`some`], ...
//! - In-place merging with [`extend`] and [`defaults`]
//! - Decorators: [`once`], [`memoize`], [`delay`], [`throttle`]
//! - Unbiased [`shuffle`] and the set helpers [`intersection`] and
//!   [`difference`]
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use underbar::{contains, every, filter, memoize, reduce};
//!
//! let numbers = [1_i32, 2, 3, 4];
//! assert_eq!(filter(&numbers, |n| *n > 2), vec![3, 4]);
//! assert_eq!(reduce(&numbers, |acc, n, _, _| acc + n), Some(10));
//! assert!(every(&numbers, |n| *n > 0));
//! assert!(contains(&json!({"a": 1, "b": 2}), &json!(1)));
//!
//! let square = memoize(|n: u64| n * n);
//! assert_eq!(square.call(12).unwrap(), 144);
//! assert_eq!(square.call(12).unwrap(), 144);
//! assert_eq!(square.cache_len(), 1);
//! ```

pub mod collections;
pub mod decorators;
pub mod timers;

mod error;
mod options;

// Re-exports
pub use collections::{
    contains, defaults, difference, each, every, every_truthy, extend, filter, first, first_n,
    flatten, flatten_shallow, fold, identity, index_of, intersection, invoke, last, last_n, map,
    pluck, reduce, reject, shuffle, shuffle_with, some, some_truthy, sort_by, sort_by_property,
    uniq, zip, Collection, Invocation, Key, Keyed, Mapping, MethodName, Methods, Truthy, View,
};
pub use decorators::{
    delay, delay_with_result, memoize, once, throttle, Memoized, Once, Throttled,
};
pub use error::{Result, UnderbarError};
pub use options::ThrottleOptions;
pub use timers::{ManualScheduler, Scheduler, Task};
#[cfg(feature = "native")]
pub use timers::TokioScheduler;
