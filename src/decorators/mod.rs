//! Function decorators: once, memoize, delay and throttle.
//!
//! Each decorator returns a handle that owns its state outright; nothing is
//! shared between two handles wrapping the same function.

pub mod delay;
pub mod memoize;
pub mod once;
pub mod throttle;

pub use delay::{delay, delay_with_result};
pub use memoize::{memoize, Memoized};
pub use once::{once, Once};
pub use throttle::{throttle, Throttled};
