//! Collection utilities rebuilt from two primitives.
//!
//! [`fold`] is the only function that walks a collection's storage, and
//! [`each`]/[`reduce`] are built on it. Every query, merge and set operation
//! in this module goes through those primitives. The positional accessors
//! ([`first`], [`last`] and their `_n` forms) index arrays directly.

pub mod advanced;
pub mod collection;
pub mod invoke;
pub mod iterate;
pub mod merge;
pub mod queries;
pub mod truthy;

pub use advanced::{
    difference, flatten, flatten_shallow, intersection, shuffle, shuffle_with, sort_by,
    sort_by_property, zip,
};
pub use collection::{Collection, Entries, Key, Keyed, View};
pub use invoke::{invoke, Invocation, MethodName, Methods};
pub use iterate::{each, fold, identity, reduce};
pub use merge::{defaults, extend, Mapping};
pub use queries::{
    contains, every, every_truthy, filter, first, first_n, index_of, last, last_n, map, pluck,
    reject, some, some_truthy, uniq,
};
pub use truthy::Truthy;
