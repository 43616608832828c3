//! Shape dispatch for everything the iteration primitives accept.
//!
//! A [`Collection`] is either an ordered sequence (visited by ascending index)
//! or a string-keyed mapping (visited in the map's own key order). Scalars
//! behave like an empty collection.

use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;

/// Position of an element inside its collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    /// Offset into a sequence
    Index(usize),
    /// Key of a mapping entry
    Name(&'a str),
}

impl<'a> Key<'a> {
    pub fn index(&self) -> Option<usize> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(_) => None,
        }
    }

    pub fn name(&self) -> Option<&'a str> {
        match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(name),
        }
    }
}

/// Indices render as their decimal form, so a sequence merged into a
/// mapping contributes the keys `"0"`, `"1"`, ...
impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{}", index),
            Key::Name(name) => f.write_str(name),
        }
    }
}

/// Borrowed entries of a mapping
pub type Entries<'a, T> = Box<dyn Iterator<Item = (&'a str, &'a T)> + 'a>;

/// The shape a collection presents to [`each`](crate::each)
pub enum View<'a, T> {
    Sequence(&'a [T]),
    Mapping(Entries<'a, T>),
    Empty,
}

impl<T> fmt::Debug for View<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Sequence(items) => f.debug_struct("Sequence").field("len", &items.len()).finish(),
            View::Mapping(_) => f.write_str("Mapping"),
            View::Empty => f.write_str("Empty"),
        }
    }
}

/// Anything that can be walked by [`each`](crate::each).
pub trait Collection {
    type Item;

    fn view(&self) -> View<'_, Self::Item>;
}

impl<T> Collection for [T] {
    type Item = T;

    fn view(&self) -> View<'_, T> {
        View::Sequence(self)
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;

    fn view(&self) -> View<'_, T> {
        View::Sequence(self.as_slice())
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;

    fn view(&self) -> View<'_, T> {
        View::Sequence(self.as_slice())
    }
}

impl<V> Collection for BTreeMap<String, V> {
    type Item = V;

    fn view(&self) -> View<'_, V> {
        View::Mapping(Box::new(self.iter().map(|(k, v)| (k.as_str(), v))))
    }
}

impl<V, S> Collection for HashMap<String, V, S> {
    type Item = V;

    fn view(&self) -> View<'_, V> {
        View::Mapping(Box::new(self.iter().map(|(k, v)| (k.as_str(), v))))
    }
}

impl Collection for Map<String, Value> {
    type Item = Value;

    fn view(&self) -> View<'_, Value> {
        View::Mapping(Box::new(self.iter().map(|(k, v)| (k.as_str(), v))))
    }
}

/// JSON arrays are sequences, JSON objects are mappings, scalars are empty.
impl Collection for Value {
    type Item = Value;

    fn view(&self) -> View<'_, Value> {
        match self {
            Value::Array(items) => View::Sequence(items.as_slice()),
            Value::Object(entries) => entries.view(),
            _ => View::Empty,
        }
    }
}

impl<C: Collection + ?Sized> Collection for &C {
    type Item = C::Item;

    fn view(&self) -> View<'_, C::Item> {
        (**self).view()
    }
}

/// Property lookup by name, used by [`pluck`](crate::pluck) and
/// [`sort_by_property`](crate::sort_by_property).
pub trait Keyed {
    type Value;

    fn lookup(&self, key: &str) -> Option<&Self::Value>;
}

impl Keyed for Value {
    type Value = Value;

    fn lookup(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(entries) => entries.get(key),
            Value::Array(items) => key.parse::<usize>().ok().and_then(|index| items.get(index)),
            _ => None,
        }
    }
}

impl Keyed for Map<String, Value> {
    type Value = Value;

    fn lookup(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

impl<V> Keyed for BTreeMap<String, V> {
    type Value = V;

    fn lookup(&self, key: &str) -> Option<&V> {
        self.get(key)
    }
}

impl<V, S: BuildHasher> Keyed for HashMap<String, V, S> {
    type Value = V;

    fn lookup(&self, key: &str) -> Option<&V> {
        self.get(key)
    }
}
