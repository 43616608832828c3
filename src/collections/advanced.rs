//! Shuffling, sorting and set-like operations over arrays.

use super::collection::{Collection, Keyed};
use super::iterate::{each, fold};
use super::queries::{contains, every, filter, map, reject, some, uniq};
use rand::Rng;
use serde_json::Value;
use std::cmp::Ordering;

/// A randomly ordered copy of `array`, leaving the input untouched
pub fn shuffle<T: Clone>(array: &[T]) -> Vec<T> {
    shuffle_with(array, &mut rand::thread_rng())
}

/// [`shuffle`] driven by a caller-supplied random source.
///
/// Walks the copy front to back, swapping each slot with a uniformly chosen
/// slot at or after it (Fisher–Yates).
pub fn shuffle_with<T, R>(array: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng,
{
    let len = array.len();

    fold(array, array.to_vec(), |mut shuffled, _, key, _| {
        if let Some(index) = key.index() {
            let other = rng.gen_range(index..len);
            shuffled.swap(index, other);
        }
        shuffled
    })
}

/// Stable sort by a key derived from each element.
///
/// Keys that cannot be compared even with themselves (such as `NaN`) sort
/// after every other key, keeping their relative order.
pub fn sort_by<C, K, F>(collection: &C, mut key_fn: F) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    K: PartialOrd,
    F: FnMut(&C::Item) -> K,
{
    let mut keyed = map(collection, |item| (key_fn(item), item.clone()));
    keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b));

    map(&keyed, |(_, item)| item.clone())
}

fn compare_keys<K: PartialOrd>(a: &K, b: &K) -> Ordering {
    a.partial_cmp(b).unwrap_or_else(|| {
        let a_ordered = a.partial_cmp(a).is_some();
        let b_ordered = b.partial_cmp(b).is_some();
        b_ordered.cmp(&a_ordered)
    })
}

/// Stable sort of keyed elements by one of their properties.
///
/// Numbers sort before strings, strings before booleans; elements missing
/// the property (or holding `null`) go last.
pub fn sort_by_property<C>(collection: &C, name: &str) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone + Keyed<Value = Value>,
{
    sort_by(collection, |item| JsonOrder(item.lookup(name).cloned()))
}

/// Sort key giving JSON values a cross-type order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct JsonOrder(pub(crate) Option<Value>);

impl JsonOrder {
    fn rank(&self) -> u8 {
        match &self.0 {
            Some(Value::Number(_)) => 0,
            Some(Value::String(_)) => 1,
            Some(Value::Bool(_)) => 2,
            Some(Value::Array(_)) | Some(Value::Object(_)) => 3,
            Some(Value::Null) | None => 4,
        }
    }
}

impl PartialOrd for JsonOrder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (&self.0, &other.0) {
            (Some(Value::Number(a)), Some(Value::Number(b))) => a.as_f64()?.partial_cmp(&b.as_f64()?),
            (Some(Value::String(a)), Some(Value::String(b))) => Some(a.cmp(b)),
            (Some(Value::Bool(a)), Some(Value::Bool(b))) => Some(a.cmp(b)),
            _ => match self.rank().cmp(&other.rank()) {
                Ordering::Equal => None,
                unequal => Some(unequal),
            },
        }
    }
}

/// Index-wise tuples of several arrays, padded with `None` to the longest
pub fn zip<T: Clone>(arrays: &[&[T]]) -> Vec<Vec<Option<T>>> {
    let longest = fold(arrays, 0_usize, |longest, array, _, _| longest.max(array.len()));
    let rows: Vec<usize> = (0..longest).collect();

    map(&rows, |index| map(arrays, |array| array.get(*index).cloned()))
}

/// Recursively flatten nested JSON arrays into one level.
///
/// A non-array value flattens to itself.
pub fn flatten(nested: &Value) -> Vec<Value> {
    fn flatten_into(value: &Value, flat: &mut Vec<Value>) {
        match value {
            Value::Array(_) => each(value, |item, _, _| flatten_into(item, flat)),
            other => flat.push(other.clone()),
        }
    }

    let mut flat = Vec::new();
    flatten_into(nested, &mut flat);
    flat
}

/// Remove exactly one level of nesting
pub fn flatten_shallow<T: Clone>(nested: &[Vec<T>]) -> Vec<T> {
    fold(nested, Vec::new(), |mut flat, inner, _, _| {
        each(inner, |item, _, _| flat.push(item.clone()));
        flat
    })
}

/// Distinct elements of the first array that every other array contains
pub fn intersection<T: Clone + PartialEq>(arrays: &[&[T]]) -> Vec<T> {
    let Some((head, rest)) = arrays.split_first() else {
        return Vec::new();
    };

    filter(&uniq(*head), |item| every(rest, |other| contains(*other, item)))
}

/// Elements of `array` that none of `others` contain
pub fn difference<T: Clone + PartialEq>(array: &[T], others: &[&[T]]) -> Vec<T> {
    reject(array, |item| some(others, |other| contains(*other, item)))
}
