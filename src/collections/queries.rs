//! Read-only queries derived from [`each`] and [`fold`].

use super::collection::{Collection, Keyed};
use super::iterate::{each, fold};
use super::truthy::Truthy;

/// First element of an array
pub fn first<T>(array: &[T]) -> Option<&T> {
    array.first()
}

/// First `n` elements; fewer when the array is shorter
pub fn first_n<T: Clone>(array: &[T], n: usize) -> Vec<T> {
    array[..n.min(array.len())].to_vec()
}

/// Last element of an array
pub fn last<T>(array: &[T]) -> Option<&T> {
    array.last()
}

/// Last `n` elements; the whole array when `n` reaches its length
pub fn last_n<T: Clone>(array: &[T], n: usize) -> Vec<T> {
    if n >= array.len() {
        array.to_vec()
    } else {
        array[array.len() - n..].to_vec()
    }
}

/// Index of the first element equal to `target`
pub fn index_of<T: PartialEq>(array: &[T], target: &T) -> Option<usize> {
    let mut found = None;

    each(array, |item, key, _| {
        if found.is_none() && item == target {
            found = key.index();
        }
    });

    found
}

/// Elements for which `predicate` is truthy, in their original order
pub fn filter<C, F, R>(collection: &C, mut predicate: F) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(&C::Item) -> R,
    R: Truthy,
{
    let mut passed = Vec::new();

    each(collection, |item, _, _| {
        if predicate(item).is_truthy() {
            passed.push(item.clone());
        }
    });

    passed
}

/// Elements for which `predicate` is falsy
pub fn reject<C, F, R>(collection: &C, mut predicate: F) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(&C::Item) -> R,
    R: Truthy,
{
    filter(collection, |item| !predicate(item).is_truthy())
}

/// Duplicate-free copy, keeping the first occurrence of each element
pub fn uniq<C>(collection: &C) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone + PartialEq,
{
    let mut unique: Vec<C::Item> = Vec::new();

    each(collection, |item, _, _| {
        if index_of(&unique, item).is_none() {
            unique.push(item.clone());
        }
    });

    unique
}

/// Transform every element, preserving order
pub fn map<C, U, F>(collection: &C, mut transform: F) -> Vec<U>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> U,
{
    let mut mapped = Vec::new();

    each(collection, |item, _, _| mapped.push(transform(item)));

    mapped
}

/// Extract one property from every element; missing properties are `None`
pub fn pluck<C>(collection: &C, key: &str) -> Vec<Option<<C::Item as Keyed>::Value>>
where
    C: Collection + ?Sized,
    C::Item: Keyed,
    <C::Item as Keyed>::Value: Clone,
{
    map(collection, |item| item.lookup(key).cloned())
}

/// Whether any element equals `target`
pub fn contains<C>(collection: &C, target: &C::Item) -> bool
where
    C: Collection + ?Sized,
    C::Item: PartialEq,
{
    fold(collection, false, |found, item, _, _| found || item == target)
}

/// Whether `predicate` is truthy for every element.
///
/// Vacuously true for an empty collection. The predicate is not called again
/// once an element has failed.
pub fn every<C, F, R>(collection: &C, mut predicate: F) -> bool
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> R,
    R: Truthy,
{
    fold(collection, true, |passed, item, _, _| {
        passed && predicate(item).is_truthy()
    })
}

/// [`every`] with the elements' own truthiness as the test
pub fn every_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    every(collection, |item| item.is_truthy())
}

/// Whether `predicate` is truthy for at least one element
pub fn some<C, F, R>(collection: &C, mut predicate: F) -> bool
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> R,
    R: Truthy,
{
    fold(collection, false, |found, item, _, _| {
        found || predicate(item).is_truthy()
    })
}

/// [`some`] with the elements' own truthiness as the test
pub fn some_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    some(collection, |item| item.is_truthy())
}
