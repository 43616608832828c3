//! The iteration primitives every other operation is built on.

use super::collection::{Collection, Entries, Key, View};

/// Returns its argument unchanged.
pub fn identity<T>(value: T) -> T {
    value
}

/// Visit every element of a collection with `(value, key, collection)`.
///
/// Sequences are walked by ascending index, mappings in their own key order.
/// Nothing is visited for an empty collection or a scalar.
pub fn each<C, F>(collection: &C, mut visitor: F)
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item, Key<'_>, &C),
{
    fold(collection, (), |(), item, key, collection| visitor(item, key, collection));
}

/// Fold a collection without a seed.
///
/// The first element becomes the accumulator as-is; `combiner` only sees the
/// elements after it. An empty collection yields `None`.
pub fn reduce<C, F>(collection: &C, mut combiner: F) -> Option<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(C::Item, &C::Item, Key<'_>, &C) -> C::Item,
{
    fold(collection, None, |accumulator, item, key, collection| {
        Some(match accumulator {
            None => item.clone(),
            Some(acc) => combiner(acc, item, key, collection),
        })
    })
}

/// Fold a collection into `seed`, combining every element.
///
/// This is the only function that walks a collection's storage; [`each`] and
/// [`reduce`] are built on it.
pub fn fold<C, A, F>(collection: &C, seed: A, mut combiner: F) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &C::Item, Key<'_>, &C) -> A,
{
    match collection.view() {
        View::Sequence(items) => fold_sequence(items, seed, |acc, item, index| {
            combiner(acc, item, Key::Index(index), collection)
        }),
        View::Mapping(entries) => fold_mapping(entries, seed, |acc, item, name| {
            combiner(acc, item, Key::Name(name), collection)
        }),
        View::Empty => seed,
    }
}

fn fold_sequence<T, A>(items: &[T], seed: A, mut step: impl FnMut(A, &T, usize) -> A) -> A {
    let mut accumulator = seed;
    for (index, item) in items.iter().enumerate() {
        accumulator = step(accumulator, item, index);
    }
    accumulator
}

fn fold_mapping<'a, T, A>(
    entries: Entries<'a, T>,
    seed: A,
    mut step: impl FnMut(A, &'a T, &'a str) -> A,
) -> A {
    let mut accumulator = seed;
    for (name, item) in entries {
        accumulator = step(accumulator, item, name);
    }
    accumulator
}
