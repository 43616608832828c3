//! Merging mappings into a target mapping in place.

use super::collection::Collection;
use super::iterate::{each, fold};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A string-keyed mapping that can receive entries
pub trait Mapping {
    type Value;

    fn has_key(&self, key: &str) -> bool;

    fn set(&mut self, key: String, value: Self::Value);
}

impl<V> Mapping for BTreeMap<String, V> {
    type Value = V;

    fn has_key(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn set(&mut self, key: String, value: V) {
        self.insert(key, value);
    }
}

impl<V, S: BuildHasher> Mapping for HashMap<String, V, S> {
    type Value = V;

    fn has_key(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn set(&mut self, key: String, value: V) {
        self.insert(key, value);
    }
}

impl Mapping for Map<String, Value> {
    type Value = Value;

    fn has_key(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn set(&mut self, key: String, value: Value) {
        self.insert(key, value);
    }
}

/// Copy every entry of every source onto `target`.
///
/// Later sources overwrite earlier ones and the target's own entries. The
/// target itself is returned.
pub fn extend<'t, M, S>(target: &'t mut M, sources: &[S]) -> &'t mut M
where
    M: Mapping + ?Sized,
    M::Value: Clone,
    S: Collection<Item = M::Value>,
{
    fold(sources, target, |target, source, _, _| {
        each(source, |value, key, _| target.set(key.to_string(), value.clone()));
        target
    })
}

/// Copy entries onto `target` only for keys it does not have yet.
///
/// Presence alone blocks the copy, whatever the existing value is. Among
/// several sources the earliest one providing a key wins.
pub fn defaults<'t, M, S>(target: &'t mut M, sources: &[S]) -> &'t mut M
where
    M: Mapping + ?Sized,
    M::Value: Clone,
    S: Collection<Item = M::Value>,
{
    fold(sources, target, |target, source, _, _| {
        each(source, |value, key, _| {
            let key = key.to_string();
            if !target.has_key(&key) {
                target.set(key, value.clone());
            }
        });
        target
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(entries) => entries,
            other => panic!("expected an object, got {}", other),
        }
    }

    #[test]
    fn test_extend_returns_same_target() {
        let mut target = object(json!({}));
        let target_ptr: *const Map<String, Value> = &target;
        let returned = extend(&mut target, &[object(json!({"a": "b"}))]);
        assert!(std::ptr::eq(returned, target_ptr));
    }

    #[test]
    fn test_extend_last_source_wins() {
        let mut target = object(json!({"x": 0}));
        extend(
            &mut target,
            &[object(json!({"a": 1, "x": 1})), object(json!({"a": 2}))],
        );
        assert_eq!(Value::Object(target), json!({"x": 1, "a": 2}));
    }

    #[test]
    fn test_extend_from_sequence_uses_index_keys() {
        let mut target: BTreeMap<String, &str> = BTreeMap::new();
        extend(&mut target, &[vec!["zero", "one"]]);
        assert_eq!(target.get("0"), Some(&"zero"));
        assert_eq!(target.get("1"), Some(&"one"));
    }

    #[test]
    fn test_defaults_keeps_present_keys() {
        let mut target = object(json!({"x": "x"}));
        defaults(
            &mut target,
            &[object(json!({"a": "a", "x": 2})), object(json!({"a": 1}))],
        );
        assert_eq!(Value::Object(target), json!({"x": "x", "a": "a"}));
    }

    #[test]
    fn test_defaults_presence_not_truthiness() {
        let mut target: HashMap<String, f64> = HashMap::new();
        target.insert("zero".to_string(), 0.0);
        target.insert("nan".to_string(), f64::NAN);

        let mut source = HashMap::new();
        source.insert("zero".to_string(), 1.0);
        source.insert("nan".to_string(), 2.0);
        source.insert("fresh".to_string(), 3.0);

        defaults(&mut target, &[source]);

        assert_eq!(target["zero"], 0.0);
        assert!(target["nan"].is_nan());
        assert_eq!(target["fresh"], 3.0);
    }
}
