//! Calling a method on every element of a collection.

use super::advanced::{sort_by, JsonOrder};
use super::collection::Collection;
use super::iterate::fold;
use super::queries::map;
use crate::error::{Result, UnderbarError};
use serde_json::Value;

/// Methods an element exposes to [`invoke`] by name.
pub trait Methods {
    fn call_method(&self, name: &str, args: &[Value]) -> Result<Value>;
}

/// What [`invoke`] calls on each element: a closure receiving the element, or
/// a [`MethodName`] resolved through [`Methods`].
pub trait Invocation<T: ?Sized> {
    fn invoke_on(&self, target: &T, args: &[Value]) -> Result<Value>;
}

impl<T: ?Sized, F> Invocation<T> for F
where
    F: Fn(&T, &[Value]) -> Value,
{
    fn invoke_on(&self, target: &T, args: &[Value]) -> Result<Value> {
        Ok(self(target, args))
    }
}

/// A method looked up by name on each element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodName<'a>(pub &'a str);

impl<T: Methods + ?Sized> Invocation<T> for MethodName<'_> {
    fn invoke_on(&self, target: &T, args: &[Value]) -> Result<Value> {
        target.call_method(self.0, args)
    }
}

/// Call `method` on every element with `args`, collecting the results in
/// order. The first failing call aborts with its error.
pub fn invoke<C, M>(collection: &C, method: M, args: &[Value]) -> Result<Vec<Value>>
where
    C: Collection + ?Sized,
    M: Invocation<C::Item>,
{
    fold(collection, Ok(Vec::new()), |results: Result<Vec<Value>>, item, _, _| {
        let mut results = results?;
        results.push(method.invoke_on(item, args)?);
        Ok(results)
    })
}

fn unknown(name: &str, kind: &str) -> UnderbarError {
    UnderbarError::unknown_method(format!("{} on {}", name, kind))
}

/// Count for `repeat`: the first argument, or 1 when none is given.
///
/// Fails when the count is not a non-negative integer or the repeated string
/// would not fit in memory.
fn repeat_count(len: usize, args: &[Value]) -> Result<usize> {
    let Some(count) = args.first() else {
        return Ok(1);
    };
    let times = count
        .as_u64()
        .and_then(|times| usize::try_from(times).ok())
        .ok_or_else(|| {
            UnderbarError::invalid_argument(format!(
                "repeat count must be a non-negative integer, got {}",
                count
            ))
        })?;

    match len.checked_mul(times) {
        Some(total) if total <= isize::MAX as usize => Ok(times),
        _ => Err(UnderbarError::invalid_argument(format!(
            "repeat count {} overflows the string length",
            times
        ))),
    }
}

impl Methods for str {
    fn call_method(&self, name: &str, args: &[Value]) -> Result<Value> {
        let value = match name {
            "to_uppercase" => Value::from(self.to_uppercase()),
            "to_lowercase" => Value::from(self.to_lowercase()),
            "trim" => Value::from(self.trim()),
            "len" => Value::from(self.chars().count()),
            "is_empty" => Value::from(self.is_empty()),
            "reverse" => Value::from(self.chars().rev().collect::<String>()),
            "repeat" => Value::from(self.repeat(repeat_count(self.len(), args)?)),
            _ => return Err(unknown(name, "string")),
        };
        Ok(value)
    }
}

impl Methods for String {
    fn call_method(&self, name: &str, args: &[Value]) -> Result<Value> {
        self.as_str().call_method(name, args)
    }
}

impl Methods for Value {
    fn call_method(&self, name: &str, args: &[Value]) -> Result<Value> {
        match self {
            Value::String(s) => s.as_str().call_method(name, args),
            Value::Array(items) => match name {
                "len" => Ok(Value::from(items.len())),
                "is_empty" => Ok(Value::from(items.is_empty())),
                "reverse" => Ok(Value::Array(fold(items, Vec::new(), |mut reversed, item, _, _| {
                    reversed.insert(0, item.clone());
                    reversed
                }))),
                "sort" => Ok(Value::Array(sort_by(items, |item| {
                    JsonOrder(Some(item.clone()))
                }))),
                "join" => {
                    let separator = args.first().and_then(Value::as_str).unwrap_or(",");
                    let parts = map(items, |item| match item {
                        Value::String(s) => s.clone(),
                        Value::Null => String::new(),
                        other => other.to_string(),
                    });
                    Ok(Value::from(parts.join(separator)))
                }
                _ => Err(unknown(name, "array")),
            },
            Value::Object(entries) => match name {
                "len" => Ok(Value::from(entries.len())),
                "is_empty" => Ok(Value::from(entries.is_empty())),
                "keys" => Ok(Value::from(fold(entries, Vec::new(), |mut keys, _, key, _| {
                    keys.push(Value::from(key.to_string()));
                    keys
                }))),
                _ => Err(unknown(name, "object")),
            },
            Value::Number(n) => match name {
                "to_string" => Ok(Value::from(n.to_string())),
                "abs" => match (n.as_i64(), n.as_f64()) {
                    (Some(i), _) => Ok(Value::from(i.saturating_abs())),
                    (None, Some(f)) => Ok(Value::from(f.abs())),
                    (None, None) => Ok(self.clone()),
                },
                _ => Err(unknown(name, "number")),
            },
            Value::Bool(b) => match name {
                "to_string" => Ok(Value::from(b.to_string())),
                _ => Err(unknown(name, "boolean")),
            },
            Value::Null => Err(unknown(name, "null")),
        }
    }
}
