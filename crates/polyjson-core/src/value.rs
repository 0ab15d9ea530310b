//! The document tree.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::error::ParseError;
use crate::number::Number;
use crate::policy::{DoublePolicy, NumberPolicy};

/// A parsed JSON document value, generic over the numeric policy `P`.
///
/// Arrays and objects exclusively own their children: dropping a
/// container drops the subtree and [`Clone`] is a deep copy. Objects keep
/// entries in insertion order with unique keys — [`Value::insert`], the
/// decoder, and the serde integration all replace an existing key's value
/// in place rather than appending a duplicate. Building an `Object`
/// variant by hand with duplicate keys is the caller's mistake; no
/// runtime check guards against it.
///
/// Equality follows JSON semantics: objects compare by key regardless of
/// entry order, arrays compare element-wise in order, and numbers compare
/// across subtypes (see [`Number`]).
pub enum Value<P: NumberPolicy = DoublePolicy> {
    Null,
    Bool(bool),
    Number(Number<P>),
    String(String),
    Array(Vec<Value<P>>),
    /// Key-value pairs in insertion order.
    Object(Vec<(String, Value<P>)>),
}

impl<P: NumberPolicy> Value<P> {
    /// An empty object.
    pub fn object() -> Self {
        Value::Object(Vec::new())
    }

    /// An empty array.
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    /// A float value in the policy's representation.
    pub fn float(value: P::Float) -> Self {
        Value::Number(Number::Float(value))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Number<P>> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The numeric value as `i64`, if this is an integer that fits.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(|n| n.as_i64())
    }

    /// The numeric value as `u64`, if this is an integer that fits.
    pub fn as_u64(&self) -> Option<u64> {
        self.as_number().and_then(|n| n.as_u64())
    }

    /// The float payload, if this is a float-subtype number.
    pub fn as_float(&self) -> Option<P::Float> {
        self.as_number().and_then(|n| n.as_float())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value<P>]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value<P>>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[(String, Value<P>)]> {
        match self {
            Value::Object(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Vec<(String, Value<P>)>> {
        match self {
            Value::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up an object entry by key. `None` for missing keys and for
    /// non-objects.
    pub fn get(&self, key: &str) -> Option<&Value<P>> {
        match self {
            Value::Object(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value<P>> {
        match self {
            Value::Object(entries) => {
                entries.iter_mut().find(|(k, _)| k == key).map(|(_, v)| v)
            }
            _ => None,
        }
    }

    /// Look up an array element by index. `None` out of bounds and for
    /// non-arrays.
    pub fn get_index(&self, index: usize) -> Option<&Value<P>> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Insert `value` under `key`, replacing the value of an existing key
    /// in place (insertion order is preserved). Returns the previous
    /// value, if any.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not an object.
    pub fn insert(&mut self, key: impl Into<String>, value: Value<P>) -> Option<Value<P>> {
        let key = key.into();
        match self {
            Value::Object(entries) => match entries.iter_mut().find(|(k, _)| *k == key) {
                Some((_, slot)) => Some(std::mem::replace(slot, value)),
                None => {
                    entries.push((key, value));
                    None
                }
            },
            other => panic!("cannot insert into {}", other.type_name()),
        }
    }

    /// Remove and return the entry under `key`. `None` for missing keys
    /// and for non-objects.
    pub fn remove(&mut self, key: &str) -> Option<Value<P>> {
        match self {
            Value::Object(entries) => entries
                .iter()
                .position(|(k, _)| k == key)
                .map(|pos| entries.remove(pos).1),
            _ => None,
        }
    }

    /// The variant name, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl<P: NumberPolicy> Clone for Value<P> {
    fn clone(&self) -> Self {
        match self {
            Value::Null => Value::Null,
            Value::Bool(b) => Value::Bool(*b),
            Value::Number(n) => Value::Number(*n),
            Value::String(s) => Value::String(s.clone()),
            Value::Array(items) => Value::Array(items.clone()),
            Value::Object(entries) => Value::Object(entries.clone()),
        }
    }
}

impl<P: NumberPolicy> fmt::Debug for Value<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Value::Object(entries) => f.debug_tuple("Object").field(entries).finish(),
        }
    }
}

impl<P: NumberPolicy> Default for Value<P> {
    fn default() -> Self {
        Value::Null
    }
}

impl<P: NumberPolicy> PartialEq for Value<P> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            // Key-based, order-insensitive; keys are unique by
            // construction, so a one-sided sweep is symmetric.
            (Value::Object(a), Value::Object(b)) => {
                a.len() == b.len()
                    && a.iter().all(|(key, value)| {
                        b.iter()
                            .find(|(other_key, _)| other_key == key)
                            .is_some_and(|(_, other_value)| value == other_value)
                    })
            }
            _ => false,
        }
    }
}

impl<P: NumberPolicy> FromStr for Value<P> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        crate::decoder::from_str(s)
    }
}

impl<P: NumberPolicy> From<bool> for Value<P> {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl<P: NumberPolicy> From<i64> for Value<P> {
    fn from(value: i64) -> Self {
        Value::Number(Number::Signed(value))
    }
}

impl<P: NumberPolicy> From<u64> for Value<P> {
    fn from(value: u64) -> Self {
        Value::Number(Number::Unsigned(value))
    }
}

impl<P: NumberPolicy> From<Number<P>> for Value<P> {
    fn from(value: Number<P>) -> Self {
        Value::Number(value)
    }
}

impl<P: NumberPolicy> From<&str> for Value<P> {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl<P: NumberPolicy> From<String> for Value<P> {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl<P: NumberPolicy> From<Vec<Value<P>>> for Value<P> {
    fn from(value: Vec<Value<P>>) -> Self {
        Value::Array(value)
    }
}

impl<P: NumberPolicy> FromIterator<Value<P>> for Value<P> {
    fn from_iter<I: IntoIterator<Item = Value<P>>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl<P: NumberPolicy, K: Into<String>> FromIterator<(K, Value<P>)> for Value<P> {
    fn from_iter<I: IntoIterator<Item = (K, Value<P>)>>(iter: I) -> Self {
        let mut value = Value::Object(Vec::new());
        for (key, item) in iter {
            value.insert(key, item);
        }
        value
    }
}

impl<P: NumberPolicy> Index<&str> for Value<P> {
    type Output = Value<P>;

    /// # Panics
    ///
    /// Panics if `self` is not an object or the key is missing.
    fn index(&self, key: &str) -> &Value<P> {
        match self.get(key) {
            Some(value) => value,
            None => panic!("no key {key:?} in {}", self.type_name()),
        }
    }
}

impl<P: NumberPolicy> IndexMut<&str> for Value<P> {
    /// Null auto-vivifies into an empty object, and a missing key is
    /// inserted as null, so `doc["key"] = value` works on a fresh
    /// document.
    ///
    /// # Panics
    ///
    /// Panics if `self` is neither null nor an object.
    fn index_mut(&mut self, key: &str) -> &mut Value<P> {
        if let Value::Null = self {
            *self = Value::Object(Vec::new());
        }
        match self {
            Value::Object(entries) => {
                let pos = match entries.iter().position(|(k, _)| k == key) {
                    Some(pos) => pos,
                    None => {
                        entries.push((key.to_owned(), Value::Null));
                        entries.len() - 1
                    }
                };
                &mut entries[pos].1
            }
            other => panic!("cannot index {} with a string key", other.type_name()),
        }
    }
}

impl<P: NumberPolicy> Index<usize> for Value<P> {
    type Output = Value<P>;

    /// # Panics
    ///
    /// Panics if `self` is not an array or the index is out of bounds.
    fn index(&self, index: usize) -> &Value<P> {
        match self {
            Value::Array(items) => &items[index],
            other => panic!("cannot index {} with a number", other.type_name()),
        }
    }
}

impl<P: NumberPolicy> IndexMut<usize> for Value<P> {
    fn index_mut(&mut self, index: usize) -> &mut Value<P> {
        match self {
            Value::Array(items) => &mut items[index],
            other => panic!("cannot index {} with a number", other.type_name()),
        }
    }
}

impl<P: NumberPolicy> PartialEq<bool> for Value<P> {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl<P: NumberPolicy> PartialEq<Value<P>> for bool {
    fn eq(&self, other: &Value<P>) -> bool {
        other == self
    }
}

impl<P: NumberPolicy> PartialEq<str> for Value<P> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl<P: NumberPolicy> PartialEq<&str> for Value<P> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl<P: NumberPolicy> PartialEq<Value<P>> for &str {
    fn eq(&self, other: &Value<P>) -> bool {
        other == self
    }
}

impl<P: NumberPolicy> PartialEq<String> for Value<P> {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == Some(other.as_str())
    }
}

impl<P: NumberPolicy> PartialEq<Value<P>> for String {
    fn eq(&self, other: &Value<P>) -> bool {
        other == self
    }
}

impl<P: NumberPolicy> PartialEq<i64> for Value<P> {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Value::Number(n) if *n == Number::Signed(*other))
    }
}

impl<P: NumberPolicy> PartialEq<Value<P>> for i64 {
    fn eq(&self, other: &Value<P>) -> bool {
        other == self
    }
}

impl<P: NumberPolicy> PartialEq<u64> for Value<P> {
    fn eq(&self, other: &u64) -> bool {
        matches!(self, Value::Number(n) if *n == Number::Unsigned(*other))
    }
}

impl<P: NumberPolicy> PartialEq<Value<P>> for u64 {
    fn eq(&self, other: &Value<P>) -> bool {
        other == self
    }
}

impl<P: NumberPolicy<Float = f64>> PartialEq<f64> for Value<P> {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, Value::Number(n) if *n == Number::Float(*other))
    }
}

impl<P: NumberPolicy<Float = f64>> PartialEq<Value<P>> for f64 {
    fn eq(&self, other: &Value<P>) -> bool {
        other == self
    }
}
