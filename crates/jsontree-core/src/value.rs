//! Access and mutation of [`Value`] trees.
//!
//! Two families of accessors exist and must not be confused:
//!
//! - **Read-only** accessors (`get_*`, [`Value::at`], [`Value::at_key`]) never
//!   change the value. They fail with [`JsonError::TypeMismatch`],
//!   [`JsonError::OutOfBounds`] or [`JsonError::KeyNotFound`].
//! - **Get-or-create** accessors ([`Value::slot`], [`Value::entry`],
//!   [`Value::push`] and the `IndexMut` operators) coerce the value to an
//!   array or object when it is not one already, discarding whatever was
//!   stored before, and insert `Null` entries on demand. Reading through
//!   them is also a write.
//!
//! ```
//! use jsontree_core::Value;
//!
//! let mut v = Value::Null;
//! v[2] = Value::from("x");
//! assert_eq!(v.size().unwrap(), 3);
//! assert!(v[0].is_null());
//!
//! v["name"] = Value::from("coerced");
//! assert!(v.is_object());
//! ```

use std::ops::{Index, IndexMut};

use crate::error::{JsonError, Result};
use crate::types::{Map, Value, ValueType};

impl Value {
    fn mismatch(&self, expected: ValueType) -> JsonError {
        JsonError::mismatch(expected, self.value_type())
    }

    /// The `Bool` payload, or [`JsonError::TypeMismatch`] for any other variant.
    pub fn get_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            _ => Err(self.mismatch(ValueType::Bool)),
        }
    }

    /// Mutable reference to the `Bool` payload.
    pub fn get_bool_mut(&mut self) -> Result<&mut bool> {
        match self {
            Value::Bool(b) => Ok(b),
            other => Err(other.mismatch(ValueType::Bool)),
        }
    }

    /// The `Int` payload. A `Double` is not narrowed.
    pub fn get_int(&self) -> Result<i32> {
        match self {
            Value::Int(n) => Ok(*n),
            _ => Err(self.mismatch(ValueType::Int)),
        }
    }

    /// Mutable reference to the `Int` payload.
    pub fn get_int_mut(&mut self) -> Result<&mut i32> {
        match self {
            Value::Int(n) => Ok(n),
            other => Err(other.mismatch(ValueType::Int)),
        }
    }

    /// The `Double` payload. An `Int` is not widened: the variant must match.
    pub fn get_double(&self) -> Result<f64> {
        match self {
            Value::Double(d) => Ok(*d),
            _ => Err(self.mismatch(ValueType::Double)),
        }
    }

    /// Mutable reference to the `Double` payload.
    pub fn get_double_mut(&mut self) -> Result<&mut f64> {
        match self {
            Value::Double(d) => Ok(d),
            other => Err(other.mismatch(ValueType::Double)),
        }
    }

    /// Borrow the `String` payload.
    pub fn get_string(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(self.mismatch(ValueType::String)),
        }
    }

    /// Mutable reference to the `String` payload.
    pub fn get_string_mut(&mut self) -> Result<&mut String> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch(ValueType::String)),
        }
    }

    /// Borrow the elements of an `Array`.
    pub fn get_array(&self) -> Result<&[Value]> {
        match self {
            Value::Array(items) => Ok(items),
            _ => Err(self.mismatch(ValueType::Array)),
        }
    }

    /// Mutable access to the element vector of an `Array`.
    pub fn get_array_mut(&mut self) -> Result<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(other.mismatch(ValueType::Array)),
        }
    }

    /// Borrow the members of an `Object`, sorted by key.
    pub fn get_object(&self) -> Result<&Map> {
        match self {
            Value::Object(map) => Ok(map),
            _ => Err(self.mismatch(ValueType::Object)),
        }
    }

    /// Mutable access to the member map of an `Object`.
    pub fn get_object_mut(&mut self) -> Result<&mut Map> {
        match self {
            Value::Object(map) => Ok(map),
            other => Err(other.mismatch(ValueType::Object)),
        }
    }

    /// Read-only element access. The value must already be an array and
    /// `index` must be in range.
    pub fn at(&self, index: usize) -> Result<&Value> {
        let items = self.get_array()?;
        items.get(index).ok_or(JsonError::OutOfBounds {
            index,
            len: items.len(),
        })
    }

    /// Read-only member access. A missing key is an error; nothing is inserted.
    pub fn at_key(&self, key: &str) -> Result<&Value> {
        self.get_object()?
            .get(key)
            .ok_or_else(|| JsonError::KeyNotFound(key.to_string()))
    }

    /// Mutable element access without coercion or growth.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut Value> {
        let items = self.get_array_mut()?;
        let len = items.len();
        items.get_mut(index).ok_or(JsonError::OutOfBounds { index, len })
    }

    /// Mutable member access without coercion or insertion.
    pub fn at_key_mut(&mut self, key: &str) -> Result<&mut Value> {
        self.get_object_mut()?
            .get_mut(key)
            .ok_or_else(|| JsonError::KeyNotFound(key.to_string()))
    }

    /// Get-or-create element access.
    ///
    /// Coerces the value to an empty array if it is not an array (dropping
    /// the previous payload), pads with `Null` until `index` is in range and
    /// returns the slot at `index`.
    pub fn slot(&mut self, index: usize) -> &mut Value {
        let items = self.coerce_array();
        if index >= items.len() {
            items.resize(index + 1, Value::Null);
        }
        &mut items[index]
    }

    /// Get-or-create member access.
    ///
    /// Coerces the value to an empty object if it is not an object (dropping
    /// the previous payload) and inserts `Null` under `key` when absent.
    pub fn entry(&mut self, key: impl Into<String>) -> &mut Value {
        self.coerce_object().entry(key.into()).or_default()
    }

    /// Switch the live variant to `t`.
    ///
    /// A no-op when the variant already matches; otherwise the old payload is
    /// dropped and replaced by the default of `t` (`false`, `0`, `0.0`, or an
    /// empty string, array or object).
    pub fn set_type(&mut self, t: ValueType) {
        if self.value_type() == t {
            return;
        }
        if self.is_container() {
            tracing::trace!(from = %self.value_type(), to = %t, "discarding container payload");
        }
        *self = t.default_value();
    }

    /// Element count of an array or key count of an object.
    ///
    /// Scalars have no size and yield [`JsonError::TypeMismatch`] with
    /// `expected` set to `ARRAY`.
    pub fn size(&self) -> Result<usize> {
        match self {
            Value::Array(items) => Ok(items.len()),
            Value::Object(map) => Ok(map.len()),
            other => Err(other.mismatch(ValueType::Array)),
        }
    }

    /// Append to the array, coercing the value to an array first if needed.
    pub fn push(&mut self, item: impl Into<Value>) {
        self.coerce_array().push(item.into());
    }

    /// Remove and return the last array element.
    ///
    /// Returns `None` without touching the value when it is not an array or
    /// the array is empty.
    pub fn pop(&mut self) -> Option<Value> {
        match self {
            Value::Array(items) => items.pop(),
            _ => None,
        }
    }

    /// Move the payload out, leaving `Null` behind.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    fn coerce_array(&mut self) -> &mut Vec<Value> {
        if !self.is_array() {
            tracing::trace!(from = %self.value_type(), "coercing value to ARRAY");
            *self = Value::Array(Vec::new());
        }
        let Value::Array(items) = self else {
            unreachable!("value was just coerced to an array")
        };
        items
    }

    fn coerce_object(&mut self) -> &mut Map {
        if !self.is_object() {
            tracing::trace!(from = %self.value_type(), "coercing value to OBJECT");
            *self = Value::Object(Map::new());
        }
        let Value::Object(map) = self else {
            unreachable!("value was just coerced to an object")
        };
        map
    }
}

/// Panics on a non-array or an out-of-range index, like slice indexing.
impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        match self.at(index) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Get-or-create: see [`Value::slot`].
impl IndexMut<usize> for Value {
    fn index_mut(&mut self, index: usize) -> &mut Value {
        self.slot(index)
    }
}

/// Panics on a non-object or a missing key, like `BTreeMap` indexing.
impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        match self.at_key(key) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Get-or-create: see [`Value::entry`].
impl IndexMut<&str> for Value {
    fn index_mut(&mut self, key: &str) -> &mut Value {
        self.entry(key)
    }
}
