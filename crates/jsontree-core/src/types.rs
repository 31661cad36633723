//! The `Value` document node and its construction helpers.
//!
//! A `Value` is a tagged union over seven variants. String, array and object
//! payloads are owned by the variant that holds them, so cloning is always a
//! deep copy and replacing a variant drops the old payload.
//!
//! Objects are backed by a `BTreeMap`: iteration and serialization follow the
//! sorted order of the keys, not the order in which they were inserted.

use std::collections::BTreeMap;
use std::fmt;

/// Object payload: string keys mapped to values, ordered by key.
pub type Map = BTreeMap<String, Value>;

/// A JSON-like datum. Exactly one variant is live at any time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i32),
    Double(f64),
    String(String),
    Array(Vec<Value>),
    /// Key-value pairs in sorted key order.
    Object(Map),
}

/// The discriminant of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Null,
    Bool,
    Int,
    Double,
    String,
    Array,
    Object,
}

impl ValueType {
    /// Upper-case name used in diagnostics (`NULL`, `BOOL`, ...).
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Null => "NULL",
            ValueType::Bool => "BOOL",
            ValueType::Int => "INT",
            ValueType::Double => "DOUBLE",
            ValueType::String => "STRING",
            ValueType::Array => "ARRAY",
            ValueType::Object => "OBJECT",
        }
    }

    /// The fresh default value installed by [`Value::set_type`].
    pub fn default_value(self) -> Value {
        match self {
            ValueType::Null => Value::Null,
            ValueType::Bool => Value::Bool(false),
            ValueType::Int => Value::Int(0),
            ValueType::Double => Value::Double(0.0),
            ValueType::String => Value::String(String::new()),
            ValueType::Array => Value::Array(Vec::new()),
            ValueType::Object => Value::Object(Map::new()),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// `null`.
    pub fn null() -> Self {
        Value::Null
    }

    /// A `Bool`.
    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    /// An `Int`.
    pub fn int(n: i32) -> Self {
        Value::Int(n)
    }

    /// A `Double`. Whole numbers stay doubles: `Value::double(1.0)` prints as `1.0`.
    pub fn double(d: f64) -> Self {
        Value::Double(d)
    }

    /// A `String`, taking ownership of `s`.
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Build an array from an ordered sequence of values.
    ///
    /// ```
    /// use jsontree_core::Value;
    ///
    /// let v = Value::array([Value::from(1), Value::from("two"), Value::Null]);
    /// assert_eq!(v.size().unwrap(), 3);
    /// ```
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    /// Build an object from key/value pairs. A repeated key keeps the last value.
    ///
    /// ```
    /// use jsontree_core::Value;
    ///
    /// let v = Value::object([("b", Value::from(2)), ("a", Value::from(1))]);
    /// let keys: Vec<_> = v.get_object().unwrap().keys().cloned().collect();
    /// assert_eq!(keys, ["a", "b"]);
    /// ```
    pub fn object<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Object(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// An empty array. Equivalent to `Value::Array(Vec::new())`.
    pub fn empty_array() -> Self {
        Value::Array(Vec::new())
    }

    /// An empty object.
    pub fn empty_object() -> Self {
        Value::Object(Map::new())
    }

    /// The live variant.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Bool,
            Value::Int(_) => ValueType::Int,
            Value::Double(_) => ValueType::Double,
            Value::String(_) => ValueType::String,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }

    /// True for `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True for `Bool`.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// True for `Int`. Never true for a `Double` holding a whole number.
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// True for `Double`.
    pub fn is_double(&self) -> bool {
        matches!(self, Value::Double(_))
    }

    /// True for `String`.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// True for `Array`.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// True for `Object`.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// True for `Array` and `Object`.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Object(_))
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
