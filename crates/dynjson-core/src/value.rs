//! The `Value` type: one JSON value of any of the seven kinds.
//!
//! Scalars are stored inline. Arrays and objects live behind an `Rc` and are
//! shared between clones until one of them is mutated; every mutating path goes
//! through [`Rc::make_mut`], which clones the container first when it is shared.
//! A clone therefore behaves as a deep copy from the caller's point of view.
//!
//! Because of the `Rc`, `Value` is neither `Send` nor `Sync`. Hand values to
//! another thread as text or as a `serde_json::Value`.

use crate::error::{JsonError, Result};
use indexmap::IndexMap;
use std::fmt;
use std::rc::Rc;

/// Element storage of a JSON array.
pub type Array = Vec<Value>;

/// Entry storage of a JSON object, in insertion order.
pub type Map = IndexMap<String, Value>;

/// A dynamically-typed JSON value.
///
/// Equality is deep. Objects compare equal when they hold the same keys with
/// equal values, regardless of insertion order. `Int(1)` and `Double(1.0)` are
/// different kinds and never compare equal.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
    Array(Rc<Array>),
    Object(Rc<Map>),
}

/// The discriminant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Int,
    Double,
    String,
    Array,
    Object,
}

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Double => "double",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// An empty array.
    pub fn array() -> Self {
        Value::Array(Rc::default())
    }

    /// An empty object.
    pub fn object() -> Self {
        Value::Object(Rc::default())
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Double(_) => Kind::Double,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub fn is_double(&self) -> bool {
        matches!(self, Value::Double(_))
    }

    /// True for both `Int` and `Double`.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Double(_))
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

    /// Replace this value, kind and storage together.
    ///
    /// ```
    /// use dynjson_core::Value;
    /// let mut v = Value::default();
    /// v.set(3);
    /// assert!(v.is_int());
    /// v.set("three");
    /// assert_eq!(v, "three");
    /// ```
    pub fn set(&mut self, value: impl Into<Value>) {
        *self = value.into();
    }

    /// Move the value out, leaving `Null` behind.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    /// Read-only view of the elements of an array.
    pub fn as_array(&self) -> Result<&[Value]> {
        match self {
            Value::Array(items) => Ok(items.as_slice()),
            other => Err(JsonError::mismatch("array", other.kind())),
        }
    }

    /// Read-only view of the entries of an object.
    pub fn as_object(&self) -> Result<&Map> {
        match self {
            Value::Object(map) => Ok(&**map),
            other => Err(JsonError::mismatch("object", other.kind())),
        }
    }

    /// Mutable access to the elements of an array, unsharing them first.
    pub fn as_array_mut(&mut self) -> Result<&mut Array> {
        match self {
            Value::Array(items) => Ok(Rc::make_mut(items)),
            other => Err(JsonError::mismatch("array", other.kind())),
        }
    }

    /// Mutable access to the entries of an object, unsharing them first.
    pub fn as_object_mut(&mut self) -> Result<&mut Map> {
        match self {
            Value::Object(map) => Ok(Rc::make_mut(map)),
            other => Err(JsonError::mismatch("object", other.kind())),
        }
    }

    /// Like [`as_array_mut`](Self::as_array_mut), but a `Null` becomes an
    /// empty array first.
    pub(crate) fn vivify_array(&mut self) -> Result<&mut Array> {
        if self.is_null() {
            *self = Value::array();
        }
        self.as_array_mut()
    }

    /// Like [`as_object_mut`](Self::as_object_mut), but a `Null` becomes an
    /// empty object first.
    pub(crate) fn vivify_object(&mut self) -> Result<&mut Map> {
        if self.is_null() {
            *self = Value::object();
        }
        self.as_object_mut()
    }

    /// Whether this value's container storage is currently shared with
    /// another clone. Always false for scalars.
    pub fn is_shared(&self) -> bool {
        match self {
            Value::Array(items) => Rc::strong_count(items) > 1,
            Value::Object(map) => Rc::strong_count(map) > 1,
            _ => false,
        }
    }
}
