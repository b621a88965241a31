//! Conversions between `Value` and native Rust types.
//!
//! Writing is infallible and goes through `From`. Reading is kind-checked:
//! `as_bool`, `as_int`, `as_double` and `as_str` return `TypeMismatch` unless
//! the value holds the requested kind. The one relaxation is between the two
//! numeric kinds: an `Int` reads as a `Double`, and a finite `Double` inside the
//! `i64` range reads as an `Int`, truncated toward zero.
//!
//! Comparing a `Value` with a native literal (`v == 30`, `v == "x"`) converts
//! the literal and uses deep equality, so a kind mismatch is simply `false`.

use crate::error::{JsonError, Result};
use crate::value::{Map, Value};
use std::rc::Rc;

// i64::MAX as f64 rounds up to 2^63, which is itself out of range.
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

impl Value {
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(JsonError::mismatch("bool", other.kind())),
        }
    }

    pub fn as_int(&self) -> Result<i64> {
        match self {
            Value::Int(i) => Ok(*i),
            Value::Double(d) if d.is_finite() && *d >= i64::MIN as f64 && *d < I64_UPPER_BOUND => {
                Ok(d.trunc() as i64)
            }
            other => Err(JsonError::mismatch("int", other.kind())),
        }
    }

    pub fn as_double(&self) -> Result<f64> {
        match self {
            Value::Double(d) => Ok(*d),
            Value::Int(i) => Ok(*i as f64),
            other => Err(JsonError::mismatch("double", other.kind())),
        }
    }

    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(JsonError::mismatch("string", other.kind())),
        }
    }
}

// ---------------------------------------------------------------------------
// Native -> Value
// ---------------------------------------------------------------------------

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Int(i64::from(n))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

// Wide unsigned values above i64::MAX become Double, the same rule the parser
// applies to oversized integer literals.
macro_rules! from_wide_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    i64::try_from(n).map_or(Value::Double(n as f64), Value::Int)
                }
            }
        )*
    };
}

from_wide_unsigned!(u64, usize);

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Double(f64::from(f))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Double(f)
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

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(Rc::new(map))
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Array(Rc::new(iter.into_iter().map(Into::into).collect()))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let map: Map = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Value::Object(Rc::new(map))
    }
}

// ---------------------------------------------------------------------------
// Value -> native
// ---------------------------------------------------------------------------

impl TryFrom<&Value> for bool {
    type Error = JsonError;

    fn try_from(value: &Value) -> Result<Self> {
        value.as_bool()
    }
}

impl TryFrom<&Value> for i64 {
    type Error = JsonError;

    fn try_from(value: &Value) -> Result<Self> {
        value.as_int()
    }
}

impl TryFrom<&Value> for f64 {
    type Error = JsonError;

    fn try_from(value: &Value) -> Result<Self> {
        value.as_double()
    }
}

impl TryFrom<&Value> for String {
    type Error = JsonError;

    fn try_from(value: &Value) -> Result<Self> {
        value.as_str().map(str::to_string)
    }
}

impl TryFrom<Value> for String {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(JsonError::mismatch("string", other.kind())),
        }
    }
}

// ---------------------------------------------------------------------------
// Equality against literals
// ---------------------------------------------------------------------------

macro_rules! eq_literal {
    ($($ty:ty => $variant:ident as $conv:ty),* $(,)?) => {
        $(
            impl PartialEq<$ty> for Value {
                fn eq(&self, other: &$ty) -> bool {
                    matches!(self, Value::$variant(v) if *v == <$conv>::from(*other))
                }
            }

            impl PartialEq<Value> for $ty {
                fn eq(&self, other: &Value) -> bool {
                    other == self
                }
            }
        )*
    };
}

eq_literal! {
    bool => Bool as bool,
    i8 => Int as i64,
    i16 => Int as i64,
    i32 => Int as i64,
    i64 => Int as i64,
    u8 => Int as i64,
    u16 => Int as i64,
    u32 => Int as i64,
    f32 => Double as f64,
    f64 => Double as f64,
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Value::String(s) if s == other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == *self
    }
}

impl PartialEq<Value> for String {
    fn eq(&self, other: &Value) -> bool {
        other == self.as_str()
    }
}

// ---------------------------------------------------------------------------
// serde_json interop
// ---------------------------------------------------------------------------

impl From<serde_json::Value> for Value {
    /// Integers outside the `i64` range become `Double`.
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Double(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => items.into_iter().collect(),
            serde_json::Value::Object(map) => map.into_iter().collect(),
        }
    }
}

impl From<&Value> for serde_json::Value {
    /// Non-finite doubles have no JSON form and become `null`.
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::Number((*i).into()),
            Value::Double(d) => serde_json::Number::from_f64(*d)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        serde_json::Value::from(&value)
    }
}
