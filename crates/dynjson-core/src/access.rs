//! Indexing, membership and container mutation.
//!
//! There are two access paths:
//!
//! - **Read** ([`Value::at`], `value[i]`): the value must already be a container
//!   of the right kind, and the slot must exist. Missing slots are reported as
//!   `IndexOutOfRange` or `KeyNotFound`.
//! - **Write** ([`Value::at_mut`], `value[i] = ...`): a `Null` is promoted to
//!   the container the index asks for, arrays grow with `Null` padding, and
//!   absent keys are inserted (at the end of the iteration order) as `Null`.
//!   This is what makes `v["work"]["type"] = "x".into()` work from an empty
//!   value.
//!
//! The `Index`/`IndexMut` operators are sugar over `at`/`at_mut` and panic where
//! those return an error, the same way `Vec` indexing panics.

use crate::error::{JsonError, Result};
use crate::value::Value;
use std::ops;

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T: ?Sized + Sealed> Sealed for &T {}
}

/// Something that can address a slot inside a [`Value`]: an array position
/// (`usize`) or an object key (`str`/`String`).
///
/// Sealed; the impls below are the only ones.
pub trait ValueIndex: private::Sealed {
    #[doc(hidden)]
    fn read<'v>(&self, value: &'v Value) -> Result<&'v Value>;

    #[doc(hidden)]
    fn write<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value>;
}

impl ValueIndex for usize {
    fn read<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        let items = value.as_array()?;
        items.get(*self).ok_or(JsonError::IndexOutOfRange {
            index: *self,
            len: items.len(),
        })
    }

    fn write<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
        let index = *self;
        let was_null = value.is_null();
        let grown = {
            let items = value.vivify_array()?;
            let len = items.len();
            if index < len {
                Ok(())
            } else if let Some(new_len) = index
                .checked_add(1)
                .filter(|&new_len| items.try_reserve(new_len - len).is_ok())
            {
                // Reserved up front, so a failed write leaves the array as it was.
                items.resize(new_len, Value::Null);
                Ok(())
            } else {
                Err(JsonError::IndexOutOfRange { index, len })
            }
        };
        if let Err(err) = grown {
            if was_null {
                *value = Value::Null;
            }
            return Err(err);
        }
        Ok(&mut value.as_array_mut()?[index])
    }
}

impl ValueIndex for str {
    fn read<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        value
            .as_object()?
            .get(self)
            .ok_or_else(|| JsonError::KeyNotFound(self.to_string()))
    }

    fn write<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
        let map = value.vivify_object()?;
        Ok(map.entry(self.to_string()).or_insert(Value::Null))
    }
}

impl ValueIndex for String {
    fn read<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        self.as_str().read(value)
    }

    fn write<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
        self.as_str().write(value)
    }
}

impl<T: ?Sized + ValueIndex> ValueIndex for &T {
    fn read<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        (**self).read(value)
    }

    fn write<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
        (**self).write(value)
    }
}

impl Value {
    /// Read access to an array element or object entry.
    ///
    /// ```
    /// use dynjson_core::{JsonError, Value};
    /// let v = Value::parse(r#"{"tags":["a","b"]}"#).unwrap();
    /// assert_eq!(*v.at("tags").unwrap().at(1).unwrap(), "b");
    /// assert!(matches!(v.at("missing"), Err(JsonError::KeyNotFound(_))));
    /// ```
    pub fn at<I: ValueIndex>(&self, index: I) -> Result<&Value> {
        index.read(self)
    }

    /// Write access with auto-vivification. See the module docs.
    pub fn at_mut<I: ValueIndex>(&mut self, index: I) -> Result<&mut Value> {
        index.write(self)
    }

    /// Like [`at`](Self::at), but folds every failure into `None`.
    pub fn get<I: ValueIndex>(&self, index: I) -> Option<&Value> {
        index.read(self).ok()
    }

    /// Push onto the end of an array. `Null` becomes an empty array first.
    pub fn append(&mut self, value: impl Into<Value>) -> Result<()> {
        self.vivify_array()?.push(value.into());
        Ok(())
    }

    /// Whether this is an object holding `key`. Always false for other kinds;
    /// it is a query, not an access.
    pub fn has(&self, key: &str) -> bool {
        match self {
            Value::Object(map) => map.contains_key(key),
            _ => false,
        }
    }

    /// Remove `key` from an object. Absent keys are a no-op. The remaining
    /// entries keep their relative order.
    pub fn remove(&mut self, key: &str) -> Result<()> {
        if !self.as_object()?.contains_key(key) {
            return Ok(());
        }
        self.as_object_mut()?.shift_remove(key);
        Ok(())
    }

    /// Element count of an array or entry count of an object.
    pub fn size(&self) -> Result<usize> {
        match self {
            Value::Array(items) => Ok(items.len()),
            Value::Object(map) => Ok(map.len()),
            other => Err(JsonError::mismatch("array or object", other.kind())),
        }
    }

    /// The keys of an object, in insertion order.
    pub fn keys(&self) -> Result<impl Iterator<Item = &str> + '_> {
        Ok(self.as_object()?.keys().map(String::as_str))
    }
}

impl<I: ValueIndex> ops::Index<I> for Value {
    type Output = Value;

    /// # Panics
    ///
    /// On any error [`Value::at`] would return.
    fn index(&self, index: I) -> &Value {
        match index.read(self) {
            Ok(slot) => slot,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<I: ValueIndex> ops::IndexMut<I> for Value {
    /// # Panics
    ///
    /// When the value is neither `Null` nor the container kind the index needs.
    fn index_mut(&mut self, index: I) -> &mut Value {
        match index.write(self) {
            Ok(slot) => slot,
            Err(err) => panic!("{err}"),
        }
    }
}
