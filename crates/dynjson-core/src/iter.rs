//! Ordered traversal of arrays and objects.
//!
//! Arrays iterate in index order, objects in insertion order. Creating an
//! iterator over a scalar fails with `TypeMismatch`. Read-only iterators are
//! `Clone`, so a traversal can be restarted from any point. The mutable
//! variants allow replacing elements and values in place but not adding or
//! removing them; the borrow they hold rules that out statically.

use crate::error::{JsonError, Result};
use crate::value::Value;
use indexmap::map;
use std::fmt;
use std::iter::Enumerate;
use std::rc::Rc;
use std::slice;

/// Position of a value inside its parent container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Member<'a> {
    Index(usize),
    Key(&'a str),
}

impl<'a> Member<'a> {
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Member::Index(i) => Some(*i),
            Member::Key(_) => None,
        }
    }

    pub fn as_key(&self) -> Option<&'a str> {
        match self {
            Member::Key(k) => Some(*k),
            Member::Index(_) => None,
        }
    }
}

impl fmt::Display for Member<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Member::Index(i) => write!(f, "{i}"),
            Member::Key(k) => f.write_str(k),
        }
    }
}

impl Value {
    /// Elements of an array.
    pub fn elements(&self) -> Result<Elements<'_>> {
        Ok(Elements {
            inner: self.as_array()?.iter(),
        })
    }

    /// Elements of an array, mutably. Unshares the storage first.
    pub fn elements_mut(&mut self) -> Result<ElementsMut<'_>> {
        Ok(ElementsMut {
            inner: self.as_array_mut()?.iter_mut(),
        })
    }

    /// `(key, value)` pairs of an object.
    pub fn entries(&self) -> Result<Entries<'_>> {
        Ok(Entries {
            inner: self.as_object()?.iter(),
        })
    }

    /// `(key, value)` pairs of an object, values mutable. Unshares the storage
    /// first.
    pub fn entries_mut(&mut self) -> Result<EntriesMut<'_>> {
        Ok(EntriesMut {
            inner: self.as_object_mut()?.iter_mut(),
        })
    }

    /// `(member, value)` pairs of either container kind.
    ///
    /// ```
    /// use dynjson_core::Value;
    /// let v = Value::parse(r#"{"a":1,"b":2}"#).unwrap();
    /// let keys: Vec<_> = v.iter().unwrap().map(|(m, _)| m.to_string()).collect();
    /// assert_eq!(keys, ["a", "b"]);
    /// ```
    pub fn iter(&self) -> Result<Iter<'_>> {
        let inner = match self {
            Value::Array(items) => IterInner::Array(items.iter().enumerate()),
            Value::Object(map) => IterInner::Object(map.iter()),
            other => return Err(JsonError::mismatch("array or object", other.kind())),
        };
        Ok(Iter { inner })
    }

    pub fn iter_mut(&mut self) -> Result<IterMut<'_>> {
        let inner = match self {
            Value::Array(items) => IterMutInner::Array(Rc::make_mut(items).iter_mut().enumerate()),
            Value::Object(map) => IterMutInner::Object(Rc::make_mut(map).iter_mut()),
            other => return Err(JsonError::mismatch("array or object", other.kind())),
        };
        Ok(IterMut { inner })
    }
}

#[derive(Debug, Clone)]
pub struct Elements<'a> {
    inner: slice::Iter<'a, Value>,
}

impl<'a> Iterator for Elements<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Elements<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Elements<'_> {}

#[derive(Debug)]
pub struct ElementsMut<'a> {
    inner: slice::IterMut<'a, Value>,
}

impl<'a> Iterator for ElementsMut<'a> {
    type Item = &'a mut Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for ElementsMut<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for ElementsMut<'_> {}

#[derive(Debug, Clone)]
pub struct Entries<'a> {
    inner: map::Iter<'a, String, Value>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Entries<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k.as_str(), v))
    }
}

impl ExactSizeIterator for Entries<'_> {}

#[derive(Debug)]
pub struct EntriesMut<'a> {
    inner: map::IterMut<'a, String, Value>,
}

impl<'a> Iterator for EntriesMut<'a> {
    type Item = (&'a str, &'a mut Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for EntriesMut<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k.as_str(), v))
    }
}

impl ExactSizeIterator for EntriesMut<'_> {}

#[derive(Debug, Clone)]
enum IterInner<'a> {
    Array(Enumerate<slice::Iter<'a, Value>>),
    Object(map::Iter<'a, String, Value>),
}

/// Iterator returned by [`Value::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: IterInner<'a>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (Member<'a>, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterInner::Array(it) => it.next().map(|(i, v)| (Member::Index(i), v)),
            IterInner::Object(it) => it.next().map(|(k, v)| (Member::Key(k.as_str()), v)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IterInner::Array(it) => it.size_hint(),
            IterInner::Object(it) => it.size_hint(),
        }
    }
}

impl ExactSizeIterator for Iter<'_> {}

#[derive(Debug)]
enum IterMutInner<'a> {
    Array(Enumerate<slice::IterMut<'a, Value>>),
    Object(map::IterMut<'a, String, Value>),
}

/// Iterator returned by [`Value::iter_mut`].
#[derive(Debug)]
pub struct IterMut<'a> {
    inner: IterMutInner<'a>,
}

impl<'a> Iterator for IterMut<'a> {
    type Item = (Member<'a>, &'a mut Value);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterMutInner::Array(it) => it.next().map(|(i, v)| (Member::Index(i), v)),
            IterMutInner::Object(it) => it.next().map(|(k, v)| (Member::Key(k.as_str()), v)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IterMutInner::Array(it) => it.size_hint(),
            IterMutInner::Object(it) => it.size_hint(),
        }
    }
}

impl ExactSizeIterator for IterMut<'_> {}
