//! # dynjson-core
//!
//! A dynamically-typed JSON value for Rust, with a strict recursive-descent
//! parser and a deterministic serializer.
//!
//! [`Value`] holds any of the seven JSON kinds: null, bool, int, double,
//! string, array, object. Object keys keep their insertion order. Writing
//! through an index auto-vivifies, so intermediate containers appear on demand.
//! Reading is checked and returns a [`JsonError`] rather than a default.
//!
//! ## Quick start
//!
//! ```rust
//! use dynjson_core::Value;
//!
//! let mut obj = Value::default();
//! obj["name"] = "junping".into();
//! obj["age"] = 30.into();
//! obj["work"]["type"] = "c++,php,js".into();
//!
//! assert!(obj.is_object());
//! assert!(obj.has("work"));
//! assert_eq!(obj["age"], 30);
//! assert_eq!(
//!     obj.to_string(),
//!     r#"{"name":"junping","age":30,"work":{"type":"c++,php,js"}}"#
//! );
//!
//! let back = Value::parse(&obj.to_string()).unwrap();
//! assert_eq!(back, obj);
//! ```
//!
//! ## Modules
//!
//! - [`value`]: the `Value` enum, kinds and copy-on-write containers
//! - [`access`]: read and auto-vivifying write access, `append`/`has`/`remove`/`size`
//! - [`convert`]: native conversions, literal equality, `serde_json` interop
//! - [`parser`]: JSON text → `Value`
//! - [`serializer`]: `Value` → JSON text, compact or pretty
//! - [`iter`]: ordered traversal of arrays and objects
//! - [`error`]: the error type shared by all of the above

pub mod access;
pub mod convert;
pub mod error;
pub mod iter;
pub mod parser;
mod serde_impl;
pub mod serializer;
pub mod value;

pub use access::ValueIndex;
pub use error::{ErrorCategory, JsonError, ParseErrorKind, Result};
pub use iter::{Elements, ElementsMut, Entries, EntriesMut, Iter, IterMut, Member};
pub use parser::{parse, parse_with, ParseOptions, Trailing};
pub use serializer::{to_string_with, Style};
pub use value::{Array, Kind, Map, Value};
