//! Mutable object records.
//!
//! An [`ObjectRecord`] is the runtime's only aggregate type: a mutable map
//! from string keys to values. Entries are kept in insertion order so that
//! enumeration is deterministic; lookup is by key equality.

use std::cell::RefCell;
use std::rc::Rc;

use crate::value::Value;

/// Shared handle to a mutable [`ObjectRecord`].
///
/// Every `Value::Object` holds one of these; clones alias the same record.
pub type ObjectRef = Rc<RefCell<ObjectRecord>>;

/// String-keyed property storage with insertion-ordered enumeration.
///
/// Keys are created lazily on first [`set`](ObjectRecord::set); there is no
/// declaration step and no failure mode on any operation.
///
/// # Examples
///
/// ```
/// use value_model::{ObjectRecord, Value};
///
/// let mut rec = ObjectRecord::new();
/// rec.set("x", Value::number(5.0));
///
/// assert!(rec.has("x"));
/// assert_eq!(rec.get("x"), Value::number(5.0));
/// assert_eq!(rec.get("missing"), Value::Undefined);
/// ```
#[derive(Debug, Default)]
pub struct ObjectRecord {
    // Insertion-ordered; overwrites keep the key's original position.
    entries: Vec<(String, Value)>,
}

impl ObjectRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        ObjectRecord {
            entries: Vec::new(),
        }
    }

    /// Create an empty record already wrapped in a shared handle.
    pub fn new_ref() -> ObjectRef {
        Rc::new(RefCell::new(ObjectRecord::new()))
    }

    /// Get the stored value, or `Value::Undefined` if the key is absent.
    ///
    /// Never fails. Note that a key explicitly set to `Undefined` is
    /// indistinguishable from an absent key through `get` alone; use
    /// [`has`](ObjectRecord::has) to tell them apart.
    pub fn get(&self, key: &str) -> Value {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .unwrap_or(Value::Undefined)
    }

    /// True iff the key was previously the target of a `set`, independent of
    /// the stored value (a key set to `Undefined` still counts).
    pub fn has(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Create the key if absent, else overwrite in place.
    pub fn set(&mut self, key: &str, value: Value) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    /// Delete a key, returning the removed value or `Undefined` if absent.
    pub fn remove(&mut self, key: &str) -> Value {
        match self.entries.iter().position(|(k, _)| k == key) {
            Some(idx) => self.entries.remove(idx).1,
            None => Value::Undefined,
        }
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no key has ever been set (or all were removed).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
