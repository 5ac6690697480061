//! Synchronous string key/value storage contracts and adapters.
//!
//! Browser `localStorage` and `sessionStorage` are synchronous, so unlike the async host
//! services this contract returns plain results. Values are stored as raw JSON text per key.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Host service for raw text values addressed by string key.
pub trait KeyValueStore {
    /// Loads the raw text stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage is unavailable.
    fn load_raw(&self, key: &str) -> Result<Option<String>, String>;

    /// Stores raw text under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage is unavailable or rejects the write.
    fn save_raw(&self, key: &str, raw: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Default)]
/// In-memory store keyed by string. Clones share the same backing map.
pub struct MemoryKeyValueStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryKeyValueStore {
    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Returns `true` when no key is stored.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn save_raw(&self, key: &str, raw: &str) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn load_raw(&self, key: &str) -> Result<Option<String>, String> {
        (**self).load_raw(key)
    }

    fn save_raw(&self, key: &str, raw: &str) -> Result<(), String> {
        (**self).save_raw(key, raw)
    }
}

/// Loads and deserializes a typed value through a [`KeyValueStore`].
///
/// A stored JSON `null` is reported as `Ok(None)`, the same as a missing key.
///
/// # Errors
///
/// Returns an error when the store read or JSON deserialization fails.
pub fn load_json_with<S: KeyValueStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.load_raw(key)? else {
        return Ok(None);
    };
    let value: Option<T> = serde_json::from_str(&raw).map_err(|e| e.to_string())?;
    Ok(value)
}

/// Serializes and saves a typed value through a [`KeyValueStore`].
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub fn save_json_with<S: KeyValueStore + ?Sized, T: Serialize + ?Sized>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.save_raw(key, &raw)
}
