//! JSON store adapter shared by the repositories.
//!
//! Every repository operation is one read followed by one write against the host store. The
//! pair is not atomic: a write from another tab in between is overwritten (last write wins).

use std::rc::Rc;

use leptos::logging;
use platform_host::{load_json_with, save_json_with, KeyValueStore};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::StoreError;

#[derive(Clone)]
/// Typed JSON access to a [`KeyValueStore`] with fallback-on-failure reads.
pub struct JsonStore {
    backend: Rc<dyn KeyValueStore>,
}

impl JsonStore {
    /// Wraps a host store.
    pub fn new(backend: Rc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Returns the value under `key`, or `fallback` when the key is absent, holds `null`, or
    /// cannot be decoded. Decode failures are logged to the console and otherwise ignored.
    pub fn read_or<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        match load_json_with(&*self.backend, key) {
            Ok(Some(value)) => value,
            Ok(None) => fallback,
            Err(err) => {
                logging::warn!("discarding unreadable value under `{key}`: {err}");
                fallback
            }
        }
    }

    /// Serializes `value` and stores it under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when serialization or the host write fails.
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        save_json_with(&*self.backend, key, value).map_err(|err| {
            logging::warn!("write to `{key}` failed: {err}");
            StoreError::new(err)
        })
    }

    /// Returns the raw text under `key`. Host read failures are logged and read as absent.
    pub fn read_text(&self, key: &str) -> Option<String> {
        match self.backend.load_raw(key) {
            Ok(value) => value,
            Err(err) => {
                logging::warn!("read of `{key}` failed: {err}");
                None
            }
        }
    }

    /// Stores raw text under `key` without JSON encoding.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the host write fails.
    pub fn write_text(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.backend.save_raw(key, value).map_err(|err| {
            logging::warn!("write to `{key}` failed: {err}");
            StoreError::new(err)
        })
    }
}

#[cfg(test)]
mod tests {
    use platform_host::MemoryKeyValueStore;
    use pretty_assertions::assert_eq;

    use super::*;

    fn store() -> (MemoryKeyValueStore, JsonStore) {
        let memory = MemoryKeyValueStore::default();
        (memory.clone(), JsonStore::new(Rc::new(memory)))
    }

    #[test]
    fn read_or_returns_fallback_for_missing_null_and_corrupt_values() {
        let (memory, store) = store();
        assert_eq!(store.read_or("k", vec![7_u32]), vec![7]);

        memory.save_raw("k", "null").expect("save");
        assert_eq!(store.read_or("k", vec![7_u32]), vec![7]);

        memory.save_raw("k", "[1, oops").expect("save");
        assert_eq!(store.read_or("k", vec![7_u32]), vec![7]);

        memory.save_raw("k", "{\"shape\":\"object\"}").expect("save");
        assert_eq!(store.read_or("k", Vec::<u32>::new()), Vec::<u32>::new());
    }

    #[test]
    fn write_then_read_returns_stored_value() {
        let (_, store) = store();
        store.write("k", &[1_u32, 2, 3]).expect("write");
        assert_eq!(store.read_or("k", Vec::<u32>::new()), vec![1, 2, 3]);
    }

    #[test]
    fn text_values_are_stored_verbatim() {
        let (memory, store) = store();
        store.write_text("pin", "1234").expect("write");
        assert_eq!(memory.load_raw("pin").expect("load"), Some("1234".to_string()));
        assert_eq!(store.read_text("pin"), Some("1234".to_string()));
        assert_eq!(store.read_text("other"), None);
    }
}
