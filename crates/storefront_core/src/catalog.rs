//! Catalog repository: the product list stored under a single persistent key.
//!
//! The stored list is kept as raw JSON records. Writes preserve every record, including ones
//! with extra or unexpected fields; reads decode what the shop can display and skip the rest.

use leptos::logging;
use serde_json::Value;

use crate::{
    error::{ImportError, StoreError},
    model::{Product, ProductDraft, ProductId},
    persistence::JsonStore,
};

#[derive(Clone)]
/// Read-modify-write access to the catalog list.
pub struct CatalogRepository {
    store: JsonStore,
    key: String,
}

impl CatalogRepository {
    /// Creates a repository over `store` using `key` for the list.
    pub fn new(store: JsonStore, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Stored records exactly as persisted. Missing or non-list data reads as empty.
    pub fn records(&self) -> Vec<Value> {
        self.store.read_or(&self.key, Vec::new())
    }

    /// Every displayable product in stored order. Records that do not decode as a product are
    /// logged and left out, but stay in storage.
    pub fn list_all(&self) -> Vec<Product> {
        self.records()
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value::<Product>(record) {
                Ok(product) => Some(product),
                Err(err) => {
                    logging::warn!("skipping catalog record {index}: {err}");
                    None
                }
            })
            .collect()
    }

    /// Writes the demo catalog when no records are stored. Returns `true` if it seeded.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the seed cannot be written.
    pub fn seed_if_empty(&self) -> Result<bool, StoreError> {
        if !self.records().is_empty() {
            return Ok(false);
        }
        let demo = demo_catalog();
        logging::log!("seeding catalog with {} demo records", demo.len());
        self.store.write(&self.key, &demo)?;
        Ok(true)
    }

    /// Assigns a fresh id to `draft`, appends it and persists the list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the list cannot be written.
    pub fn append(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let product = draft.into_product();
        let record =
            serde_json::to_value(&product).map_err(|err| StoreError::new(err.to_string()))?;
        let mut records = self.records();
        records.push(record);
        self.store.write(&self.key, &records)?;
        Ok(product)
    }

    /// Removes every record whose `id` is `id` and persists the remainder. Returns whether
    /// any existed.
    ///
    /// Cart lines referring to the product are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the list cannot be written.
    pub fn delete_by_id(&self, id: &ProductId) -> Result<bool, StoreError> {
        let mut records = self.records();
        let before = records.len();
        records.retain(|record| record_id(record) != Some(id.as_str()));
        self.store.write(&self.key, &records)?;
        Ok(records.len() != before)
    }

    /// Overwrites the whole catalog with `records`, unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the list cannot be written.
    pub fn replace_all(&self, records: &[Value]) -> Result<(), StoreError> {
        self.store.write(&self.key, records)
    }

    /// Overwrites the catalog from an untyped JSON value, which must be a list. Elements are
    /// stored as given. Returns the number of records written.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::NotAList`] without touching the stored catalog, or
    /// [`ImportError::Store`] when the write fails.
    pub fn replace_all_from_value(&self, value: Value) -> Result<usize, ImportError> {
        let Value::Array(records) = value else {
            return Err(ImportError::NotAList);
        };
        self.replace_all(&records)?;
        Ok(records.len())
    }

    /// Empties the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the empty list cannot be written.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.replace_all(&[])
    }
}

fn record_id(record: &Value) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}

/// The four demo records written into an empty catalog, each with a fresh id.
pub fn demo_catalog() -> Vec<Product> {
    [
        (
            "Royal Blue",
            3899.0,
            "Kanchipuram silk",
            "https://images.unsplash.com/photo-1542060748-10c28b62716b?q=80&w=600&auto=format&fit=crop",
        ),
        (
            "Crimson Red",
            4499.0,
            "Handloom",
            "https://images.unsplash.com/photo-1536530956931-13fa1ff7b51d?q=80&w=600&auto=format&fit=crop",
        ),
        (
            "Emerald Green",
            3299.0,
            "Soft silk",
            "https://images.unsplash.com/photo-1520975916090-3105956dac38?q=80&w=600&auto=format&fit=crop",
        ),
        (
            "Gold",
            5599.0,
            "Banarasi",
            "https://images.unsplash.com/photo-1547394765-185e1e68f04e?q=80&w=600&auto=format&fit=crop",
        ),
    ]
    .into_iter()
    .map(|(color, price, notes, sample)| {
        ProductDraft {
            color: color.to_string(),
            price,
            notes: Some(notes.to_string()),
            image: None,
            sample: Some(sample.to_string()),
        }
        .into_product()
    })
    .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use std::{collections::HashSet, rc::Rc};

    use platform_host::{KeyValueStore, MemoryKeyValueStore};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    pub(crate) fn catalog() -> (MemoryKeyValueStore, CatalogRepository) {
        let memory = MemoryKeyValueStore::default();
        let repo = CatalogRepository::new(JsonStore::new(Rc::new(memory.clone())), "catalog");
        (memory, repo)
    }

    pub(crate) fn draft(color: &str, price: f64) -> ProductDraft {
        ProductDraft {
            color: color.to_string(),
            price,
            ..ProductDraft::default()
        }
    }

    fn stored(memory: &MemoryKeyValueStore) -> Value {
        let raw = memory.load_raw("catalog").expect("load").expect("catalog stored");
        serde_json::from_str(&raw).expect("stored json")
    }

    #[test]
    fn seed_populates_empty_catalog_once() {
        let (_, repo) = catalog();
        assert!(repo.seed_if_empty().expect("seed"));
        let seeded = repo.list_all();
        assert_eq!(seeded.len(), 4);
        let ids: HashSet<_> = seeded.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), 4);
        assert!(seeded.iter().all(|p| p.image.is_none() && p.sample.is_some()));

        assert!(!repo.seed_if_empty().expect("second seed"));
        assert_eq!(repo.list_all(), seeded);
    }

    #[test]
    fn seed_replaces_unparseable_catalog() {
        let (memory, repo) = catalog();
        memory.save_raw("catalog", "not json").expect("save");
        assert!(repo.seed_if_empty().expect("seed"));
        assert_eq!(repo.list_all().len(), 4);
    }

    #[test]
    fn one_malformed_record_does_not_trigger_reseed() {
        let (memory, repo) = catalog();
        let original = json!([
            {"id": "u1", "color": "Teal", "price": 100},
            {"id": "u2", "color": "Ivory", "price": {"amount": 5}}
        ]);
        memory.save_raw("catalog", &original.to_string()).expect("save");

        assert!(!repo.seed_if_empty().expect("seed"));
        assert_eq!(stored(&memory), original);
        let shown = repo.list_all();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id.as_str(), "u1");
    }

    #[test]
    fn append_assigns_fresh_ids_and_keeps_order() {
        let (_, repo) = catalog();
        let first = repo.append(draft("Gold", 10.0)).expect("append");
        let second = repo.append(draft("Gold", 10.0)).expect("append");
        assert_ne!(first.id, second.id);
        assert_eq!(repo.list_all(), vec![first, second]);
    }

    #[test]
    fn writes_keep_records_the_shop_cannot_display() {
        let (memory, repo) = catalog();
        let odd = json!({"id": "x", "price": [1, 2], "tag": "keep"});
        memory
            .save_raw("catalog", &json!([odd.clone()]).to_string())
            .expect("save");

        let added = repo.append(draft("Gold", 10.0)).expect("append");
        assert_eq!(repo.list_all(), vec![added.clone()]);
        assert!(repo.delete_by_id(&added.id).expect("delete"));
        assert_eq!(stored(&memory), json!([odd]));
    }

    #[test]
    fn delete_removes_only_matching_record() {
        let (_, repo) = catalog();
        let keep = repo.append(draft("Gold", 10.0)).expect("append");
        let gone = repo.append(draft("Red", 20.0)).expect("append");

        assert!(repo.delete_by_id(&gone.id).expect("delete"));
        assert_eq!(repo.list_all(), vec![keep]);
        assert!(!repo.delete_by_id(&gone.id).expect("delete missing"));
    }

    #[test]
    fn replace_from_value_rejects_non_lists_without_mutation() {
        let (_, repo) = catalog();
        repo.seed_if_empty().expect("seed");
        let before = repo.records();

        for value in [json!({"id": "x"}), json!(42), json!("[]"), Value::Null] {
            assert_eq!(repo.replace_all_from_value(value), Err(ImportError::NotAList));
        }
        assert_eq!(repo.records(), before);
    }

    #[test]
    fn replace_from_value_stores_list_verbatim() {
        let (memory, repo) = catalog();
        repo.seed_if_empty().expect("seed");
        let imported = json!([
            {"id": "a", "color": "Teal", "price": "100", "notes": "Tussar", "tag": "festive"},
            {"id": "b", "color": "Ivory", "price": 250.5, "image": null},
            {"color": "Orphan"},
            7
        ]);

        assert_eq!(repo.replace_all_from_value(imported.clone()), Ok(4));
        assert_eq!(stored(&memory), imported);

        let shown = repo.list_all();
        assert_eq!(
            shown.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            vec!["a", "b"]
        );
        assert_eq!(shown[0].price, 100.0);
        assert_eq!(shown[0].notes.as_deref(), Some("Tussar"));
    }

    #[test]
    fn clear_empties_catalog() {
        let (_, repo) = catalog();
        repo.seed_if_empty().expect("seed");
        repo.clear().expect("clear");
        assert!(repo.records().is_empty());
    }
}
