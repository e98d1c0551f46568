use super::backend::StorageBackend;
use super::Collection;
use crate::error::StoreError;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::ops::ControlFlow;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since cheeper is single-threaded,
/// which lets every `StorageBackend` method take `&self`.
#[derive(Default)]
pub struct MemBackend {
    collections: RefCell<HashMap<Collection, Vec<Value>>>,
    simulate_write_error: RefCell<bool>,
    simulate_offline: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Make every read and the liveness check fail.
    pub fn set_simulate_offline(&self, offline: bool) {
        *self.simulate_offline.borrow_mut() = offline;
    }

    /// Number of raw documents held for a collection.
    pub fn len(&self, collection: Collection) -> usize {
        self.collections
            .borrow()
            .get(&collection)
            .map(Vec::len)
            .unwrap_or(0)
    }

    pub fn is_empty(&self, collection: Collection) -> bool {
        self.len(collection) == 0
    }
}

impl StorageBackend for MemBackend {
    fn scan(
        &self,
        collection: Collection,
        visit: &mut dyn FnMut(Value) -> ControlFlow<()>,
    ) -> Result<(), StoreError> {
        if *self.simulate_offline.borrow() {
            return Err(StoreError::Backend("Simulated offline store".to_string()));
        }
        let collections = self.collections.borrow();
        if let Some(docs) = collections.get(&collection) {
            for doc in docs {
                if visit(doc.clone()).is_break() {
                    break;
                }
            }
        }
        Ok(())
    }

    fn append(&self, collection: Collection, docs: &[Value]) -> Result<(), StoreError> {
        if *self.simulate_write_error.borrow() {
            return Err(StoreError::Backend("Simulated write error".to_string()));
        }
        self.collections
            .borrow_mut()
            .entry(collection)
            .or_default()
            .extend_from_slice(docs);
        Ok(())
    }

    fn ping(&self) -> Result<(), StoreError> {
        if *self.simulate_offline.borrow() {
            return Err(StoreError::Backend("Simulated offline store".to_string()));
        }
        Ok(())
    }
}
