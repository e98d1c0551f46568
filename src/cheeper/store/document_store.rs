use super::backend::StorageBackend;
use super::filter::Filter;
use super::{Collection, Document};
use crate::error::StoreError;
use serde_json::Value;
use std::collections::HashSet;
use std::ops::ControlFlow;
use tracing::debug;

/// Typed access to the collections of one store.
///
/// Takes `&self` everywhere because the backend handles its own mutability
/// (or is stateless I/O).
pub struct DocumentStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> DocumentStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn ping(&self) -> Result<(), StoreError> {
        self.backend.ping()
    }

    pub fn insert_one<T: Document>(&self, doc: &T) -> Result<(), StoreError> {
        self.insert_many(std::slice::from_ref(doc))
    }

    /// Insert a batch with a single write. Nothing is written if any
    /// document breaks a unique index.
    pub fn insert_many<T: Document>(&self, docs: &[T]) -> Result<(), StoreError> {
        if docs.is_empty() {
            return Ok(());
        }
        let values = docs
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;

        self.check_unique(T::COLLECTION, &values)?;
        self.backend.append(T::COLLECTION, &values)
    }

    pub fn find_one<T: Document>(&self, filter: &Filter) -> Result<Option<T>, StoreError> {
        match self.fetch_raw(T::COLLECTION, filter)? {
            Some(doc) => Ok(Some(serde_json::from_value(doc)?)),
            None => Ok(None),
        }
    }

    /// All matching documents in the store's natural order.
    pub fn find<T: Document>(&self, filter: &Filter) -> Result<Vec<T>, StoreError> {
        debug!(collection = T::COLLECTION.name(), %filter, "find");
        let mut found: Vec<T> = Vec::new();
        let mut decode_error = None;
        self.backend.scan(T::COLLECTION, &mut |doc| {
            if !filter.matches(&doc) {
                return ControlFlow::Continue(());
            }
            match serde_json::from_value(doc) {
                Ok(record) => {
                    found.push(record);
                    ControlFlow::Continue(())
                }
                Err(e) => {
                    decode_error = Some(e);
                    ControlFlow::Break(())
                }
            }
        })?;

        match decode_error {
            Some(e) => Err(e.into()),
            None => Ok(found),
        }
    }

    /// Count matching documents without decoding or collecting them.
    pub fn count(&self, collection: Collection, filter: &Filter) -> Result<u64, StoreError> {
        let mut total = 0u64;
        self.backend.scan(collection, &mut |doc| {
            if filter.matches(&doc) {
                total += 1;
            }
            ControlFlow::Continue(())
        })?;
        debug!(collection = collection.name(), %filter, total, "count");
        Ok(total)
    }

    /// First matching document, left as raw JSON.
    ///
    /// There are no secondary indexes, so this is a scan that stops at the
    /// first hit. Documents before it are still parsed to be matched.
    pub fn fetch_raw(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Option<Value>, StoreError> {
        let mut hit = None;
        self.backend.scan(collection, &mut |doc| {
            if filter.matches(&doc) {
                hit = Some(doc);
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })?;
        Ok(hit)
    }

    fn check_unique(&self, collection: Collection, values: &[Value]) -> Result<(), StoreError> {
        for fields in collection.unique_keys() {
            let mut incoming = HashSet::with_capacity(values.len());
            for value in values {
                let key = index_key(fields, value);
                if !incoming.insert(key.clone()) {
                    return Err(StoreError::DuplicateKey {
                        collection: collection.name(),
                        key,
                    });
                }
            }

            let mut clash = None;
            self.backend.scan(collection, &mut |doc| {
                let key = index_key(fields, &doc);
                if incoming.contains(&key) {
                    clash = Some(key);
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            })?;

            if let Some(key) = clash {
                return Err(StoreError::DuplicateKey {
                    collection: collection.name(),
                    key,
                });
            }
        }
        Ok(())
    }
}

fn index_key(fields: &[&str], doc: &Value) -> String {
    fields
        .iter()
        .map(|field| format!("{}={}", field, doc.get(*field).unwrap_or(&Value::Null)))
        .collect::<Vec<_>>()
        .join(",")
}
