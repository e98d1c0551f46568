use super::Collection;
use crate::error::StoreError;
use serde_json::Value;
use std::ops::ControlFlow;

/// Abstract interface for raw document I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while DocumentStore handles the "what" (typing, filtering, unique keys).
pub trait StorageBackend {
    /// Stream every document of a collection, in insertion order.
    /// The visitor returns `ControlFlow::Break` to stop early.
    /// A collection that was never written to is empty, not an error.
    fn scan(
        &self,
        collection: Collection,
        visit: &mut dyn FnMut(Value) -> ControlFlow<()>,
    ) -> Result<(), StoreError>;

    /// Persist a batch of documents with a single write.
    fn append(&self, collection: Collection, docs: &[Value]) -> Result<(), StoreError>;

    /// Liveness check: fails if the store cannot be read and written.
    fn ping(&self) -> Result<(), StoreError>;
}
