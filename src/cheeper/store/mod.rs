//! # Storage Layer
//!
//! Cheeper keeps its data in a small embedded document store. Every entity type
//! lives in its own collection and every record is a JSON document.
//!
//! ## Split of Responsibilities
//!
//! - [`backend::StorageBackend`] handles the "how": raw document I/O for a
//!   collection (scan, append, liveness).
//! - [`document_store::DocumentStore`] handles the "what": typed inserts and
//!   queries, [`filter::Filter`] evaluation, unique indexes.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production backend, one JSON-lines file per collection.
//! - [`mem_backend::MemBackend`]: in-memory backend for tests.
//!
//! ## Storage Layout
//!
//! ```text
//! <store>/
//! ├── users.jsonl         # one User document per line
//! ├── messages.jsonl      # one Message document per line
//! └── friendships.jsonl   # one Friendship document per line
//! ```
//!
//! Records are create-only, so collections are append-only files. Reads stream
//! line by line and stop as soon as the caller has what it needs.
//!
//! ## Unique Indexes
//!
//! `users.login` and `friendships.(user_id, friend_id)` are checked on every
//! write, including across the documents of a single batch. Two processes
//! appending to the same files at the same moment can still both pass the
//! check; writers sharing one handle cannot.

use crate::error::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

pub mod backend;
pub mod document_store;
pub mod filter;
pub mod fs_backend;
pub mod mem_backend;

pub use document_store::DocumentStore;
pub use filter::Filter;

use fs_backend::FsBackend;

/// The three logical collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Messages,
    Friendships,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Messages => "messages",
            Collection::Friendships => "friendships",
        }
    }

    /// Field sets that must be unique within the collection.
    pub fn unique_keys(&self) -> &'static [&'static [&'static str]] {
        match self {
            Collection::Users => &[&["login"]],
            Collection::Messages => &[],
            Collection::Friendships => &[&["user_id", "friend_id"]],
        }
    }

    pub fn all() -> &'static [Collection] {
        &[
            Collection::Users,
            Collection::Messages,
            Collection::Friendships,
        ]
    }
}

/// A record type stored in one collection.
pub trait Document: Serialize + DeserializeOwned {
    const COLLECTION: Collection;
}

/// The production store handle.
pub type Handle = DocumentStore<FsBackend>;

/// Open the store at `uri` and check that it is usable.
///
/// Accepts `file://<dir>` or a bare directory path. The directory is created
/// when missing. Any failure is reported as [`StoreError::Connection`].
pub fn connect(uri: &str) -> Result<Handle, StoreError> {
    let root = parse_uri(uri)?;
    let store = DocumentStore::with_backend(FsBackend::new(root));
    store
        .ping()
        .map_err(|e| StoreError::Connection(format!("{}: {}", uri, e)))?;
    info!(uri, "connected to store");
    Ok(store)
}

fn parse_uri(uri: &str) -> Result<PathBuf, StoreError> {
    let uri = uri.trim();
    if uri.is_empty() {
        return Err(StoreError::Connection("empty store URI".to_string()));
    }

    if let Some(path) = uri.strip_prefix("file://") {
        if path.is_empty() {
            return Err(StoreError::Connection(format!("no path in {}", uri)));
        }
        return Ok(PathBuf::from(path));
    }

    if let Some((scheme, _)) = uri.split_once("://") {
        return Err(StoreError::Connection(format!(
            "unsupported store scheme: {}",
            scheme
        )));
    }

    Ok(PathBuf::from(uri))
}
