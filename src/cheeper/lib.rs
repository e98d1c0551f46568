//! # Cheeper Architecture
//!
//! Cheeper is a small **microblogging data manager**: users, short messages and
//! directed friendships kept in an embedded document store. The library owns all
//! of the data rules; the `cheeper` binary is a thin client on top of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints colored output, exit codes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store handle, resolves configured defaults      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Users, messages, friendships, time windows, test data    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DocumentStore over a StorageBackend                      │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. Every failure comes back as a [`error::CheeperError`].
//!
//! ## The Store Handle
//!
//! There is no process-wide collection state. A [`store::DocumentStore`] is
//! created once (see [`store::connect`]) and passed by reference into every
//! command. Tests build one over [`store::mem_backend::MemBackend`].
//!
//! ## Module Overview
//!
//! - [`api`]: Facade owning the store handle
//! - [`commands`]: Repository and service operations
//! - [`store`]: Document store, filters, backends
//! - [`model`]: `User`, `Message`, `Friendship`
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
