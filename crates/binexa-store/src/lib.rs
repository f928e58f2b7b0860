//! Durable key-value string storage for Binexa.
//!
//! Everything Binexa persists (the session id, the saved history of each
//! session, the analytics log) is a string stored under a flat key. This
//! crate defines that interface and ships two backends.
//!
//! # Storage Backends
//!
//! All backends implement the [`KeyValueStore`] trait:
//!
//! - [`InMemoryKeyValueStore`] -- `HashMap`-based store for tests and
//!   ephemeral runs, with an optional byte quota to exercise write failures
//! - [`FileKeyValueStore`] -- one file per key inside a directory, written
//!   atomically (temp file, fsync, rename)
//!
//! # Design Rules
//!
//! 1. Keys are validated before use (see [`keys`]); values are opaque.
//! 2. Reading a missing key is `Ok(None)`, never an error.
//! 3. Removing a missing key is `Ok(false)`, never an error.
//! 4. All I/O errors are propagated; recovering from them is the caller's job.

pub mod error;
pub mod file;
pub mod keys;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use file::FileKeyValueStore;
pub use keys::validate_key;
pub use memory::InMemoryKeyValueStore;
pub use traits::KeyValueStore;
