//! Persistence collaborators for the admin session.
//!
//! The workflow services never talk to a backend directly; they go through the
//! [`RecordStore`] trait so the REST mock API, the local JSON-file store, and
//! the in-memory store used by tests and demo mode are interchangeable.

use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod local;
pub mod memory;
pub mod rest;

pub use local::LocalStore;
pub use memory::MemoryStore;
pub use rest::RestStore;

/// Ties a domain record to its collection naming across the collaborators.
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Resource collection segment used by the REST collaborator.
    const COLLECTION: &'static str;
    /// Fixed key used by the local key-value store.
    const STORAGE_KEY: &'static str;
    /// Prefix for ids assigned by stores that mint their own.
    const ID_PREFIX: &'static str;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

/// Storage abstraction so the workflow services can be exercised in isolation.
///
/// `create` hands id assignment to the collaborator; records serialize without
/// an id until one is assigned. `update` replaces the whole record.
pub trait RecordStore<T: Entity>: Send + Sync {
    fn list(&self) -> Result<Vec<T>, StoreError>;
    fn fetch(&self, id: &str) -> Result<Option<T>, StoreError>;
    fn create(&self, record: T) -> Result<T, StoreError>;
    fn update(&self, record: &T) -> Result<(), StoreError>;
    fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// Error enumeration for collaborator failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),
    #[error("malformed payload: {0}")]
    Malformed(String),
}
