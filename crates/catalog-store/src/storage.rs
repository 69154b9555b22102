//! Storage Port
//!
//! Key/value blob storage behind the catalog store and studio directory.
//! The frontend adapter writes `window.localStorage`; tests use
//! [`MemoryStorage`].
//!
//! The three catalog keys are written independently, not atomically. A
//! failure between writes can leave the collections mutually inconsistent
//! until the next publish. The persisted layout predates this crate and is
//! an external interface, so the window is documented rather than closed.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

/// Storage key for the services collection
pub const SERVICES_KEY: &str = "services";
/// Storage key for the sub-services collection
pub const SUB_SERVICES_KEY: &str = "subServices";
/// Storage key for the clothing-items collection
pub const CLOTHING_ITEMS_KEY: &str = "clothingItems";
/// Storage key for the studio directory
pub const STUDIOS_KEY: &str = "laundryStudios";

/// Failure to persist a blob (quota exceeded, storage disabled, ...)
#[derive(Debug, Clone, PartialEq)]
pub struct StorageError(pub String);

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "storage write failed: {}", self.0)
    }
}

impl std::error::Error for StorageError {}

/// Key/value blob storage
pub trait StorageBackend {
    /// Read the blob stored under `key`, if any
    fn read(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous blob
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory backend for tests and native runs
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blobs: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.blobs.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.blobs.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.read(SERVICES_KEY).is_none());
        storage.write(SERVICES_KEY, "[]").unwrap();
        assert_eq!(storage.read(SERVICES_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_write_replaces_previous_blob() {
        let storage = MemoryStorage::new();
        storage.write("k", "one").unwrap();
        storage.write("k", "two").unwrap();
        assert_eq!(storage.read("k").as_deref(), Some("two"));
    }
}
