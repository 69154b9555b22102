//! Domain Layer - Core Entity Traits
//!
//! Basic contracts shared by the catalog and studio entities.

use serde::{Deserialize, Serialize};

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// Returns the entity's unique identifier
    fn id(&self) -> &str;
}

/// A record the catalog store can manage: a display name plus an active flag.
///
/// The three catalog collections are structurally identical, so the store
/// implements each mutation once, generically, instead of three times.
pub trait CatalogRecord: Entity {
    /// Build a fresh record. New records start active.
    fn from_parts(id: String, name: String) -> Self;

    fn name(&self) -> &str;

    fn set_name(&mut self, name: String);

    fn is_active(&self) -> bool;

    fn set_active(&mut self, active: bool);
}

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoreError {
    /// Name was empty after trimming.
    InvalidName(String),
    /// The in-memory mutation was applied but persisting it failed.
    SaveFailed(String),
    NotFound(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::InvalidName(msg) => write!(f, "Invalid name: {}", msg),
            StoreError::SaveFailed(msg) => write!(f, "Failed to save: {}", msg),
            StoreError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}
