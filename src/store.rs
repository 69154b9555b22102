//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. This is a
//! reactive mirror of the core stores: mutations go through the
//! `CatalogStore` / `StudioDirectory` handles, then the relevant slice is
//! resynced here so views update.

use catalog_store::domain::{ClothingItem, Service, Studio, SubService};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::context::{CatalogHandle, DirectoryHandle};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Platform-wide services
    pub services: Vec<Service>,
    /// Platform-wide sub-services
    pub sub_services: Vec<SubService>,
    /// Platform-wide clothing items
    pub clothing_items: Vec<ClothingItem>,
    /// Onboarded studios with their adopted services
    pub studios: Vec<Studio>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Sync Helpers
// ========================

/// Refresh the catalog collections from the core store
pub fn sync_catalog(store: AppStore, catalog: CatalogHandle) {
    let snapshot = catalog.with_value(|c| c.snapshot());
    *store.services().write() = snapshot.services;
    *store.sub_services().write() = snapshot.sub_services;
    *store.clothing_items().write() = snapshot.clothing_items;
}

/// Refresh the studio list from the directory
pub fn sync_studios(store: AppStore, directory: DirectoryHandle) {
    *store.studios().write() = directory.with_value(|d| d.studios());
}
