//! Catalog Store
//!
//! Single in-memory source of truth for the three catalog collections.
//! Owns the load / mutate / publish lifecycle: on load the URL payload wins
//! over storage and storage wins over built-in defaults; every mutation
//! republishes the full snapshot to both storage and the link.
//!
//! Single-threaded by design (the WASM main thread); shared via `Rc`,
//! interior mutability via `RefCell`.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

use crate::codec;
use crate::defaults;
use crate::domain::{
    CatalogRecord, CatalogSnapshot, ClothingItem, Service, StoreError, StoreResult, SubService,
};
use crate::ids::IdSource;
use crate::link::SnapshotLink;
use crate::storage::{StorageBackend, CLOTHING_ITEMS_KEY, SERVICES_KEY, SUB_SERVICES_KEY};

/// The three catalog collections a mutation can address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Services,
    SubServices,
    ClothingItems,
}

impl Collection {
    pub fn storage_key(self) -> &'static str {
        match self {
            Collection::Services => SERVICES_KEY,
            Collection::SubServices => SUB_SERVICES_KEY,
            Collection::ClothingItems => CLOTHING_ITEMS_KEY,
        }
    }

    fn id_prefix(self) -> &'static str {
        match self {
            Collection::Services => "svc",
            Collection::SubServices => "sub",
            Collection::ClothingItems => "it",
        }
    }
}

/// The catalog state synchronizer
pub struct CatalogStore {
    storage: Rc<dyn StorageBackend>,
    link: Rc<dyn SnapshotLink>,
    ids: IdSource,
    state: RefCell<CatalogSnapshot>,
}

impl CatalogStore {
    /// Build the store and run the load sequence. Always lands in a usable
    /// state: a decodable link payload is adopted and written through to
    /// storage; otherwise each collection comes from its storage key or its
    /// built-in default, and the result is republished so the link reflects
    /// what was loaded.
    pub fn load(storage: Rc<dyn StorageBackend>, link: Rc<dyn SnapshotLink>) -> Self {
        Self::load_with_ids(storage, link, IdSource::new())
    }

    pub fn load_with_ids(
        storage: Rc<dyn StorageBackend>,
        link: Rc<dyn SnapshotLink>,
        ids: IdSource,
    ) -> Self {
        let store = Self {
            storage,
            link,
            ids,
            state: RefCell::new(CatalogSnapshot::default()),
        };
        store.initialize();
        store
    }

    fn initialize(&self) {
        if let Some(raw) = self.link.read() {
            if let Some(snapshot) = codec::decode(&raw) {
                *self.state.borrow_mut() = snapshot;
                // Write through so a later visit without the URL payload
                // still finds the adopted state.
                if let Err(e) = self.persist() {
                    log::warn!("write-through after link load failed: {}", e);
                }
                return;
            }
        }

        *self.state.borrow_mut() = CatalogSnapshot {
            version: None,
            services: self.read_collection(SERVICES_KEY, defaults::default_services),
            sub_services: self.read_collection(SUB_SERVICES_KEY, defaults::default_sub_services),
            clothing_items: self.read_collection(CLOTHING_ITEMS_KEY, defaults::default_clothing_items),
        };
        if let Err(e) = self.publish() {
            log::warn!("initial publish failed: {}", e);
        }
    }

    fn read_collection<T>(&self, key: &str, fallback: fn() -> Vec<T>) -> Vec<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.storage
            .read(key)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_else(fallback)
    }

    /// Current snapshot, cloned for consumers
    pub fn snapshot(&self) -> CatalogSnapshot {
        self.state.borrow().clone()
    }

    pub fn services(&self) -> Vec<Service> {
        self.state.borrow().services.clone()
    }

    pub fn sub_services(&self) -> Vec<SubService> {
        self.state.borrow().sub_services.clone()
    }

    pub fn clothing_items(&self) -> Vec<ClothingItem> {
        self.state.borrow().clothing_items.clone()
    }

    /// Display name for a catalog service id. Falls back to the opaque id
    /// when the entity was deleted out from under a reference.
    pub fn service_name(&self, id: &str) -> String {
        name_of(&self.state.borrow().services, id)
    }

    pub fn sub_service_name(&self, id: &str) -> String {
        name_of(&self.state.borrow().sub_services, id)
    }

    pub fn clothing_item_name(&self, id: &str) -> String {
        name_of(&self.state.borrow().clothing_items, id)
    }

    // ========================
    // Mutations
    // ========================

    pub fn add_service(&self, name: &str) -> StoreResult<Service> {
        let name = valid_name(name)?;
        let service = Service::from_parts(self.ids.next(Collection::Services.id_prefix()), name);
        self.state.borrow_mut().services.push(service.clone());
        self.publish_after_mutation()?;
        Ok(service)
    }

    pub fn add_sub_service(&self, name: &str) -> StoreResult<SubService> {
        let name = valid_name(name)?;
        let sub = SubService::from_parts(self.ids.next(Collection::SubServices.id_prefix()), name);
        self.state.borrow_mut().sub_services.push(sub.clone());
        self.publish_after_mutation()?;
        Ok(sub)
    }

    pub fn add_clothing_item(&self, name: &str) -> StoreResult<ClothingItem> {
        let name = valid_name(name)?;
        let item =
            ClothingItem::from_parts(self.ids.next(Collection::ClothingItems.id_prefix()), name);
        self.state.borrow_mut().clothing_items.push(item.clone());
        self.publish_after_mutation()?;
        Ok(item)
    }

    /// Replace the name of a matching entry; `active` is untouched.
    /// Renaming an unknown id is a no-op.
    pub fn rename_entry(&self, collection: Collection, id: &str, new_name: &str) -> StoreResult<()> {
        let name = valid_name(new_name)?;
        {
            let mut state = self.state.borrow_mut();
            match collection {
                Collection::Services => rename_in(&mut state.services, id, &name),
                Collection::SubServices => rename_in(&mut state.sub_services, id, &name),
                Collection::ClothingItems => rename_in(&mut state.clothing_items, id, &name),
            }
        }
        self.publish_after_mutation()
    }

    /// Unconditionally set the active flag of a matching entry
    pub fn set_entry_active(&self, collection: Collection, id: &str, active: bool) -> StoreResult<()> {
        {
            let mut state = self.state.borrow_mut();
            match collection {
                Collection::Services => set_active_in(&mut state.services, id, active),
                Collection::SubServices => set_active_in(&mut state.sub_services, id, active),
                Collection::ClothingItems => set_active_in(&mut state.clothing_items, id, active),
            }
        }
        self.publish_after_mutation()
    }

    /// Remove a matching entry. Deleting a non-existent id is a no-op.
    pub fn delete_entry(&self, collection: Collection, id: &str) -> StoreResult<()> {
        {
            let mut state = self.state.borrow_mut();
            match collection {
                Collection::Services => delete_in(&mut state.services, id),
                Collection::SubServices => delete_in(&mut state.sub_services, id),
                Collection::ClothingItems => delete_in(&mut state.clothing_items, id),
            }
        }
        self.publish_after_mutation()
    }

    // ========================
    // Publish
    // ========================

    fn persist(&self) -> Result<(), StoreError> {
        let state = self.state.borrow();
        write_collection(self.storage.as_ref(), SERVICES_KEY, &state.services)?;
        write_collection(self.storage.as_ref(), SUB_SERVICES_KEY, &state.sub_services)?;
        write_collection(self.storage.as_ref(), CLOTHING_ITEMS_KEY, &state.clothing_items)?;
        Ok(())
    }

    fn publish(&self) -> Result<(), StoreError> {
        self.persist()?;
        let encoded = codec::encode(&self.state.borrow());
        if !encoded.is_empty() {
            self.link.replace(&encoded);
        }
        Ok(())
    }

    /// Publish failures after a mutation are logged and reported, but the
    /// in-memory change stands; the session stays authoritative until reload.
    fn publish_after_mutation(&self) -> StoreResult<()> {
        if let Err(e) = self.publish() {
            log::warn!("publish failed, keeping session state in memory: {}", e);
            return Err(e);
        }
        Ok(())
    }
}

fn valid_name(name: &str) -> StoreResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(StoreError::InvalidName("name must not be empty".to_string()));
    }
    Ok(trimmed.to_string())
}

fn name_of<T: CatalogRecord>(records: &[T], id: &str) -> String {
    records
        .iter()
        .find(|r| r.id() == id)
        .map(|r| r.name().to_string())
        .unwrap_or_else(|| id.to_string())
}

fn rename_in<T: CatalogRecord>(records: &mut [T], id: &str, name: &str) {
    if let Some(record) = records.iter_mut().find(|r| r.id() == id) {
        record.set_name(name.to_string());
    }
}

fn set_active_in<T: CatalogRecord>(records: &mut [T], id: &str, active: bool) {
    if let Some(record) = records.iter_mut().find(|r| r.id() == id) {
        record.set_active(active);
    }
}

fn delete_in<T: CatalogRecord>(records: &mut Vec<T>, id: &str) {
    records.retain(|r| r.id() != id);
}

fn write_collection<T: Serialize>(
    storage: &dyn StorageBackend,
    key: &str,
    records: &[T],
) -> Result<(), StoreError> {
    let json = serde_json::to_string(records).map_err(|e| StoreError::SaveFailed(e.to_string()))?;
    storage
        .write(key, &json)
        .map_err(|e| StoreError::SaveFailed(e.to_string()))
}
