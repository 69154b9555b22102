//! Studio Directory
//!
//! The studio-service adoption layer: which catalog services a studio
//! offers, with which sub-services, items, and prices. Persists to its own
//! storage key and never mutates the catalog store or touches the link;
//! catalog ids are resolved to display names by the caller.
//!
//! The active cascades live here rather than on the raw entities:
//! deactivating the last active sub-service deactivates its parent service,
//! deactivating the last active item deactivates its sub-service, and any
//! re-activation propagates upward.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;

use crate::defaults;
use crate::domain::{
    StoreError, StoreResult, Studio, StudioProfile, StudioService, StudioSubService,
    SubServicePricing,
};
use crate::ids::IdSource;
use crate::storage::{StorageBackend, STUDIOS_KEY};

pub struct StudioDirectory {
    storage: Rc<dyn StorageBackend>,
    ids: IdSource,
    studios: RefCell<Vec<Studio>>,
}

impl StudioDirectory {
    /// Load the directory from storage, falling back to the sample studios
    /// on a fresh install or an unparseable blob.
    pub fn load(storage: Rc<dyn StorageBackend>) -> Self {
        Self::load_with_ids(storage, IdSource::new())
    }

    pub fn load_with_ids(storage: Rc<dyn StorageBackend>, ids: IdSource) -> Self {
        let studios = storage
            .read(STUDIOS_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_else(defaults::default_studios);
        Self {
            storage,
            ids,
            studios: RefCell::new(studios),
        }
    }

    pub fn studios(&self) -> Vec<Studio> {
        self.studios.borrow().clone()
    }

    pub fn studio(&self, id: &str) -> Option<Studio> {
        self.studios.borrow().iter().find(|s| s.id == id).cloned()
    }

    // ========================
    // Studio lifecycle
    // ========================

    pub fn add_studio(&self, profile: StudioProfile) -> StoreResult<Studio> {
        let trimmed = profile.name.trim();
        if trimmed.is_empty() {
            return Err(StoreError::InvalidName("studio name must not be empty".to_string()));
        }
        let studio = Studio {
            id: self.ids.next("studio"),
            name: trimmed.to_string(),
            owner_name: profile.owner_name,
            phone: profile.phone,
            email: profile.email,
            address: profile.address,
            active: true,
            created_at: Utc::now(),
            studio_services: Vec::new(),
        };
        self.studios.borrow_mut().push(studio.clone());
        self.save_after_mutation()?;
        Ok(studio)
    }

    pub fn update_studio(&self, id: &str, profile: StudioProfile) -> StoreResult<()> {
        let trimmed = profile.name.trim().to_string();
        if trimmed.is_empty() {
            return Err(StoreError::InvalidName("studio name must not be empty".to_string()));
        }
        self.with_studio(id, |studio| {
            studio.name = trimmed;
            studio.owner_name = profile.owner_name;
            studio.phone = profile.phone;
            studio.email = profile.email;
            studio.address = profile.address;
        })?;
        self.save_after_mutation()
    }

    pub fn set_studio_active(&self, id: &str, active: bool) -> StoreResult<()> {
        self.with_studio(id, |studio| studio.active = active)?;
        self.save_after_mutation()
    }

    /// Deleting an unknown studio is a no-op
    pub fn delete_studio(&self, id: &str) -> StoreResult<()> {
        self.studios.borrow_mut().retain(|s| s.id != id);
        self.save_after_mutation()
    }

    // ========================
    // Service adoption
    // ========================

    /// Adopt a catalog service into a studio's offering. Adopting a service
    /// that is already present returns the existing record unchanged.
    pub fn adopt_service(
        &self,
        studio_id: &str,
        service_id: &str,
        name: &str,
    ) -> StoreResult<StudioService> {
        let adopted = self.with_studio(studio_id, |studio| {
            if let Some(existing) = studio
                .studio_services
                .iter()
                .find(|s| s.service_id == service_id)
            {
                return existing.clone();
            }
            let adoption = StudioService::new(
                self.ids.next("ss"),
                name.to_string(),
                service_id.to_string(),
            );
            studio.studio_services.push(adoption.clone());
            adoption
        })?;
        self.save_after_mutation()?;
        Ok(adopted)
    }

    pub fn drop_service(&self, studio_id: &str, service_id: &str) -> StoreResult<()> {
        self.with_studio(studio_id, |studio| {
            studio.studio_services.retain(|s| s.service_id != service_id);
        })?;
        self.save_after_mutation()
    }

    // ========================
    // Sub-services
    // ========================

    /// Attach a catalog sub-service to an adopted service. Attaching one
    /// that is already present returns the existing record unchanged.
    pub fn add_sub_service(
        &self,
        studio_id: &str,
        studio_service_id: &str,
        sub_service_id: &str,
    ) -> StoreResult<StudioSubService> {
        let added = self.with_service(studio_id, studio_service_id, |service| {
            if let Some(existing) = service
                .sub_services
                .iter()
                .find(|s| s.sub_service_id() == sub_service_id)
            {
                return existing.clone();
            }
            let sub = StudioSubService::new(self.ids.next("sss"), sub_service_id.to_string());
            service.sub_services.push(sub.clone());
            service.active = true;
            sub
        })?;
        self.save_after_mutation()?;
        Ok(added)
    }

    /// Detach a sub-service and re-evaluate the parent's active flag
    pub fn delete_sub_service(
        &self,
        studio_id: &str,
        studio_service_id: &str,
        sub_id: &str,
    ) -> StoreResult<()> {
        self.with_service(studio_id, studio_service_id, |service| {
            service.sub_services.retain(|s| s.id != sub_id);
            reevaluate_service(service);
        })?;
        self.save_after_mutation()
    }

    /// Flip a sub-service's status, cascading to the parent service:
    /// deactivating the last active sub-service deactivates the service,
    /// activating any sub-service re-activates it.
    pub fn set_sub_service_active(
        &self,
        studio_id: &str,
        studio_service_id: &str,
        sub_id: &str,
        active: bool,
    ) -> StoreResult<()> {
        self.with_service(studio_id, studio_service_id, |service| {
            if let Some(sub) = service.sub_services.iter_mut().find(|s| s.id == sub_id) {
                sub.active = Some(active);
            }
            reevaluate_service(service);
        })?;
        self.save_after_mutation()
    }

    // ========================
    // Clothing items
    // ========================

    /// Replace the selected clothing items of a sub-service
    pub fn set_selected_items(
        &self,
        studio_id: &str,
        studio_service_id: &str,
        sub_id: &str,
        items: Vec<String>,
    ) -> StoreResult<()> {
        self.with_service(studio_id, studio_service_id, |service| {
            if let Some(sub) = service.sub_services.iter_mut().find(|s| s.id == sub_id) {
                sub.selected_items = items;
            }
        })?;
        self.save_after_mutation()
    }

    /// Flip one item's status, cascading upward: deactivating the last
    /// active item deactivates the sub-service, activating any item
    /// re-activates it; the parent service is re-evaluated either way.
    pub fn set_item_status(
        &self,
        studio_id: &str,
        studio_service_id: &str,
        sub_id: &str,
        item_id: &str,
        active: bool,
    ) -> StoreResult<()> {
        self.with_service(studio_id, studio_service_id, |service| {
            if let Some(sub) = service.sub_services.iter_mut().find(|s| s.id == sub_id) {
                sub.clothing_items_status.insert(item_id.to_string(), active);
                if !sub.selected_items.is_empty() {
                    sub.active = Some(active || sub.has_active_item());
                }
            }
            reevaluate_service(service);
        })?;
        self.save_after_mutation()
    }

    // ========================
    // Pricing
    // ========================

    /// Replace the four price fields of a sub-service as one unit
    pub fn set_sub_service_pricing(
        &self,
        studio_id: &str,
        studio_service_id: &str,
        sub_id: &str,
        pricing: SubServicePricing,
    ) -> StoreResult<()> {
        self.with_service(studio_id, studio_service_id, |service| {
            if let Some(sub) = service.sub_services.iter_mut().find(|s| s.id == sub_id) {
                sub.standard_price_per_kg = pricing.standard_price_per_kg;
                sub.express_price_per_kg = pricing.express_price_per_kg;
                sub.standard_price_per_item = pricing.standard_price_per_item;
                sub.express_price_per_item = pricing.express_price_per_item;
            }
        })?;
        self.save_after_mutation()
    }

    /// Set or clear the per-item prices for one clothing item
    pub fn set_item_prices(
        &self,
        studio_id: &str,
        studio_service_id: &str,
        sub_id: &str,
        item_id: &str,
        standard: Option<f64>,
        express: Option<f64>,
    ) -> StoreResult<()> {
        self.with_service(studio_id, studio_service_id, |service| {
            if let Some(sub) = service.sub_services.iter_mut().find(|s| s.id == sub_id) {
                match standard {
                    Some(price) => {
                        sub.standard_item_prices.insert(item_id.to_string(), price);
                    }
                    None => {
                        sub.standard_item_prices.remove(item_id);
                    }
                }
                match express {
                    Some(price) => {
                        sub.express_item_prices.insert(item_id.to_string(), price);
                    }
                    None => {
                        sub.express_item_prices.remove(item_id);
                    }
                }
            }
        })?;
        self.save_after_mutation()
    }

    // ========================
    // Internals
    // ========================

    fn with_studio<R>(&self, id: &str, f: impl FnOnce(&mut Studio) -> R) -> StoreResult<R> {
        let mut studios = self.studios.borrow_mut();
        let studio = studios
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("studio {}", id)))?;
        Ok(f(studio))
    }

    fn with_service<R>(
        &self,
        studio_id: &str,
        studio_service_id: &str,
        f: impl FnOnce(&mut StudioService) -> R,
    ) -> StoreResult<R> {
        self.with_studio(studio_id, |studio| {
            studio
                .studio_services
                .iter_mut()
                .find(|s| s.id == studio_service_id)
                .map(f)
                .ok_or_else(|| StoreError::NotFound(format!("studio service {}", studio_service_id)))
        })?
    }

    fn save(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&*self.studios.borrow())
            .map_err(|e| StoreError::SaveFailed(e.to_string()))?;
        self.storage
            .write(STUDIOS_KEY, &json)
            .map_err(|e| StoreError::SaveFailed(e.to_string()))
    }

    /// Save failures are logged and reported; the in-memory change stands.
    fn save_after_mutation(&self) -> StoreResult<()> {
        if let Err(e) = self.save() {
            log::warn!("studio save failed, keeping session state in memory: {}", e);
            return Err(e);
        }
        Ok(())
    }
}

/// A service with sub-services is active exactly when one of them is
fn reevaluate_service(service: &mut StudioService) {
    if !service.sub_services.is_empty() {
        service.active = service.has_active_sub_service();
    }
}
