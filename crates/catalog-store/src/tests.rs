//! Store Lifecycle Tests
//!
//! Exercises the catalog store and studio directory against the in-memory
//! storage and link ports.

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::codec;
    use crate::defaults;
    use crate::domain::{CatalogSnapshot, Service, StoreError, StudioProfile};
    use crate::ids::IdSource;
    use crate::link::{MemoryLink, SnapshotLink};
    use crate::storage::{
        MemoryStorage, StorageBackend, CLOTHING_ITEMS_KEY, SERVICES_KEY, STUDIOS_KEY,
        SUB_SERVICES_KEY,
    };
    use crate::store::{CatalogStore, Collection};
    use crate::StudioDirectory;

    fn fresh_store() -> (CatalogStore, Rc<MemoryStorage>, Rc<MemoryLink>) {
        let storage = Rc::new(MemoryStorage::new());
        let link = Rc::new(MemoryLink::new());
        let store = CatalogStore::load(
            Rc::clone(&storage) as Rc<dyn StorageBackend>,
            Rc::clone(&link) as Rc<dyn SnapshotLink>,
        );
        (store, storage, link)
    }

    fn stored_services(storage: &MemoryStorage) -> Vec<Service> {
        serde_json::from_str(&storage.read(SERVICES_KEY).expect("services key missing"))
            .expect("services key should hold a JSON array")
    }

    #[test]
    fn test_empty_environment_loads_defaults_and_publishes() {
        let (store, storage, link) = fresh_store();

        assert_eq!(store.services().len(), 4);
        assert_eq!(store.sub_services().len(), 3);
        assert_eq!(store.clothing_items().len(), 4);

        // Load republishes, so both storage and the link reflect the defaults.
        assert_eq!(stored_services(&storage), store.services());
        assert!(storage.read(SUB_SERVICES_KEY).is_some());
        assert!(storage.read(CLOTHING_ITEMS_KEY).is_some());
        let published = link.read().expect("link should carry a payload after load");
        let decoded = codec::decode(&published).expect("published payload should decode");
        assert_eq!(decoded.services, store.services());
    }

    #[test]
    fn test_link_payload_wins_over_storage() {
        let storage = Rc::new(MemoryStorage::new());
        storage
            .write(SERVICES_KEY, r#"[{"id":"svc-9","name":"From Storage","active":true}]"#)
            .unwrap();

        let mut snapshot = CatalogSnapshot::default();
        snapshot
            .services
            .push(Service::new("svc-url".to_string(), "From Link".to_string()));
        let link = Rc::new(MemoryLink::with_payload(codec::encode(&snapshot)));

        let store = CatalogStore::load(
            Rc::clone(&storage) as Rc<dyn StorageBackend>,
            Rc::clone(&link) as Rc<dyn SnapshotLink>,
        );

        assert_eq!(store.services().len(), 1);
        assert_eq!(store.services()[0].name, "From Link");
        // Write-through: storage now holds the adopted payload.
        assert_eq!(stored_services(&storage)[0].name, "From Link");
    }

    #[test]
    fn test_corrupt_link_payload_falls_back_to_storage() {
        let storage = Rc::new(MemoryStorage::new());
        storage
            .write(SERVICES_KEY, r#"[{"id":"svc-9","name":"From Storage","active":false}]"#)
            .unwrap();
        let link = Rc::new(MemoryLink::with_payload("@@definitely not a payload@@"));

        let store = CatalogStore::load(
            Rc::clone(&storage) as Rc<dyn StorageBackend>,
            Rc::clone(&link) as Rc<dyn SnapshotLink>,
        );

        assert_eq!(store.services().len(), 1);
        assert_eq!(store.services()[0].name, "From Storage");
        assert!(!store.services()[0].active);
    }

    #[test]
    fn test_corrupt_storage_blob_falls_back_per_collection() {
        let storage = Rc::new(MemoryStorage::new());
        storage.write(SERVICES_KEY, "{{{{").unwrap();
        storage
            .write(SUB_SERVICES_KEY, r#"[{"id":"sub-9","name":"Kept","active":true}]"#)
            .unwrap();

        let store = CatalogStore::load(
            Rc::clone(&storage) as Rc<dyn StorageBackend>,
            Rc::new(MemoryLink::new()) as Rc<dyn SnapshotLink>,
        );

        // Broken key degrades to defaults, the parseable key is kept.
        assert_eq!(store.services(), defaults::default_services());
        assert_eq!(store.sub_services().len(), 1);
        assert_eq!(store.sub_services()[0].name, "Kept");
    }

    #[test]
    fn test_add_service_end_to_end() {
        let (store, storage, link) = fresh_store();

        let created = store.add_service("Pressing").expect("add should succeed");
        assert_eq!(created.name, "Pressing");
        assert!(created.active);

        let services = store.services();
        assert_eq!(services.len(), 5);
        assert_eq!(services.last().unwrap().id, created.id);
        assert_eq!(
            services.iter().filter(|s| s.id == created.id).count(),
            1,
            "fresh id must not collide with an existing one"
        );

        // Storage round-trips to the same five entries.
        assert_eq!(stored_services(&storage), services);

        // The link payload decodes to the same snapshot.
        let decoded = codec::decode(&link.read().unwrap()).unwrap();
        assert_eq!(decoded.services.len(), 5);
        assert_eq!(decoded.services.last().unwrap().name, "Pressing");
    }

    #[test]
    fn test_blank_names_are_rejected_without_side_effects() {
        let (store, storage, _) = fresh_store();
        let before = store.services();

        let result = store.add_service("   ");
        assert!(matches!(result, Err(StoreError::InvalidName(_))));
        assert_eq!(store.services(), before);
        assert_eq!(stored_services(&storage), before);

        assert!(store.add_sub_service("").is_err());
        assert!(store.add_clothing_item("\t ").is_err());
        assert!(store
            .rename_entry(Collection::Services, &before[0].id, "  ")
            .is_err());
    }

    #[test]
    fn test_names_are_trimmed_on_add() {
        let (store, _, _) = fresh_store();
        let created = store.add_service("  Pressing  ").unwrap();
        assert_eq!(created.name, "Pressing");
    }

    #[test]
    fn test_rename_keeps_active_flag() {
        let (store, _, _) = fresh_store();
        let id = store.services()[0].id.clone();
        store.set_entry_active(Collection::Services, &id, false).unwrap();

        store.rename_entry(Collection::Services, &id, "Renamed").unwrap();

        let service = store.services().into_iter().find(|s| s.id == id).unwrap();
        assert_eq!(service.name, "Renamed");
        assert!(!service.active);
    }

    #[test]
    fn test_rename_unknown_id_is_a_noop() {
        let (store, _, _) = fresh_store();
        let before = store.services();
        store.rename_entry(Collection::Services, "svc-nope", "Ghost").unwrap();
        assert_eq!(store.services(), before);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (store, storage, _) = fresh_store();
        let id = store.clothing_items()[0].id.clone();

        store.delete_entry(Collection::ClothingItems, &id).unwrap();
        let after_first = store.clothing_items();
        assert_eq!(after_first.len(), 3);

        store.delete_entry(Collection::ClothingItems, &id).unwrap();
        assert_eq!(store.clothing_items(), after_first);

        let stored: Vec<serde_json::Value> =
            serde_json::from_str(&storage.read(CLOTHING_ITEMS_KEY).unwrap()).unwrap();
        assert_eq!(stored.len(), 3);
    }

    #[test]
    fn test_publish_after_every_mutation() {
        let (store, storage, _) = fresh_store();
        let id = store.services()[0].id.clone();

        store.set_entry_active(Collection::Services, &id, false).unwrap();
        assert_eq!(stored_services(&storage), store.services());

        store.rename_entry(Collection::Services, &id, "Toggled").unwrap();
        assert_eq!(stored_services(&storage), store.services());

        store.delete_entry(Collection::Services, &id).unwrap();
        assert_eq!(stored_services(&storage), store.services());
    }

    #[test]
    fn test_rapid_adds_get_distinct_ids() {
        let (store, _, _) = fresh_store();
        for i in 0..50 {
            store.add_service(&format!("Service {}", i)).unwrap();
        }
        let mut ids: Vec<_> = store.services().into_iter().map(|s| s.id).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_deleted_catalog_id_renders_as_opaque_id() {
        let (store, _, _) = fresh_store();
        let id = store.sub_services()[0].id.clone();
        assert_ne!(store.sub_service_name(&id), id);
        store.delete_entry(Collection::SubServices, &id).unwrap();
        // Dangling references fall back to the raw id.
        assert_eq!(store.sub_service_name(&id), id);
    }

    // ========================
    // Studio directory
    // ========================

    fn directory_with_adoption() -> (StudioDirectory, Rc<MemoryStorage>, String, String, String) {
        let storage = Rc::new(MemoryStorage::new());
        let directory = StudioDirectory::load_with_ids(
            Rc::clone(&storage) as Rc<dyn StorageBackend>,
            IdSource::with_base(100),
        );
        let studio = directory
            .add_studio(StudioProfile {
                name: "Suds & Co".to_string(),
                owner_name: "Meera Nair".to_string(),
                phone: "+91 90000 00000".to_string(),
                email: "meera@suds.in".to_string(),
                address: "Fort Kochi".to_string(),
            })
            .unwrap();
        let service = directory.adopt_service(&studio.id, "svc-1", "Wash & Fold").unwrap();
        let sub = directory.add_sub_service(&studio.id, &service.id, "sub-1").unwrap();
        (directory, storage, studio.id, service.id, sub.id)
    }

    #[test]
    fn test_studios_round_trip_through_storage() {
        let (_, storage, studio_id, _, _) = directory_with_adoption();

        let reloaded = StudioDirectory::load(Rc::clone(&storage) as Rc<dyn StorageBackend>);
        let studio = reloaded.studio(&studio_id).expect("studio should survive reload");
        assert_eq!(studio.name, "Suds & Co");
        assert_eq!(studio.studio_services.len(), 1);
        assert_eq!(studio.studio_services[0].sub_services.len(), 1);
        assert!(storage.read(STUDIOS_KEY).is_some());
    }

    #[test]
    fn test_update_studio_replaces_profile_fields() {
        let (directory, _, studio_id, _, _) = directory_with_adoption();

        directory
            .update_studio(
                &studio_id,
                StudioProfile {
                    name: "Suds & Co Deluxe".to_string(),
                    owner_name: "Meera Nair".to_string(),
                    phone: "+91 90000 00001".to_string(),
                    email: "hello@suds.in".to_string(),
                    address: "Mattancherry, Kochi".to_string(),
                },
            )
            .unwrap();

        let studio = directory.studio(&studio_id).unwrap();
        assert_eq!(studio.name, "Suds & Co Deluxe");
        assert_eq!(studio.phone, "+91 90000 00001");
        // Adoptions survive a profile update.
        assert_eq!(studio.studio_services.len(), 1);
    }

    #[test]
    fn test_blank_studio_name_is_rejected() {
        let storage = Rc::new(MemoryStorage::new());
        let directory = StudioDirectory::load(Rc::clone(&storage) as Rc<dyn StorageBackend>);
        let result = directory.add_studio(StudioProfile {
            name: "  ".to_string(),
            ..StudioProfile::default()
        });
        assert!(matches!(result, Err(StoreError::InvalidName(_))));
    }

    #[test]
    fn test_deactivating_last_sub_service_deactivates_parent() {
        let (directory, _, studio_id, service_id, sub_id) = directory_with_adoption();

        directory
            .set_sub_service_active(&studio_id, &service_id, &sub_id, false)
            .unwrap();

        let studio = directory.studio(&studio_id).unwrap();
        assert!(!studio.studio_services[0].active);
        assert_eq!(studio.studio_services[0].sub_services[0].active, Some(false));
    }

    #[test]
    fn test_reactivating_a_sub_service_reactivates_parent() {
        let (directory, _, studio_id, service_id, sub_id) = directory_with_adoption();

        directory
            .set_sub_service_active(&studio_id, &service_id, &sub_id, false)
            .unwrap();
        directory
            .set_sub_service_active(&studio_id, &service_id, &sub_id, true)
            .unwrap();

        let studio = directory.studio(&studio_id).unwrap();
        assert!(studio.studio_services[0].active);
    }

    #[test]
    fn test_deactivating_last_item_cascades_upward() {
        let (directory, _, studio_id, service_id, sub_id) = directory_with_adoption();
        directory
            .set_selected_items(&studio_id, &service_id, &sub_id, vec!["it-1".to_string()])
            .unwrap();

        directory
            .set_item_status(&studio_id, &service_id, &sub_id, "it-1", false)
            .unwrap();

        let studio = directory.studio(&studio_id).unwrap();
        let sub = &studio.studio_services[0].sub_services[0];
        assert!(!sub.is_active_or_default());
        assert!(!studio.studio_services[0].active);
    }

    #[test]
    fn test_reactivating_an_item_cascades_upward() {
        let (directory, _, studio_id, service_id, sub_id) = directory_with_adoption();
        directory
            .set_selected_items(
                &studio_id,
                &service_id,
                &sub_id,
                vec!["it-1".to_string(), "it-2".to_string()],
            )
            .unwrap();
        directory
            .set_item_status(&studio_id, &service_id, &sub_id, "it-1", false)
            .unwrap();
        directory
            .set_item_status(&studio_id, &service_id, &sub_id, "it-2", false)
            .unwrap();

        directory
            .set_item_status(&studio_id, &service_id, &sub_id, "it-1", true)
            .unwrap();

        let studio = directory.studio(&studio_id).unwrap();
        let sub = &studio.studio_services[0].sub_services[0];
        assert!(sub.is_active_or_default());
        assert!(studio.studio_services[0].active);
    }

    #[test]
    fn test_deleting_sub_service_reevaluates_parent() {
        let (directory, _, studio_id, service_id, sub_id) = directory_with_adoption();
        let second = directory.add_sub_service(&studio_id, &service_id, "sub-2").unwrap();
        directory
            .set_sub_service_active(&studio_id, &service_id, &sub_id, false)
            .unwrap();

        // The only active sub-service goes away; the inactive one remains.
        directory
            .delete_sub_service(&studio_id, &service_id, &second.id)
            .unwrap();

        let studio = directory.studio(&studio_id).unwrap();
        assert!(!studio.studio_services[0].active);
    }

    #[test]
    fn test_adopting_twice_returns_existing_record() {
        let (directory, _, studio_id, service_id, _) = directory_with_adoption();
        let again = directory.adopt_service(&studio_id, "svc-1", "Wash & Fold").unwrap();
        assert_eq!(again.id, service_id);
        assert_eq!(directory.studio(&studio_id).unwrap().studio_services.len(), 1);
    }

    #[test]
    fn test_pricing_updates_persist() {
        let (directory, storage, studio_id, service_id, sub_id) = directory_with_adoption();
        directory
            .set_sub_service_pricing(
                &studio_id,
                &service_id,
                &sub_id,
                crate::domain::SubServicePricing {
                    standard_price_per_kg: Some(60.0),
                    express_price_per_kg: Some(95.0),
                    standard_price_per_item: None,
                    express_price_per_item: None,
                },
            )
            .unwrap();
        directory
            .set_item_prices(&studio_id, &service_id, &sub_id, "it-1", Some(20.0), Some(35.0))
            .unwrap();

        let reloaded = StudioDirectory::load(Rc::clone(&storage) as Rc<dyn StorageBackend>);
        let studio = reloaded.studio(&studio_id).unwrap();
        let sub = &studio.studio_services[0].sub_services[0];
        assert_eq!(sub.standard_price_per_kg, Some(60.0));
        assert_eq!(sub.express_price_per_kg, Some(95.0));
        assert_eq!(sub.standard_item_prices.get("it-1"), Some(&20.0));
        assert_eq!(sub.express_item_prices.get("it-1"), Some(&35.0));
    }

    #[test]
    fn test_unknown_studio_is_not_found() {
        let storage = Rc::new(MemoryStorage::new());
        let directory = StudioDirectory::load(Rc::clone(&storage) as Rc<dyn StorageBackend>);
        let result = directory.set_studio_active("studio-nope", false);
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }
}
