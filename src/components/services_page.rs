//! Services Page
//!
//! Platform-wide catalog management: services, sub-services, and clothing
//! items side by side. Every mutation goes through the catalog store and is
//! republished to local storage and the URL.

use catalog_store::Collection;
use leptos::prelude::*;

use crate::components::{CatalogRow, CatalogSection};
use crate::store::{use_app_store, AppStateStoreFields};

/// Catalog management page
#[component]
pub fn ServicesPage() -> impl IntoView {
    let store = use_app_store();

    let service_rows = Memo::new(move |_| {
        store
            .services()
            .get()
            .iter()
            .map(|s| CatalogRow {
                id: s.id.clone(),
                name: s.name.clone(),
                active: s.active,
            })
            .collect::<Vec<_>>()
    });

    let sub_service_rows = Memo::new(move |_| {
        store
            .sub_services()
            .get()
            .iter()
            .map(|s| CatalogRow {
                id: s.id.clone(),
                name: s.name.clone(),
                active: s.active,
            })
            .collect::<Vec<_>>()
    });

    let clothing_item_rows = Memo::new(move |_| {
        store
            .clothing_items()
            .get()
            .iter()
            .map(|i| CatalogRow {
                id: i.id.clone(),
                name: i.name.clone(),
                active: i.active,
            })
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page">
            <h1>"Service Catalog"</h1>
            <p class="page-hint">
                "Changes are saved to this browser and mirrored into the page URL, so the current catalog can be shared as a link."
            </p>

            <div class="catalog-grid">
                <CatalogSection
                    title="Services"
                    placeholder="Add service..."
                    collection=Collection::Services
                    rows=service_rows
                />
                <CatalogSection
                    title="Sub-Services"
                    placeholder="Add sub-service..."
                    collection=Collection::SubServices
                    rows=sub_service_rows
                />
                <CatalogSection
                    title="Clothing Items"
                    placeholder="Add clothing item..."
                    collection=Collection::ClothingItems
                    rows=clothing_item_rows
                />
            </div>
        </div>
    }
}
