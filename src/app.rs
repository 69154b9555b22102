//! Washboard Frontend App
//!
//! Main application component: builds the core stores over the browser
//! adapters, provides them through context, and switches pages.

use std::rc::Rc;

use catalog_store::link::SnapshotLink;
use catalog_store::storage::StorageBackend;
use catalog_store::{CatalogStore, StudioDirectory};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::browser::{BrowserLink, BrowserStorage};
use crate::components::{
    NoticeBanner, OrdersPage, PaymentsPage, RatingsPage, RevenuePage, ServicesPage, Sidebar,
    StudiosPage, UsersPage,
};
use crate::context::{AppContext, CatalogHandle, DirectoryHandle, Notice, Page};
use crate::store::{sync_catalog, sync_studios, AppState};

#[component]
pub fn App() -> impl IntoView {
    // Core stores over the browser adapters. Load order matters: the
    // catalog store adopts a URL payload (if any) before anything renders.
    let storage: Rc<dyn StorageBackend> = Rc::new(BrowserStorage);
    let link: Rc<dyn SnapshotLink> = Rc::new(BrowserLink);
    let catalog: CatalogHandle =
        StoredValue::new_local(CatalogStore::load(Rc::clone(&storage), link));
    let directory: DirectoryHandle = StoredValue::new_local(StudioDirectory::load(storage));

    catalog.with_value(|c| {
        web_sys::console::log_1(
            &format!(
                "[APP] catalog loaded: {} services, {} sub-services, {} clothing items",
                c.services().len(),
                c.sub_services().len(),
                c.clothing_items().len()
            )
            .into(),
        );
    });

    // Reactive mirror the views read from
    let store = Store::new(AppState::default());
    sync_catalog(store, catalog);
    sync_studios(store, directory);

    // Navigation and banner state
    let (page, set_page) = signal(Page::Orders);
    let (selected_studio, set_selected_studio) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<Notice>>(None);

    // Provide context to all children
    provide_context(store);
    provide_context(catalog);
    provide_context(directory);
    provide_context(AppContext::new(
        (page, set_page),
        (selected_studio, set_selected_studio),
        (notice, set_notice),
    ));

    view! {
        <div class="app-layout">
            <Sidebar />

            <main class="main-content">
                <NoticeBanner />

                {move || match page.get() {
                    Page::Orders => view! { <OrdersPage /> }.into_any(),
                    Page::Revenue => view! { <RevenuePage /> }.into_any(),
                    Page::Studios => view! { <StudiosPage /> }.into_any(),
                    Page::Services => view! { <ServicesPage /> }.into_any(),
                    Page::Payments => view! { <PaymentsPage /> }.into_any(),
                    Page::Ratings => view! { <RatingsPage /> }.into_any(),
                    Page::Users => view! { <UsersPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
