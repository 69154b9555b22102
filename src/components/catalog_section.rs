//! Catalog Section Component
//!
//! One card of the Services page: a single catalog collection with an add
//! form, inline rename, active toggle, and delete-with-confirm. The three
//! collections are structurally identical, so the page renders this three
//! times with a different `Collection`.

use catalog_store::domain::StoreError;
use catalog_store::Collection;
use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::{use_catalog, AppContext, NoticeKind};
use crate::store::{sync_catalog, use_app_store};

/// A row of any catalog collection, flattened for display
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogRow {
    pub id: String,
    pub name: String,
    pub active: bool,
}

fn report(ctx: &AppContext, result: Result<(), StoreError>) {
    match result {
        Ok(()) => {}
        Err(StoreError::InvalidName(_)) => {
            ctx.notify(NoticeKind::Error, "Name cannot be empty");
        }
        Err(StoreError::SaveFailed(_)) => {
            ctx.notify(NoticeKind::Error, "Failed to save changes");
        }
        Err(e) => {
            ctx.notify(NoticeKind::Error, e.to_string());
        }
    }
}

/// Add form for one collection
#[component]
fn CatalogAddForm(collection: Collection, placeholder: &'static str) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let catalog = use_catalog();
    let store = use_app_store();

    let (new_name, set_new_name) = signal(String::new());

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get();
        let result = catalog.with_value(|c| match collection {
            Collection::Services => c.add_service(&name).map(|_| ()),
            Collection::SubServices => c.add_sub_service(&name).map(|_| ()),
            Collection::ClothingItems => c.add_clothing_item(&name).map(|_| ()),
        });
        if result.is_ok() {
            set_new_name.set(String::new());
        }
        report(&ctx, result);
        sync_catalog(store, catalog);
    };

    view! {
        <form class="catalog-add-form" on:submit=on_add>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || new_name.get()
                on:input=move |ev| set_new_name.set(event_target_value(&ev))
            />
            <button type="submit">"+"</button>
        </form>
    }
}

/// One catalog collection rendered as a card
#[component]
pub fn CatalogSection(
    title: &'static str,
    placeholder: &'static str,
    collection: Collection,
    rows: Memo<Vec<CatalogRow>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let catalog = use_catalog();
    let store = use_app_store();

    view! {
        <section class="catalog-section">
            <div class="catalog-section-header">{title}</div>

            <CatalogAddForm collection=collection placeholder=placeholder />

            <div class="catalog-rows">
                <For
                    each=move || rows.get()
                    // Content is part of the key so renames and toggles re-render the row
                    key=|row| (row.id.clone(), row.name.clone(), row.active)
                    children=move |row| {
                        let id = row.id.clone();
                        let active = row.active;

                        let (editing, set_editing) = signal(false);
                        let (draft, set_draft) = signal(row.name.clone());

                        let toggle_id = id.clone();
                        let on_toggle = move |_| {
                            report(
                                &ctx,
                                catalog.with_value(|c| c.set_entry_active(collection, &toggle_id, !active)),
                            );
                            sync_catalog(store, catalog);
                        };

                        let rename_id = id.clone();
                        let on_rename = move |ev: web_sys::SubmitEvent| {
                            ev.prevent_default();
                            let result =
                                catalog.with_value(|c| c.rename_entry(collection, &rename_id, &draft.get()));
                            if result.is_ok() {
                                set_editing.set(false);
                            }
                            report(&ctx, result);
                            sync_catalog(store, catalog);
                        };

                        let delete_id = id.clone();
                        let on_delete = move |_: ()| {
                            report(&ctx, catalog.with_value(|c| c.delete_entry(collection, &delete_id)));
                            sync_catalog(store, catalog);
                        };

                        view! {
                            <div class="catalog-row">
                                <button
                                    class=move || if active { "toggle-btn on" } else { "toggle-btn off" }
                                    on:click=on_toggle
                                >
                                    {move || if active { "Active" } else { "Inactive" }}
                                </button>

                                {move || if editing.get() {
                                    let on_rename = on_rename.clone();
                                    view! {
                                        <form class="rename-form" on:submit=on_rename>
                                            <input
                                                type="text"
                                                prop:value=move || draft.get()
                                                on:input=move |ev| set_draft.set(event_target_value(&ev))
                                            />
                                            <button type="submit">"Save"</button>
                                            <button type="button" on:click=move |_| set_editing.set(false)>
                                                "Cancel"
                                            </button>
                                        </form>
                                    }.into_any()
                                } else {
                                    let name = row.name.clone();
                                    view! {
                                        <span
                                            class=move || if active { "catalog-name" } else { "catalog-name muted" }
                                            on:dblclick=move |_| set_editing.set(true)
                                        >
                                            {name}
                                        </span>
                                    }.into_any()
                                }}

                                <button class="edit-btn" on:click=move |_| set_editing.update(|v| *v = !*v)>
                                    "✎"
                                </button>

                                <DeleteConfirmButton
                                    button_class="delete-btn"
                                    on_confirm=Callback::new(on_delete)
                                />
                            </div>
                        }
                    }
                />
            </div>

            {move || if rows.get().is_empty() {
                view! { <div class="empty-message">"Nothing here yet"</div> }.into_any()
            } else {
                view! { <div></div> }.into_any()
            }}
        </section>
    }
}
