//! Studios Page
//!
//! Studio onboarding form and list. Selecting a studio opens the service
//! adoption editor for that studio.

use catalog_store::domain::{StoreError, StudioProfile};
use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, StudioServicesEditor};
use crate::context::{use_directory, AppContext, NoticeKind};
use crate::store::{sync_studios, use_app_store, AppStateStoreFields};

/// Onboarding form for a new studio
#[component]
fn StudioOnboardingForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let directory = use_directory();
    let store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (owner, set_owner) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (address, set_address) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let profile = StudioProfile {
            name: name.get(),
            owner_name: owner.get(),
            phone: phone.get(),
            email: email.get(),
            address: address.get(),
        };
        match directory.with_value(|d| d.add_studio(profile)) {
            Ok(studio) => {
                set_name.set(String::new());
                set_owner.set(String::new());
                set_phone.set(String::new());
                set_email.set(String::new());
                set_address.set(String::new());
                ctx.notify(NoticeKind::Info, format!("Onboarded {}", studio.name));
            }
            Err(StoreError::InvalidName(_)) => {
                ctx.notify(NoticeKind::Error, "Studio name cannot be empty");
            }
            Err(_) => {
                ctx.notify(NoticeKind::Error, "Failed to save changes");
            }
        }
        sync_studios(store, directory);
    };

    view! {
        <form class="studio-form" on:submit=on_submit>
            <div class="studio-form-row">
                <input
                    type="text"
                    placeholder="Studio name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Owner"
                    prop:value=move || owner.get()
                    on:input=move |ev| set_owner.set(event_target_value(&ev))
                />
            </div>
            <div class="studio-form-row">
                <input
                    type="text"
                    placeholder="Phone"
                    prop:value=move || phone.get()
                    on:input=move |ev| set_phone.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </div>
            <div class="studio-form-row">
                <input
                    type="text"
                    placeholder="Address"
                    prop:value=move || address.get()
                    on:input=move |ev| set_address.set(event_target_value(&ev))
                />
                <button type="submit">"Onboard Studio"</button>
            </div>
        </form>
    }
}

/// Studio list and onboarding, or the services editor when a studio is
/// selected
#[component]
pub fn StudiosPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let directory = use_directory();
    let store = use_app_store();

    view! {
        {move || match ctx.selected_studio.get() {
            Some(studio_id) => view! {
                <StudioServicesEditor studio_id=studio_id />
            }.into_any(),
            None => view! {
                <div class="page">
                    <h1>"Studios"</h1>

                    <StudioOnboardingForm />

                    <div class="studio-list">
                        <For
                            each=move || store.studios().get()
                            key=|studio| (studio.id.clone(), studio.name.clone(), studio.active)
                            children=move |studio| {
                                let active = studio.active;

                                let toggle_id = studio.id.clone();
                                let on_toggle = move |_| {
                                    let result = directory
                                        .with_value(|d| d.set_studio_active(&toggle_id, !active));
                                    if result.is_err() {
                                        ctx.notify(NoticeKind::Error, "Failed to save changes");
                                    }
                                    sync_studios(store, directory);
                                };

                                let delete_id = studio.id.clone();
                                let on_delete = move |_: ()| {
                                    if directory.with_value(|d| d.delete_studio(&delete_id)).is_err() {
                                        ctx.notify(NoticeKind::Error, "Failed to save changes");
                                    }
                                    sync_studios(store, directory);
                                };

                                let manage_id = studio.id.clone();

                                view! {
                                    <div class="studio-card">
                                        <div class="studio-card-main">
                                            <span class="studio-name">{studio.name.clone()}</span>
                                            <span class="studio-owner">{studio.owner_name.clone()}</span>
                                            <span class="studio-contact">
                                                {studio.phone.clone()} " · " {studio.email.clone()}
                                            </span>
                                            <span class="studio-address">{studio.address.clone()}</span>
                                            <span class="studio-since">
                                                "Since " {studio.created_at.format("%d %b %Y").to_string()}
                                            </span>
                                        </div>
                                        <div class="studio-card-actions">
                                            <button
                                                class=move || if active { "toggle-btn on" } else { "toggle-btn off" }
                                                on:click=on_toggle
                                            >
                                                {move || if active { "Active" } else { "Inactive" }}
                                            </button>
                                            <button
                                                class="manage-btn"
                                                on:click=move |_| ctx.select_studio(Some(manage_id.clone()))
                                            >
                                                "Manage Services"
                                            </button>
                                            <DeleteConfirmButton
                                                button_class="delete-btn"
                                                on_confirm=Callback::new(on_delete)
                                            />
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>

                    {move || if store.studios().get().is_empty() {
                        view! { <div class="empty-message">"No studios onboarded yet"</div> }.into_any()
                    } else {
                        view! { <div></div> }.into_any()
                    }}
                </div>
            }.into_any()
        }}
    }
}
