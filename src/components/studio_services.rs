//! Studio Services Editor
//!
//! Per-studio adoption of the platform catalog: which services the studio
//! offers, which sub-services and clothing items, and the studio's own
//! standard/express pricing. Status toggles cascade through the studio
//! directory (last active child deactivates the parent). Catalog entities
//! are referenced by id; a deleted catalog entry shows up as its raw id.

use catalog_store::domain::{
    ClothingItem, Service, StoreResult, StudioService, StudioSubService, SubService,
    SubServicePricing,
};
use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::{use_directory, AppContext, NoticeKind};
use crate::store::{sync_studios, use_app_store, AppStateStoreFields};

fn save_report<T>(ctx: &AppContext, result: StoreResult<T>) {
    if result.is_err() {
        ctx.notify(NoticeKind::Error, "Failed to save changes");
    }
}

fn parse_price(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|p| *p >= 0.0)
}

fn format_price(price: Option<f64>) -> String {
    price.map(|p| p.to_string()).unwrap_or_default()
}

/// Per-item configuration inside one sub-service: selection, status, prices
#[component]
fn ItemConfigRow(
    studio_id: String,
    adoption_id: String,
    sub_id: String,
    item: ClothingItem,
    selected: bool,
    item_active: bool,
    standard_price: Option<f64>,
    express_price: Option<f64>,
    selected_items: Vec<String>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let directory = use_directory();
    let store = use_app_store();

    let select_studio = studio_id.clone();
    let select_adoption = adoption_id.clone();
    let select_sub = sub_id.clone();
    let item_id = item.id.clone();
    let on_select = move |_| {
        let mut items = selected_items.clone();
        if selected {
            items.retain(|i| i != &item_id);
        } else {
            items.push(item_id.clone());
        }
        save_report(
            &ctx,
            directory.with_value(|d| {
                d.set_selected_items(&select_studio, &select_adoption, &select_sub, items)
            }),
        );
        sync_studios(store, directory);
    };

    let status_studio = studio_id.clone();
    let status_adoption = adoption_id.clone();
    let status_sub = sub_id.clone();
    let status_item = item.id.clone();
    let on_status = move |_| {
        save_report(
            &ctx,
            directory.with_value(|d| {
                d.set_item_status(&status_studio, &status_adoption, &status_sub, &status_item, !item_active)
            }),
        );
        sync_studios(store, directory);
    };

    let std_studio = studio_id.clone();
    let std_adoption = adoption_id.clone();
    let std_sub = sub_id.clone();
    let std_item = item.id.clone();
    let on_standard_price = move |ev: web_sys::Event| {
        let price = parse_price(&event_target_value(&ev));
        save_report(
            &ctx,
            directory.with_value(|d| {
                d.set_item_prices(&std_studio, &std_adoption, &std_sub, &std_item, price, express_price)
            }),
        );
        sync_studios(store, directory);
    };

    let exp_studio = studio_id.clone();
    let exp_adoption = adoption_id.clone();
    let exp_sub = sub_id.clone();
    let exp_item = item.id.clone();
    let on_express_price = move |ev: web_sys::Event| {
        let price = parse_price(&event_target_value(&ev));
        save_report(
            &ctx,
            directory.with_value(|d| {
                d.set_item_prices(&exp_studio, &exp_adoption, &exp_sub, &exp_item, standard_price, price)
            }),
        );
        sync_studios(store, directory);
    };

    view! {
        <div class="item-config-row">
            <button
                class=move || if selected { "select-btn on" } else { "select-btn off" }
                on:click=on_select
            >
                {item.name.clone()}
            </button>

            {selected.then(|| view! {
                <button
                    class=move || if item_active { "toggle-btn small on" } else { "toggle-btn small off" }
                    on:click=on_status
                >
                    {move || if item_active { "Active" } else { "Inactive" }}
                </button>
                <input
                    type="number"
                    class="price-input"
                    placeholder="Std ₹"
                    value=format_price(standard_price)
                    on:change=on_standard_price
                />
                <input
                    type="number"
                    class="price-input"
                    placeholder="Exp ₹"
                    value=format_price(express_price)
                    on:change=on_express_price
                />
            })}
        </div>
    }
}

/// One attached sub-service: status, pricing, and item configuration
#[component]
fn SubServiceRow(
    studio_id: String,
    adoption_id: String,
    sub: StudioSubService,
    sub_name: String,
    clothing_items: Vec<ClothingItem>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let directory = use_directory();
    let store = use_app_store();

    let active = sub.is_active_or_default();
    let pricing = SubServicePricing {
        standard_price_per_kg: sub.standard_price_per_kg,
        express_price_per_kg: sub.express_price_per_kg,
        standard_price_per_item: sub.standard_price_per_item,
        express_price_per_item: sub.express_price_per_item,
    };

    let toggle_studio = studio_id.clone();
    let toggle_adoption = adoption_id.clone();
    let toggle_sub = sub.id.clone();
    let on_toggle = move |_| {
        save_report(
            &ctx,
            directory.with_value(|d| {
                d.set_sub_service_active(&toggle_studio, &toggle_adoption, &toggle_sub, !active)
            }),
        );
        sync_studios(store, directory);
    };

    let remove_studio = studio_id.clone();
    let remove_adoption = adoption_id.clone();
    let remove_sub = sub.id.clone();
    let on_remove = move |_: ()| {
        save_report(
            &ctx,
            directory.with_value(|d| {
                d.delete_sub_service(&remove_studio, &remove_adoption, &remove_sub)
            }),
        );
        sync_studios(store, directory);
    };

    // One handler per price field; each replaces the four fields as a unit
    let price_handler = {
        let studio_id = studio_id.clone();
        let adoption_id = adoption_id.clone();
        let sub_id = sub.id.clone();
        move |build: fn(SubServicePricing, Option<f64>) -> SubServicePricing| {
            let studio_id = studio_id.clone();
            let adoption_id = adoption_id.clone();
            let sub_id = sub_id.clone();
            move |ev: web_sys::Event| {
                let updated = build(pricing, parse_price(&event_target_value(&ev)));
                save_report(
                    &ctx,
                    directory.with_value(|d| {
                        d.set_sub_service_pricing(&studio_id, &adoption_id, &sub_id, updated)
                    }),
                );
                sync_studios(store, directory);
            }
        }
    };

    let on_std_kg = price_handler(|mut p, v| {
        p.standard_price_per_kg = v;
        p
    });
    let on_exp_kg = price_handler(|mut p, v| {
        p.express_price_per_kg = v;
        p
    });
    let on_std_item = price_handler(|mut p, v| {
        p.standard_price_per_item = v;
        p
    });
    let on_exp_item = price_handler(|mut p, v| {
        p.express_price_per_item = v;
        p
    });

    view! {
        <div class=move || if active { "sub-service-row" } else { "sub-service-row muted" }>
            <div class="sub-service-head">
                <span class="sub-service-name">{sub_name.clone()}</span>
                <button
                    class=move || if active { "toggle-btn on" } else { "toggle-btn off" }
                    on:click=on_toggle
                >
                    {move || if active { "Active" } else { "Inactive" }}
                </button>
                <DeleteConfirmButton
                    button_class="delete-btn"
                    on_confirm=Callback::new(on_remove)
                />
            </div>

            <div class="pricing-grid">
                <label>
                    "Standard ₹/kg"
                    <input
                        type="number"
                        class="price-input"
                        value=format_price(pricing.standard_price_per_kg)
                        on:change=on_std_kg
                    />
                </label>
                <label>
                    "Express ₹/kg"
                    <input
                        type="number"
                        class="price-input"
                        value=format_price(pricing.express_price_per_kg)
                        on:change=on_exp_kg
                    />
                </label>
                <label>
                    "Standard ₹/item"
                    <input
                        type="number"
                        class="price-input"
                        value=format_price(pricing.standard_price_per_item)
                        on:change=on_std_item
                    />
                </label>
                <label>
                    "Express ₹/item"
                    <input
                        type="number"
                        class="price-input"
                        value=format_price(pricing.express_price_per_item)
                        on:change=on_exp_item
                    />
                </label>
            </div>

            <div class="item-config-list">
                {clothing_items.iter().map(|item| {
                    let selected = sub.selected_items.contains(&item.id);
                    view! {
                        <ItemConfigRow
                            studio_id=studio_id.clone()
                            adoption_id=adoption_id.clone()
                            sub_id=sub.id.clone()
                            item=item.clone()
                            selected=selected
                            item_active=sub.item_active(&item.id)
                            standard_price=sub.standard_item_prices.get(&item.id).copied()
                            express_price=sub.express_item_prices.get(&item.id).copied()
                            selected_items=sub.selected_items.clone()
                        />
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// One catalog service: offered or not, with its attached sub-services
#[component]
fn ServiceAdoptionCard(
    studio_id: String,
    service: Service,
    adoption: Option<StudioService>,
    sub_services: Vec<SubService>,
    clothing_items: Vec<ClothingItem>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let directory = use_directory();
    let store = use_app_store();

    match adoption {
        None => {
            let adopt_studio = studio_id.clone();
            let service_id = service.id.clone();
            let service_name = service.name.clone();
            let on_adopt = move |_| {
                save_report(
                    &ctx,
                    directory.with_value(|d| {
                        d.adopt_service(&adopt_studio, &service_id, &service_name)
                    }),
                );
                sync_studios(store, directory);
            };

            view! {
                <div class="adoption-card not-offered">
                    <div class="adoption-head">
                        <span class="adoption-name">{service.name.clone()}</span>
                        <button class="adopt-btn" on:click=on_adopt>"Offer this service"</button>
                    </div>
                </div>
            }
            .into_any()
        }
        Some(adoption) => {
            let drop_studio = studio_id.clone();
            let drop_service = service.id.clone();
            let on_drop = move |_: ()| {
                save_report(
                    &ctx,
                    directory.with_value(|d| d.drop_service(&drop_studio, &drop_service)),
                );
                sync_studios(store, directory);
            };

            let adoption_id = adoption.id.clone();
            let adoption_active = adoption.active;

            view! {
                <div class="adoption-card offered">
                    <div class="adoption-head">
                        <span class="adoption-name">{service.name.clone()}</span>
                        <span class=move || if adoption_active { "status-badge delivered" } else { "status-badge cancelled" }>
                            {move || if adoption_active { "Active" } else { "Inactive" }}
                        </span>
                        <DeleteConfirmButton
                            button_class="delete-btn"
                            on_confirm=Callback::new(on_drop)
                        />
                    </div>

                    <div class="sub-service-list">
                        {sub_services.iter().map(|sub_service| {
                            let attached = adoption
                                .sub_services
                                .iter()
                                .find(|s| s.sub_service_id() == sub_service.id)
                                .cloned();
                            match attached {
                                Some(sub) => view! {
                                    <SubServiceRow
                                        studio_id=studio_id.clone()
                                        adoption_id=adoption_id.clone()
                                        sub=sub
                                        sub_name=sub_service.name.clone()
                                        clothing_items=clothing_items.clone()
                                    />
                                }.into_any(),
                                None => {
                                    let add_studio = studio_id.clone();
                                    let add_adoption = adoption_id.clone();
                                    let add_sub = sub_service.id.clone();
                                    let label = sub_service.name.clone();
                                    let on_add = move |_| {
                                        save_report(
                                            &ctx,
                                            directory.with_value(|d| {
                                                d.add_sub_service(&add_studio, &add_adoption, &add_sub)
                                            }),
                                        );
                                        sync_studios(store, directory);
                                    };
                                    view! {
                                        <div class="sub-service-add">
                                            <span class="sub-service-name muted">{label}</span>
                                            <button class="adopt-btn small" on:click=on_add>"Add"</button>
                                        </div>
                                    }.into_any()
                                }
                            }
                        }).collect_view()}
                    </div>
                </div>
            }
            .into_any()
        }
    }
}

/// Full-page editor for one studio's adopted services
#[component]
pub fn StudioServicesEditor(studio_id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let sid = studio_id.clone();

    view! {
        <div class="page">
            <button class="back-btn" on:click=move |_| ctx.select_studio(None)>
                "← Back to studios"
            </button>

            {move || {
                let studio_id = sid.clone();
                let studio = store
                    .studios()
                    .get()
                    .into_iter()
                    .find(|s| s.id == studio_id);
                let Some(studio) = studio else {
                    return view! { <div class="empty-message">"Studio not found"</div> }.into_any();
                };

                let services = store.services().get();
                let sub_services = store.sub_services().get();
                let clothing_items = store.clothing_items().get();

                view! {
                    <h1>{studio.name.clone()} " — Services"</h1>

                    <div class="adoption-list">
                        {services.iter().map(|service| {
                            let adoption = studio
                                .studio_services
                                .iter()
                                .find(|ss| ss.service_id == service.id)
                                .cloned();
                            view! {
                                <ServiceAdoptionCard
                                    studio_id=studio_id.clone()
                                    service=service.clone()
                                    adoption=adoption
                                    sub_services=sub_services.clone()
                                    clothing_items=clothing_items.clone()
                                />
                            }
                        }).collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
