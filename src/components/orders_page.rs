//! Orders Page
//!
//! Read-only order list over the mock dataset, with a status filter.

use leptos::prelude::*;

use crate::mock;
use crate::models::{Order, OrderStatus};

fn quantity_label(order: &Order) -> String {
    match (order.weight_kg, order.item_count) {
        (Some(kg), _) => format!("{} kg", kg),
        (None, Some(count)) => format!("{} items", count),
        (None, None) => "—".to_string(),
    }
}

/// Order list page
#[component]
pub fn OrdersPage() -> impl IntoView {
    let orders = mock::orders();
    let (filter, set_filter) = signal::<Option<OrderStatus>>(None);

    let filtered = {
        let orders = orders.clone();
        Memo::new(move |_| {
            let filter = filter.get();
            orders
                .iter()
                .filter(|o| filter.map_or(true, |f| o.status == f))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page">
            <h1>"Orders"</h1>

            <div class="filter-row">
                <button
                    class=move || if filter.get().is_none() { "filter-btn active" } else { "filter-btn" }
                    on:click=move |_| set_filter.set(None)
                >
                    "All"
                </button>
                {OrderStatus::ALL.iter().map(|&status| {
                    let is_active = move || filter.get() == Some(status);
                    view! {
                        <button
                            class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                            on:click=move |_| set_filter.set(Some(status))
                        >
                            {status.label()}
                        </button>
                    }
                }).collect_view()}
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Order"</th>
                        <th>"Customer"</th>
                        <th>"Studio"</th>
                        <th>"Service"</th>
                        <th>"Quantity"</th>
                        <th>"Amount"</th>
                        <th>"Status"</th>
                        <th>"Placed"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || filtered.get()
                        key=|order| order.id
                        children=move |order| {
                            view! {
                                <tr>
                                    <td class="mono">{order.id}</td>
                                    <td>{order.customer}</td>
                                    <td>{order.studio}</td>
                                    <td>{order.service}</td>
                                    <td>{quantity_label(&order)}</td>
                                    <td>{format!("₹{:.0}", order.amount)}</td>
                                    <td><span class=order.status.css_class()>{order.status.label()}</span></td>
                                    <td>{order.placed_on.format("%d %b %Y").to_string()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <p class="item-count">
                {move || format!("{} of {} orders", filtered.get().len(), mock::orders().len())}
            </p>
        </div>
    }
}
