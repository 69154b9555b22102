//! Revenue Page
//!
//! Summary tiles and a per-studio breakdown derived from the mock order
//! dataset. Cancelled orders are excluded from revenue.

use std::collections::BTreeMap;

use leptos::prelude::*;

use crate::components::StatTile;
use crate::mock;
use crate::models::{Order, OrderStatus};

fn month_key(order: &Order) -> String {
    order.placed_on.format("%Y-%m").to_string()
}

fn revenue_of(orders: &[Order]) -> f64 {
    orders
        .iter()
        .filter(|o| o.status != OrderStatus::Cancelled)
        .map(|o| o.amount)
        .sum()
}

/// Month-over-month revenue change in percent, if two months exist
fn month_over_month(orders: &[Order]) -> Option<f64> {
    let mut by_month: BTreeMap<String, f64> = BTreeMap::new();
    for order in orders.iter().filter(|o| o.status != OrderStatus::Cancelled) {
        *by_month.entry(month_key(order)).or_insert(0.0) += order.amount;
    }
    let mut months = by_month.values().rev();
    let current = months.next()?;
    let previous = months.next()?;
    if *previous == 0.0 {
        return None;
    }
    Some((current - previous) / previous * 100.0)
}

/// Revenue dashboard page
#[component]
pub fn RevenuePage() -> impl IntoView {
    let orders = mock::orders();

    let total_revenue = revenue_of(&orders);
    let delivered = orders.iter().filter(|o| o.status == OrderStatus::Delivered).count();
    let billable: Vec<_> = orders
        .iter()
        .filter(|o| o.status != OrderStatus::Cancelled)
        .cloned()
        .collect();
    let avg_order = if billable.is_empty() {
        0.0
    } else {
        total_revenue / billable.len() as f64
    };
    let mom = month_over_month(&orders);

    let mut by_studio: BTreeMap<&'static str, (usize, f64)> = BTreeMap::new();
    for order in &billable {
        let entry = by_studio.entry(order.studio).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += order.amount;
    }

    view! {
        <div class="page">
            <h1>"Revenue"</h1>

            <div class="stat-row">
                <StatTile
                    label="Total revenue"
                    value=format!("₹{:.0}", total_revenue)
                    delta=mom.map(|pct| format!("{:+.1}% vs last month", pct))
                    delta_positive=mom.map_or(false, |pct| pct >= 0.0)
                />
                <StatTile
                    label="Billable orders"
                    value=billable.len().to_string()
                />
                <StatTile
                    label="Delivered"
                    value=delivered.to_string()
                />
                <StatTile
                    label="Avg order value"
                    value=format!("₹{:.0}", avg_order)
                />
            </div>

            <h2>"By studio"</h2>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Studio"</th>
                        <th>"Orders"</th>
                        <th>"Revenue"</th>
                        <th>"Share"</th>
                    </tr>
                </thead>
                <tbody>
                    {by_studio.into_iter().map(|(studio, (count, revenue))| {
                        let share = if total_revenue > 0.0 {
                            revenue / total_revenue * 100.0
                        } else {
                            0.0
                        };
                        view! {
                            <tr>
                                <td>{studio}</td>
                                <td>{count}</td>
                                <td>{format!("₹{:.0}", revenue)}</td>
                                <td>{format!("{:.1}%", share)}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
