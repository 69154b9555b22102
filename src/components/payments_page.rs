//! Payments Page
//!
//! Read-only payments list with settlement tiles, over the mock dataset.

use leptos::prelude::*;

use crate::components::StatTile;
use crate::mock;
use crate::models::PaymentStatus;

/// Payments tracking page
#[component]
pub fn PaymentsPage() -> impl IntoView {
    let payments = mock::payments();

    let collected: f64 = payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Paid)
        .map(|p| p.amount)
        .sum();
    let pending: f64 = payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Pending)
        .map(|p| p.amount)
        .sum();
    let refunded: f64 = payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Refunded)
        .map(|p| p.amount)
        .sum();

    view! {
        <div class="page">
            <h1>"Payments"</h1>

            <div class="stat-row">
                <StatTile label="Collected" value=format!("₹{:.0}", collected) />
                <StatTile label="Pending" value=format!("₹{:.0}", pending) />
                <StatTile label="Refunded" value=format!("₹{:.0}", refunded) />
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Payment"</th>
                        <th>"Order"</th>
                        <th>"Studio"</th>
                        <th>"Amount"</th>
                        <th>"Method"</th>
                        <th>"Status"</th>
                        <th>"Date"</th>
                    </tr>
                </thead>
                <tbody>
                    {payments.iter().map(|payment| {
                        view! {
                            <tr>
                                <td class="mono">{payment.id}</td>
                                <td class="mono">{payment.order_id}</td>
                                <td>{payment.studio}</td>
                                <td>{format!("₹{:.0}", payment.amount)}</td>
                                <td>{payment.method}</td>
                                <td><span class=payment.status.css_class()>{payment.status.label()}</span></td>
                                <td>{payment.paid_on.format("%d %b %Y").to_string()}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
