//! Users Page
//!
//! Read-only customer listing over the mock dataset.

use leptos::prelude::*;

use crate::mock;

/// Registered users page
#[component]
pub fn UsersPage() -> impl IntoView {
    let users = mock::users();
    let count = users.len();

    view! {
        <div class="page">
            <h1>"Users"</h1>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"User"</th>
                        <th>"Name"</th>
                        <th>"Phone"</th>
                        <th>"Email"</th>
                        <th>"Orders"</th>
                        <th>"Joined"</th>
                    </tr>
                </thead>
                <tbody>
                    {users.iter().map(|user| {
                        view! {
                            <tr>
                                <td class="mono">{user.id}</td>
                                <td>{user.name}</td>
                                <td>{user.phone}</td>
                                <td>{user.email}</td>
                                <td>{user.orders}</td>
                                <td>{user.joined_on.format("%d %b %Y").to_string()}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>

            <p class="item-count">{format!("{} registered users", count)}</p>
        </div>
    }
}
