//! Sidebar Component
//!
//! Left navigation column with one button per page.

use leptos::prelude::*;

use crate::context::{AppContext, Page};

/// Navigation sidebar
#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <nav class="sidebar">
            <div class="sidebar-brand">"Washboard"</div>
            <div class="sidebar-subtitle">"Laundry Marketplace Admin"</div>

            {Page::ALL.iter().map(|&page| {
                let is_active = move || ctx.page.get() == page;
                view! {
                    <button
                        class=move || if is_active() { "nav-btn active" } else { "nav-btn" }
                        on:click=move |_| ctx.navigate(page)
                    >
                        {page.title()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
