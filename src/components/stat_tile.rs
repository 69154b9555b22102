//! Stat Tile Component
//!
//! Small summary tile used on the revenue and payments pages.

use leptos::prelude::*;

/// One summary number with an optional delta line
#[component]
pub fn StatTile(
    label: &'static str,
    #[prop(into)] value: String,
    #[prop(optional_no_strip)] delta: Option<String>,
    #[prop(optional)] delta_positive: bool,
) -> impl IntoView {
    view! {
        <div class="stat-tile">
            <div class="stat-label">{label}</div>
            <div class="stat-value">{value}</div>
            {delta.map(|delta| {
                let class = if delta_positive { "stat-delta up" } else { "stat-delta down" };
                view! { <div class=class>{delta}</div> }
            })}
        </div>
    }
}
