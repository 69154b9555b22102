//! Ratings Page
//!
//! Customer feedback cards with an average-rating tile, over the mock
//! dataset.

use leptos::prelude::*;

use crate::components::StatTile;
use crate::mock;

fn stars_label(stars: u8) -> String {
    let filled = "★".repeat(stars.min(5) as usize);
    let empty = "☆".repeat(5usize.saturating_sub(stars as usize));
    format!("{}{}", filled, empty)
}

/// Ratings and feedback page
#[component]
pub fn RatingsPage() -> impl IntoView {
    let feedback = mock::feedback();

    let average = if feedback.is_empty() {
        0.0
    } else {
        feedback.iter().map(|f| f.stars as f64).sum::<f64>() / feedback.len() as f64
    };
    let five_star = feedback.iter().filter(|f| f.stars == 5).count();

    view! {
        <div class="page">
            <h1>"Ratings"</h1>

            <div class="stat-row">
                <StatTile label="Average rating" value=format!("{:.1} / 5", average) />
                <StatTile label="Reviews" value=feedback.len().to_string() />
                <StatTile label="Five star" value=five_star.to_string() />
            </div>

            <div class="feedback-list">
                {feedback.iter().map(|entry| {
                    view! {
                        <div class="feedback-card">
                            <div class="feedback-head">
                                <span class="feedback-customer">{entry.customer}</span>
                                <span class="feedback-stars">{stars_label(entry.stars)}</span>
                            </div>
                            <div class="feedback-comment">{entry.comment}</div>
                            <div class="feedback-meta">
                                {entry.studio} " · " {entry.posted_on.format("%d %b %Y").to_string()}
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
