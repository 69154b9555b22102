//! Notice Banner Component
//!
//! Transient banner for validation and save errors. Auto-dismisses after a
//! few seconds unless a newer notice replaced it.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{AppContext, NoticeKind};

const DISMISS_AFTER_MS: u32 = 4_000;

/// Banner showing the current notice, if any
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Schedule auto-dismiss whenever a notice appears
    Effect::new(move |_| {
        if let Some(notice) = ctx.notice.get() {
            spawn_local(async move {
                TimeoutFuture::new(DISMISS_AFTER_MS).await;
                // Only clears if this notice is still the one showing
                ctx.dismiss(&notice);
            });
        }
    });

    view! {
        {move || ctx.notice.get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Info => "notice-banner info",
                NoticeKind::Error => "notice-banner error",
            };
            view! {
                <div class=class>
                    <span class="notice-text">{notice.text.clone()}</span>
                    <button class="notice-close" on:click=move |_| ctx.clear_notice()>
                        "×"
                    </button>
                </div>
            }
        })}
    }
}
