//! Error Banner Component
//!
//! Shows the last failed request until dismissed.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_gallery_context;

const AUTO_DISMISS_MS: u32 = 5_000;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_gallery_context();

    // Auto-dismiss, unless a newer error replaced this one
    Effect::new(move |_| {
        let generation = ctx.error_generation.get();
        if ctx.error.get_untracked().is_some() {
            spawn_local(async move {
                TimeoutFuture::new(AUTO_DISMISS_MS).await;
                ctx.dismiss_if_current(generation);
            });
        }
    });

    view! {
        {move || ctx.error.get().map(|message| view! {
            <div class="error-banner" role="alert">
                <span>{message}</span>
                <button type="button" on:click=move |_| ctx.clear_error()>"×"</button>
            </div>
        })}
    }
}
