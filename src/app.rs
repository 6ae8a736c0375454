//! Photo Gallery App
//!
//! Page root: loads photos on mount and keeps comments in step with the
//! slide on screen.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_slideshow::create_slide_signals;
use reactive_stores::Store;

use crate::api;
use crate::components::{CommentList, ErrorBanner, PhotoInfo, Slideshow};
use crate::context::GalleryContext;
use crate::store::{store_set_comments, store_set_photos, GalleryState};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(GalleryState::default());
    let slides = create_slide_signals(0);
    let ctx = GalleryContext::new(store, slides, signal(None));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load photos on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_photos().await {
                Ok(photos) => {
                    web_sys::console::log_1(&format!("[APP] Showing {} slides", photos.len()).into());
                    slides.reset(photos.len());
                    store_set_photos(&store, photos);
                }
                Err(e) => ctx.report("APP", &e),
            }
        });
    });

    // Reload comments when the photo on screen changes
    Effect::new(move |_| {
        let Some(photo_id) = ctx.current_photo_id.get() else {
            return;
        };
        spawn_local(async move {
            match api::fetch_comments(photo_id).await {
                // Drop answers for a photo we already left
                Ok(comments) if ctx.current_photo_id.get_untracked() == Some(photo_id) => {
                    store_set_comments(&store, comments);
                }
                Ok(_) => {}
                Err(e) => ctx.report("COMMENTS", &e),
            }
        });
    });

    view! {
        <main class="gallery">
            <ErrorBanner />
            <Slideshow />
            <PhotoInfo />
            <CommentList />
        </main>
    }
}
