//! Comment List Component
//!
//! Comments of the photo on screen, plus the form for adding one.

use leptos::prelude::*;

use crate::components::{CommentForm, CommentItem};
use crate::store::{use_gallery_store, GalleryStateStoreFields};

#[component]
pub fn CommentList() -> impl IntoView {
    let store = use_gallery_store();

    view! {
        <section id="comments">
            <h3>"Comments"</h3>
            <ul>
                {move || store.comments().get()
                    .into_iter()
                    .map(|comment| view! { <CommentItem comment=comment /> })
                    .collect_view()}
            </ul>
            <CommentForm />
        </section>
    }
}
