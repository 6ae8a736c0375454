//! Photo Info Component
//!
//! Title, date, and like/favorite buttons of the photo on screen.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_gallery_context;
use crate::models::display_date;
use crate::store::{store_set_favorites, store_set_likes, use_gallery_store, GalleryStateStoreFields};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Counter {
    Likes,
    Favorites,
}

#[component]
pub fn PhotoInfo() -> impl IntoView {
    let ctx = use_gallery_context();
    let store = use_gallery_store();

    let current = move || {
        let index = ctx.current_index();
        store.photos().with(|photos| photos.get(index).cloned())
    };

    // POST, then overwrite the count with the server total
    let bump = move |counter: Counter| {
        let index = ctx.slides.cursor_read.get_untracked().index();
        let Some(photo_id) = ctx.current_photo_id.get_untracked() else {
            return;
        };
        spawn_local(async move {
            let result = match counter {
                Counter::Likes => api::like_photo(photo_id).await,
                Counter::Favorites => api::favorite_photo(photo_id).await,
            };
            match result {
                Ok(total) => match counter {
                    Counter::Likes => store_set_likes(&store, index, total),
                    Counter::Favorites => store_set_favorites(&store, index, total),
                },
                Err(e) => ctx.report("PHOTO", &e),
            }
        });
    };

    view! {
        <section>
            <header>
                {move || current().map(|photo| {
                    let date = photo.created_at.as_deref().map(display_date).unwrap_or_default();
                    view! {
                        <h2>{photo.title}</h2>
                        <p><time>{date}</time></p>
                        <div class="actions">
                            <a
                                href="#"
                                class="button like"
                                data-id=photo.id.to_string()
                                data-property="likes"
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    bump(Counter::Likes);
                                }
                            >
                                "♡ " {photo.likes} " Likes"
                            </a>
                            <a
                                href="#"
                                class="button favorite"
                                data-id=photo.id.to_string()
                                data-property="favorites"
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    bump(Counter::Favorites);
                                }
                            >
                                "☆ " {photo.favorites} " Favorites"
                            </a>
                        </div>
                    }
                })}
            </header>
        </section>
    }
}
