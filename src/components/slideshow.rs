//! Slideshow Component
//!
//! Photo carousel with prev/next navigation.

use leptos::prelude::*;
use leptos_slideshow::{slide_class, Direction};
use wasm_bindgen::JsCast;

use crate::context::use_gallery_context;
use crate::store::{use_gallery_store, GalleryStateStoreFields};

/// Which way a click on the navigation list moves, if at all
fn nav_direction(target: &web_sys::Element) -> Option<Direction> {
    direction_for(&target.tag_name(), target.class_list().contains("prev"))
}

/// Only anchors navigate; `prev` anchors go back, every other anchor forward
fn direction_for(tag_name: &str, is_prev: bool) -> Option<Direction> {
    if !tag_name.eq_ignore_ascii_case("A") {
        return None;
    }
    if is_prev {
        Some(Direction::Prev)
    } else {
        Some(Direction::Next)
    }
}

#[component]
pub fn Slideshow() -> impl IntoView {
    let ctx = use_gallery_context();
    let store = use_gallery_store();

    // One listener on the list, like the anchors' shared parent
    let on_nav = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        if let Some(direction) = nav_direction(&target) {
            ctx.advance(direction);
            web_sys::console::log_1(&format!("[SLIDES] {:?} -> {}", direction, ctx.slides.cursor_read.get_untracked().index()).into());
        }
    };

    view! {
        <div id="slideshow">
            <div id="slides">
                {move || (!store.loaded().get()).then(|| view! { <p class="loading">"Loading photos..."</p> })}
                <For
                    each=move || store.photos().get()
                    key=|photo| photo.id
                    children=move |photo| {
                        let id = photo.id;
                        let class = move || slide_class(ctx.current_photo_id.get() == Some(id));
                        view! {
                            <figure class=class data-id=id.to_string()>
                                <img src=photo.src alt=photo.title.clone() />
                                <figcaption>{photo.caption}</figcaption>
                            </figure>
                        }
                    }
                />
            </div>
            <ul on:click=on_nav>
                <li><a href="#" class="prev">"Prev"</a></li>
                <li><a href="#" class="next">"Next"</a></li>
            </ul>
        </div>
    }
}
