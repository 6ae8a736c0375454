//! Comment Form Component
//!
//! Posts a new comment for the photo on screen.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_gallery_context;
use crate::models::{Comment, NewComment};
use crate::store::{store_push_comment, use_gallery_store, GalleryStore};

/// Append the stored comment if its photo is still on screen, then clear
/// the form. Returns whether the comment was appended.
fn apply_posted_comment(
    store: &GalleryStore,
    on_screen: Option<u32>,
    created: Comment,
    set_name: WriteSignal<String>,
    set_body: WriteSignal<String>,
) -> bool {
    let appended = on_screen == Some(created.photo_id);
    if appended {
        store_push_comment(store, created);
    }
    set_name.set(String::new());
    set_body.set(String::new());
    appended
}

#[component]
pub fn CommentForm() -> impl IntoView {
    let ctx = use_gallery_context();
    let store = use_gallery_store();

    let (name, set_name) = signal(String::new());
    let (body, set_body) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(photo_id) = ctx.current_photo_id.get_untracked() else {
            return;
        };
        let comment = NewComment {
            photo_id,
            name: name.get_untracked(),
            body: body.get_untracked(),
        };

        spawn_local(async move {
            match api::post_comment(&comment).await {
                Ok(created) => {
                    web_sys::console::log_1(&format!("[COMMENTS] Posted comment on photo {}", created.photo_id).into());
                    // The list may have moved on to another photo meanwhile
                    let on_screen = ctx.current_photo_id.get_untracked();
                    apply_posted_comment(&store, on_screen, created, set_name, set_body);
                }
                Err(e) => ctx.report("COMMENTS", &e),
            }
        });
    };

    view! {
        <form action="/comments/new" method="post" on:submit=on_submit>
            <input
                type="hidden"
                name="photo_id"
                prop:value=move || ctx.current_photo_id.get().map(|id| id.to_string()).unwrap_or_default()
            />
            <fieldset>
                <dl>
                    <dt><label for="name">"Name"</label></dt>
                    <dd>
                        <input
                            type="text"
                            name="name"
                            id="name"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </dd>
                    <dt><label for="body">"Comment"</label></dt>
                    <dd>
                        <textarea
                            name="body"
                            id="body"
                            required
                            prop:value=move || body.get()
                            on:input=move |ev| set_body.set(event_target_value(&ev))
                        ></textarea>
                    </dd>
                </dl>
            </fieldset>
            <fieldset class="actions">
                <input type="submit" value="Post Comment" />
            </fieldset>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reactive_stores::Store;

    use crate::store::{GalleryState, GalleryStateStoreFields};

    fn make_comment(photo_id: u32, body: &str) -> Comment {
        Comment {
            id: Some(9),
            photo_id,
            name: "Jane".to_string(),
            body: body.to_string(),
            date: None,
        }
    }

    #[test]
    fn test_posted_comment_appends_and_clears_form() {
        let store = Store::new(GalleryState::default());
        let (name, set_name) = signal("Jane".to_string());
        let (body, set_body) = signal("Great shot!".to_string());

        assert!(apply_posted_comment(&store, Some(2), make_comment(2, "Great shot!"), set_name, set_body));

        let comments = store.comments().get_untracked();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].body, "Great shot!");
        assert!(name.get_untracked().is_empty());
        assert!(body.get_untracked().is_empty());
    }

    #[test]
    fn test_comment_for_other_photo_still_clears_form() {
        let store = Store::new(GalleryState::default());
        let (name, set_name) = signal("Jane".to_string());
        let (body, set_body) = signal("Nice".to_string());

        assert!(!apply_posted_comment(&store, Some(3), make_comment(2, "Nice"), set_name, set_body));

        assert!(store.comments().get_untracked().is_empty());
        assert!(name.get_untracked().is_empty());
        assert!(body.get_untracked().is_empty());
    }
}
