//! Comment Item Component

use leptos::prelude::*;

use crate::models::{display_date, Comment};

/// A single comment row
#[component]
pub fn CommentItem(comment: Comment) -> impl IntoView {
    let date = comment.date.as_deref().map(display_date).unwrap_or_default();

    view! {
        <li>
            <article>
                <header>
                    <h4>{comment.name}</h4>
                    <time>{date}</time>
                </header>
                <p>{comment.body}</p>
            </article>
        </li>
    }
}
