//! UI Components
//!
//! Leptos components for the gallery page.

mod slideshow;
mod photo_info;
mod comment_item;
mod comment_list;
mod comment_form;
mod error_banner;

pub use slideshow::Slideshow;
pub use photo_info::PhotoInfo;
pub use comment_item::CommentItem;
pub use comment_list::CommentList;
pub use comment_form::CommentForm;
pub use error_banner::ErrorBanner;
