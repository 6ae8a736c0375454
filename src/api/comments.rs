//! Comment Endpoints

use crate::config::NEW_COMMENT_PATH;
use crate::error::Result;
use crate::form::FormPayload;
use crate::models::{Comment, NewComment};
use super::{config, get_json, post_form};

pub async fn fetch_comments(photo_id: u32) -> Result<Vec<Comment>> {
    let comments: Vec<Comment> = get_json(&config().comments_url(photo_id)).await?;
    web_sys::console::log_1(&format!("[API] Loaded {} comments for photo {}", comments.len(), photo_id).into());
    Ok(comments)
}

/// Returns the comment as stored by the server
pub async fn post_comment(comment: &NewComment) -> Result<Comment> {
    post_form(&config().url(NEW_COMMENT_PATH), &FormPayload::from(comment)).await
}
