//! Photo Endpoints

use crate::config::{FAVORITE_PATH, LIKE_PATH, PHOTOS_PATH};
use crate::error::Result;
use crate::form::photo_id_payload;
use crate::models::{Photo, Total};
use super::{config, get_json, post_form};

pub async fn fetch_photos() -> Result<Vec<Photo>> {
    let photos: Vec<Photo> = get_json(&config().url(PHOTOS_PATH)).await?;
    web_sys::console::log_1(&format!("[API] Loaded {} photos", photos.len()).into());
    Ok(photos)
}

/// Returns the new like total
pub async fn like_photo(photo_id: u32) -> Result<u32> {
    let total: Total = post_form(&config().url(LIKE_PATH), &photo_id_payload(photo_id)).await?;
    web_sys::console::log_1(&format!("[API] Photo {} likes={}", photo_id, total.total).into());
    Ok(total.total)
}

/// Returns the new favorite total
pub async fn favorite_photo(photo_id: u32) -> Result<u32> {
    let total: Total = post_form(&config().url(FAVORITE_PATH), &photo_id_payload(photo_id)).await?;
    web_sys::console::log_1(&format!("[API] Photo {} favorites={}", photo_id, total.total).into());
    Ok(total.total)
}
