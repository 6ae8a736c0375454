//! Frontend Models
//!
//! Data structures matching the gallery server's JSON.

use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;

/// Photo data structure (matches `/photos`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Photo {
    pub id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub src: String,
    pub likes: u32,
    pub favorites: u32,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Comment data structure (matches `/comments`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub id: Option<u32>,
    pub photo_id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub date: Option<String>,
}

/// Fields of the new comment form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewComment {
    pub photo_id: u32,
    pub name: String,
    pub body: String,
}

/// Like/favorite response
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Total {
    pub total: u32,
}

/// Human-readable timestamp; unparseable input is shown as-is
pub fn display_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    raw.to_string()
}
