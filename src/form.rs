//! Form Payloads
//!
//! `application/x-www-form-urlencoded` bodies for POST requests.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::NewComment;

/// Everything but alphanumerics and `*-._` is escaped
const FORM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// Ordered key/value pairs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormPayload {
    pairs: Vec<(String, String)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn encode_component(raw: &str) -> String {
    // '+' is escaped as %2B, so only real spaces end up as '+'
    utf8_percent_encode(raw, FORM_ENCODE_SET)
        .to_string()
        .replace("%20", "+")
}

impl From<&NewComment> for FormPayload {
    fn from(comment: &NewComment) -> Self {
        FormPayload::new()
            .append("photo_id", comment.photo_id.to_string())
            .append("name", comment.name.as_str())
            .append("body", comment.body.as_str())
    }
}

/// Body for like/favorite
pub fn photo_id_payload(photo_id: u32) -> FormPayload {
    FormPayload::new().append("photo_id", photo_id.to_string())
}
