//! Gallery API
//!
//! HTTP bindings to the gallery server, organized by resource.

mod photos;
mod comments;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::config::GalleryConfig;
use crate::error::{is_success, ApiError, Result};
use crate::form::{FormPayload, FORM_CONTENT_TYPE};

// Re-export all public items
pub use photos::*;
pub use comments::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

fn network_error(value: JsValue) -> ApiError {
    ApiError::Network { message: format!("{:?}", value) }
}

/// Send one request and return the response body as text.
///
/// Resolves on 2xx; any other status becomes `ApiError::Status` carrying the
/// body, status and status text unchanged.
pub async fn request(method: Method, url: &str, payload: Option<&FormPayload>) -> Result<String> {
    let opts = RequestInit::new();
    opts.set_method(method.as_str());
    if let Some(payload) = payload {
        opts.set_body(&JsValue::from_str(&payload.encode()));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(network_error)?;
    if payload.is_some() {
        request
            .headers()
            .set("Content-Type", FORM_CONTENT_TYPE)
            .map_err(network_error)?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Network {
        message: "no window".to_string(),
    })?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network_error)?
        .dyn_into()
        .map_err(network_error)?;

    let body = JsFuture::from(response.text().map_err(network_error)?)
        .await
        .map_err(network_error)?
        .as_string()
        .unwrap_or_default();

    let status = response.status();
    let result = response_result(status, response.status_text(), body);
    if result.is_err() {
        web_sys::console::error_1(&format!("[API] {} {} -> {}", method.as_str(), url, status).into());
    }
    result
}

/// 2xx yields the body; anything else keeps body, status and status text
fn response_result(status: u16, status_text: String, body: String) -> Result<String> {
    if is_success(status) {
        Ok(body)
    } else {
        Err(ApiError::Status {
            message: body,
            status,
            status_text,
        })
    }
}

/// GET and decode JSON
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T> {
    let body = request(Method::Get, url, None).await?;
    Ok(serde_json::from_str(&body)?)
}

/// POST a form and decode JSON
async fn post_form<T: serde::de::DeserializeOwned>(url: &str, payload: &FormPayload) -> Result<T> {
    let body = request(Method::Post, url, Some(payload)).await?;
    Ok(serde_json::from_str(&body)?)
}

fn config() -> &'static GalleryConfig {
    crate::config::current()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_statuses_return_body() {
        for status in [200, 204, 299] {
            let result = response_result(status, "OK".to_string(), r#"{"total":3}"#.to_string());
            assert_eq!(result, Ok(r#"{"total":3}"#.to_string()), "status {}", status);
        }
    }

    #[test]
    fn test_other_statuses_keep_response() {
        for (status, text) in [(300, "Multiple Choices"), (404, "Not Found"), (500, "Internal Server Error")] {
            let result = response_result(status, text.to_string(), "photo_id missing".to_string());
            assert_eq!(
                result,
                Err(ApiError::Status {
                    message: "photo_id missing".to_string(),
                    status,
                    status_text: text.to_string(),
                })
            );
        }
    }

    #[test]
    fn test_method_names() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Post.as_str(), "POST");
    }
}
