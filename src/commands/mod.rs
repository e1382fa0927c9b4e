//! Backend Command Wrappers
//!
//! Frontend bindings to the scoreboard HTTP endpoints, organized by domain.

mod auth;
mod listing;
mod scoreboard;

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::config::{self, Endpoint};
use crate::models::ErrorBody;

// Re-export all public items
pub use auth::*;
pub use listing::*;
pub use scoreboard::*;

const JSON_CONTENT_TYPE: &str = "application/json";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// Characters left as-is in `application/x-www-form-urlencoded` bodies.
/// Space is kept here and turned into `+` afterwards.
const FORM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b' ');

// ========================
// Errors
// ========================

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request could not be built or the fetch itself rejected
    Network(String),
    /// Server answered with a non-success status
    Status { status: u16, message: Option<String> },
    /// Body did not have the expected shape
    Decode(String),
}

impl ApiError {
    /// Message suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message: Some(message), .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "network error: {}", e),
            ApiError::Status { status, message: Some(message) } => {
                write!(f, "request failed ({}): {}", status, message)
            }
            ApiError::Status { status, message: None } => write!(f, "request failed ({})", status),
            ApiError::Decode(e) => write!(f, "unexpected response: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

fn js_error(value: JsValue) -> ApiError {
    let message = if let Some(s) = value.as_string() {
        s
    } else if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        String::from(err.message())
    } else {
        format!("{:?}", value)
    };
    ApiError::Network(message)
}

// ========================
// Body Handling
// ========================

/// Map a finished response to its body text or a status error
pub fn check_status(status: u16, ok: bool, body: String) -> Result<String, ApiError> {
    if ok {
        return Ok(body);
    }
    let message = serde_json::from_str::<ErrorBody>(&body).ok().map(|e| e.error);
    Err(ApiError::Status { status, message })
}

pub fn decode_body<R: DeserializeOwned>(body: &str) -> Result<R, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Serialize `(name, value)` pairs the way a browser submits a form
pub fn encode_form<K: AsRef<str>, V: AsRef<str>>(fields: &[(K, V)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", encode_form_component(k.as_ref()), encode_form_component(v.as_ref())))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode_form_component(value: &str) -> String {
    utf8_percent_encode(value, FORM_ENCODE_SET)
        .to_string()
        .replace(' ', "+")
}

// ========================
// Transport
// ========================

async fn post(endpoint: Endpoint, content_type: &str, body: &str) -> Result<String, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;

    let headers = Headers::new().map_err(js_error)?;
    headers.set("Content-Type", content_type).map_err(js_error)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));

    let url = config::endpoint_url(endpoint);
    let request = Request::new_with_str_and_init(&url, &init).map_err(js_error)?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .unwrap_or_default();

    check_status(response.status(), response.ok(), text)
}

async fn post_json<A: Serialize>(endpoint: Endpoint, args: &A) -> Result<String, ApiError> {
    let body = serde_json::to_string(args).map_err(|e| ApiError::Decode(e.to_string()))?;
    post(endpoint, JSON_CONTENT_TYPE, &body).await
}

async fn post_form<K: AsRef<str>, V: AsRef<str>>(endpoint: Endpoint, fields: &[(K, V)]) -> Result<String, ApiError> {
    post(endpoint, FORM_CONTENT_TYPE, &encode_form(fields)).await
}
