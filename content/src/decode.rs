//! The single typed decoding boundary for API payloads.
//!
//! The content API is inconsistent about envelopes: list endpoints return
//! either a bare JSON array or `{"data": [...]}`, and detail endpoints either
//! a bare object or `{"data": {...}}`. Every fetch in the UI crate funnels
//! through these two functions, so the tolerance lives in exactly one place.

#[cfg(test)]
#[path = "decode_test.rs"]
mod decode_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

#[derive(Deserialize)]
#[serde(untagged)]
enum ListPayload<T> {
    Plain(Vec<T>),
    Envelope { data: Vec<T> },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ItemPayload<T> {
    Plain(T),
    Envelope { data: T },
}

/// Decode a list response body, accepting both payload shapes.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the body is neither a bare array of `T`
/// nor a `{"data": [...]}` envelope around one.
pub fn decode_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ApiError> {
    match serde_json::from_str::<ListPayload<T>>(body) {
        Ok(ListPayload::Plain(items)) | Ok(ListPayload::Envelope { data: items }) => Ok(items),
        Err(error) => Err(ApiError::Decode(error.to_string())),
    }
}

/// Decode a detail response body, accepting both payload shapes.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the body is neither a bare `T` nor a
/// `{"data": {...}}` envelope around one.
pub fn decode_item<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    match serde_json::from_str::<ItemPayload<T>>(body) {
        Ok(ItemPayload::Plain(item)) | Ok(ItemPayload::Envelope { data: item }) => Ok(item),
        Err(error) => Err(ApiError::Decode(error.to_string())),
    }
}
