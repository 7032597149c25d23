//! Typed fetch helpers for the content API.
//!
//! Browser builds (`csr`) issue real requests via `gloo-net`; host builds
//! return [`ApiError::Unavailable`] so components degrade without a network
//! stack. Every response body funnels through the `content::decode` boundary,
//! so envelope tolerance and error mapping live in one place.
//!
//! ERROR HANDLING
//! ==============
//! Callers get typed `Result`s instead of panics; every failure is rendered
//! as a local view state by the page that issued the request.

#![allow(clippy::unused_async)]

use serde::de::DeserializeOwned;

use content::error::ApiError;
use content::exercise::AnswerSheet;
use content::item::{Exercise, GalleryItem, ItemId, NewsPost, Podcast, Resource};

#[cfg(feature = "csr")]
async fn get_text(path: &str, query: &[(&'static str, String)]) -> Result<String, ApiError> {
    let url = super::config::endpoint(path);
    let mut request = gloo_net::http::Request::get(&url);
    if !query.is_empty() {
        request = request.query(query.iter().map(|(key, value)| (*key, value.as_str())));
    }
    let response = request
        .send()
        .await
        .map_err(|error| ApiError::Network(error.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    response
        .text()
        .await
        .map_err(|error| ApiError::Network(error.to_string()))
}

async fn get_list<T: DeserializeOwned>(
    path: &str,
    query: &[(&'static str, String)],
) -> Result<Vec<T>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let result = match get_text(path, query).await {
            Ok(body) => content::decode::decode_list(&body),
            Err(error) => Err(error),
        };
        if let Err(error) = &result {
            log::warn!("GET {path} failed: {error}");
        }
        result
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, query);
        Err(ApiError::Unavailable)
    }
}

async fn get_item<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let result = match get_text(path, &[]).await {
            Ok(body) => content::decode::decode_item(&body),
            Err(error) => Err(error),
        };
        if let Err(error) = &result {
            log::warn!("GET {path} failed: {error}");
        }
        result
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the full gallery list.
///
/// # Errors
///
/// Any [`ApiError`]; the page renders it as a notice with a retry action.
pub async fn fetch_gallery() -> Result<Vec<GalleryItem>, ApiError> {
    get_list("/gallery", &[]).await
}

/// Fetch news posts, filtered server-side by the given query parameters.
///
/// # Errors
///
/// Any [`ApiError`]; the page renders it as a notice with a retry action.
pub async fn fetch_news(query: &[(&'static str, String)]) -> Result<Vec<NewsPost>, ApiError> {
    get_list("/news", query).await
}

/// Fetch the full resources list.
///
/// # Errors
///
/// Any [`ApiError`]; the page renders it as a notice with a retry action.
pub async fn fetch_resources() -> Result<Vec<Resource>, ApiError> {
    get_list("/resources", &[]).await
}

/// Fetch the full exercises list.
///
/// # Errors
///
/// Any [`ApiError`]; the page renders it as a notice with a retry action.
pub async fn fetch_exercises() -> Result<Vec<Exercise>, ApiError> {
    get_list("/exercises", &[]).await
}

/// Fetch the full podcasts list.
///
/// # Errors
///
/// Any [`ApiError`]; the page renders it as a notice with a retry action.
pub async fn fetch_podcasts() -> Result<Vec<Podcast>, ApiError> {
    get_list("/podcasts", &[]).await
}

/// Fetch one news post, with its full body, by slug.
///
/// # Errors
///
/// Any [`ApiError`]; the modal renders it with a retry affordance.
pub async fn fetch_news_detail(slug: &str) -> Result<NewsPost, ApiError> {
    get_item(&format!("/news/{slug}")).await
}

/// Fetch one exercise, with its embedded questions, by id.
///
/// # Errors
///
/// Any [`ApiError`]; the modal renders it with a retry affordance.
pub async fn fetch_exercise_detail(id: &ItemId) -> Result<Exercise, ApiError> {
    get_item(&format!("/exercises/{id}")).await
}

/// Fetch one podcast episode by id.
///
/// # Errors
///
/// Any [`ApiError`]; the modal renders it with a retry affordance.
pub async fn fetch_podcast_detail(id: &ItemId) -> Result<Podcast, ApiError> {
    get_item(&format!("/podcasts/{id}")).await
}

/// Submit an answer sheet for an exercise.
///
/// # Errors
///
/// Any [`ApiError`]; the modal shows a "could not submit" note and keeps the
/// local grade on screen.
pub async fn submit_exercise(id: &ItemId, sheet: &AnswerSheet) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = super::config::endpoint(&format!("/exercises/{id}/submit"));
        let response = gloo_net::http::Request::post(&url)
            .json(sheet)
            .map_err(|error| ApiError::Decode(error.to_string()))?
            .send()
            .await
            .map_err(|error| ApiError::Network(error.to_string()))?;
        if !response.ok() {
            log::warn!("POST {url} failed with status {}", response.status());
            return Err(ApiError::Status(response.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, sheet);
        Err(ApiError::Unavailable)
    }
}
