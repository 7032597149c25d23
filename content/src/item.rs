//! Content record types returned by the content API.
//!
//! These mirror the JSON the API serves. Fields that list endpoints sometimes
//! omit (bodies, captions, tags) default to empty so a sparse list payload
//! still decodes; detail endpoints fill them in.

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a content item: a numeric id or a slug string,
/// depending on the content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    /// Numeric database id.
    Number(u64),
    /// URL-safe slug.
    Slug(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Slug(s) => f.write_str(s),
        }
    }
}

/// Media flavor of gallery items and podcasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Audio,
}

impl MediaKind {
    /// Wire name of the kind, used for facet matching.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
        }
    }
}

/// A news article. Listed with excerpt only; the detail endpoint
/// (keyed by slug) carries the full body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsPost {
    pub id: ItemId,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub image_url: Option<String>,
    /// State tag, e.g. `"Maharashtra"`. Empty when untagged.
    #[serde(default)]
    pub state: String,
    /// Language tag, e.g. `"Hindi"`. Empty when untagged.
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub published_at: String,
}

/// A podcast episode, audio or video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Podcast {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub media_url: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    #[serde(default)]
    pub duration_secs: u32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub published_at: String,
}

/// A language exercise. `questions` is an embedded JSON document parsed on
/// demand by [`crate::exercise::parse_questions`]; list payloads may omit it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub questions: String,
}

/// A gallery entry, either a photo or a video clip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub caption: String,
    pub media_url: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    #[serde(default)]
    pub category: String,
}

/// An external learning resource the site links out to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    /// Resource type, e.g. `"Book"`, `"Course"`, `"Dictionary"`.
    #[serde(rename = "type", default)]
    pub kind: String,
}
