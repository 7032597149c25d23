//! Content API origin configuration.

/// Base URL of the content API, baked in at build time via the
/// `SAMVAAD_API_URL` environment variable. Defaults to same-origin `/api`,
/// which the dev server proxies to a locally running API.
#[must_use]
pub fn api_base() -> &'static str {
    option_env!("SAMVAAD_API_URL").unwrap_or("/api")
}

/// Join a path onto the API base.
#[must_use]
pub fn endpoint(path: &str) -> String {
    format!("{}{path}", api_base())
}
