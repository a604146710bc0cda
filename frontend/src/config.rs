//! Build-time configuration for the frontend.

/// REST API root, read at compile time from `FOLIO_API_BASE`.
pub const API_BASE: &str = match option_env!("FOLIO_API_BASE") {
    Some(url) => url,
    None => "http://localhost:5000/api",
};

/// Base URL for static assets.
pub const BASE_URL: &str = "/";

/// How long transient error notices stay up.
pub const NOTICE_DISMISS_MS: u32 = 5_000;

/// Interval between hero title changes.
pub const TITLE_ROTATION_MS: u32 = 3_000;

/// Tick of the terminal typewriter.
pub const TYPEWRITER_TICK_MS: u32 = 30;

/// Autoplay step of the home projects carousel.
pub const CAROUSEL_AUTOPLAY_MS: u32 = 3_000;

/// Build an absolute path for a file under the static root.
pub fn asset_path(path: &str) -> String {
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{BASE_URL}{path}")
}

/// Join `path` onto [`API_BASE`].
pub fn api_url(path: &str) -> String {
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}/{path}", API_BASE.trim_end_matches('/'))
}
