//! Host and path extraction from `oci://` URLs.

use url::{Position, Url};

/// Returns `host[:port]/path` of `url`, the form registry references use.
///
/// Scheme, userinfo, query and fragment are dropped.
pub fn host_and_path(url: &Url) -> &str {
    &url[Position::BeforeHost..Position::AfterPath]
}

/// Returns the text after the last `/` of `path` (all of it if none).
pub fn final_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
