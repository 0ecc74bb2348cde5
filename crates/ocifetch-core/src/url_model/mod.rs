//! URL handling for `oci://` references: tag/version reconciliation and
//! output filename derivation.

mod path;
mod sanitize;

pub use path::{final_segment, host_and_path};
pub use sanitize::sanitize_component;

use url::Url;

use crate::error::GetError;
use crate::reference::split_tag;

/// Extension used when none is configured.
pub const DEFAULT_ARCHIVE_EXTENSION: &str = "tgz";

/// Base name used when the URL path yields nothing usable.
const DEFAULT_BASENAME: &str = "chart";

/// Returns `url` with a tag on its final path segment.
///
/// | tag in URL | `version` | result |
/// |---|---|---|
/// | yes | any | `url` unchanged; `version` is ignored |
/// | no | non-empty | path rewritten to `path:version` |
/// | no | empty | [`GetError::MissingVersion`] |
pub fn reconcile(url: &Url, version: &str) -> Result<Url, GetError> {
    let path = url.path().trim_end_matches('/');
    let (_, tag) = split_tag(final_segment(path));

    if tag.is_some() {
        if !version.is_empty() {
            tracing::debug!(%url, version, "URL already tagged; explicit version ignored");
        }
        return Ok(url.clone());
    }
    if version.is_empty() {
        return Err(GetError::MissingVersion);
    }

    let mut tagged = url.clone();
    tagged.set_path(&format!("{}:{}", path, version));
    Ok(tagged)
}

/// Derives `<name>-<version>.tgz` from the final path segment of `url`.
///
/// A trailing `:tag` on the segment is dropped; only `version` names the file.
pub fn filename(url: &Url, version: &str) -> String {
    filename_with_extension(url, version, DEFAULT_ARCHIVE_EXTENSION)
}

/// Like [`filename`] with a caller-chosen extension (without the dot).
pub fn filename_with_extension(url: &Url, version: &str, extension: &str) -> String {
    let segment = final_segment(url.path().trim_end_matches('/'));
    let (name, _) = split_tag(segment);

    let name = sanitize_component(name);
    let name = if name.is_empty() {
        DEFAULT_BASENAME.to_string()
    } else {
        name
    };
    format!("{}-{}.{}", name, sanitize_component(version), extension)
}
