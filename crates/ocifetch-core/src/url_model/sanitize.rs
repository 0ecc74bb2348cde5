//! Linux-safe filename components.

/// Sanitizes one component of an output filename.
///
/// - Replaces NUL, `/`, `\`, whitespace and control characters with `_`
/// - Trims leading dots so the result is never hidden, `.` or `..`
/// - Limits length to 255 bytes (Linux NAME_MAX)
///
/// Names made of alphanumerics, `.`, `-`, `_` and `+` pass through unchanged.
pub fn sanitize_component(name: &str) -> String {
    const NAME_MAX: usize = 255;

    let out: String = name
        .chars()
        .map(|c| {
            if c == '\0' || c == '/' || c == '\\' || c.is_control() || c.is_whitespace() {
                '_'
            } else {
                c
            }
        })
        .collect();

    let trimmed = out.trim_start_matches('.');

    if trimmed.len() > NAME_MAX {
        let mut take = NAME_MAX;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn realistic_versions_unchanged() {
        for v in ["1.2.3", "v1.2.3", "2.0.0-rc.1", "1.0.0+build.5", "_dev"] {
            assert_eq!(sanitize_component(v), v);
        }
    }

    #[test]
    fn replaces_separators_and_control_chars() {
        assert_eq!(sanitize_component("a/b\\c"), "a_b_c");
        assert_eq!(sanitize_component("1.0\x00x"), "1.0_x");
        assert_eq!(sanitize_component("1 0"), "1_0");
    }

    #[test]
    fn trims_leading_dots() {
        assert_eq!(sanitize_component(".."), "");
        assert_eq!(sanitize_component("..hidden"), "hidden");
    }

    #[test]
    fn caps_length() {
        let long = "é".repeat(200);
        let out = sanitize_component(&long);
        assert!(out.len() <= 255);
        assert!(out.is_char_boundary(out.len()));
    }
}
