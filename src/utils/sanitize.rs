//! Path segment sanitization.

/// Placeholder for segments that sanitize down to nothing
const EMPTY_SEGMENT: &str = "Untitled Folder";

/// Characters illegal in file or directory names on common filesystems
const ILLEGAL_CHARS: &[char] = &['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

/// Make a display title safe for use as a directory or file name segment.
///
/// Illegal characters become `_`, surrounding whitespace and trailing dots
/// are stripped, and an empty result is replaced with a fixed placeholder so
/// no segment ever vanishes from the path.
pub fn sanitize_segment(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if ILLEGAL_CHARS.contains(&c) { '_' } else { c })
        .collect();

    let trimmed = replaced.trim().trim_end_matches('.');
    if trimmed.is_empty() {
        EMPTY_SEGMENT.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_illegal_characters() {
        assert_eq!(sanitize_segment("Week 1: Intro"), "Week 1_ Intro");
        assert_eq!(sanitize_segment(r#"a\b/c*d?e:f"g<h>i|j"#), "a_b_c_d_e_f_g_h_i_j");
    }

    #[test]
    fn test_trims_whitespace_and_trailing_dots() {
        assert_eq!(sanitize_segment("  Notes... "), "Notes");
        assert_eq!(sanitize_segment("v1.2"), "v1.2");
    }

    #[test]
    fn test_empty_becomes_placeholder() {
        assert_eq!(sanitize_segment(""), "Untitled Folder");
        assert_eq!(sanitize_segment("   "), "Untitled Folder");
        assert_eq!(sanitize_segment("..."), "Untitled Folder");
        // Illegal characters are substituted, not removed, so they survive
        assert_eq!(sanitize_segment("???"), "___");
    }

    #[test]
    fn test_never_empty() {
        for name in ["", ".", " . ", "////", "\t"] {
            assert!(!sanitize_segment(name).is_empty());
        }
    }
}
