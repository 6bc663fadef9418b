//! Helpers for plain-text lyrics.

use std::sync::LazyLock;

use regex::Regex;

/// A bracketed header on its own line, e.g. `[VERSE 1]` or `[Pre-Chorus]`.
#[allow(clippy::expect_used)]
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*\[([^\]\n]+)\][ \t]*$").expect("valid regex")
});

/// Section headers present in `lyrics`, in order of appearance, without
/// brackets. Repeated headers are listed each time they occur.
pub fn section_headers(lyrics: &str) -> Vec<String> {
    HEADER_RE
        .captures_iter(lyrics)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|header| !header.is_empty())
        .collect()
}

/// Distinct headers, keeping first-seen order.
pub fn unique_section_headers(lyrics: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for header in section_headers(lyrics) {
        if !seen.contains(&header) {
            seen.push(header);
        }
    }
    seen
}

/// Whether the text has anything but whitespace.
pub fn has_content(text: &str) -> bool {
    !text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SONG: &str = "[VERSE 1]\nCold coffee, warm hands\n\n[CHORUS]\nStay, stay\n\n  [Verse 2]  \nNot [a header] here\n\n[CHORUS]\nStay, stay\n";

    #[test]
    fn test_section_headers_in_order() {
        assert_eq!(
            section_headers(SONG),
            vec!["VERSE 1", "CHORUS", "Verse 2", "CHORUS"]
        );
    }

    #[test]
    fn test_unique_section_headers() {
        assert_eq!(
            unique_section_headers(SONG),
            vec!["VERSE 1", "CHORUS", "Verse 2"]
        );
    }

    #[test]
    fn test_no_headers() {
        assert!(section_headers("just a line\nand another").is_empty());
        assert!(section_headers("").is_empty());
    }

    #[test]
    fn test_has_content() {
        assert!(has_content(" la "));
        assert!(!has_content(" \n\t"));
    }
}
