//! Face markup: zero-width style markers embedded in drawn text.
//!
//! A marker looks like `%(face-header)s`. Widgets emit markers verbatim and
//! never interpret them; sinks measure text as if the markers were absent.

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const OPEN: &str = "%(face-";
const CLOSE: &str = ")s";

/// Marker that opens a section header line.
pub const FACE_HEADER: &str = "%(face-header)s";

/// Build the marker for a named face.
pub fn face(name: &str) -> String {
    format!("{OPEN}{name}{CLOSE}")
}

/// Byte length of the marker at the start of `text`, if there is one.
fn marker_len(text: &str) -> Option<usize> {
    let rest = text.strip_prefix(OPEN)?;
    let name_len = rest.find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))?;
    if name_len == 0 {
        return None;
    }
    rest[name_len..]
        .starts_with(CLOSE)
        .then_some(OPEN.len() + name_len + CLOSE.len())
}

/// Remove every face marker from `text`.
///
/// Borrows when `text` holds no marker. Anything that merely looks like the
/// start of a marker but is not well formed is kept as literal text.
pub fn strip(text: &str) -> Cow<'_, str> {
    if !text.contains(OPEN) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find(OPEN) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if let Some(len) = marker_len(tail) {
            rest = &tail[len..];
        } else {
            out.push_str(OPEN);
            rest = &tail[OPEN.len()..];
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Number of terminal columns `text` occupies once markers are removed.
///
/// Width is summed per extended grapheme cluster, so combining sequences
/// count once and wide CJK glyphs count twice.
pub fn display_width(text: &str) -> usize {
    strip(text)
        .graphemes(true)
        .map(UnicodeWidthStr::width)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_builds_marker() {
        assert_eq!(face("header"), FACE_HEADER);
    }

    #[test]
    fn test_strip_without_markers_borrows() {
        assert!(matches!(strip("plain text"), Cow::Borrowed("plain text")));
    }

    #[test]
    fn test_strip_removes_markers() {
        let text = format!("{}rax{} 0x0", face("register"), face("default"));
        assert_eq!(strip(&text), "rax 0x0");
    }

    #[test]
    fn test_strip_keeps_malformed_markers() {
        assert_eq!(strip("%(face-)s"), "%(face-)s");
        assert_eq!(strip("100%(face-x"), "100%(face-x");
        assert_eq!(strip("%(face-a b)s"), "%(face-a b)s");
    }

    #[test]
    fn test_display_width_ascii() {
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width(" x "), 3);
    }

    #[test]
    fn test_display_width_ignores_markers() {
        assert_eq!(display_width(FACE_HEADER), 0);
        assert_eq!(display_width("%(face-header)s--[Stats]"), 9);
    }

    #[test]
    fn test_display_width_wide_glyphs() {
        assert_eq!(display_width("漢字"), 4);
        assert_eq!(display_width("e\u{301}"), 1);
    }
}
