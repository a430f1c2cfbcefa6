//! Grapheme and character classification helpers.

use unicode_segmentation::UnicodeSegmentation;

use super::width::grapheme_width;

pub fn grapheme_segments(text: &str) -> unicode_segmentation::Graphemes<'_> {
    UnicodeSegmentation::graphemes(text, true)
}

/// Whether `ch` is a visible character or a space, i.e. something typing should insert.
///
/// Control characters and the invisible format characters (zero-width spaces, bidi
/// overrides, word joiners, BOM) are not graphic.
pub fn is_graphic(ch: char) -> bool {
    if ch.is_control() {
        return false;
    }
    !matches!(
        ch,
        '\u{00AD}'
            | '\u{200B}'..='\u{200F}'
            | '\u{2028}'..='\u{202E}'
            | '\u{2060}'..='\u{206F}'
            | '\u{FEFF}'
            | '\u{FFF9}'..='\u{FFFB}'
            | '\u{E000}'..='\u{F8FF}'
    )
}

/// Caret notation for a control character (`'\x01'` → `"^A"`, DEL → `"^?"`).
pub fn caret_notation(ch: char) -> Option<String> {
    match ch {
        '\x00'..='\x1f' => {
            let shown = char::from((ch as u8) + 0x40);
            Some(format!("^{shown}"))
        }
        '\x7f' => Some("^?".to_string()),
        _ => None,
    }
}

/// Clips `text` to at most `max_width` columns without splitting a grapheme.
pub fn clip_to_width(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut end = 0;
    for (idx, grapheme) in text.grapheme_indices(true) {
        let next = width + grapheme_width(grapheme);
        if next > max_width {
            return &text[..idx];
        }
        width = next;
        end = idx + grapheme.len();
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::{caret_notation, clip_to_width, grapheme_segments, is_graphic};

    #[test]
    fn graphic_classification() {
        assert!(is_graphic('a'));
        assert!(is_graphic(' '));
        assert!(is_graphic('é'));
        assert!(is_graphic('你'));
        assert!(!is_graphic('\n'));
        assert!(!is_graphic('\x1b'));
        assert!(!is_graphic('\u{200B}'));
    }

    #[test]
    fn caret_notation_for_controls() {
        assert_eq!(caret_notation('\x01').as_deref(), Some("^A"));
        assert_eq!(caret_notation('\t').as_deref(), Some("^I"));
        assert_eq!(caret_notation('\x7f').as_deref(), Some("^?"));
        assert_eq!(caret_notation('a'), None);
    }

    #[test]
    fn clip_keeps_whole_graphemes() {
        assert_eq!(clip_to_width("hello", 3), "hel");
        assert_eq!(clip_to_width("你好", 3), "你");
        assert_eq!(clip_to_width("hi", 10), "hi");
    }

    #[test]
    fn grapheme_segments_splits_clusters() {
        let clusters: Vec<&str> = grapheme_segments("a🇺🇸").collect();
        assert_eq!(clusters, vec!["a", "🇺🇸"]);
    }
}
