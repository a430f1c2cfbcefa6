//! Shell-style quoting for pasted text.

/// Quotes `text` so it reads back as a single literal word.
///
/// Text made only of bareword characters is returned unchanged. Text with
/// non-printable characters is double-quoted with escapes; anything else is
/// single-quoted with embedded `'` doubled.
pub fn quote(text: &str) -> String {
    if text.is_empty() {
        return "''".to_string();
    }

    let mut bare = true;
    for ch in text.chars() {
        if !is_printable(ch) {
            return quote_double(text);
        }
        if !is_bareword_char(ch) {
            bare = false;
        }
    }

    if bare {
        text.to_string()
    } else {
        quote_single(text)
    }
}

fn is_printable(ch: char) -> bool {
    ch == ' ' || (!ch.is_control() && !ch.is_whitespace())
}

fn is_bareword_char(ch: char) -> bool {
    ch.is_alphanumeric() || "!%+,-./:@\\_".contains(ch)
}

fn quote_single(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for ch in text.chars() {
        if ch == '\'' {
            out.push('\'');
        }
        out.push(ch);
    }
    out.push('\'');
    out
}

fn quote_double(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            ch if is_printable(ch) => out.push(ch),
            ch if (ch as u32) <= 0xff => out.push_str(&format!("\\x{:02x}", ch as u32)),
            ch if (ch as u32) <= 0xffff => out.push_str(&format!("\\u{:04x}", ch as u32)),
            ch => out.push_str(&format!("\\U{:08x}", ch as u32)),
        }
    }
    out.push('"');
    out
}
