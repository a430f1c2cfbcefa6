//! Styled text: ordered runs of text, each carrying one [`Style`].

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    fn index(self) -> u8 {
        match self {
            Color::Black | Color::BrightBlack => 0,
            Color::Red | Color::BrightRed => 1,
            Color::Green | Color::BrightGreen => 2,
            Color::Yellow | Color::BrightYellow => 3,
            Color::Blue | Color::BrightBlue => 4,
            Color::Magenta | Color::BrightMagenta => 5,
            Color::Cyan | Color::BrightCyan => 6,
            Color::White | Color::BrightWhite => 7,
        }
    }

    fn is_bright(self) -> bool {
        matches!(
            self,
            Color::BrightBlack
                | Color::BrightRed
                | Color::BrightGreen
                | Color::BrightYellow
                | Color::BrightBlue
                | Color::BrightMagenta
                | Color::BrightCyan
                | Color::BrightWhite
        )
    }

    fn fg_code(self) -> u8 {
        if self.is_bright() {
            90 + self.index()
        } else {
            30 + self.index()
        }
    }

    fn bg_code(self) -> u8 {
        if self.is_bright() {
            100 + self.index()
        } else {
            40 + self.index()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underlined: bool,
    pub blink: bool,
    pub inverse: bool,
}

impl Style {
    pub const PLAIN: Style = Style {
        fg: None,
        bg: None,
        bold: false,
        dim: false,
        italic: false,
        underlined: false,
        blink: false,
        inverse: false,
    };

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underlined(mut self) -> Self {
        self.underlined = true;
        self
    }

    pub fn blink(mut self) -> Self {
        self.blink = true;
        self
    }

    pub fn inverse(mut self) -> Self {
        self.inverse = true;
        self
    }

    pub fn is_plain(&self) -> bool {
        *self == Style::PLAIN
    }

    /// SGR parameters for this style, without the leading `ESC [` or trailing `m`.
    pub fn sgr_params(&self) -> String {
        let mut params: Vec<String> = Vec::new();
        if self.bold {
            params.push("1".to_string());
        }
        if self.dim {
            params.push("2".to_string());
        }
        if self.italic {
            params.push("3".to_string());
        }
        if self.underlined {
            params.push("4".to_string());
        }
        if self.blink {
            params.push("5".to_string());
        }
        if self.inverse {
            params.push("7".to_string());
        }
        if let Some(fg) = self.fg {
            params.push(fg.fg_code().to_string());
        }
        if let Some(bg) = self.bg {
            params.push(bg.bg_code().to_string());
        }
        params.join(";")
    }

    /// Full SGR escape sequence; empty for the plain style.
    pub fn sgr(&self) -> String {
        if self.is_plain() {
            return String::new();
        }
        format!("\x1b[{}m", self.sgr_params())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub style: Style,
}

impl Segment {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// A sequence of styled segments. Byte offsets index into the concatenated text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    segments: Vec<Segment>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, Style::PLAIN)
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        let mut out = Self::new();
        out.push(Segment::new(text, style));
        out
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Appends a segment, merging it into the last one when the styles match.
    pub fn push(&mut self, segment: Segment) {
        if segment.text.is_empty() {
            return;
        }
        if let Some(last) = self.segments.last_mut() {
            if last.style == segment.style {
                last.text.push_str(&segment.text);
                return;
            }
        }
        self.segments.push(segment);
    }

    pub fn push_str(&mut self, text: &str, style: Style) {
        self.push(Segment::new(text, style));
    }

    pub fn concat(mut self, other: StyledText) -> Self {
        for segment in other.segments {
            self.push(segment);
        }
        self
    }

    /// The unstyled content.
    pub fn text(&self) -> String {
        self.segments.iter().map(|seg| seg.text.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.segments.iter().map(|seg| seg.text.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Splits at byte offset `at` (clamped, and moved back to a char boundary).
    pub fn split_at(&self, at: usize) -> (StyledText, StyledText) {
        let mut before = StyledText::new();
        let mut after = StyledText::new();
        let mut offset = 0;
        for segment in &self.segments {
            let seg_end = offset + segment.text.len();
            if seg_end <= at {
                before.push(segment.clone());
            } else if offset >= at {
                after.push(segment.clone());
            } else {
                let mut cut = at - offset;
                while !segment.text.is_char_boundary(cut) {
                    cut -= 1;
                }
                before.push_str(&segment.text[..cut], segment.style);
                after.push_str(&segment.text[cut..], segment.style);
            }
            offset = seg_end;
        }
        (before, after)
    }

    /// Restyles the bytes in `range` with `f`, leaving the rest untouched.
    pub fn map_range(&self, range: Range<usize>, f: impl Fn(Style) -> Style) -> StyledText {
        let (head, rest) = self.split_at(range.start);
        let (middle, tail) = rest.split_at(range.end.saturating_sub(range.start));
        let mut mapped = StyledText::new();
        for segment in middle.segments {
            mapped.push(Segment::new(segment.text, f(segment.style)));
        }
        head.concat(mapped).concat(tail)
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        StyledText::plain(text)
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        StyledText::plain(text)
    }
}
