//! The character grid produced by a single render call.

use crate::core::cursor::Pos;
use crate::core::styled::{Style, StyledText};
use crate::core::text::utils::{caret_notation, grapheme_segments};
use crate::core::text::width::grapheme_width;

/// One grid cell, holding a single grapheme cluster.
///
/// Wide graphemes occupy `width` columns but only one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub width: usize,
    pub style: Style,
}

/// A width-bounded grid of styled cells with one designated cursor position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    pub width: usize,
    pub lines: Vec<Vec<Cell>>,
    pub dot: Pos,
}

impl Buffer {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            lines: vec![Vec::new()],
            dot: Pos::default(),
        }
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn line_width(&self, line: usize) -> usize {
        self.lines
            .get(line)
            .map(|cells| cells.iter().map(|cell| cell.width).sum())
            .unwrap_or(0)
    }

    /// Keeps lines `[low, high)` and shifts the cursor row to match.
    ///
    /// A cursor outside the kept range is clamped onto its nearest edge.
    pub fn trim_to_lines(&mut self, low: usize, high: usize) {
        let high = high.min(self.lines.len());
        let low = low.min(high);
        self.lines.truncate(high);
        self.lines.drain(..low);
        if self.lines.is_empty() {
            self.lines.push(Vec::new());
        }
        let last = self.lines.len() - 1;
        self.dot.line = self.dot.line.saturating_sub(low).min(last);
    }

    /// Cuts the buffer down to `max_height` rows, keeping the cursor row visible.
    ///
    /// When the cursor is within the first `max_height` rows the bottom is cut;
    /// otherwise the kept window ends at the cursor row. Zero is treated as one.
    pub fn truncate_to_height(&mut self, max_height: usize) {
        let max_height = max_height.max(1);
        if self.lines.len() <= max_height {
            return;
        }
        if self.dot.line < max_height {
            self.trim_to_lines(0, max_height);
        } else {
            let high = self.dot.line + 1;
            self.trim_to_lines(high - max_height, high);
        }
    }

    /// Unstyled content of each line, for tests and debugging.
    pub fn plain_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|cells| cells.iter().map(|cell| cell.text.as_str()).collect())
            .collect()
    }
}

/// Incrementally writes styled text into a [`Buffer`], wrapping at its width.
#[derive(Debug, Clone)]
pub struct BufferBuilder {
    buffer: Buffer,
    col: usize,
    indent: usize,
    eager_wrap: bool,
}

impl BufferBuilder {
    pub fn new(width: usize) -> Self {
        Self {
            buffer: Buffer::new(width),
            col: 0,
            indent: 0,
            eager_wrap: false,
        }
    }

    pub fn width(&self) -> usize {
        self.buffer.width
    }

    /// Current column on the last line.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Number of lines written so far, counting the current one.
    pub fn line_count(&self) -> usize {
        self.buffer.lines.len()
    }

    /// Number of spaces written at the start of every line after a newline.
    pub fn set_indent(&mut self, indent: usize) -> &mut Self {
        self.indent = indent;
        self
    }

    /// When on, a line that becomes exactly full wraps right away, so the next
    /// position (and a cursor placed there) is always inside the grid.
    pub fn set_eager_wrap(&mut self, eager_wrap: bool) -> &mut Self {
        self.eager_wrap = eager_wrap;
        self
    }

    pub fn set_dot_here(&mut self) -> &mut Self {
        self.buffer.dot = Pos::new(self.buffer.lines.len() - 1, self.col);
        self
    }

    pub fn newline(&mut self) -> &mut Self {
        self.buffer.lines.push(Vec::new());
        self.col = 0;
        let indent = self.indent.min(self.buffer.width);
        for _ in 0..indent {
            self.append_cell(" ".to_string(), 1, Style::PLAIN);
        }
        self
    }

    pub fn write_str(&mut self, text: &str, style: Style) -> &mut Self {
        for grapheme in grapheme_segments(text) {
            if grapheme == "\n" || grapheme == "\r\n" {
                self.newline();
                continue;
            }
            let mut chars = grapheme.chars();
            let control = match (chars.next(), chars.next()) {
                (Some(ch), None) => caret_notation(ch),
                _ => None,
            };
            match control {
                Some(shown) => {
                    for ch in shown.chars() {
                        self.write_cell(ch.to_string(), 1, style);
                    }
                }
                None => {
                    let width = grapheme_width(grapheme);
                    self.write_cell(grapheme.to_string(), width, style);
                }
            }
        }
        self
    }

    pub fn write_plain(&mut self, text: &str) -> &mut Self {
        self.write_str(text, Style::PLAIN)
    }

    pub fn write_styled(&mut self, text: &StyledText) -> &mut Self {
        for segment in text.segments() {
            self.write_str(&segment.text, segment.style);
        }
        self
    }

    pub fn write_spaces(&mut self, count: usize, style: Style) -> &mut Self {
        for _ in 0..count {
            self.write_cell(" ".to_string(), 1, style);
        }
        self
    }

    pub fn finish(self) -> Buffer {
        self.buffer
    }

    fn write_cell(&mut self, text: String, width: usize, style: Style) {
        if self.col + width > self.buffer.width && self.col > 0 {
            self.newline();
        }
        self.append_cell(text, width, style);
        if self.eager_wrap && self.col >= self.buffer.width {
            self.newline();
        }
    }

    fn append_cell(&mut self, text: String, width: usize, style: Style) {
        if let Some(line) = self.buffer.lines.last_mut() {
            line.push(Cell { text, width, style });
        }
        self.col += width;
    }
}

#[cfg(test)]
mod tests {
    use super::{Buffer, BufferBuilder};
    use crate::core::cursor::Pos;
    use crate::core::styled::{Style, StyledText};
    use pretty_assertions::assert_eq;

    fn numbered(count: usize, dot_line: usize) -> Buffer {
        let mut bb = BufferBuilder::new(10);
        for idx in 0..count {
            if idx > 0 {
                bb.newline();
            }
            bb.write_plain(&idx.to_string());
            if idx == dot_line {
                bb.set_dot_here();
            }
        }
        bb.finish()
    }

    #[test]
    fn wraps_when_a_grapheme_does_not_fit() {
        let mut bb = BufferBuilder::new(4);
        bb.write_plain("abcdef");
        let buf = bb.finish();
        assert_eq!(buf.plain_lines(), vec!["abcd", "ef"]);
    }

    #[test]
    fn wide_grapheme_wraps_as_a_whole() {
        let mut bb = BufferBuilder::new(3);
        bb.write_plain("a你好");
        let buf = bb.finish();
        assert_eq!(buf.plain_lines(), vec!["a你", "好"]);
        assert_eq!(buf.line_width(0), 3);
    }

    #[test]
    fn continuation_lines_are_indented() {
        let mut bb = BufferBuilder::new(10);
        bb.set_indent(2).write_plain("a\nb");
        assert_eq!(bb.finish().plain_lines(), vec!["a", "  b"]);
    }

    #[test]
    fn controls_use_caret_notation() {
        let mut bb = BufferBuilder::new(10);
        bb.write_plain("a\tb");
        assert_eq!(bb.finish().plain_lines(), vec!["a^Ib"]);
    }

    #[test]
    fn styles_are_kept_per_cell() {
        let mut bb = BufferBuilder::new(10);
        bb.write_styled(&StyledText::styled("x", Style::PLAIN.inverse()));
        let buf = bb.finish();
        assert!(buf.lines[0][0].style.inverse);
    }

    #[test]
    fn dot_tracks_line_and_column() {
        let mut bb = BufferBuilder::new(10);
        bb.write_plain("ab\ncd").set_dot_here();
        assert_eq!(bb.finish().dot, Pos::new(1, 2));
    }

    #[test]
    fn truncate_keeps_top_when_cursor_is_near_top() {
        let mut buf = numbered(5, 1);
        buf.truncate_to_height(3);
        assert_eq!(buf.plain_lines(), vec!["0", "1", "2"]);
        assert_eq!(buf.dot.line, 1);
    }

    #[test]
    fn truncate_ends_at_cursor_row_when_cursor_is_low() {
        let mut buf = numbered(6, 4);
        buf.truncate_to_height(2);
        assert_eq!(buf.plain_lines(), vec!["3", "4"]);
        assert_eq!(buf.dot.line, 1);
    }

    #[test]
    fn truncate_is_a_no_op_when_it_fits() {
        let mut buf = numbered(2, 1);
        buf.truncate_to_height(5);
        assert_eq!(buf.height(), 2);
    }

    #[test]
    fn zero_height_keeps_the_cursor_row() {
        let mut buf = numbered(4, 2);
        buf.truncate_to_height(0);
        assert_eq!(buf.plain_lines(), vec!["2"]);
        assert_eq!(buf.dot.line, 0);
    }

    #[test]
    fn eager_wrap_moves_past_a_full_line() {
        let mut lazy = BufferBuilder::new(3);
        lazy.write_plain("abc").set_dot_here();
        let lazy = lazy.finish();
        assert_eq!(lazy.plain_lines(), vec!["abc"]);
        assert_eq!(lazy.dot, Pos::new(0, 3));

        let mut eager = BufferBuilder::new(3);
        eager
            .set_indent(1)
            .set_eager_wrap(true)
            .write_plain("abc")
            .set_dot_here();
        let eager = eager.finish();
        assert_eq!(eager.plain_lines(), vec!["abc", " "]);
        assert_eq!(eager.dot, Pos::new(1, 1));
    }
}
