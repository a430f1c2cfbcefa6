//! Typed render model.
//!
//! A [`Frame`] is the terminal-facing form of a [`Buffer`]: each line is a list of
//! spans, one per run of equally styled cells, with the SGR sequences already applied.

use crate::core::buffer::{Buffer, Cell};
use crate::core::cursor::Pos;
use crate::core::styled::Style;

const SGR_RESET: &str = "\x1b[m";

/// A contiguous run of equally styled text, ready to be written to a terminal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Span {
    text: String,
}

impl Span {
    pub fn new(text: String) -> Self {
        Self { text }
    }

    /// Wraps `text` in the SGR sequence for `style`, resetting afterwards.
    pub fn styled(text: &str, style: Style) -> Self {
        if style.is_plain() {
            return Self::new(text.to_string());
        }
        Self::new(format!("{}{text}{SGR_RESET}", style.sgr()))
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl From<String> for Span {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// A single rendered line.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Line {
    spans: Vec<Span>,
}

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    fn from_cells(cells: &[Cell]) -> Self {
        let mut spans = Vec::new();
        let mut run = String::new();
        let mut run_style = Style::PLAIN;
        for cell in cells {
            if cell.style != run_style && !run.is_empty() {
                spans.push(Span::styled(&run, run_style));
                run.clear();
            }
            run_style = cell.style;
            run.push_str(&cell.text);
        }
        if !run.is_empty() {
            spans.push(Span::styled(&run, run_style));
        }
        Self::new(spans)
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn into_string(self) -> String {
        let mut out = String::new();
        for span in self.spans {
            out.push_str(span.as_str());
        }
        out
    }
}

impl From<String> for Line {
    fn from(text: String) -> Self {
        Self::new(vec![Span::new(text)])
    }
}

/// A rendered frame (collection of lines).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Frame {
    lines: Vec<Line>,
    cursor: Option<Pos>,
}

impl Frame {
    pub fn new(lines: Vec<Line>) -> Self {
        Self {
            lines,
            cursor: None,
        }
    }

    /// Converts a rendered buffer, keeping its cursor position.
    pub fn from_buffer(buffer: &Buffer) -> Self {
        let lines = buffer.lines.iter().map(|cells| Line::from_cells(cells)).collect();
        Self::new(lines).with_cursor(Some(buffer.dot))
    }

    pub fn with_cursor(mut self, cursor: Option<Pos>) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn cursor(&self) -> Option<Pos> {
        self.cursor
    }

    pub fn into_lines(self) -> Vec<Line> {
        self.lines
    }

    pub fn into_strings(self) -> Vec<String> {
        self.lines
            .into_iter()
            .map(|line| line.into_string())
            .collect()
    }
}

impl From<Vec<String>> for Frame {
    fn from(lines: Vec<String>) -> Self {
        Self::new(lines.into_iter().map(Line::from).collect())
    }
}

impl From<&Buffer> for Frame {
    fn from(buffer: &Buffer) -> Self {
        Self::from_buffer(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::buffer::BufferBuilder;
    use crate::core::styled::Color;
    use pretty_assertions::assert_eq;

    #[test]
    fn vec_strings_round_trip_preserves_bytes_exactly() {
        let input: Vec<String> = vec![
            String::new(),
            "plain".to_string(),
            " leading and trailing ".to_string(),
            "unicode: π你好".to_string(),
        ];

        let frame: Frame = input.clone().into();
        assert_eq!(frame.cursor(), None);
        assert_eq!(frame.into_strings(), input);
    }

    #[test]
    fn style_runs_become_sgr_spans() {
        let mut bb = BufferBuilder::new(20);
        bb.write_str("ls", Style::PLAIN.fg(Color::Green))
            .write_plain(" ")
            .set_dot_here()
            .write_str("-l", Style::PLAIN.bold());
        let frame = Frame::from_buffer(&bb.finish());

        assert_eq!(frame.cursor(), Some(Pos::new(0, 3)));
        assert_eq!(frame.lines()[0].spans().len(), 3);
        assert_eq!(frame.into_strings(), vec!["\x1b[32mls\x1b[m \x1b[1m-l\x1b[m".to_string()]);
    }

    #[test]
    fn empty_lines_have_no_spans() {
        let mut bb = BufferBuilder::new(5);
        bb.write_plain("a").newline();
        let frame = Frame::from(&bb.finish());
        assert_eq!(frame.lines()[1].spans().len(), 0);
        assert_eq!(frame.into_strings(), vec!["a".to_string(), String::new()]);
    }
}
