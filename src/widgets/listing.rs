//! Layout helpers for listing modes (history, completion, location pickers).

use crate::core::buffer::BufferBuilder;
use crate::core::styled::{Color, Style, StyledText};
use crate::core::text::utils::clip_to_width;
use crate::core::text::width::text_width;

/// The highlighted title shown at the start of a mode's first row.
pub fn mode_line(title: &str, space_after: bool) -> StyledText {
    let mut line = StyledText::styled(title, Style::PLAIN.bold().fg(Color::White).bg(Color::Magenta));
    if space_after {
        line.push_str(" ", Style::PLAIN);
    }
    line
}

/// Writes a listing: the mode line and filter on the first row with the cursor after
/// the filter, then one row per item.
///
/// Items are clipped to the width. Selected items are shown inverse and padded so the
/// highlight spans the whole row.
pub fn write_listing<I, L>(bb: &mut BufferBuilder, title: &str, filter: &str, items: I)
where
    I: IntoIterator<Item = (L, bool)>,
    L: AsRef<str>,
{
    let width = bb.width();
    bb.set_indent(0)
        .write_styled(&mode_line(title, true))
        .write_plain(filter)
        .set_dot_here();

    for (item, selected) in items {
        let text = clip_to_width(item.as_ref(), width);
        bb.newline();
        if selected {
            let style = Style::PLAIN.inverse();
            bb.write_str(text, style)
                .write_spaces(width.saturating_sub(text_width(text)), style);
        } else {
            bb.write_plain(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{mode_line, write_listing};
    use crate::core::buffer::BufferBuilder;
    use crate::core::styled::{Color, Style};
    use pretty_assertions::assert_eq;

    #[test]
    fn mode_line_styles_the_title() {
        let line = mode_line(" HISTORY ", true);
        assert_eq!(line.text(), " HISTORY  ");
        let segments = line.segments();
        assert_eq!(segments.len(), 2);
        assert!(segments[0].style.bold);
        assert_eq!(segments[0].style.bg, Some(Color::Magenta));
        assert!(segments[1].style.is_plain());

        assert_eq!(mode_line("X", false).segments().len(), 1);
    }

    #[test]
    fn listing_marks_the_selected_row() {
        let mut got = BufferBuilder::new(10);
        write_listing(
            &mut got,
            " LIST ",
            "f",
            [("line 1", false), ("line 2", true), ("line 3", false)],
        );

        let mut want = BufferBuilder::new(10);
        want.write_styled(&mode_line(" LIST ", true))
            .write_plain("f")
            .set_dot_here()
            .newline()
            .write_plain("line 1")
            .newline()
            .write_str("line 2    ", Style::PLAIN.inverse())
            .newline()
            .write_plain("line 3");

        assert_eq!(got.finish(), want.finish());
    }

    #[test]
    fn long_items_are_clipped() {
        let mut bb = BufferBuilder::new(6);
        write_listing(&mut bb, "M", "", vec![("a very long item".to_string(), true)]);
        let buf = bb.finish();
        assert_eq!(buf.plain_lines(), vec!["M ", "a very"]);
        assert_eq!(buf.dot.col, 2);
    }
}
