use crate::core::buffer::{Buffer, BufferBuilder, Cell};
use crate::core::styled::{Style, StyledText};
use crate::error::HighlightError;

use super::config::CodeAreaConfig;
use super::state::CodeAreaState;

/// Everything a single render needs, gathered up front so no lock is held while drawing.
#[derive(Debug, Clone)]
pub(super) struct View {
    pub(super) prompt: StyledText,
    pub(super) rprompt: Option<StyledText>,
    pub(super) code: StyledText,
    pub(super) dot: usize,
    pub(super) errors: Vec<HighlightError>,
}

impl View {
    pub(super) fn new(state: &CodeAreaState, config: &CodeAreaConfig) -> Self {
        let (buffer, pending_range) = state.patched_buffer();
        let highlighted = config.highlighter.get(buffer.content());

        let mut code = highlighted.value;
        if let Some(range) = pending_range {
            code = code.map_range(range, Style::underlined);
        }

        let rprompt = if state.hide_rprompt {
            None
        } else {
            Some(config.rprompt.get(&()).value)
        };

        Self {
            prompt: config.prompt.get(&()).value,
            rprompt,
            code,
            dot: buffer.dot(),
            errors: highlighted.errors,
        }
    }
}

pub(super) fn render_view(view: &View, bb: &mut BufferBuilder) {
    // A full row wraps at once so the cursor never sits past the last column.
    bb.set_eager_wrap(true);
    bb.write_styled(&view.prompt);
    // Continuation lines line up with the code unless the prompt is too wide or
    // spans several lines.
    if bb.line_count() == 1 && bb.col() * 2 < bb.width() {
        bb.set_indent(bb.col());
    }

    let (before, after) = view.code.split_at(view.dot);
    bb.write_styled(&before);
    bb.set_dot_here();
    bb.write_styled(&after);

    if !view.errors.is_empty() {
        bb.set_eager_wrap(false).set_indent(0);
        for err in &view.errors {
            bb.newline();
            bb.write_plain(&err.to_string());
        }
    }
}

/// Right-aligns the right prompt on the first line when it fits with at least one
/// column to spare.
pub(super) fn place_rprompt(buffer: &mut Buffer, view: &View) {
    let Some(rprompt) = view.rprompt.as_ref() else {
        return;
    };
    if rprompt.is_empty() {
        return;
    }

    let mut rb = BufferBuilder::new(buffer.width);
    rb.write_styled(rprompt);
    let rendered = rb.finish();
    if rendered.height() != 1 {
        return;
    }
    let rprompt_width = rendered.line_width(0);
    let used = buffer.line_width(0);
    if used + 1 + rprompt_width > buffer.width {
        return;
    }

    let padding = buffer.width - used - rprompt_width;
    let first = &mut buffer.lines[0];
    first.extend((0..padding).map(|_| Cell {
        text: " ".to_string(),
        width: 1,
        style: Style::PLAIN,
    }));
    first.extend(rendered.lines.into_iter().flatten());
}
