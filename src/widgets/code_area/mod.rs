//! Code area widget: shows and edits code.
//!
//! The widget only implements essential editing (typing, backspace, submit, bracketed
//! paste). Other keybindings are layered on with an overlay handler.

mod config;
mod render;
mod state;

pub use config::{AbbreviationsFn, CodeAreaConfig};
pub use state::{CodeAreaState, PendingCode, StateHandle};

use crate::core::buffer::{Buffer, BufferBuilder};
use crate::core::code_buffer::CodeBuffer;
use crate::core::component::{Handler, Renderer};
use crate::core::input::{Key, KeyCode};
use crate::core::input_event::Event;
use crate::core::text::utils::is_graphic;

/// Bookkeeping for abbreviation expansion and bracketed paste.
///
/// Only the thread driving [`Handler::handle`] touches this, which `&mut self` enforces.
#[derive(Debug, Default)]
struct InsertTracker {
    /// Text typed consecutively since the last interruption.
    inserts: String,
    /// The buffer right after the last tracked insert.
    last_buffer: Option<CodeBuffer>,
    pasting: bool,
    paste_buffer: String,
}

impl InsertTracker {
    fn reset_inserts(&mut self) {
        self.inserts.clear();
        self.last_buffer = None;
    }
}

pub struct CodeArea {
    state: StateHandle,
    config: CodeAreaConfig,
    tracker: InsertTracker,
}

impl CodeArea {
    pub fn new(config: CodeAreaConfig) -> Self {
        Self::with_state(config, CodeAreaState::default())
    }

    pub fn with_state(config: CodeAreaConfig, state: CodeAreaState) -> Self {
        Self {
            state: StateHandle::new(state),
            config,
            tracker: InsertTracker::default(),
        }
    }

    /// A handle other threads can use to read or change the state.
    pub fn state_handle(&self) -> StateHandle {
        self.state.clone()
    }

    pub fn copy_state(&self) -> CodeAreaState {
        self.state.copy_state()
    }

    pub fn mutate_state<R>(&self, f: impl FnOnce(&mut CodeAreaState) -> R) -> R {
        self.state.mutate_state(f)
    }

    pub fn is_pasting(&self) -> bool {
        self.tracker.pasting
    }

    /// Calls the submit callback with the current content.
    ///
    /// The lock is released before the callback runs, so it may mutate the state.
    pub fn submit(&mut self) {
        let content = self.state.read().buffer.content().to_string();
        tracing::debug!(len = content.len(), "submit");
        (self.config.on_submit)(&content);
    }

    fn handle_paste_setting(&mut self, start: bool) -> bool {
        self.tracker.reset_inserts();
        if start {
            self.tracker.pasting = true;
            return true;
        }
        if !self.tracker.pasting {
            return true;
        }

        let mut text = std::mem::take(&mut self.tracker.paste_buffer);
        self.tracker.pasting = false;
        if (self.config.quote_paste)() {
            text = (self.config.quote)(&text);
        }
        tracing::debug!(len = text.len(), "paste inserted");
        self.state.mutate_state(|s| s.buffer.insert_at_dot(&text));
        true
    }

    fn handle_key(&mut self, key: Key) -> bool {
        if self.tracker.pasting {
            match key.as_char() {
                Some(ch) => self.tracker.paste_buffer.push(ch),
                None => tracing::debug!(%key, "function key dropped during paste"),
            }
            return true;
        }

        if key.as_char() == Some('\n') {
            self.tracker.reset_inserts();
            self.submit();
            return true;
        }

        if key == Key::plain(KeyCode::Backspace) || key.as_char() == Some('\x7f') {
            self.tracker.reset_inserts();
            self.state.mutate_state(|s| s.buffer.delete_before_dot());
            return true;
        }

        match key.as_char() {
            Some(ch) if is_graphic(ch) => {
                self.insert_char(ch);
                true
            }
            _ => {
                self.tracker.reset_inserts();
                false
            }
        }
    }

    fn insert_char(&mut self, ch: char) {
        let mut state = self.state.write();
        let tracker = &mut self.tracker;
        if tracker.last_buffer.as_ref() != Some(&state.buffer) {
            // Something else changed the buffer since the last insert.
            tracker.reset_inserts();
        }

        let mut encoded = [0u8; 4];
        let text = ch.encode_utf8(&mut encoded);
        state.buffer.insert_at_dot(text);
        tracker.inserts.push(ch);
        tracker.last_buffer = Some(state.buffer.clone());

        // Longest abbreviation wins; on ties the first one visited stays.
        let mut best: Option<(String, String)> = None;
        (self.config.abbreviations)(&mut |abbr: &str, full: &str| {
            let longer = best.as_ref().map_or(0, |(a, _)| a.len()) < abbr.len();
            if longer && tracker.inserts.ends_with(abbr) {
                best = Some((abbr.to_string(), full.to_string()));
            }
        });

        if let Some((abbr, full)) = best {
            match state.buffer.replace_before_dot(abbr.len(), &full) {
                Ok(()) => tracing::debug!(abbr = abbr.as_str(), full = full.as_str(), "abbreviation expanded"),
                Err(err) => tracing::warn!(%err, abbr = abbr.as_str(), "abbreviation not expanded"),
            }
            tracker.reset_inserts();
        }
    }
}

impl Renderer for CodeArea {
    /// Renders the prompt, highlighted code with the cursor, highlighting errors and
    /// the right prompt, cut to `height` rows around the cursor.
    fn render(&self, width: usize, height: usize) -> Buffer {
        let state = self.state.copy_state();
        let view = render::View::new(&state, &self.config);
        let mut bb = BufferBuilder::new(width);
        render::render_view(&view, &mut bb);
        let mut buffer = bb.finish();
        render::place_rprompt(&mut buffer, &view);

        let height = match self.config.max_height {
            Some(max_height) => height.min(max_height),
            None => height,
        };
        buffer.truncate_to_height(height);
        buffer
    }
}

impl Handler for CodeArea {
    fn handle(&mut self, event: &Event) -> bool {
        if self.config.overlay_handler.handle(event) {
            return true;
        }

        match *event {
            Event::PasteSetting(start) => self.handle_paste_setting(start),
            Event::Key(key) => self.handle_key(key),
        }
    }
}

impl std::fmt::Debug for CodeArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeArea")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("tracker", &self.tracker)
            .finish()
    }
}
