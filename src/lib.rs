//! A code-editing widget for line editors.
//!
//! The [`CodeArea`] widget shows a prompt, the code being edited with syntax
//! highlighting, an optional right prompt and highlighting errors. It handles only
//! essential editing (typing, backspace, submit and bracketed paste) and leaves every
//! other binding to an overlay handler.
//!
//! # Public API Overview
//! - Render widgets into a [`Buffer`] and convert it to terminal lines with [`Frame`].
//! - Feed raw terminal input through [`parse_input_events`] and [`Handler::handle`].
//! - Share and mutate the widget state from other threads through [`StateHandle`].
//! - Plug in highlighters and prompts that compute results in the background via
//!   [`AsyncSource`].

#![allow(clippy::type_complexity)]

pub mod config;
pub mod error;
pub mod logging;

pub mod core;
pub mod render;
pub mod runtime;
pub mod widgets;

/// Error types.
pub use crate::error::{CodeBufferError, HighlightError, LoggingError};

/// Environment configuration.
pub use crate::config::EnvConfig;

/// Widget traits.
pub use crate::core::component::{DummyHandler, FnHandler, Handler, Renderer, Widget};

/// Rendered grid and its builder.
pub use crate::core::buffer::{Buffer, BufferBuilder, Cell};
pub use crate::core::cursor::Pos;

/// Styled text.
pub use crate::core::styled::{Color, Segment, Style, StyledText};

/// Edited code and cursor.
pub use crate::core::code_buffer::CodeBuffer;

/// Keys and input decoding.
pub use crate::core::input::{Key, KeyCode, Mods};
pub use crate::core::input_event::{parse_input_events, Event};

/// Background-computed values for highlighters and prompts.
pub use crate::core::async_source::{AsyncSource, Highlighter, LateUpdates, Prompt, Snapshot};
pub use crate::core::sources::{
    AsyncHighlighter, AsyncPrompt, ConstPrompt, FnHighlighter, PlainHighlighter,
};

/// Shell quoting used for pasted text by default.
pub use crate::core::text::quote::quote;

/// Render-layer frame types.
pub use crate::render::{Frame, Line, Span};

/// Handler layering.
pub use crate::runtime::{with_overlay, WithOverlay};

/// Built-in widgets.
pub use crate::widgets::code_area::{
    AbbreviationsFn, CodeArea, CodeAreaConfig, CodeAreaState, PendingCode, StateHandle,
};
pub use crate::widgets::listing::{mode_line, write_listing};
