//! Widgets built on the core traits.

pub mod code_area;
pub mod listing;

pub use code_area::{CodeArea, CodeAreaConfig, CodeAreaState, PendingCode, StateHandle};
pub use listing::{mode_line, write_listing};
