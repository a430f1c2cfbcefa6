//! Text helpers (width calculations, grapheme classification, shell quoting).
//!
//! These helpers are pure (string in/value out) and live under `core` so widgets can depend on
//! them without importing anything from the render layer.

pub mod quote;
pub mod utils;
pub mod width;
