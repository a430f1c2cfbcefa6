//! Conversion of rendered buffers into terminal output.

pub mod frame;

pub use frame::{Frame, Line, Span};
