//! Widget composition.

pub mod overlay;

pub use overlay::{with_overlay, WithOverlay};
