//! Core interfaces and types.

pub mod async_source;
pub mod buffer;
pub mod code_buffer;
pub mod component;
pub mod cursor;
pub mod input;
pub mod input_event;
pub mod sources;
pub mod styled;
pub mod text;
