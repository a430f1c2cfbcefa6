//! Widget, Renderer and Handler traits.

use crate::core::buffer::Buffer;
use crate::core::input_event::Event;

/// Renders onto a region of bounded width and height.
pub trait Renderer {
    fn render(&self, width: usize, height: usize) -> Buffer;
}

/// Tries to handle an event, returning whether it was handled.
pub trait Handler {
    fn handle(&mut self, event: &Event) -> bool;
}

/// The basic unit of UI: something that renders itself and handles events.
pub trait Widget: Renderer + Handler {}

impl<T: Renderer + Handler + ?Sized> Widget for T {}

/// Handler that handles nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyHandler;

impl Handler for DummyHandler {
    fn handle(&mut self, _event: &Event) -> bool {
        false
    }
}

/// Handler backed by a closure.
pub struct FnHandler<F> {
    f: F,
}

impl<F: FnMut(&Event) -> bool> FnHandler<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F: FnMut(&Event) -> bool> Handler for FnHandler<F> {
    fn handle(&mut self, event: &Event) -> bool {
        (self.f)(event)
    }
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn handle(&mut self, event: &Event) -> bool {
        (**self).handle(event)
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&self, width: usize, height: usize) -> Buffer {
        (**self).render(width, height)
    }
}
