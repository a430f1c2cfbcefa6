//! Layering an input handler over a widget.

use crate::core::buffer::Buffer;
use crate::core::component::{Handler, Renderer};
use crate::core::input_event::Event;

/// A widget that renders like `base` but lets `overlay` try every event first.
///
/// Wrapping a `WithOverlay` again nests the handlers: the outermost overlay sees
/// events first.
#[derive(Debug, Clone, Default)]
pub struct WithOverlay<W, H> {
    base: W,
    overlay: H,
}

/// Returns `base` with `overlay` given first refusal on events.
pub fn with_overlay<W: Renderer + Handler, H: Handler>(base: W, overlay: H) -> WithOverlay<W, H> {
    WithOverlay { base, overlay }
}

impl<W, H> WithOverlay<W, H> {
    pub fn base(&self) -> &W {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut W {
        &mut self.base
    }

    pub fn overlay(&self) -> &H {
        &self.overlay
    }

    pub fn into_parts(self) -> (W, H) {
        (self.base, self.overlay)
    }
}

impl<W: Renderer, H> Renderer for WithOverlay<W, H> {
    fn render(&self, width: usize, height: usize) -> Buffer {
        self.base.render(width, height)
    }
}

impl<W: Handler, H: Handler> Handler for WithOverlay<W, H> {
    fn handle(&mut self, event: &Event) -> bool {
        self.overlay.handle(event) || self.base.handle(event)
    }
}

#[cfg(test)]
mod tests {
    use super::with_overlay;
    use crate::core::buffer::{Buffer, BufferBuilder};
    use crate::core::component::{FnHandler, Handler, Renderer};
    use crate::core::input::Key;
    use crate::core::input_event::Event;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder {
        name: &'static str,
        handles: bool,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Renderer for Recorder {
        fn render(&self, width: usize, _height: usize) -> Buffer {
            let mut bb = BufferBuilder::new(width);
            bb.write_plain(self.name);
            bb.finish()
        }
    }

    impl Handler for Recorder {
        fn handle(&mut self, _event: &Event) -> bool {
            self.log.borrow_mut().push(self.name);
            self.handles
        }
    }

    fn recorder(name: &'static str, handles: bool, log: &Rc<RefCell<Vec<&'static str>>>) -> Recorder {
        Recorder {
            name,
            handles,
            log: Rc::clone(log),
        }
    }

    #[test]
    fn overlay_that_handles_shadows_base() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut w = with_overlay(recorder("base", false, &log), recorder("overlay", true, &log));
        assert!(w.handle(&Event::Key(Key::char('a'))));
        assert_eq!(*log.borrow(), vec!["overlay"]);
    }

    #[test]
    fn unhandled_events_fall_through_to_base() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut w = with_overlay(recorder("base", true, &log), recorder("overlay", false, &log));
        assert!(w.handle(&Event::Key(Key::char('a'))));
        assert_eq!(*log.borrow(), vec!["overlay", "base"]);
    }

    #[test]
    fn render_is_delegated_to_base() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let w = with_overlay(recorder("base", false, &log), recorder("overlay", true, &log));
        assert_eq!(w.render(10, 1).plain_lines(), vec!["base"]);
    }

    #[test]
    fn nesting_puts_the_outer_overlay_first() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let inner = with_overlay(recorder("base", false, &log), recorder("inner", false, &log));
        let mut outer = with_overlay(inner, recorder("outer", false, &log));
        assert!(!outer.handle(&Event::PasteSetting(true)));
        assert_eq!(*log.borrow(), vec!["outer", "inner", "base"]);
    }

    #[test]
    fn closure_overlays() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let overlay = FnHandler::new(|event: &Event| matches!(event, Event::PasteSetting(_)));
        let mut w = with_overlay(recorder("base", false, &log), overlay);
        assert!(w.handle(&Event::PasteSetting(false)));
        assert!(log.borrow().is_empty());
    }
}
