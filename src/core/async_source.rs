//! Values computed off the interaction thread and delivered late.
//!
//! Highlighters and prompts share one contract: [`AsyncSource::get`] returns whatever
//! result is already available without blocking, [`AsyncSource::trigger`] asks for a
//! recomputation, and [`AsyncSource::late_updates`] yields a stream that fires whenever a
//! newer `get` result becomes available.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::core::styled::StyledText;
use crate::error::HighlightError;

/// A result as currently known by a source.
///
/// `errors` are problems found in the input (highlighters only), not failures of the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot<T> {
    pub value: T,
    pub errors: Vec<HighlightError>,
}

impl<T> Snapshot<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            errors: Vec::new(),
        }
    }

    pub fn with_errors(value: T, errors: Vec<HighlightError>) -> Self {
        Self { value, errors }
    }
}

pub trait AsyncSource<I: ?Sized, T>: Send + Sync {
    /// Returns the latest available result for `input`. Never blocks on a recomputation.
    fn get(&self, input: &I) -> Snapshot<T>;

    /// Requests a recomputation and returns immediately.
    ///
    /// `force` is set on the first trigger of a session and after an interrupt resets the
    /// editor; it asks the source to recompute even if it believes its result is current.
    fn trigger(&self, force: bool);

    /// Subscribes to late updates. Each call returns an independent subscription.
    fn late_updates(&self) -> LateUpdates<T>;
}

/// Highlights code, reporting static errors alongside the styled text.
pub type Highlighter = dyn AsyncSource<str, StyledText>;

/// Computes a (left or right) prompt; the input is unit.
pub type Prompt = dyn AsyncSource<(), StyledText>;

/// One subscriber's view of a source's late updates.
///
/// A subscription may skip intermediate values; only the most recent delivery matters,
/// and the authoritative value is always the source's next `get`.
#[derive(Debug)]
pub struct LateUpdates<T> {
    rx: Option<Receiver<T>>,
}

impl<T> LateUpdates<T> {
    /// A subscription that never fires.
    pub fn never() -> Self {
        Self { rx: None }
    }

    pub fn is_never(&self) -> bool {
        self.rx.is_none()
    }

    /// Drains pending deliveries and returns the newest one, if any.
    pub fn try_latest(&self) -> Option<T> {
        let rx = self.rx.as_ref()?;
        let mut latest = None;
        loop {
            match rx.try_recv() {
                Ok(value) => latest = Some(value),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return latest,
            }
        }
    }

    /// Waits up to `timeout` for the next delivery.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<T> {
        let rx = self.rx.as_ref()?;
        match rx.recv_timeout(timeout) {
            Ok(value) => Some(value),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }
}

/// Fan-out of late updates to every live subscription.
#[derive(Debug)]
pub(crate) struct Publisher<T> {
    subscribers: Mutex<Vec<Sender<T>>>,
}

impl<T: Clone> Publisher<T> {
    pub(crate) fn new() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn subscribe(&self) -> LateUpdates<T> {
        let (tx, rx) = mpsc::channel();
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tx);
        LateUpdates { rx: Some(rx) }
    }

    /// Sends `value` to every subscriber, forgetting the ones that hung up.
    pub(crate) fn publish(&self, value: T) {
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subscribers.retain(|tx| tx.send(value.clone()).is_ok());
        tracing::trace!(subscribers = subscribers.len(), "late update published");
    }
}

impl<I: ?Sized, T, S: AsyncSource<I, T> + ?Sized> AsyncSource<I, T> for Arc<S> {
    fn get(&self, input: &I) -> Snapshot<T> {
        (**self).get(input)
    }

    fn trigger(&self, force: bool) {
        (**self).trigger(force);
    }

    fn late_updates(&self) -> LateUpdates<T> {
        (**self).late_updates()
    }
}
