//! Concrete [`AsyncSource`] implementations.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;

use crate::core::async_source::{AsyncSource, LateUpdates, Publisher, Snapshot};
use crate::core::styled::StyledText;
use crate::error::HighlightError;

/// A prompt that always shows the same text.
#[derive(Debug, Clone, Default)]
pub struct ConstPrompt {
    text: StyledText,
}

impl ConstPrompt {
    pub fn new(text: impl Into<StyledText>) -> Self {
        Self { text: text.into() }
    }
}

impl AsyncSource<(), StyledText> for ConstPrompt {
    fn get(&self, _input: &()) -> Snapshot<StyledText> {
        Snapshot::new(self.text.clone())
    }

    fn trigger(&self, _force: bool) {}

    fn late_updates(&self) -> LateUpdates<StyledText> {
        LateUpdates::never()
    }
}

/// Highlighter that returns the code unstyled and finds no errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHighlighter;

impl AsyncSource<str, StyledText> for PlainHighlighter {
    fn get(&self, code: &str) -> Snapshot<StyledText> {
        Snapshot::new(StyledText::plain(code))
    }

    fn trigger(&self, _force: bool) {}

    fn late_updates(&self) -> LateUpdates<StyledText> {
        LateUpdates::never()
    }
}

type HighlightFn = dyn Fn(&str) -> (StyledText, Vec<HighlightError>) + Send + Sync;

/// Highlighter that runs a cheap function inline on every `get`.
pub struct FnHighlighter {
    highlight: Box<HighlightFn>,
}

impl FnHighlighter {
    pub fn new(
        highlight: impl Fn(&str) -> (StyledText, Vec<HighlightError>) + Send + Sync + 'static,
    ) -> Self {
        Self {
            highlight: Box::new(highlight),
        }
    }
}

impl AsyncSource<str, StyledText> for FnHighlighter {
    fn get(&self, code: &str) -> Snapshot<StyledText> {
        let (value, errors) = (self.highlight)(code);
        Snapshot::with_errors(value, errors)
    }

    fn trigger(&self, _force: bool) {}

    fn late_updates(&self) -> LateUpdates<StyledText> {
        LateUpdates::never()
    }
}

#[derive(Debug, Default)]
struct PromptSlot {
    value: StyledText,
    running: bool,
    rerun: bool,
}

struct PromptShared {
    compute: Box<dyn Fn() -> StyledText + Send + Sync>,
    slot: Mutex<PromptSlot>,
    publisher: Publisher<StyledText>,
}

/// Prompt recomputed on a background thread whenever it is triggered.
///
/// Until the first computation finishes, `get` returns empty text. A non-forced
/// trigger is dropped while a computation is running; a forced one queues exactly
/// one more run after it.
#[derive(Clone)]
pub struct AsyncPrompt {
    shared: Arc<PromptShared>,
}

impl AsyncPrompt {
    pub fn new(compute: impl Fn() -> StyledText + Send + Sync + 'static) -> Self {
        Self {
            shared: Arc::new(PromptShared {
                compute: Box::new(compute),
                slot: Mutex::new(PromptSlot::default()),
                publisher: Publisher::new(),
            }),
        }
    }

    fn run(shared: &PromptShared) {
        loop {
            tracing::trace!("prompt recomputation started");
            let value = (shared.compute)();
            let again = {
                let mut slot = shared.slot.lock().unwrap_or_else(PoisonError::into_inner);
                slot.value = value.clone();
                let again = slot.rerun;
                slot.rerun = false;
                slot.running = again;
                again
            };
            shared.publisher.publish(value);
            if !again {
                return;
            }
        }
    }
}

impl AsyncSource<(), StyledText> for AsyncPrompt {
    fn get(&self, _input: &()) -> Snapshot<StyledText> {
        let slot = self
            .shared
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Snapshot::new(slot.value.clone())
    }

    fn trigger(&self, force: bool) {
        {
            let mut slot = self
                .shared
                .slot
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if slot.running {
                if force {
                    slot.rerun = true;
                }
                return;
            }
            slot.running = true;
        }
        let shared = Arc::clone(&self.shared);
        thread::spawn(move || AsyncPrompt::run(&shared));
    }

    fn late_updates(&self) -> LateUpdates<StyledText> {
        self.shared.publisher.subscribe()
    }
}

#[derive(Debug, Default)]
struct HighlightSlot {
    cached: Option<(String, Snapshot<StyledText>)>,
    /// Code most recently asked for through `get`.
    latest: Option<String>,
    /// Code the worker should process next.
    requested: Option<String>,
    /// Recompute `requested` even if the cache already holds it.
    forced: bool,
    running: bool,
}

impl HighlightSlot {
    fn is_cached(&self, code: &str) -> bool {
        matches!(&self.cached, Some((cached_code, _)) if cached_code == code)
    }
}

struct HighlightShared {
    highlight: Box<HighlightFn>,
    slot: Mutex<HighlightSlot>,
    publisher: Publisher<StyledText>,
}

/// Highlighter whose work happens on a single background worker.
///
/// `get` answers from the cache when it holds a result for exactly that code;
/// otherwise it schedules the code and returns it unstyled with no errors. The
/// worker only ever processes the most recently requested code, so deliveries
/// never go back to older code. A forced trigger recomputes that code once more,
/// after the run in progress if there is one.
#[derive(Clone)]
pub struct AsyncHighlighter {
    shared: Arc<HighlightShared>,
}

impl AsyncHighlighter {
    pub fn new(
        highlight: impl Fn(&str) -> (StyledText, Vec<HighlightError>) + Send + Sync + 'static,
    ) -> Self {
        Self {
            shared: Arc::new(HighlightShared {
                highlight: Box::new(highlight),
                slot: Mutex::new(HighlightSlot::default()),
                publisher: Publisher::new(),
            }),
        }
    }

    /// Starts the worker if there is work and it is not already running.
    fn start_worker(&self, mut slot: MutexGuard<'_, HighlightSlot>) {
        if slot.requested.is_none() || slot.running {
            return;
        }
        slot.running = true;
        drop(slot);
        let shared = Arc::clone(&self.shared);
        thread::spawn(move || AsyncHighlighter::run(&shared));
    }

    fn run(shared: &HighlightShared) {
        loop {
            let next = {
                let mut slot = shared.slot.lock().unwrap_or_else(PoisonError::into_inner);
                let forced = std::mem::take(&mut slot.forced);
                let pending = slot.requested.take();
                let pending = pending.filter(|code| forced || !slot.is_cached(code));
                if pending.is_none() {
                    slot.running = false;
                }
                pending
            };
            let Some(code) = next else {
                return;
            };

            tracing::trace!(len = code.len(), "highlight started");
            let (value, errors) = (shared.highlight)(&code);
            let snapshot = Snapshot::with_errors(value.clone(), errors);
            {
                let mut slot = shared.slot.lock().unwrap_or_else(PoisonError::into_inner);
                slot.cached = Some((code, snapshot));
            }
            shared.publisher.publish(value);
        }
    }
}

impl AsyncSource<str, StyledText> for AsyncHighlighter {
    fn get(&self, code: &str) -> Snapshot<StyledText> {
        let mut slot = self
            .shared
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if slot.latest.as_deref() != Some(code) {
            slot.latest = Some(code.to_string());
        }
        if let Some((cached_code, snapshot)) = &slot.cached {
            if cached_code == code {
                return snapshot.clone();
            }
        }
        if slot.requested.as_deref() != Some(code) {
            slot.requested = Some(code.to_string());
            slot.forced = false;
        }
        self.start_worker(slot);
        Snapshot::new(StyledText::plain(code))
    }

    fn trigger(&self, force: bool) {
        let mut slot = self
            .shared
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let Some(latest) = slot.latest.clone() else {
            return;
        };
        if force {
            slot.requested = Some(latest);
            slot.forced = true;
        } else if slot.requested.is_none() && !slot.is_cached(&latest) {
            slot.requested = Some(latest);
        }
        self.start_worker(slot);
    }

    fn late_updates(&self) -> LateUpdates<StyledText> {
        self.shared.publisher.subscribe()
    }
}
