//! Code area state and its thread-safe handle.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::code_buffer::CodeBuffer;

/// A previewed replacement of `buffer[from..to]`, such as a completion candidate.
///
/// It is only shown; [`CodeAreaState::apply_pending`] commits it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingCode {
    pub from: usize,
    pub to: usize,
    pub content: String,
}

impl PendingCode {
    pub fn new(from: usize, to: usize, content: impl Into<String>) -> Self {
        Self {
            from,
            to,
            content: content.into(),
        }
    }
}

/// Everything about a code area that other components may read or change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeAreaState {
    pub buffer: CodeBuffer,
    pub pending: Option<PendingCode>,
    pub hide_rprompt: bool,
}

impl CodeAreaState {
    pub fn new(buffer: CodeBuffer) -> Self {
        Self {
            buffer,
            ..Self::default()
        }
    }

    /// The buffer as it looks with the pending preview applied, plus the byte range the
    /// preview occupies. An invalid preview is ignored.
    pub fn patched_buffer(&self) -> (CodeBuffer, Option<std::ops::Range<usize>>) {
        let Some(pending) = self.pending.as_ref() else {
            return (self.buffer.clone(), None);
        };
        let content = self.buffer.content();
        let valid = pending.from <= pending.to
            && pending.to <= content.len()
            && content.is_char_boundary(pending.from)
            && content.is_char_boundary(pending.to);
        if !valid {
            return (self.buffer.clone(), None);
        }

        let mut patched = String::with_capacity(content.len() + pending.content.len());
        patched.push_str(&content[..pending.from]);
        patched.push_str(&pending.content);
        patched.push_str(&content[pending.to..]);

        let dot = self.buffer.dot();
        let new_dot = if dot < pending.from {
            dot
        } else if dot <= pending.to {
            pending.from + pending.content.len()
        } else {
            dot - (pending.to - pending.from) + pending.content.len()
        };

        let range = pending.from..pending.from + pending.content.len();
        match CodeBuffer::new(patched, new_dot) {
            Ok(buffer) => (buffer, Some(range)),
            Err(_) => (self.buffer.clone(), None),
        }
    }

    /// Commits the pending preview into the buffer. Returns whether there was one to apply.
    pub fn apply_pending(&mut self) -> bool {
        let (buffer, range) = self.patched_buffer();
        self.pending = None;
        if range.is_none() {
            return false;
        }
        self.buffer = buffer;
        true
    }
}

/// Shared, lock-guarded access to a code area's state.
///
/// Cloning the handle shares the same state. Reads copy the state out; writes run a
/// closure under the exclusive lock. No reference to the state escapes either call.
#[derive(Debug, Clone, Default)]
pub struct StateHandle {
    inner: Arc<RwLock<CodeAreaState>>,
}

impl StateHandle {
    pub fn new(state: CodeAreaState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(state)),
        }
    }

    pub fn copy_state(&self) -> CodeAreaState {
        self.read().clone()
    }

    pub fn mutate_state<R>(&self, f: impl FnOnce(&mut CodeAreaState) -> R) -> R {
        f(&mut self.write())
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, CodeAreaState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, CodeAreaState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
