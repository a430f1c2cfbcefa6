//! Callback bundle for a code area.

use std::fmt;
use std::sync::Arc;

use crate::config::EnvConfig;
use crate::core::async_source::{Highlighter, Prompt};
use crate::core::component::{DummyHandler, Handler};
use crate::core::sources::{ConstPrompt, PlainHighlighter};
use crate::core::text::quote::quote;

/// Calls the visitor once per `(abbreviation, expansion)` pair, in a stable order.
pub type AbbreviationsFn = dyn Fn(&mut dyn FnMut(&str, &str));

/// Configuration of a [`CodeArea`](super::CodeArea), fixed once the widget is built.
///
/// Every callback has a working default, so an untouched `CodeAreaConfig::default()`
/// gives a plain, prompt-less editor that expands nothing and submits into the void.
pub struct CodeAreaConfig {
    pub(crate) overlay_handler: Box<dyn Handler>,
    pub(crate) highlighter: Arc<Highlighter>,
    pub(crate) prompt: Arc<Prompt>,
    pub(crate) rprompt: Arc<Prompt>,
    pub(crate) abbreviations: Box<AbbreviationsFn>,
    pub(crate) quote_paste: Box<dyn Fn() -> bool>,
    pub(crate) quote: Box<dyn Fn(&str) -> String>,
    pub(crate) on_submit: Box<dyn FnMut(&str)>,
    pub(crate) max_height: Option<usize>,
}

impl Default for CodeAreaConfig {
    fn default() -> Self {
        Self {
            overlay_handler: Box::new(DummyHandler),
            highlighter: Arc::new(PlainHighlighter),
            prompt: Arc::new(ConstPrompt::default()),
            rprompt: Arc::new(ConstPrompt::default()),
            abbreviations: Box::new(no_abbreviations),
            quote_paste: Box::new(never_quote_paste),
            quote: Box::new(quote),
            on_submit: Box::new(discard_submit),
            max_height: None,
        }
    }
}

fn no_abbreviations(_visit: &mut dyn FnMut(&str, &str)) {}

fn never_quote_paste() -> bool {
    false
}

fn discard_submit(_code: &str) {}

impl CodeAreaConfig {
    /// Applies environment-derived options: height cap and the default paste quoting.
    pub fn with_env(mut self, env: &EnvConfig) -> Self {
        if env.max_height.is_some() {
            self.max_height = env.max_height;
        }
        if env.quote_paste {
            self.quote_paste = Box::new(|| true);
        }
        self
    }

    /// Handler given first refusal on every event.
    pub fn overlay_handler(mut self, handler: impl Handler + 'static) -> Self {
        self.overlay_handler = Box::new(handler);
        self
    }

    pub fn highlighter(mut self, highlighter: Arc<Highlighter>) -> Self {
        self.highlighter = highlighter;
        self
    }

    pub fn prompt(mut self, prompt: Arc<Prompt>) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn rprompt(mut self, rprompt: Arc<Prompt>) -> Self {
        self.rprompt = rprompt;
        self
    }

    pub fn abbreviations(mut self, abbreviations: impl Fn(&mut dyn FnMut(&str, &str)) + 'static) -> Self {
        self.abbreviations = Box::new(abbreviations);
        self
    }

    /// Abbreviations from a fixed list; earlier pairs win ties.
    pub fn abbreviation_pairs<A, E>(self, pairs: Vec<(A, E)>) -> Self
    where
        A: AsRef<str> + 'static,
        E: AsRef<str> + 'static,
    {
        self.abbreviations(move |visit| {
            for (abbr, full) in &pairs {
                visit(abbr.as_ref(), full.as_ref());
            }
        })
    }

    /// Whether pasted text is quoted before insertion.
    pub fn quote_paste(mut self, quote_paste: impl Fn() -> bool + 'static) -> Self {
        self.quote_paste = Box::new(quote_paste);
        self
    }

    /// Quoting applied to pasted text when `quote_paste` says so.
    pub fn quote(mut self, quote: impl Fn(&str) -> String + 'static) -> Self {
        self.quote = Box::new(quote);
        self
    }

    pub fn on_submit(mut self, on_submit: impl FnMut(&str) + 'static) -> Self {
        self.on_submit = Box::new(on_submit);
        self
    }

    pub fn max_height(mut self, max_height: Option<usize>) -> Self {
        self.max_height = max_height;
        self
    }
}

impl fmt::Debug for CodeAreaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeAreaConfig")
            .field("max_height", &self.max_height)
            .finish_non_exhaustive()
    }
}
