// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Symbols and the session-scoped gensym allocator.

use crate::source::Span;
use crate::Rc;
use alloc::format;
use core::cmp;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::sync::atomic::{AtomicU64, Ordering};

/// Prefix used for generated names unless the session overrides it.
pub const DEFAULT_GENSYM_PREFIX: &str = "G__";

/// A binding name. Identity is the name alone; the span is diagnostic metadata.
#[derive(Clone)]
pub struct Symbol {
    name: Rc<str>,
    span: Option<Span>,
}

impl Symbol {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            span: None,
        }
    }

    pub fn with_span(mut self, span: Option<&Span>) -> Self {
        self.span = span.cloned();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn span(&self) -> Option<&Span> {
        self.span.as_ref()
    }

    pub fn is(&self, name: &str) -> bool {
        &*self.name == name
    }
}

impl cmp::PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl cmp::Eq for Symbol {}

impl cmp::PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl cmp::Ord for Symbol {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.name.cmp(&other.name)
    }
}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Issues fresh symbol names for one compilation session.
///
/// Names are `prefix` followed by a counter starting at 1. The counter is
/// atomic so a session may be shared by reference; independent sessions own
/// independent allocators and never observe each other's counters.
#[derive(Debug)]
pub struct GensymAllocator {
    prefix: Rc<str>,
    next: AtomicU64,
}

impl Default for GensymAllocator {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_GENSYM_PREFIX)
    }
}

impl GensymAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }

    /// Allocate a fresh symbol. `prefix` overrides the allocator's prefix for
    /// this name only; `span` is the location of the node it is derived from.
    pub fn gen(&self, prefix: Option<&str>, span: Option<&Span>) -> Symbol {
        let id = self.next.fetch_add(1, Ordering::Relaxed);
        let name = format!("{}{id}", prefix.unwrap_or(&self.prefix));
        Symbol::new(&name).with_span(span)
    }

    /// Restart numbering so independent runs produce identical names.
    pub fn reset(&self) {
        self.next.store(1, Ordering::Relaxed);
    }

    /// Number of symbols issued since creation or the last reset.
    pub fn issued(&self) -> u64 {
        self.next.load(Ordering::Relaxed) - 1
    }
}
