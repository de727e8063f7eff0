// --- File: crates/carebook_common/src/navigation.rs ---
//! Per-visitor history stack.
//!
//! Each entry may carry a typed payload. Payloads travel only through
//! history state, never through the URL, and belong to the entry they were
//! pushed with.

use std::fmt;

/// The pages the application knows about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Catalog,
    Booking,
    NotFound(String),
}

impl Route {
    pub fn path(&self) -> &str {
        match self {
            Route::Catalog => "/",
            Route::Booking => "/booking",
            Route::NotFound(path) => path,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Entries kept per navigator. Pushing beyond this drops the oldest one.
pub const MAX_HISTORY: usize = 50;

#[derive(Debug, Clone)]
pub struct HistoryEntry<P> {
    /// Unique per pushed entry, never reused within one navigator.
    pub key: u64,
    pub route: Route,
    pub payload: Option<P>,
}

#[derive(Debug, Clone)]
pub struct Navigator<P> {
    entries: Vec<HistoryEntry<P>>,
    index: usize,
    next_key: u64,
}

impl<P> Default for Navigator<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Navigator<P> {
    /// A fresh history that starts on the catalog.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry {
                key: 0,
                route: Route::Catalog,
                payload: None,
            }],
            index: 0,
            next_key: 1,
        }
    }

    pub fn current(&self) -> &HistoryEntry<P> {
        &self.entries[self.index]
    }

    pub fn payload(&self) -> Option<&P> {
        self.current().payload.as_ref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    /// Pushes a new entry and drops any forward history, then the oldest
    /// entries beyond [`MAX_HISTORY`].
    pub fn push(&mut self, route: Route, payload: Option<P>) -> &HistoryEntry<P> {
        self.entries.truncate(self.index + 1);
        self.entries.push(HistoryEntry {
            key: self.next_key,
            route,
            payload,
        });
        self.next_key += 1;
        if self.entries.len() > MAX_HISTORY {
            let excess = self.entries.len() - MAX_HISTORY;
            self.entries.drain(..excess);
        }
        self.index = self.entries.len() - 1;
        self.current()
    }

    /// Programmatic navigation without payload; a no-op when already on `route`.
    pub fn navigate(&mut self, route: Route) -> bool {
        if self.current().route == route {
            return false;
        }
        self.push(route, None);
        true
    }

    /// Address-bar navigation. Reloading the current route keeps its entry
    /// (and payload); any other route gets a fresh entry without payload.
    pub fn visit(&mut self, route: Route) -> bool {
        self.navigate(route)
    }

    /// Moves to the previous entry. Returns false when there is none.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.index -= 1;
        true
    }
}
