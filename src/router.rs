//! Exact-path route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Isolates path → view resolution from the concrete routing library. The
//! shell in `crate::app` registers its screens here and only leans on
//! `leptos_router` for history integration, so the routing primitive stays
//! swappable and matching stays testable off-browser.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use std::fmt;

/// A registered route: a literal path pattern paired with the view it
/// renders.
///
/// The factory is a plain `fn` pointer, so entries are `Copy` and carry no
/// captured state regardless of the view type.
pub struct RouteEntry<V> {
    path: &'static str,
    view: fn() -> V,
}

impl<V> RouteEntry<V> {
    /// The literal path pattern this entry matches.
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Build this entry's view.
    pub fn view(&self) -> V {
        (self.view)()
    }
}

impl<V> Clone for RouteEntry<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for RouteEntry<V> {}

impl<V> fmt::Debug for RouteEntry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Ordered table of literal path → view mappings.
///
/// Built once at shell construction and never mutated afterwards. Matching
/// is exact-string dispatch: case-sensitive, no trailing-slash
/// normalization, no pattern syntax. Registration order is preserved and
/// the first matching entry wins, though the shell's paths are disjoint
/// literals so order never decides a match in practice.
pub struct RouteTable<V> {
    entries: Vec<RouteEntry<V>>,
}

impl<V> RouteTable<V> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a path → view mapping, builder style.
    ///
    /// The factory is stored, not invoked; no view is instantiated until
    /// its path actually matches.
    pub fn register(mut self, path: &'static str, view: fn() -> V) -> Self {
        self.entries.push(RouteEntry { path, view });
        self
    }

    /// Find the first entry whose pattern equals `path` exactly.
    pub fn resolve(&self, path: &str) -> Option<&RouteEntry<V>> {
        self.entries.iter().find(|entry| entry.path == path)
    }

    /// Resolve `path` and build the matched view, or `None` when no route
    /// is registered for it.
    pub fn current_view(&self, path: &str) -> Option<V> {
        self.resolve(path).map(RouteEntry::view)
    }

    /// Registered patterns in registration order.
    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.path)
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for RouteTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for RouteTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.paths()).finish()
    }
}
