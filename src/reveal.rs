//! One-way visibility watchers: fade-in reveal and lazy image loading.
//!
//! Both are decoupled from slide state. Each tracked element moves at most once
//! from hidden to shown (or from pending to loaded) and never back.

use std::collections::HashMap;
use std::hash::Hash;

use crate::constants::reveal;

/// Inline style applied to an element before and after it is revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealStyle {
    pub opacity: &'static str,
    pub transform: &'static str,
}

pub const HIDDEN_STYLE: RevealStyle = RevealStyle {
    opacity: reveal::HIDDEN_OPACITY,
    transform: reveal::HIDDEN_TRANSFORM,
};

pub const SHOWN_STYLE: RevealStyle = RevealStyle {
    opacity: reveal::SHOWN_OPACITY,
    transform: reveal::SHOWN_TRANSFORM,
};

/// Tracks which observed elements have been revealed.
///
/// When reports arrive is up to the observer (its threshold and root margin);
/// any intersecting report reveals.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker<K> {
    revealed: HashMap<K, bool>,
}

impl<K: Eq + Hash + Clone> RevealTracker<K> {
    pub fn new() -> Self {
        Self {
            revealed: HashMap::new(),
        }
    }

    /// Start watching `key`; returns the style to apply right away.
    pub fn observe(&mut self, key: K) -> RevealStyle {
        let shown = *self.revealed.entry(key).or_insert(false);
        if shown {
            SHOWN_STYLE
        } else {
            HIDDEN_STYLE
        }
    }

    /// Feed an intersection report.
    ///
    /// Returns the style to apply when this report reveals the element; `None`
    /// when it stays hidden, was already revealed, or is not observed.
    pub fn on_intersection(&mut self, key: &K, intersecting: bool) -> Option<RevealStyle> {
        let shown = self.revealed.get_mut(key)?;
        if *shown || !intersecting {
            return None;
        }
        *shown = true;
        Some(SHOWN_STYLE)
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.get(key).copied().unwrap_or(false)
    }

    pub fn pending(&self) -> usize {
        self.revealed.values().filter(|&&shown| !shown).count()
    }
}

/// Images waiting for their `data-src` to be swapped in.
#[derive(Clone, Debug, Default)]
pub struct LazyImages<K> {
    pending: HashMap<K, String>,
}

impl<K: Eq + Hash> LazyImages<K> {
    pub fn new() -> Self {
        Self {
            pending: HashMap::new(),
        }
    }

    pub fn observe(&mut self, key: K, data_src: impl Into<String>) {
        self.pending.insert(key, data_src.into());
    }

    /// Source to load when `key` first intersects; `None` afterwards.
    pub fn on_intersection(&mut self, key: &K, intersecting: bool) -> Option<String> {
        if !intersecting {
            return None;
        }
        self.pending.remove(key)
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_is_monotonic() {
        let mut tracker = RevealTracker::new();
        assert_eq!(tracker.observe("card"), HIDDEN_STYLE);

        assert_eq!(tracker.on_intersection(&"card", false), None, "not in view yet");
        assert_eq!(tracker.on_intersection(&"card", true), Some(SHOWN_STYLE));
        assert!(tracker.is_revealed(&"card"));

        assert_eq!(tracker.on_intersection(&"card", false), None, "no un-reveal");
        assert_eq!(tracker.on_intersection(&"card", true), None, "revealed once");
        assert!(tracker.is_revealed(&"card"));
        assert_eq!(tracker.observe("card"), SHOWN_STYLE);
    }

    #[test]
    fn first_intersecting_report_reveals_barely_visible_element() {
        // A very tall element never gets past a small visible fraction; the
        // observer reports it once and that report must be enough.
        let mut tracker = RevealTracker::new();
        tracker.observe(0usize);
        assert_eq!(tracker.on_intersection(&0, true), Some(SHOWN_STYLE));
        assert!(tracker.is_revealed(&0));
        assert_eq!(tracker.pending(), 0);
    }

    #[test]
    fn unobserved_elements_are_ignored() {
        let mut tracker: RevealTracker<u32> = RevealTracker::new();
        assert_eq!(tracker.on_intersection(&7, true), None);
        assert_eq!(tracker.pending(), 0);
    }

    #[test]
    fn lazy_image_loads_once() {
        let mut images = LazyImages::new();
        images.observe(1, "team/anna.jpg");
        assert_eq!(images.on_intersection(&1, false), None);
        assert_eq!(images.on_intersection(&1, true).as_deref(), Some("team/anna.jpg"));
        assert_eq!(images.on_intersection(&1, true), None);
        assert_eq!(images.pending(), 0);
    }
}
