//! Slide selection store - the single source of truth for the active slide.

use anyhow::{ensure, Result};

/// Holds the active slide index out of a fixed slide count.
///
/// Out-of-range requests clamp to the nearest valid index; they never wrap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideSelectionStore {
    total: usize,
    current: usize,
}

impl SlideSelectionStore {
    /// Create a store with `total` slides, starting on slide 0.
    pub fn new(total: usize) -> Result<Self> {
        ensure!(total > 0, "slide deck needs at least one slide");
        Ok(Self { total, current: 0 })
    }

    /// Request a new active index and return the resulting (clamped) index.
    pub fn set_index(&mut self, requested: i64) -> usize {
        self.current = clamp_index(requested, self.total);
        self.current
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }
}

/// Clamp a signed request into `[0, total)`. `total` must be non-zero.
#[inline]
fn clamp_index(requested: i64, total: usize) -> usize {
    if requested < 0 {
        return 0;
    }
    let last = total - 1;
    usize::try_from(requested).map_or(last, |i| i.min(last))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_slide() {
        let store = SlideSelectionStore::new(5).unwrap();
        assert_eq!(store.current(), 0);
        assert_eq!(store.total(), 5);
    }

    #[test]
    fn empty_deck_is_rejected() {
        assert!(SlideSelectionStore::new(0).is_err());
    }

    #[test]
    fn negative_request_clamps_to_floor() {
        let mut store = SlideSelectionStore::new(5).unwrap();
        store.set_index(3);
        assert_eq!(store.set_index(-1), 0);
        assert_eq!(store.set_index(i64::MIN), 0);
    }

    #[test]
    fn oversized_request_clamps_to_ceiling() {
        let mut store = SlideSelectionStore::new(5).unwrap();
        assert_eq!(store.set_index(5), 4);
        assert_eq!(store.set_index(i64::MAX), 4);
    }

    #[test]
    fn every_request_lands_in_range() {
        for total in 1..=7usize {
            let mut store = SlideSelectionStore::new(total).unwrap();
            for requested in -20i64..=20 {
                let expected = requested.clamp(0, total as i64 - 1) as usize;
                assert_eq!(
                    store.set_index(requested),
                    expected,
                    "total={total} requested={requested}"
                );
                assert_eq!(store.current(), expected);
            }
        }
    }

    #[test]
    fn single_slide_deck_stays_put() {
        let mut store = SlideSelectionStore::new(1).unwrap();
        assert_eq!(store.set_index(1), 0);
        assert_eq!(store.set_index(-1), 0);
    }
}
