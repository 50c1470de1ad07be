//! Slide navigation: go-to / next / previous, and click binding.
//!
//! Navigation is driven only by explicit activation of header items and tab
//! buttons (plus direct calls such as arrow controls). There are no keyboard,
//! swipe, or wheel bindings.

use std::cell::RefCell;
use std::rc::Rc;

use crate::store::SlideSelectionStore;
use crate::surface::SurfaceSynchronizer;

/// Callback fired when an element is activated (clicked, tapped).
pub type Listener = Box<dyn FnMut()>;

/// Any UI layer that can report activation of positional elements.
///
/// The DOM binds `click` listeners; the terminal preview hit-tests mouse
/// clicks; tests fire positions directly.
pub trait ActivationSource {
    /// Register `listener` for the element at `position`.
    fn subscribe(&mut self, position: usize, listener: Listener);

    /// Number of elements this source covers.
    fn element_count(&self) -> usize;
}

/// Positional listener registry, usable as an [`ActivationSource`].
#[derive(Default)]
pub struct ListenerTable {
    slots: Vec<Vec<Listener>>,
}

impl ListenerTable {
    pub fn new(count: usize) -> Self {
        Self {
            slots: (0..count).map(|_| Vec::new()).collect(),
        }
    }

    /// Run every listener registered at `position`.
    ///
    /// Returns `false` when nothing is registered there.
    pub fn fire(&mut self, position: usize) -> bool {
        match self.slots.get_mut(position) {
            Some(listeners) if !listeners.is_empty() => {
                for listener in listeners.iter_mut() {
                    listener();
                }
                true
            }
            _ => false,
        }
    }
}

impl ActivationSource for ListenerTable {
    fn subscribe(&mut self, position: usize, listener: Listener) {
        if let Some(slot) = self.slots.get_mut(position) {
            slot.push(listener);
        }
    }

    fn element_count(&self) -> usize {
        self.slots.len()
    }
}

/// The public navigation operations.
pub trait SlideNavigator {
    /// Jump to `index` (clamped) and reconcile every surface.
    fn go_to_slide(&mut self, index: i64) -> usize;

    fn current_slide(&self) -> usize;

    fn total_slides(&self) -> usize;

    fn next_slide(&mut self) -> usize {
        let next = self.current_slide() as i64 + 1;
        self.go_to_slide(next)
    }

    fn previous_slide(&mut self) -> usize {
        let prev = self.current_slide() as i64 - 1;
        self.go_to_slide(prev)
    }
}

/// Store + synchronizer, sequenced: the clamped index is committed before
/// any surface is touched.
pub struct NavigationBinder {
    store: SlideSelectionStore,
    sync: SurfaceSynchronizer,
}

impl NavigationBinder {
    pub fn new(store: SlideSelectionStore, sync: SurfaceSynchronizer) -> Self {
        Self { store, sync }
    }

    pub fn synchronizer(&self) -> &SurfaceSynchronizer {
        &self.sync
    }
}

impl SlideNavigator for NavigationBinder {
    fn go_to_slide(&mut self, index: i64) -> usize {
        let current = self.store.set_index(index);
        self.sync.reconcile(current);
        log::debug!("slide -> {current} (requested {index})");
        current
    }

    fn current_slide(&self) -> usize {
        self.store.current()
    }

    fn total_slides(&self) -> usize {
        self.store.total()
    }
}

/// Subscribe one listener per header item and per tab button.
///
/// Each listener navigates to the position it was bound at; positions are not
/// recomputed later.
pub fn bind<'a, N>(nav: &Rc<RefCell<N>>, header: &'a mut dyn ActivationSource, tabs: &'a mut dyn ActivationSource)
where
    N: SlideNavigator + 'static,
{
    for source in [header, tabs] {
        for position in 0..source.element_count() {
            let nav = Rc::clone(nav);
            source.subscribe(
                position,
                Box::new(move || match nav.try_borrow_mut() {
                    Ok(mut nav) => {
                        nav.go_to_slide(position as i64);
                    }
                    Err(_) => log::warn!("navigation to {position} dropped: deck busy"),
                }),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{ScrollBehavior, SurfaceKind, Surfaces};

    fn binder(total: usize) -> NavigationBinder {
        let store = SlideSelectionStore::new(total).unwrap();
        let sync = SurfaceSynchronizer::new(
            total,
            Surfaces::in_memory(total),
            Box::new(|_: ScrollBehavior| {}),
            ScrollBehavior::Smooth,
        )
        .unwrap();
        NavigationBinder::new(store, sync)
    }

    #[test]
    fn previous_at_first_slide_stays() {
        let mut nav = binder(5);
        nav.go_to_slide(0);
        assert_eq!(nav.previous_slide(), 0);
        assert_eq!(nav.current_slide(), 0);
    }

    #[test]
    fn next_at_last_slide_stays() {
        let mut nav = binder(5);
        nav.go_to_slide(4);
        assert_eq!(nav.next_slide(), 4);
    }

    #[test]
    fn out_of_range_jump_still_reconciles() {
        let mut nav = binder(5);
        nav.go_to_slide(2);
        nav.go_to_slide(99);
        for kind in SurfaceKind::ALL {
            assert_eq!(nav.synchronizer().active_position(kind), Some(4));
        }
    }

    #[test]
    fn bound_clicks_navigate_to_their_position() {
        let nav = Rc::new(RefCell::new(binder(5)));
        let mut header = ListenerTable::new(5);
        let mut tabs = ListenerTable::new(5);
        bind(&nav, &mut header, &mut tabs);

        assert!(header.fire(3));
        assert_eq!(nav.borrow().current_slide(), 3);

        assert!(tabs.fire(1));
        assert_eq!(nav.borrow().current_slide(), 1);
        assert_eq!(
            nav.borrow().synchronizer().active_position(SurfaceKind::Header),
            Some(1)
        );

        assert!(!tabs.fire(9));
    }
}
