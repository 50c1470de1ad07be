//! Flip cards: hover-driven on desktop, tap-driven on mobile.
//!
//! The binding for each card is chosen from the viewport mode when the
//! controller is set up and stays fixed across resizes unless [`rebind`] is
//! called. Taps on an embedded action link never toggle the card; they stop
//! propagation so the card's own handlers don't see them, and the link's
//! default navigation proceeds.
//!
//! [`rebind`]: FlipCardController::rebind

use serde::{Deserialize, Serialize};

use crate::viewport::ViewportMode;

/// Interaction style attached to a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipBinding {
    /// Tap front to flip, tap back to flip back (mobile).
    Tap,
    /// Pointer-enter flips, pointer-leave flips back (desktop).
    Hover,
}

impl FlipBinding {
    pub fn for_mode(mode: ViewportMode) -> Self {
        match mode {
            ViewportMode::Desktop => FlipBinding::Hover,
            ViewportMode::Mobile => FlipBinding::Tap,
        }
    }
}

/// Where inside a card a tap landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TapTarget {
    Front,
    Back,
    /// An embedded action link (on the back face).
    Link,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerKind {
    Enter,
    Leave,
}

/// Result of dispatching one event to a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardDispatch {
    /// Flipped state after the event.
    pub flipped: bool,
    /// A flip handler ran (even if the state was already what it set).
    pub toggle_invoked: bool,
    /// The event must not bubble further (to the card or page).
    pub propagation_stopped: bool,
}

/// Renders a card's flipped state (e.g. toggles a `flipped` class).
pub trait CardView {
    fn set_flipped(&mut self, flipped: bool);
}

impl<F: FnMut(bool)> CardView for F {
    fn set_flipped(&mut self, flipped: bool) {
        self(flipped)
    }
}

struct Card {
    binding: FlipBinding,
    flipped: bool,
    view: Box<dyn CardView>,
}

impl Card {
    fn set(&mut self, flipped: bool) {
        self.flipped = flipped;
        self.view.set_flipped(flipped);
    }

    fn dispatch(&self, toggle_invoked: bool, propagation_stopped: bool) -> CardDispatch {
        CardDispatch {
            flipped: self.flipped,
            toggle_invoked,
            propagation_stopped,
        }
    }
}

pub struct FlipCardController {
    cards: Vec<Card>,
}

impl FlipCardController {
    /// Bind every card for `mode`.
    pub fn setup(mode: ViewportMode, views: Vec<Box<dyn CardView>>) -> Self {
        let binding = FlipBinding::for_mode(mode);
        let cards = views
            .into_iter()
            .map(|view| Card {
                binding,
                flipped: false,
                view,
            })
            .collect::<Vec<_>>();
        log::debug!("flip: {} card(s) bound for {:?}", cards.len(), binding);
        Self { cards }
    }

    /// `count` cards whose state is only tracked here.
    pub fn headless(mode: ViewportMode, count: usize) -> Self {
        let views = (0..count)
            .map(|_| Box::new(|_: bool| {}) as Box<dyn CardView>)
            .collect();
        Self::setup(mode, views)
    }

    /// Re-select the binding of every card for `mode`.
    ///
    /// Flipped state is left as is. Returns `true` if any binding changed.
    pub fn rebind(&mut self, mode: ViewportMode) -> bool {
        let binding = FlipBinding::for_mode(mode);
        let mut changed = false;
        for card in &mut self.cards {
            if card.binding != binding {
                card.binding = binding;
                changed = true;
            }
        }
        if changed {
            log::debug!("flip: rebound {} card(s) for {:?}", self.cards.len(), binding);
        }
        changed
    }

    /// Dispatch a tap/click on `card`. `None` if there is no such card.
    pub fn tap(&mut self, card: usize, target: TapTarget) -> Option<CardDispatch> {
        let card = self.cards.get_mut(card)?;
        let out = match (card.binding, target) {
            (_, TapTarget::Link) => card.dispatch(false, true),
            (FlipBinding::Tap, TapTarget::Front) => {
                card.set(true);
                card.dispatch(true, true)
            }
            (FlipBinding::Tap, TapTarget::Back) => {
                card.set(false);
                card.dispatch(true, true)
            }
            (FlipBinding::Hover, _) => card.dispatch(false, false),
        };
        Some(out)
    }

    /// Dispatch a pointer-enter/leave on `card`. `None` if there is no such card.
    pub fn pointer(&mut self, card: usize, kind: PointerKind) -> Option<CardDispatch> {
        let card = self.cards.get_mut(card)?;
        let out = match card.binding {
            FlipBinding::Hover => {
                card.set(kind == PointerKind::Enter);
                card.dispatch(true, false)
            }
            FlipBinding::Tap => card.dispatch(false, false),
        };
        Some(out)
    }

    pub fn is_flipped(&self, card: usize) -> Option<bool> {
        self.cards.get(card).map(|c| c.flipped)
    }

    pub fn binding(&self, card: usize) -> Option<FlipBinding> {
        self.cards.get(card).map(|c| c.binding)
    }

    pub fn flipped_flags(&self) -> Vec<bool> {
        self.cards.iter().map(|c| c.flipped).collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn mobile_tap_sequence() {
        let mut cards = FlipCardController::headless(ViewportMode::Mobile, 2);

        let front = cards.tap(0, TapTarget::Front).unwrap();
        assert!(front.flipped && front.toggle_invoked && front.propagation_stopped);

        let link = cards.tap(0, TapTarget::Link).unwrap();
        assert!(link.flipped, "link tap must not flip back");
        assert!(!link.toggle_invoked);
        assert!(link.propagation_stopped);

        let back = cards.tap(0, TapTarget::Back).unwrap();
        assert!(!back.flipped);
        assert!(back.toggle_invoked);

        assert_eq!(cards.is_flipped(1), Some(false), "cards are independent");
    }

    #[test]
    fn mobile_ignores_hover() {
        let mut cards = FlipCardController::headless(ViewportMode::Mobile, 1);
        let out = cards.pointer(0, PointerKind::Enter).unwrap();
        assert!(!out.flipped);
        assert!(!out.toggle_invoked);
    }

    #[test]
    fn desktop_hover_sequence() {
        let mut cards = FlipCardController::headless(ViewportMode::Desktop, 1);
        assert!(cards.pointer(0, PointerKind::Enter).unwrap().flipped);
        assert!(!cards.pointer(0, PointerKind::Leave).unwrap().flipped);
    }

    #[test]
    fn desktop_taps_do_not_flip_but_links_stop_propagation() {
        let mut cards = FlipCardController::headless(ViewportMode::Desktop, 1);
        let front = cards.tap(0, TapTarget::Front).unwrap();
        assert!(!front.flipped && !front.toggle_invoked && !front.propagation_stopped);

        let link = cards.tap(0, TapTarget::Link).unwrap();
        assert!(link.propagation_stopped);
        assert!(!link.toggle_invoked);
    }

    #[test]
    fn rebind_switches_interaction_style() {
        let mut cards = FlipCardController::headless(ViewportMode::Mobile, 3);
        cards.tap(1, TapTarget::Front);

        assert!(cards.rebind(ViewportMode::Desktop));
        assert!(!cards.rebind(ViewportMode::Desktop), "second rebind is a no-op");
        assert_eq!(cards.binding(0), Some(FlipBinding::Hover));
        assert_eq!(cards.is_flipped(1), Some(true), "state survives rebinding");

        assert!(cards.pointer(0, PointerKind::Enter).unwrap().flipped);
    }

    #[test]
    fn view_receives_state() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let view: Box<dyn CardView> = Box::new(move |flipped: bool| sink.borrow_mut().push(flipped));
        let mut cards = FlipCardController::setup(ViewportMode::Desktop, vec![view]);

        cards.pointer(0, PointerKind::Enter);
        cards.pointer(0, PointerKind::Leave);
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn unknown_card_is_none() {
        let mut cards = FlipCardController::headless(ViewportMode::Mobile, 1);
        assert!(cards.tap(5, TapTarget::Front).is_none());
        assert!(cards.pointer(5, PointerKind::Enter).is_none());
    }
}
