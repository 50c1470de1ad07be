//! The deck: one page controller instance.
//!
//! Owns the selection store (through the navigation binder), the viewport
//! classifier, and the flip cards. Front ends build one `Deck` per page and
//! route UI events into it; nothing lives at process scope, so several decks
//! can coexist (and tests build as many as they like).

use anyhow::{Context, Result};

use crate::config::DeckConfig;
use crate::diagnostics::{self, cat, Diagnostics};
use crate::flags::UiFlags;
use crate::flip::{CardDispatch, CardView, FlipCardController, PointerKind, TapTarget};
use crate::navigation::{NavigationBinder, SlideNavigator};
use crate::snapshot::DeckAction;
use crate::store::SlideSelectionStore;
use crate::surface::{ScrollBehavior, Scroller, SurfaceSynchronizer, Surfaces};
use crate::viewport::{ViewportClassifier, ViewportMode};

/// Everything a front end hands over when building a deck.
pub struct DeckParts {
    pub total_slides: usize,
    /// Viewport width at startup.
    pub width: u32,
    pub surfaces: Surfaces,
    pub scroller: Box<dyn Scroller>,
    pub cards: Vec<Box<dyn CardView>>,
}

pub struct Deck {
    nav: NavigationBinder,
    viewport: ViewportClassifier,
    cards: FlipCardController,
    flags: UiFlags,
    diagnostics: Diagnostics,
}

impl Deck {
    /// Validate the parts, bind cards for the startup viewport, and show slide 0.
    pub fn new(cfg: &DeckConfig, parts: DeckParts) -> Result<Self> {
        let DeckParts {
            total_slides,
            width,
            surfaces,
            scroller,
            cards,
        } = parts;

        let store = SlideSelectionStore::new(total_slides).context("building slide store")?;
        let behavior = if cfg.flags.smooth_scroll {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Instant
        };
        let sync = SurfaceSynchronizer::new(total_slides, surfaces, scroller, behavior)
            .context("page markup does not match the slide count")?;

        let viewport = ViewportClassifier::new(cfg.breakpoint_px, width);
        let cards = FlipCardController::setup(viewport.mode(), cards);
        let diagnostics = Diagnostics::new(cfg.diagnostics_enabled, &cfg.debug_categories);

        let mut deck = Self {
            nav: NavigationBinder::new(store, sync),
            viewport,
            cards,
            flags: cfg.flags,
            diagnostics,
        };
        deck.nav.go_to_slide(0);

        if deck.diagnostics.enabled() {
            log::info!(
                "\n{}",
                diagnostics::debug_banner(
                    deck.total_slides(),
                    deck.current_slide(),
                    deck.viewport.mode(),
                    deck.viewport.width()
                )
            );
        }
        Ok(deck)
    }

    /// Deck over in-memory surfaces with `cfg.total_slides` slides.
    pub fn headless(cfg: &DeckConfig, width: u32, card_count: usize) -> Result<Self> {
        let cards = (0..card_count)
            .map(|_| Box::new(|_: bool| {}) as Box<dyn CardView>)
            .collect();
        Self::new(
            cfg,
            DeckParts {
                total_slides: cfg.total_slides,
                width,
                surfaces: Surfaces::in_memory(cfg.total_slides),
                scroller: Box::new(|_: ScrollBehavior| {}),
                cards,
            },
        )
    }

    pub fn is_desktop_mode(&self) -> bool {
        self.viewport.is_desktop()
    }

    pub fn mode(&self) -> ViewportMode {
        self.viewport.mode()
    }

    /// Recompute the viewport mode; returns `true` if it changed.
    ///
    /// Flip cards keep their startup binding unless `live_rebind` is set.
    pub fn on_resize(&mut self, width: u32) -> bool {
        let changed = self.viewport.on_resize(width);
        if changed {
            self.diagnostics.log(
                cat::VIEWPORT,
                format!("width {width}px -> {}", self.viewport.mode()),
            );
            if self.flags.live_rebind {
                self.rebind();
            }
        }
        changed
    }

    /// Rebind every flip card for the current viewport mode.
    pub fn rebind(&mut self) -> bool {
        let changed = self.cards.rebind(self.viewport.mode());
        if changed {
            self.diagnostics
                .log(cat::FLIP, format!("cards rebound for {}", self.viewport.mode()));
        }
        changed
    }

    pub fn card_tap(&mut self, card: usize, target: TapTarget) -> Option<CardDispatch> {
        let out = self.cards.tap(card, target);
        self.diagnostics
            .log(cat::FLIP, format!("tap card {card} {target:?} -> {out:?}"));
        out
    }

    pub fn card_pointer(&mut self, card: usize, kind: PointerKind) -> Option<CardDispatch> {
        let out = self.cards.pointer(card, kind);
        self.diagnostics
            .log(cat::FLIP, format!("pointer card {card} {kind:?} -> {out:?}"));
        out
    }

    /// Apply one bridged action.
    pub fn apply(&mut self, action: DeckAction) {
        match action {
            DeckAction::GoToSlide { index } => {
                self.go_to_slide(index);
            }
            DeckAction::NextSlide => {
                self.next_slide();
            }
            DeckAction::PreviousSlide => {
                self.previous_slide();
            }
            DeckAction::Resize { width } => {
                self.on_resize(width);
            }
            DeckAction::CardPointer { card, kind } => {
                self.card_pointer(card, kind);
            }
            DeckAction::CardTap { card, target } => {
                self.card_tap(card, target);
            }
            DeckAction::Rebind => {
                self.rebind();
            }
        }
    }

    pub fn synchronizer(&self) -> &SurfaceSynchronizer {
        self.nav.synchronizer()
    }

    pub fn viewport(&self) -> &ViewportClassifier {
        &self.viewport
    }

    pub fn cards(&self) -> &FlipCardController {
        &self.cards
    }

    pub fn flags(&self) -> UiFlags {
        self.flags
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }
}

impl SlideNavigator for Deck {
    fn go_to_slide(&mut self, index: i64) -> usize {
        let current = self.nav.go_to_slide(index);
        self.diagnostics
            .log(cat::NAV, format!("goToSlide({index}) -> {current}"));
        current
    }

    fn current_slide(&self) -> usize {
        self.nav.current_slide()
    }

    fn total_slides(&self) -> usize {
        self.nav.total_slides()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::SurfaceKind;

    #[test]
    fn starts_on_first_slide_with_surfaces_synced() {
        let deck = Deck::headless(&DeckConfig::default(), 1280, 0).unwrap();
        assert_eq!(deck.current_slide(), 0);
        for kind in SurfaceKind::ALL {
            assert_eq!(deck.synchronizer().active_position(kind), Some(0));
        }
    }

    #[test]
    fn resize_keeps_card_binding_by_default() {
        let mut deck = Deck::headless(&DeckConfig::default(), 800, 1).unwrap();
        assert!(deck.on_resize(1280));
        assert!(deck.is_desktop_mode());

        // still tap-bound from startup
        let out = deck.card_pointer(0, PointerKind::Enter).unwrap();
        assert!(!out.flipped);

        assert!(deck.rebind());
        assert!(deck.card_pointer(0, PointerKind::Enter).unwrap().flipped);
    }

    #[test]
    fn live_rebind_follows_resizes() {
        let mut cfg = DeckConfig::default();
        cfg.flags.live_rebind = true;
        let mut deck = Deck::headless(&cfg, 1280, 1).unwrap();

        deck.on_resize(600);
        assert!(deck.card_tap(0, TapTarget::Front).unwrap().flipped);
    }
}
