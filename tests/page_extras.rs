//! Page chrome helpers work on their own: none of them needs a deck, so a page
//! whose slider markup is broken still loads images, reveals content, and
//! updates the footer.

use slidedeck::deck::DeckParts;
use slidedeck::page::{anchor_target, footer_text};
use slidedeck::reveal::{LazyImages, RevealTracker, SHOWN_STYLE};
use slidedeck::surface::{MemorySurface, ScrollBehavior, Surfaces};
use slidedeck::{Deck, DeckConfig};

fn broken_deck() -> anyhow::Result<Deck> {
    // one extra header item
    Deck::new(
        &DeckConfig::default(),
        DeckParts {
            total_slides: 5,
            width: 1280,
            surfaces: Surfaces {
                panels: Box::new(MemorySurface::new(5)),
                tabs: Box::new(MemorySurface::new(5)),
                header: Box::new(MemorySurface::new(6)),
            },
            scroller: Box::new(|_: ScrollBehavior| {}),
            cards: Vec::new(),
        },
    )
}

#[test]
fn extras_run_when_deck_fails_to_build() {
    assert!(broken_deck().is_err());

    let mut reveals = RevealTracker::new();
    reveals.observe(0usize);
    assert_eq!(reveals.on_intersection(&0, true), Some(SHOWN_STYLE));

    let mut images = LazyImages::new();
    images.observe(0usize, "team/vera.jpg");
    assert_eq!(
        images.on_intersection(&0, true).as_deref(),
        Some("team/vera.jpg")
    );

    assert_eq!(anchor_target("#contact"), Some("contact"));
    assert_eq!(
        footer_text(2026, "Smart Care"),
        "© 2026 Smart Care. All rights reserved."
    );
}
