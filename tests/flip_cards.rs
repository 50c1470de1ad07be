//! Flip card behavior through the deck: tap on mobile, hover on desktop,
//! and links that never toggle the card.

use slidedeck::{Deck, DeckAction, DeckConfig, DeckSnapshot, FlipBinding, PointerKind, TapTarget};

fn deck_at(width: u32, cards: usize) -> Deck {
    Deck::headless(&DeckConfig::default(), width, cards).unwrap()
}

#[test]
fn mobile_tap_front_link_back() {
    let mut deck = deck_at(800, 2);
    assert_eq!(deck.cards().binding(0), Some(FlipBinding::Tap));

    let out = deck.card_tap(0, TapTarget::Front).unwrap();
    assert!(out.flipped);

    let out = deck.card_tap(0, TapTarget::Link).unwrap();
    assert!(out.flipped, "tapping a link keeps the card flipped");
    assert!(!out.toggle_invoked, "flip handler must not run for links");
    assert!(out.propagation_stopped);

    let out = deck.card_tap(0, TapTarget::Back).unwrap();
    assert!(!out.flipped);
}

#[test]
fn desktop_hover_without_clicks() {
    let mut deck = deck_at(1200, 1);
    assert_eq!(deck.cards().binding(0), Some(FlipBinding::Hover));

    assert!(deck.card_pointer(0, PointerKind::Enter).unwrap().flipped);
    assert!(!deck.card_pointer(0, PointerKind::Leave).unwrap().flipped);
}

#[test]
fn binding_is_fixed_at_startup() {
    let mut deck = deck_at(1200, 1);
    deck.on_resize(600);

    // still hover-bound: taps do nothing, hover still flips
    assert!(!deck.card_tap(0, TapTarget::Front).unwrap().flipped);
    assert!(deck.card_pointer(0, PointerKind::Enter).unwrap().flipped);
}

#[test]
fn explicit_rebind_through_actions() {
    let mut deck = deck_at(1200, 1);
    deck.apply(DeckAction::Resize { width: 600 });
    deck.apply(DeckAction::Rebind);
    deck.apply(DeckAction::CardTap {
        card: 0,
        target: TapTarget::Front,
    });

    let snap = DeckSnapshot::from_deck(&deck);
    assert_eq!(snap.cards, vec![true]);
    assert_eq!(snap.width, 600);
}

#[test]
fn cards_do_not_touch_slide_state() {
    let mut deck = deck_at(800, 1);
    deck.apply(DeckAction::GoToSlide { index: 2 });
    deck.card_tap(0, TapTarget::Front);
    deck.card_tap(0, TapTarget::Back);

    let snap = DeckSnapshot::from_deck(&deck);
    assert_eq!(snap.current, 2);
    assert_eq!(snap.panels, vec![false, false, true, false, false]);
}
