//! UI flags tests - runtime toggles for page behaviors around the deck

use slidedeck::flags::UiFlags;
use slidedeck::{Deck, DeckConfig, PointerKind};

#[test]
fn default_flags_match_shipped_page() {
    let flags = UiFlags::default();

    assert!(flags.smooth_scroll, "smooth_scroll should be enabled by default");
    assert!(
        flags.reveal_animations,
        "reveal_animations should be enabled by default"
    );
    assert!(flags.lazy_images, "lazy_images should be enabled by default");

    // Cards keep their startup binding unless asked otherwise
    assert!(!flags.live_rebind, "live_rebind should be opt-in");
}

#[test]
fn all_disabled_disables_everything() {
    let flags = UiFlags::all_disabled();

    assert!(!flags.smooth_scroll);
    assert!(!flags.live_rebind);
    assert!(!flags.reveal_animations);
    assert!(!flags.lazy_images);
}

#[test]
fn all_enabled_turns_on_live_rebind() {
    let flags = UiFlags::all_enabled();
    assert!(flags.live_rebind);
    assert!(flags.smooth_scroll);
}

#[test]
fn flags_are_copyable() {
    let flags1 = UiFlags::default();
    let flags2 = flags1; // Should be Copy

    assert_eq!(flags1, flags2);
}

#[test]
fn live_rebind_flag_drives_deck() {
    let cfg = DeckConfig {
        flags: UiFlags {
            live_rebind: true,
            ..UiFlags::default()
        },
        ..DeckConfig::default()
    };
    let mut deck = Deck::headless(&cfg, 700, 1).unwrap();

    deck.on_resize(1400);
    let out = deck.card_pointer(0, PointerKind::Enter).unwrap();
    assert!(out.flipped, "cards follow the new desktop mode");
}
