//! Deck snapshot and action types for JSON bridges
//!
//! This module is the boundary between the headless deck and anything that
//! talks to it through JSON: the wasm façade and the native script replay.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::deck::Deck;
use crate::flip::{PointerKind, TapTarget};
use crate::navigation::SlideNavigator;
use crate::surface::SurfaceKind;
use crate::viewport::ViewportMode;

/// Snapshot of deck state (one-way data flow: Rust → UI)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckSnapshot {
    pub current: usize,
    pub total: usize,
    pub mode: ViewportMode,
    pub width: u32,

    /// Active flag per slide panel
    pub panels: Vec<bool>,
    /// Active flag per tab button (mobile)
    pub tabs: Vec<bool>,
    /// Active flag per header nav item (desktop)
    pub header: Vec<bool>,

    /// Flipped flag per card
    pub cards: Vec<bool>,
}

impl DeckSnapshot {
    pub fn from_deck(deck: &Deck) -> Self {
        let sync = deck.synchronizer();
        DeckSnapshot {
            current: deck.current_slide(),
            total: deck.total_slides(),
            mode: deck.mode(),
            width: deck.viewport().width(),
            panels: sync.active_flags(SurfaceKind::Panels),
            tabs: sync.active_flags(SurfaceKind::Tabs),
            header: sync.active_flags(SurfaceKind::Header),
            cards: deck.cards().flipped_flags(),
        }
    }
}

/// Actions from the UI (data flow: UI → Rust)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DeckAction {
    // ----- Navigation -----
    /// Jump to a slide (clamped)
    GoToSlide { index: i64 },
    NextSlide,
    PreviousSlide,

    // ----- Viewport -----
    /// Viewport resized to `width` logical pixels
    Resize { width: u32 },

    // ----- Flip cards -----
    CardPointer { card: usize, kind: PointerKind },
    CardTap { card: usize, target: TapTarget },
    /// Rebind cards for the current viewport mode
    Rebind,
}

/// Replay newline-delimited JSON actions against `deck`.
///
/// Writes one snapshot line per applied action. Blank lines and `#` comments
/// are skipped; malformed actions are logged and skipped. Returns the number
/// of actions applied.
pub fn replay<R: BufRead, W: Write>(deck: &mut Deck, input: R, mut out: W) -> Result<usize> {
    let mut applied = 0;
    for (n, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("reading action line {}", n + 1))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match serde_json::from_str::<DeckAction>(line) {
            Ok(action) => {
                deck.apply(action);
                applied += 1;
                let snap = DeckSnapshot::from_deck(deck);
                serde_json::to_writer(&mut out, &snap)?;
                writeln!(out)?;
            }
            Err(e) => log::warn!("line {}: failed to deserialize DeckAction ({e}): {line:?}", n + 1),
        }
    }
    out.flush()?;
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeckConfig;

    #[test]
    fn actions_use_type_tag() {
        let action: DeckAction = serde_json::from_str(r#"{"type":"GoToSlide","index":-3}"#).unwrap();
        assert_eq!(action, DeckAction::GoToSlide { index: -3 });

        let action: DeckAction =
            serde_json::from_str(r#"{"type":"CardTap","card":1,"target":"Link"}"#).unwrap();
        assert_eq!(
            action,
            DeckAction::CardTap {
                card: 1,
                target: TapTarget::Link
            }
        );

        assert!(serde_json::from_str::<DeckAction>(r#"{"type":"Swipe"}"#).is_err());
    }

    #[test]
    fn replay_prints_one_snapshot_per_action() {
        let mut deck = Deck::headless(&DeckConfig::default(), 1280, 1).unwrap();
        let script = r#"
            # jump, then walk off the end
            {"type":"GoToSlide","index":3}
            {"type":"NextSlide"}
            {"type":"NextSlide"}
            not json
            {"type":"CardPointer","card":0,"kind":"Enter"}
        "#;
        let mut out = Vec::new();
        let applied = replay(&mut deck, script.as_bytes(), &mut out).unwrap();
        assert_eq!(applied, 4);

        let snaps: Vec<DeckSnapshot> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(snaps.len(), 4);
        assert_eq!(snaps[0].current, 3);
        assert_eq!(snaps[2].current, 4);
        assert_eq!(snaps[2].header, vec![false, false, false, false, true]);
        assert_eq!(snaps[3].cards, vec![true]);
    }
}
