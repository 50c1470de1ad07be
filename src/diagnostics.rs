//! Filterable diagnostic logging
//!
//! Categories: NAV, VIEWPORT, FLIP, REVEAL, ERROR
//! Enable via: ?deckdebug=all or localStorage.setItem('slidedeck.debug','nav,flip')
//! Native: --debug nav,flip or DECK_DEBUG=all
//!
//! Nothing here is global: each deck owns its [`Diagnostics`], switched on by the
//! explicit `diagnostics_enabled` config flag.

use crate::viewport::ViewportMode;

pub mod cat {
    pub const NAV: u32 = 1 << 0;
    pub const VIEWPORT: u32 = 1 << 1;
    pub const FLIP: u32 = 1 << 2;
    pub const REVEAL: u32 = 1 << 3;
    pub const ERROR: u32 = 1 << 4;
    pub const ALL: u32 = 0xffff_ffff;
}

#[inline]
pub fn cat_name(cat: u32) -> &'static str {
    match cat {
        c if c == cat::NAV => "nav",
        c if c == cat::VIEWPORT => "viewport",
        c if c == cat::FLIP => "flip",
        c if c == cat::REVEAL => "reveal",
        c if c == cat::ERROR => "error",
        _ => "misc",
    }
}

/// Parse a category list such as `"nav, flip"`, `"all"` or `"none"`.
///
/// Unknown tokens are ignored; `none` resets everything before it.
pub fn parse_list(list: &str) -> u32 {
    let mut m: u32 = 0;
    for tok in list.split(',').map(|s| s.trim().to_ascii_lowercase()) {
        match tok.as_str() {
            "none" => m = 0,
            "all" => m = cat::ALL,
            "nav" => m |= cat::NAV,
            "viewport" => m |= cat::VIEWPORT,
            "flip" => m |= cat::FLIP,
            "reveal" => m |= cat::REVEAL,
            "error" => m |= cat::ERROR,
            _ => {}
        }
    }
    m
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    enabled: bool,
    mask: u32,
}

impl Diagnostics {
    /// Enabled diagnostics with an empty list default to every category.
    pub fn new(enabled: bool, categories: &str) -> Self {
        let mask = if !enabled {
            0
        } else if categories.trim().is_empty() {
            cat::ALL
        } else {
            parse_list(categories)
        };
        Self { enabled, mask }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn mask(&self) -> u32 {
        self.mask
    }

    #[inline]
    pub fn is(&self, cat: u32) -> bool {
        self.enabled && (self.mask & cat) != 0
    }

    /// Merge additional categories (URL query, localStorage).
    pub fn enable_list(&mut self, list: &str) {
        self.enabled = true;
        self.mask |= parse_list(list);
    }

    #[inline]
    pub fn log(&self, cat: u32, msg: impl AsRef<str>) {
        if !self.is(cat) {
            return;
        }
        log::debug!("[deck][{}] {}", cat_name(cat), msg.as_ref());
    }
}

/// Startup summary printed when diagnostics are on.
pub fn debug_banner(total: usize, current: usize, mode: ViewportMode, width: u32) -> String {
    const INNER: usize = 39;
    let row = |text: String| format!("║ {text:<width$}║", width = INNER - 1);
    let title = format!("{:^width$}", "Slide Deck - Debug Info", width = INNER);
    [
        format!("╔{}╗", "═".repeat(INNER)),
        format!("║{title}║"),
        format!("╠{}╣", "═".repeat(INNER)),
        row(format!("Total Slides: {total}")),
        row(format!("Current Slide: {current}")),
        row(format!("Device Mode: {mode}")),
        row(format!("Window Width: {width}px")),
        format!("╚{}╝", "═".repeat(INNER)),
    ]
    .join("\n")
}
