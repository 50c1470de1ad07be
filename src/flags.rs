//! UI Feature Toggles
//!
//! Opt-in/opt-out toggles for page behaviors that sit around the slide core.
//! Defaults reproduce the shipped page; each can be switched off if it causes
//! trouble on a particular host.

use serde::{Deserialize, Serialize};

/// UI feature flags for controlling page behaviors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiFlags {
    /// Smooth-scroll to the top after a slide change (instant when off).
    ///
    /// Default: `true`
    pub smooth_scroll: bool,

    /// Rebind flip cards whenever the viewport crosses the breakpoint.
    ///
    /// When disabled, the hover/tap binding chosen at startup is kept for the
    /// whole session and only an explicit `rebind()` changes it.
    ///
    /// Default: `false`
    pub live_rebind: bool,

    /// Fade content in as it scrolls into view.
    ///
    /// Default: `true`
    pub reveal_animations: bool,

    /// Swap `data-src` into `src` when images scroll into view.
    ///
    /// Default: `true`
    pub lazy_images: bool,
}

impl Default for UiFlags {
    fn default() -> Self {
        UiFlags {
            smooth_scroll: true,
            live_rebind: false,
            reveal_animations: true,
            lazy_images: true,
        }
    }
}

impl UiFlags {
    /// Create flags with all features enabled (for testing new behaviors)
    pub fn all_enabled() -> Self {
        UiFlags {
            smooth_scroll: true,
            live_rebind: true,
            reveal_animations: true,
            lazy_images: true,
        }
    }

    /// Create flags with all features disabled (for maximum stability)
    pub fn all_disabled() -> Self {
        UiFlags {
            smooth_scroll: false,
            live_rebind: false,
            reveal_animations: false,
            lazy_images: false,
        }
    }
}
