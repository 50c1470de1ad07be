//! Viewport classification (desktop vs mobile) from a single width breakpoint.

use serde::{Deserialize, Serialize};

use crate::constants::viewport::DESKTOP_BREAKPOINT_PX;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewportMode {
    Desktop,
    Mobile,
}

impl ViewportMode {
    pub fn is_desktop(self) -> bool {
        self == ViewportMode::Desktop
    }
}

impl std::fmt::Display for ViewportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewportMode::Desktop => write!(f, "Desktop"),
            ViewportMode::Mobile => write!(f, "Mobile"),
        }
    }
}

/// Tracks the current viewport mode.
///
/// Every resize recomputes the mode independently; there is no debounce or
/// hysteresis around the breakpoint.
#[derive(Clone, Debug)]
pub struct ViewportClassifier {
    breakpoint: u32,
    width: u32,
    mode: ViewportMode,
}

impl ViewportClassifier {
    pub fn new(breakpoint: u32, width: u32) -> Self {
        Self {
            breakpoint,
            width,
            mode: classify_with(breakpoint, width),
        }
    }

    /// Classifier using the default 1024px breakpoint.
    pub fn with_width(width: u32) -> Self {
        Self::new(DESKTOP_BREAKPOINT_PX, width)
    }

    /// Classify a width against this classifier's breakpoint.
    pub fn classify(&self, width: u32) -> ViewportMode {
        classify_with(self.breakpoint, width)
    }

    /// Recompute the mode for a new width.
    ///
    /// Returns `true` when the mode actually changed.
    pub fn on_resize(&mut self, width: u32) -> bool {
        let was = self.mode;
        self.width = width;
        self.mode = self.classify(width);
        if was != self.mode {
            log::info!("Mode changed: {}", self.mode);
            true
        } else {
            false
        }
    }

    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn breakpoint(&self) -> u32 {
        self.breakpoint
    }

    pub fn is_desktop(&self) -> bool {
        self.mode.is_desktop()
    }
}

/// `width >= breakpoint` is desktop (inclusive boundary).
#[inline]
pub fn classify_with(breakpoint: u32, width: u32) -> ViewportMode {
    if width >= breakpoint {
        ViewportMode::Desktop
    } else {
        ViewportMode::Mobile
    }
}

/// Classify against the default breakpoint.
#[inline]
pub fn classify(width: u32) -> ViewportMode {
    classify_with(DESKTOP_BREAKPOINT_PX, width)
}
