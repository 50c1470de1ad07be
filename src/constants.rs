//! Deck constants
//!
//! Centralized breakpoints, class names, selectors, and timing values shared by
//! the core and both front ends.

/// Viewport classification
pub mod viewport {
    /// Width (logical pixels) at or above which the page is treated as desktop.
    pub const DESKTOP_BREAKPOINT_PX: u32 = 1024;

    /// Logical pixels per terminal column for the native preview.
    ///
    /// 128 columns map onto the desktop breakpoint.
    pub const TERMINAL_CELL_PX: u32 = 8;
}

/// Class names toggled on DOM elements
pub mod class {
    pub const ACTIVE: &str = "active";
    pub const FLIPPED: &str = "flipped";
    pub const HIDDEN: &str = "hidden";
}

/// Selectors used to discover elements at document ready
pub mod selector {
    pub const SLIDES: &str = ".slide";
    pub const TAB_BUTTONS: &str = ".tab-button";
    pub const HEADER_ITEMS: &str = ".header-nav .nav-item";
    pub const LOADER_ID: &str = "loader";

    pub const CARDS: &str = ".team-card";
    pub const CARD_FRONT: &str = ".team-card-front";
    pub const CARD_BACK: &str = ".team-card-back";
    pub const CARD_LINK: &str = ".social-link";

    pub const ANCHORS: &str = "a[href^=\"#\"]";
    pub const FOOTER_TEXT: &str = ".footer p";
    pub const LAZY_IMAGES: &str = "img[data-src]";

    /// Elements that fade in as they scroll into view.
    pub const REVEAL: &str =
        ".content-card, .team-card, .why-card, .timeline-item, .step-card, .feature-box";
}

/// Reveal (fade-in) animation values
pub mod reveal {
    /// Fraction of an element that must be visible before it is revealed.
    pub const THRESHOLD: f64 = 0.1;

    /// Intersection root margin (shrinks the bottom edge by 50px).
    pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";

    pub const HIDDEN_OPACITY: &str = "0";
    pub const HIDDEN_TRANSFORM: &str = "translateY(20px)";
    pub const SHOWN_OPACITY: &str = "1";
    pub const SHOWN_TRANSFORM: &str = "translateY(0)";
    pub const TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";
}

/// Page chrome defaults
pub mod page {
    /// Brand used by the footer and startup logs.
    pub const DEFAULT_BRAND: &str = "Smart Care";

    /// Delay before the loader overlay is hidden after document ready.
    pub const LOADER_DELAY_MS: u32 = 500;

    /// Number of slides the native preview renders when none is configured.
    pub const DEFAULT_SLIDES: usize = 5;
}
