//! Slide Deck - page controller for a single-page slide site
//!
//! This library keeps one active slide in sync across the slide panels, the
//! mobile tab bar and the desktop header menu, and drives the hover/tap flip
//! cards and scroll-reveal effects around it.
//!
//! ## Architecture
//!
//! The core is headless and talks to UIs through small traits
//! (`NavigationSurface`, `ActivationSource`, `CardView`, `Scroller`):
//! - **Web**: DOM bindings through wasm-bindgen/web-sys (`dom-web` feature)
//! - **Native**: terminal preview and scripted replay through ratatui/crossterm
//!
//! ## Usage
//!
//! For native builds:
//! ```bash
//! cargo build --features native
//! ```
//!
//! For web builds:
//! ```bash
//! trunk build --no-default-features --features dom-web
//! ```

// Core modules (available on all platforms)
pub mod config;
pub mod constants;
pub mod deck;
pub mod diagnostics;
pub mod flags;
pub mod flip;
pub mod navigation;
pub mod page;
pub mod reveal;
pub mod snapshot;
pub mod store;
pub mod surface;
pub mod viewport;

cfg_if::cfg_if! {
    if #[cfg(all(target_arch = "wasm32", feature = "dom-web"))] {
        // DOM bindings (browser only)
        pub mod dom;
    }
}

// Terminal preview (native-only)
#[cfg(feature = "native")]
pub mod tui;

// Re-export commonly used types
pub use config::DeckConfig;
pub use deck::{Deck, DeckParts};
pub use flip::{FlipBinding, PointerKind, TapTarget};
pub use navigation::SlideNavigator;
pub use snapshot::{DeckAction, DeckSnapshot};
pub use surface::SurfaceKind;
pub use viewport::ViewportMode;
