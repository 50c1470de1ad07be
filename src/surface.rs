//! Navigation surfaces and the synchronizer that keeps them in agreement.
//!
//! A surface is one ordered collection of elements that mirrors the active
//! slide: the slide panels, the mobile tab buttons, or the desktop header items.
//! The synchronizer owns all three and applies one index to each of them.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// Which of the three synchronized collections a surface represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceKind {
    Panels,
    Tabs,
    Header,
}

impl SurfaceKind {
    pub const ALL: [SurfaceKind; 3] = [SurfaceKind::Panels, SurfaceKind::Tabs, SurfaceKind::Header];

    pub fn label(self) -> &'static str {
        match self {
            SurfaceKind::Panels => "panels",
            SurfaceKind::Tabs => "tabs",
            SurfaceKind::Header => "header",
        }
    }
}

/// One ordered collection whose elements can be marked active.
pub trait NavigationSurface {
    /// Mark `index` active and every other element inactive.
    fn activate(&mut self, index: usize);

    fn element_count(&self) -> usize;

    fn is_active(&self, position: usize) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Scrolls the viewport back to the top after a slide change.
pub trait Scroller {
    fn scroll_to_top(&mut self, behavior: ScrollBehavior);
}

impl<F: FnMut(ScrollBehavior)> Scroller for F {
    fn scroll_to_top(&mut self, behavior: ScrollBehavior) {
        self(behavior)
    }
}

/// In-memory surface: one active flag per element.
///
/// Used by the terminal preview and by tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySurface {
    flags: Vec<bool>,
}

impl MemorySurface {
    pub fn new(count: usize) -> Self {
        Self {
            flags: vec![false; count],
        }
    }

    pub fn active_positions(&self) -> Vec<usize> {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(i, &on)| on.then_some(i))
            .collect()
    }
}

impl NavigationSurface for MemorySurface {
    fn activate(&mut self, index: usize) {
        for (i, flag) in self.flags.iter_mut().enumerate() {
            *flag = i == index;
        }
    }

    fn element_count(&self) -> usize {
        self.flags.len()
    }

    fn is_active(&self, position: usize) -> bool {
        self.flags.get(position).copied().unwrap_or(false)
    }
}

/// The three surfaces a deck keeps in sync.
pub struct Surfaces {
    pub panels: Box<dyn NavigationSurface>,
    pub tabs: Box<dyn NavigationSurface>,
    pub header: Box<dyn NavigationSurface>,
}

impl Surfaces {
    /// Three in-memory surfaces of `count` elements each.
    pub fn in_memory(count: usize) -> Self {
        Self {
            panels: Box::new(MemorySurface::new(count)),
            tabs: Box::new(MemorySurface::new(count)),
            header: Box::new(MemorySurface::new(count)),
        }
    }
}

/// Applies the active index to every surface and scrolls to the top.
pub struct SurfaceSynchronizer {
    surfaces: Surfaces,
    scroller: Box<dyn Scroller>,
    scroll_behavior: ScrollBehavior,
}

impl SurfaceSynchronizer {
    /// Every surface must hold exactly `total_slides` elements.
    pub fn new(
        total_slides: usize,
        surfaces: Surfaces,
        scroller: Box<dyn Scroller>,
        scroll_behavior: ScrollBehavior,
    ) -> Result<Self> {
        let sync = Self {
            surfaces,
            scroller,
            scroll_behavior,
        };
        for kind in SurfaceKind::ALL {
            let count = sync.surface(kind).element_count();
            ensure!(
                count == total_slides,
                "{} surface has {count} elements but the deck has {total_slides} slides",
                kind.label()
            );
        }
        Ok(sync)
    }

    /// Mark `index` active on all three surfaces, then scroll to the top.
    pub fn reconcile(&mut self, index: usize) {
        self.surfaces.panels.activate(index);
        self.surfaces.tabs.activate(index);
        self.surfaces.header.activate(index);
        self.scroller.scroll_to_top(self.scroll_behavior);
    }

    pub fn surface(&self, kind: SurfaceKind) -> &dyn NavigationSurface {
        match kind {
            SurfaceKind::Panels => self.surfaces.panels.as_ref(),
            SurfaceKind::Tabs => self.surfaces.tabs.as_ref(),
            SurfaceKind::Header => self.surfaces.header.as_ref(),
        }
    }

    /// Active flag per element of one surface.
    pub fn active_flags(&self, kind: SurfaceKind) -> Vec<bool> {
        let surface = self.surface(kind);
        (0..surface.element_count())
            .map(|i| surface.is_active(i))
            .collect()
    }

    /// Position marked active on `kind`, if exactly one is.
    pub fn active_position(&self, kind: SurfaceKind) -> Option<usize> {
        let surface = self.surface(kind);
        let mut active = (0..surface.element_count()).filter(|&i| surface.is_active(i));
        match (active.next(), active.next()) {
            (Some(i), None) => Some(i),
            _ => None,
        }
    }
}
