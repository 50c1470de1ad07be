//! web-sys implementations of the deck's UI traits.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, ScrollToOptions, Window};

use crate::constants::class;
use crate::flip::CardView;
use crate::navigation::{ActivationSource, Listener};
use crate::surface::{NavigationSurface, ScrollBehavior, Scroller};

/// Attach `f` as a `kind` listener on `target` for the page's lifetime.
pub fn listen<F>(target: &EventTarget, kind: &str, f: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(f);
    target.add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// All elements matching `selector`, in document order.
pub fn query_all(root: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Same as [`query_all`], scoped to an element.
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Ordered elements that carry the `active` class for the current slide.
pub struct ElementSurface {
    elements: Vec<Element>,
}

impl ElementSurface {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }
}

impl NavigationSurface for ElementSurface {
    fn activate(&mut self, index: usize) {
        for (i, el) in self.elements.iter().enumerate() {
            if let Err(e) = el.class_list().toggle_with_force(class::ACTIVE, i == index) {
                log::warn!("[surface] failed to toggle class: {e:?}");
            }
        }
    }

    fn element_count(&self) -> usize {
        self.elements.len()
    }

    fn is_active(&self, position: usize) -> bool {
        self.elements
            .get(position)
            .map(|el| el.class_list().contains(class::ACTIVE))
            .unwrap_or(false)
    }
}

/// Click listeners on an ordered element list.
pub struct ClickSource {
    elements: Vec<Element>,
}

impl ClickSource {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }
}

impl ActivationSource for ClickSource {
    fn subscribe(&mut self, position: usize, mut listener: Listener) {
        let Some(el) = self.elements.get(position) else {
            return;
        };
        if let Err(e) = listen(el, "click", move |_| listener()) {
            log::warn!("[nav] failed to bind click on item {position}: {e:?}");
        }
    }

    fn element_count(&self) -> usize {
        self.elements.len()
    }
}

pub struct WindowScroller {
    window: Window,
}

impl WindowScroller {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Scroller for WindowScroller {
    fn scroll_to_top(&mut self, behavior: ScrollBehavior) {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        self.window.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Toggles the `flipped` class on a card element.
pub struct ClassCardView {
    card: Element,
}

impl ClassCardView {
    pub fn new(card: Element) -> Self {
        Self { card }
    }
}

impl CardView for ClassCardView {
    fn set_flipped(&mut self, flipped: bool) {
        if let Err(e) = self.card.class_list().toggle_with_force(class::FLIPPED, flipped) {
            log::warn!("[flip] failed to toggle class: {e:?}");
        }
    }
}
