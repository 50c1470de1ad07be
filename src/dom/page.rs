//! Page chrome around the deck: loader, anchors, footer, reveal, lazy images,
//! and the global error net.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, ErrorEvent, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, PromiseRejectionEvent, ScrollIntoViewOptions, ScrollLogicalPosition,
    Window,
};

use super::surfaces::{listen, query_all};
use crate::constants::{class, reveal, selector};
use crate::page::{anchor_target, current_footer_text};
use crate::reveal::{LazyImages, RevealStyle, RevealTracker};

const REVEAL_ATTR: &str = "data-deck-reveal";
const LAZY_ATTR: &str = "data-deck-lazy";

/// Hide `#loader` after `delay_ms`.
pub fn hide_loader_after(document: &Document, delay_ms: u32) {
    let Some(loader) = document.get_element_by_id(selector::LOADER_ID) else {
        return;
    };
    gloo_timers::callback::Timeout::new(delay_ms, move || {
        if let Err(e) = loader.class_list().add_1(class::HIDDEN) {
            log::warn!("[page] failed to hide loader: {e:?}");
        }
    })
    .forget();
}

/// Smooth-scroll in-page anchors to their targets.
pub fn bind_anchors(document: &Document) -> Result<(), JsValue> {
    for anchor in query_all(document, selector::ANCHORS)? {
        let doc = document.clone();
        let link = anchor.clone();
        listen(&anchor, "click", move |e| {
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(id) = anchor_target(&href) else {
                return;
            };
            e.prevent_default();
            if let Some(target) = doc.get_element_by_id(id) {
                let opts = ScrollIntoViewOptions::new();
                opts.set_behavior(web_sys::ScrollBehavior::Smooth);
                opts.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        })?;
    }
    Ok(())
}

pub fn update_footer_year(document: &Document, brand: &str) -> Result<(), JsValue> {
    if let Some(footer) = document.query_selector(selector::FOOTER_TEXT)? {
        footer.set_text_content(Some(&current_footer_text(brand)));
    }
    Ok(())
}

fn apply_style(el: &Element, style: RevealStyle) {
    let Some(html) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    let css = html.style();
    for (name, value) in [("opacity", style.opacity), ("transform", style.transform)] {
        if let Err(e) = css.set_property(name, value) {
            log::warn!("[reveal] failed to set {name}: {e:?}");
        }
    }
}

fn observer(
    init: &IntersectionObserverInit,
    mut on_entry: impl FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
) -> Result<IntersectionObserver, JsValue> {
    let cb = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, obs: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_entry(&entry, &obs);
                }
            }
        },
    );
    let obs = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), init)?;
    cb.forget();
    Ok(obs)
}

fn attr_key(el: &Element, attr: &str) -> Option<usize> {
    el.get_attribute(attr)?.parse().ok()
}

/// Fade content in the first time it scrolls into view.
pub fn watch_reveals(document: &Document, threshold: f64) -> Result<(), JsValue> {
    let elements = query_all(document, selector::REVEAL)?;
    let tracker = Rc::new(RefCell::new(RevealTracker::<usize>::new()));

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    init.set_root_margin(reveal::ROOT_MARGIN);

    let state = tracker.clone();
    let obs = observer(&init, move |entry, _| {
        let target = entry.target();
        let Some(key) = attr_key(&target, REVEAL_ATTR) else {
            return;
        };
        let shown = state
            .borrow_mut()
            .on_intersection(&key, entry.is_intersecting());
        if let Some(style) = shown {
            apply_style(&target, style);
        }
    })?;

    for (key, el) in elements.iter().enumerate() {
        el.set_attribute(REVEAL_ATTR, &key.to_string())?;
        let style = tracker.borrow_mut().observe(key);
        apply_style(el, style);
        if let Some(html) = el.dyn_ref::<HtmlElement>() {
            if let Err(e) = html.style().set_property("transition", reveal::TRANSITION) {
                log::warn!("[reveal] failed to set transition: {e:?}");
            }
        }
        obs.observe(el);
    }
    log::debug!("[reveal] watching {} element(s)", elements.len());
    Ok(())
}

/// Swap `data-src` into `src` when an image first scrolls into view.
pub fn watch_lazy_images(document: &Document) -> Result<(), JsValue> {
    let images = query_all(document, selector::LAZY_IMAGES)?;
    let pending = Rc::new(RefCell::new(LazyImages::<usize>::new()));

    let state = pending.clone();
    let obs = observer(&IntersectionObserverInit::new(), move |entry, obs| {
        let target = entry.target();
        let Some(key) = attr_key(&target, LAZY_ATTR) else {
            return;
        };
        if let Some(src) = state.borrow_mut().on_intersection(&key, entry.is_intersecting()) {
            if let Err(e) = target.set_attribute("src", &src) {
                log::warn!("[lazy] failed to load {src}: {e:?}");
            }
            if let Err(e) = target.remove_attribute("data-src") {
                log::warn!("[lazy] failed to clear data-src: {e:?}");
            }
            obs.unobserve(&target);
        }
    })?;

    for (key, img) in images.iter().enumerate() {
        let Some(src) = img.get_attribute("data-src") else {
            continue;
        };
        img.set_attribute(LAZY_ATTR, &key.to_string())?;
        pending.borrow_mut().observe(key, src);
        obs.observe(img);
    }
    Ok(())
}

/// Log and swallow uncaught errors and unhandled rejections.
pub fn install_error_net(window: &Window) -> Result<(), JsValue> {
    listen(window, "error", |e| {
        let message = e
            .dyn_ref::<ErrorEvent>()
            .map(|e| e.message())
            .unwrap_or_default();
        log::error!("JavaScript Error: {message}");
    })?;
    listen(window, "unhandledrejection", |e| {
        let reason = e
            .dyn_ref::<PromiseRejectionEvent>()
            .map(|e| e.reason())
            .unwrap_or(JsValue::UNDEFINED);
        log::error!("Unhandled Promise Rejection: {reason:?}");
    })?;
    Ok(())
}
