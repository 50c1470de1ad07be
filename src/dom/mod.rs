//! Browser front end: binds a [`Deck`] to the page's DOM.
//!
//! JS side (after the module loads):
//!   SmartCare.goToSlide(2);
//!   SmartCare.nextSlide();
//!   SmartCare.getCurrentSlide();   // 3
//!   SmartCare.isDesktopMode();     // true
//!
//! Debug via: ?deckdebug=nav,flip or localStorage.setItem('slidedeck.debug','all')

mod page;
mod surfaces;

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use crate::config::DeckConfig;
use crate::constants::selector;
use crate::deck::{Deck, DeckParts};
use crate::flip::{CardView, PointerKind, TapTarget};
use crate::navigation::{self, SlideNavigator};
use crate::surface::Surfaces;

use surfaces::{listen, query_all, query_all_in, ClassCardView, ClickSource, ElementSurface, WindowScroller};

type SharedDeck = Rc<RefCell<Deck>>;

/// Public namespace installed on `window`.
pub const NAMESPACE: &str = "SmartCare";
/// Extra namespace installed when diagnostics are on.
pub const DEBUG_NAMESPACE: &str = "debugSlider";

const DEBUG_QUERY_KEYS: [&str; 2] = ["deckdebug", "deckdbg"];
const DEBUG_STORAGE_KEY: &str = "slidedeck.debug";

fn window_width(window: &Window) -> u32 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as u32
}

/// Category list from `?deckdebug=` or localStorage, if any.
fn debug_overrides(window: &Window) -> Option<String> {
    if let Ok(search) = window.location().search() {
        for part in search.trim_start_matches('?').split('&') {
            let mut it = part.splitn(2, '=');
            let key = it.next().unwrap_or_default();
            let val = it.next().unwrap_or_default();
            if DEBUG_QUERY_KEYS.iter().any(|k| key.eq_ignore_ascii_case(k)) {
                if let Ok(decoded) = js_sys::decode_uri_component(val) {
                    return decoded.as_string();
                }
            }
        }
    }
    if let Ok(Some(storage)) = window.local_storage() {
        if let Ok(Some(v)) = storage.get_item(DEBUG_STORAGE_KEY) {
            return Some(v);
        }
    }
    None
}

fn page_config(window: &Window) -> DeckConfig {
    let mut cfg = DeckConfig::default();
    let host = window.location().hostname().unwrap_or_default();
    cfg.diagnostics_enabled = DeckConfig::diagnostics_for_host(&host);
    if let Some(list) = debug_overrides(window) {
        cfg.diagnostics_enabled = true;
        cfg.debug_categories = list;
    }
    cfg
}

/// Wire the deck into the page. Runs once the document is ready.
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    // Catch errors raised before the document is ready too.
    page::install_error_net(&window)?;

    if document.ready_state() == "loading" {
        let win = window.clone();
        let doc = document.clone();
        let mut pending = Some(());
        listen(&document, "DOMContentLoaded", move |_| {
            if pending.take().is_some() {
                if let Err(e) = on_ready(&win, &doc) {
                    log::error!("[deck] startup failed: {e:?}");
                }
            }
        })?;
        Ok(())
    } else {
        on_ready(&window, &document)
    }
}

fn on_ready(window: &Window, document: &Document) -> Result<(), JsValue> {
    let cfg = page_config(window);

    // Page chrome never depends on the slide deck; a deck that fails to build
    // must not leave images unloaded or content hidden.
    if let Err(e) = install_page_extras(document, &cfg) {
        log::error!("[page] setup failed: {e:?}");
    }

    match bind_deck(window, document, &cfg) {
        Ok(()) => {
            log::info!("{} - Initialized", cfg.brand);
            log::info!("{} Ready!", cfg.brand);
        }
        Err(e) => log::error!("[deck] slider not started: {e:?}"),
    }
    Ok(())
}

fn install_page_extras(document: &Document, cfg: &DeckConfig) -> Result<(), JsValue> {
    page::hide_loader_after(document, cfg.loader_delay_ms);
    page::bind_anchors(document)?;
    if cfg.flags.reveal_animations {
        page::watch_reveals(document, cfg.reveal_threshold)?;
    }
    if cfg.flags.lazy_images {
        page::watch_lazy_images(document)?;
    }
    page::update_footer_year(document, &cfg.brand)
}

fn bind_deck(window: &Window, document: &Document, cfg: &DeckConfig) -> Result<(), JsValue> {
    let panels = query_all(document, selector::SLIDES)?;
    let tabs = query_all(document, selector::TAB_BUTTONS)?;
    let header = query_all(document, selector::HEADER_ITEMS)?;
    let cards = query_all(document, selector::CARDS)?;

    let card_views = cards
        .iter()
        .map(|card| Box::new(ClassCardView::new(card.clone())) as Box<dyn CardView>)
        .collect();

    let deck = Deck::new(
        cfg,
        DeckParts {
            total_slides: panels.len(),
            width: window_width(window),
            surfaces: Surfaces {
                panels: Box::new(ElementSurface::new(panels)),
                tabs: Box::new(ElementSurface::new(tabs.clone())),
                header: Box::new(ElementSurface::new(header.clone())),
            },
            scroller: Box::new(WindowScroller::new(window.clone())),
            cards: card_views,
        },
    )
    .map_err(|e| JsValue::from_str(&format!("{e:#}")))?;
    let deck: SharedDeck = Rc::new(RefCell::new(deck));

    navigation::bind(&deck, &mut ClickSource::new(header), &mut ClickSource::new(tabs));
    bind_cards(&deck, &cards)?;

    let resize_deck = deck.clone();
    let win = window.clone();
    listen(window, "resize", move |_| {
        with_deck(&resize_deck, "resize", |d| d.on_resize(window_width(&win)));
    })?;

    install_namespace(window, &deck)
}

/// Run `f` on the deck unless it is already borrowed further up the stack.
fn with_deck<R>(deck: &SharedDeck, what: &str, f: impl FnOnce(&mut Deck) -> R) -> Option<R> {
    match deck.try_borrow_mut() {
        Ok(mut deck) => Some(f(&mut *deck)),
        Err(_) => {
            log::warn!("[deck] {what} dropped: deck busy");
            None
        }
    }
}

/// Every card gets every listener; the deck's flip controller decides which
/// ones act for the card's current binding.
fn bind_cards(deck: &SharedDeck, cards: &[Element]) -> Result<(), JsValue> {
    for (i, card) in cards.iter().enumerate() {
        for (kind, pointer) in [("mouseenter", PointerKind::Enter), ("mouseleave", PointerKind::Leave)] {
            let deck = deck.clone();
            listen(card, kind, move |_| {
                with_deck(&deck, kind, |d| d.card_pointer(i, pointer));
            })?;
        }

        if let Some(front) = card.query_selector(selector::CARD_FRONT)? {
            bind_tap(deck, &front, i, TapTarget::Front)?;
        }
        if let Some(back) = card.query_selector(selector::CARD_BACK)? {
            bind_tap(deck, &back, i, TapTarget::Back)?;
        }
        for link in query_all_in(card, selector::CARD_LINK)? {
            bind_tap(deck, &link, i, TapTarget::Link)?;
        }
    }
    Ok(())
}

fn bind_tap(deck: &SharedDeck, el: &Element, card: usize, target: TapTarget) -> Result<(), JsValue> {
    let deck = deck.clone();
    listen(el, "click", move |e| {
        if target == TapTarget::Back {
            let from_link = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|t| t.closest(selector::CARD_LINK).ok().flatten())
                .is_some();
            if from_link {
                return;
            }
        }
        let out = with_deck(&deck, "card tap", |d| d.card_tap(card, target)).flatten();
        if out.is_some_and(|o| o.propagation_stopped) {
            e.stop_propagation();
        }
    })
}

fn export(obj: &Object, name: &str, f: impl FnMut(JsValue) -> JsValue + 'static) -> Result<(), JsValue> {
    let cb = Closure::<dyn FnMut(JsValue) -> JsValue>::new(f);
    Reflect::set(obj, &JsValue::from_str(name), cb.as_ref())?;
    cb.forget();
    Ok(())
}

fn slide_arg(v: &JsValue) -> i64 {
    v.as_f64().map(|f| f as i64).unwrap_or(0)
}

/// `window.SmartCare` (and `window.debugSlider` with diagnostics on).
fn install_namespace(window: &Window, deck: &SharedDeck) -> Result<(), JsValue> {
    let api = Object::new();
    let names: [(&str, fn(&mut Deck, &JsValue) -> JsValue); 7] = [
        ("goToSlide", |d, v| JsValue::from(d.go_to_slide(slide_arg(v)) as u32)),
        ("nextSlide", |d, _| JsValue::from(d.next_slide() as u32)),
        ("prevSlide", |d, _| JsValue::from(d.previous_slide() as u32)),
        ("previousSlide", |d, _| JsValue::from(d.previous_slide() as u32)),
        ("getCurrentSlide", |d, _| JsValue::from(d.current_slide() as u32)),
        ("getTotalSlides", |d, _| JsValue::from(d.total_slides() as u32)),
        ("isDesktopMode", |d, _| JsValue::from(d.is_desktop_mode())),
    ];
    for (name, op) in names {
        let deck = deck.clone();
        export(&api, name, move |arg| {
            with_deck(&deck, name, |d| op(d, &arg)).unwrap_or(JsValue::UNDEFINED)
        })?;
    }
    Reflect::set(window, &JsValue::from_str(NAMESPACE), &api)?;

    if deck.borrow().diagnostics().enabled() {
        let dbg = Object::new();
        let names: [(&str, fn(&mut Deck, &JsValue) -> JsValue); 5] = [
            ("goTo", |d, v| JsValue::from(d.go_to_slide(slide_arg(v)) as u32)),
            ("next", |d, _| JsValue::from(d.next_slide() as u32)),
            ("prev", |d, _| JsValue::from(d.previous_slide() as u32)),
            ("currentSlide", |d, _| JsValue::from(d.current_slide() as u32)),
            ("isDesktop", |d, _| JsValue::from(d.is_desktop_mode())),
        ];
        for (name, op) in names {
            let deck = deck.clone();
            export(&dbg, name, move |arg| {
                with_deck(&deck, name, |d| op(d, &arg)).unwrap_or(JsValue::UNDEFINED)
            })?;
        }
        Reflect::set(window, &JsValue::from_str(DEBUG_NAMESPACE), &dbg)?;
        log::info!("Debug functions available: window.{DEBUG_NAMESPACE}");
    }
    Ok(())
}
