#![cfg_attr(target_arch = "wasm32", no_main)]

// DOM-based Web frontend for the slide deck.
//
// JS side:
//   import init from "./slidedeck-web.js";
//   await init();                      // binds the page, installs window.SmartCare
//   SmartCare.goToSlide(3);
//
// Embedders that want a JSON bridge instead of the live DOM:
//   const deck = new WasmDeck(5, window.innerWidth, 3);
//   const snap = JSON.parse(deck.handle_action_json(JSON.stringify({ type: "NextSlide" })));

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::prelude::*;

    use slidedeck::{Deck, DeckAction, DeckConfig, DeckSnapshot};

    /// Bind the deck to the page on module load.
    #[wasm_bindgen(start)]
    pub fn wasm_start() {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::default());

        if let Err(e) = slidedeck::dom::start() {
            log::error!("[deck] failed to start: {e:?}");
        }
    }

    /// Headless deck exposed to JS (JSON in, JSON out).
    #[wasm_bindgen]
    pub struct WasmDeck {
        deck: Deck,
    }

    #[wasm_bindgen]
    impl WasmDeck {
        #[wasm_bindgen(constructor)]
        pub fn new(total_slides: usize, width: u32, cards: usize) -> Result<WasmDeck, JsValue> {
            let cfg = DeckConfig {
                total_slides,
                ..DeckConfig::default()
            }
            .validate()
            .map_err(|e| JsValue::from_str(&format!("{e:#}")))?;
            let deck = Deck::headless(&cfg, width, cards)
                .map_err(|e| JsValue::from_str(&format!("{e:#}")))?;
            Ok(WasmDeck { deck })
        }

        /// Current state as JSON.
        #[wasm_bindgen]
        pub fn snapshot_json(&self) -> String {
            let snap = DeckSnapshot::from_deck(&self.deck);
            serde_json::to_string(&snap).unwrap_or_else(|e| {
                log::error!("Failed to serialize DeckSnapshot: {e}");
                "{}".to_string()
            })
        }

        /// Apply an action (JSON-encoded DeckAction) and return an updated snapshot.
        #[wasm_bindgen]
        pub fn handle_action_json(&mut self, action_json: String) -> String {
            match serde_json::from_str::<DeckAction>(&action_json) {
                Ok(action) => self.deck.apply(action),
                Err(e) => {
                    log::warn!("Failed to deserialize DeckAction ({e}): {action_json:?}");
                }
            }
            self.snapshot_json()
        }
    }
}

// Native builds: just provide a stub main so `cargo build --all-features` doesn't explode.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("slidedeck-web is only supported on wasm32 (browser) target.");
}
