//! geoquiz-wasm: WebAssembly bindings for geoquiz-core
//!
//! Exposes one quiz session per [`QuizApp`] object to JavaScript. The page
//! fetches the mode's city and bounds JSON itself and hands the text over;
//! drawing markers and updating the DOM stay on the JS side.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { QuizApp } from 'geoquiz-wasm';
//!
//! async function main() {
//!   await init();
//!   const app = new QuizApp('europe');
//!   const [cities, bounds] = await Promise.all([
//!     fetch('data/cities/europe.json').then(r => r.text()),
//!     fetch('data/map_bounds.json').then(r => r.text()),
//!   ]);
//!   app.load(cities, bounds);
//!
//!   const map = document.querySelector('svg');
//!   const outcome = app.submit('zurich', map.clientWidth, map.clientHeight);
//!   if (outcome.kind === 'accepted') console.log(outcome.stats.accepted);
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - `submit` before `load` returns `{ kind: "notReady" }` and changes nothing.
//! - Outcomes are plain objects: `accepted` (record, marker, stats),
//!   `alreadyGuessed`, `notFound`, `empty`, `notReady`.
//! - Missing or broken data never throws: bounds fall back to the whole
//!   world, cities to an empty set, and a warning goes to the console.
use std::sync::Arc;
use wasm_bindgen::prelude::*;

use geoquiz_core::{
    list_label, parse_bounds, parse_cities, Bounds, Dataset, GuessOutcome, QuizSession, SurfaceSize,
};
use serde::Serialize;
use serde_wasm_bindgen::to_value;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    log("geoquiz wasm module ready");
}

/* --------------------------------------------------------------------------
   Console
-------------------------------------------------------------------------- */

#[cfg(target_arch = "wasm32")]
fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

// Native builds (unit tests) have no console to talk to.
#[cfg(not(target_arch = "wasm32"))]
fn log(_msg: &str) {}

#[cfg(not(target_arch = "wasm32"))]
fn warn(_msg: &str) {}

/* --------------------------------------------------------------------------
   Quiz session
-------------------------------------------------------------------------- */

/// Outcome reported for input that arrives before the data.
#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum Pending {
    NotReady,
}

#[wasm_bindgen]
pub struct QuizApp {
    mode: String,
    session: Option<QuizSession>,
}

#[wasm_bindgen]
impl QuizApp {
    #[wasm_bindgen(constructor)]
    pub fn new(mode: &str) -> QuizApp {
        QuizApp {
            mode: mode.to_string(),
            session: None,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        self.mode.clone()
    }

    /// Load the mode's data and start a fresh session. Returns how many
    /// cities can be guessed.
    pub fn load(&mut self, cities_json: &str, bounds_json: &str) -> usize {
        let bounds = parse_bounds(bounds_json, &self.mode).unwrap_or_else(|e| {
            warn(&format!("map bounds for '{}' unavailable ({e}); using world", self.mode));
            Bounds::WORLD
        });

        let dataset = parse_cities(cities_json, &self.mode).unwrap_or_else(|e| {
            warn(&format!("cities for '{}' unavailable ({e}); nothing to guess", self.mode));
            Dataset::empty(self.mode.as_str())
        });

        let count = dataset.len();
        log(&format!("✓ Loaded {count} cities for '{}'", self.mode));
        self.session = Some(QuizSession::new(Arc::new(dataset), bounds));
        count
    }

    #[wasm_bindgen(js_name = isReady)]
    pub fn is_ready(&self) -> bool {
        self.session.is_some()
    }

    /// Submit one guess against a surface of `width` x `height` pixels.
    pub fn submit(&mut self, guess: &str, width: f64, height: f64) -> Result<JsValue, JsValue> {
        let value = match self.try_submit(guess, SurfaceSize::new(width, height)) {
            Some(outcome) => to_value(&outcome),
            None => to_value(&Pending::NotReady),
        };
        value.map_err(JsValue::from)
    }

    #[wasm_bindgen(js_name = guessedCount)]
    pub fn guessed_count(&self) -> usize {
        self.session.as_ref().map_or(0, QuizSession::guessed_count)
    }

    /// Guessed-city list labels, most recent first.
    pub fn history(&self) -> js_sys::Array {
        self.history_labels()
            .into_iter()
            .map(|label| JsValue::from_str(&label))
            .collect()
    }

    /// Running statistics, or `null` before load.
    pub fn stats(&self) -> Result<JsValue, JsValue> {
        match &self.session {
            Some(session) => to_value(&session.stats().snapshot()).map_err(JsValue::from),
            None => Ok(JsValue::NULL),
        }
    }

    /// Forget every guess; the loaded data stays.
    pub fn reset(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.reset();
        }
    }
}

impl QuizApp {
    /// Rust-side submit; `None` until [`QuizApp::load`] has run.
    pub fn try_submit(&mut self, guess: &str, surface: SurfaceSize) -> Option<GuessOutcome> {
        self.session
            .as_mut()
            .map(|session| session.submit(guess, surface))
    }

    pub fn history_labels(&self) -> Vec<String> {
        self.session
            .as_ref()
            .map(|session| session.history().map(list_label).collect())
            .unwrap_or_default()
    }
}
