use wasm_bindgen_test::*;

use geoquiz_core::{GuessOutcome, SurfaceSize};
use geoquiz_wasm::QuizApp;

const CITIES: &str = r#"[
    {"name": "Zürich", "state": "Zürich", "country": "Switzerland",
     "latitude": 47.37, "longitude": 8.54, "population": 421878},
    {"name": "Bern", "state": "Bern", "country": "Switzerland",
     "latitude": 46.95, "longitude": 7.45, "population": 134794, "nationalCapital": true}
]"#;

const BOUNDS: &str = r#"{"swiss": {"minLat": 45.8, "maxLat": 47.9, "minLon": 5.9, "maxLon": 10.5}}"#;

fn surface() -> SurfaceSize {
    SurfaceSize::new(800.0, 400.0)
}

#[wasm_bindgen_test]
fn nothing_is_accepted_before_load() {
    let mut app = QuizApp::new("swiss");
    assert_eq!(app.mode(), "swiss");
    assert!(!app.is_ready());
    assert!(app.try_submit("bern", surface()).is_none());
    assert_eq!(app.guessed_count(), 0);
    assert!(app.history_labels().is_empty());

    // Reset before load is a no-op, and loading afterwards still works.
    app.reset();
    assert_eq!(app.load(CITIES, BOUNDS), 2);
    assert!(app.try_submit("bern", surface()).is_some_and(|o| o.is_accepted()));
}

#[wasm_bindgen_test]
fn guesses_after_load() {
    let mut app = QuizApp::new("swiss");
    assert_eq!(app.load(CITIES, BOUNDS), 2);

    let hit = app.try_submit("zurich", surface()).unwrap();
    match hit {
        GuessOutcome::Accepted(accepted) => assert!(accepted.marker.is_some()),
        other => panic!("expected an accepted guess, got {other:?}"),
    }
    assert!(matches!(
        app.try_submit("ZÜRICH", surface()),
        Some(GuessOutcome::AlreadyGuessed { .. })
    ));
    app.try_submit("bern", surface());

    assert_eq!(app.guessed_count(), 2);
    assert_eq!(
        app.history_labels(),
        ["Bern Bern, Switzerland (134,794) 📍", "Zürich Zürich, Switzerland (421,878)"]
    );

    app.reset();
    assert_eq!(app.guessed_count(), 0);
    assert!(app.is_ready());
}

#[wasm_bindgen_test]
fn broken_data_degrades_instead_of_failing() {
    let mut app = QuizApp::new("swiss");
    assert_eq!(app.load("not json", "{}"), 0);
    assert!(app.is_ready());
    assert!(matches!(
        app.try_submit("bern", surface()),
        Some(GuessOutcome::NotFound)
    ));
}
