//! Basic quiz example for geoquiz-rs
//!
//! Loads the bundled world mode, plays a handful of guesses and prints
//! what the session has counted.

use geoquiz_core::prelude::*;

fn main() -> Result<()> {
    println!("=== GeoQuiz-RS Basic Quiz Example ===\n");

    let loaded = load_mode(&QuizConfig::default());
    let regions = loaded.regions.clone();
    println!("Loaded {} cities\n", loaded.dataset.len());

    let mut session = QuizSession::new(loaded.dataset, loaded.bounds);
    let surface = SurfaceSize::new(1000.0, 500.0);

    // Example 1: spelling does not matter
    println!("--- Example 1: Guessing ---");
    for guess in ["sao-paulo", "SAINT LOUIS", "springfield", "paris", "Paris", "atlantis", ""] {
        let outcome = session.submit(guess, surface);
        let shown = match &outcome {
            GuessOutcome::Accepted(hit) => format!("accepted {}", list_label(&hit.record)),
            GuessOutcome::AlreadyGuessed { record } => format!("already had {}", record.name),
            GuessOutcome::NotFound => "no such city".to_string(),
            GuessOutcome::Empty => "blank".to_string(),
        };
        println!("{guess:>14?} -> {shown}");
    }
    println!();

    // Example 2: running statistics against the mode's totals
    println!("--- Example 2: Statistics ---");
    let stats = session.stats();
    let totals = session.totals();
    println!("Cities: {} of {}", stats.accepted(), totals.cities);
    println!("Population: {}", stats.population_sum());
    for (i, bracket, total) in totals.visible_brackets() {
        println!("  over {}: {} of {}", bracket.label, stats.bracket_counts()[i], total);
    }
    if let Some(north) = stats.northernmost() {
        println!("Northernmost so far: {}", north.name);
    }
    println!();

    // Example 3: filtering the guessed list
    println!("--- Example 3: Guessed cities in the United States ---");
    let catalog = FilterCatalog::build(session.dataset(), regions);
    for city in catalog.apply(&Filter::Label("United States".into()), session.history()) {
        println!("- {}", list_label(city));
    }

    Ok(())
}
