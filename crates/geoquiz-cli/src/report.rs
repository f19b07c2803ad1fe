//! Plain-text rendering of guesses, counters and totals.

use geoquiz_core::marker::format_population;
use geoquiz_core::{list_label, CityRecord, DatasetTotals, Filter, GuessOutcome, QuizSession};

/// One line describing what happened to a guess, or `None` for blank input.
pub fn outcome_line(guess: &str, outcome: &GuessOutcome) -> Option<String> {
    match outcome {
        GuessOutcome::Accepted(hit) => Some(format!("+ {}", list_label(&hit.record))),
        GuessOutcome::AlreadyGuessed { record } => {
            Some(format!("= {} (already guessed)", record.name))
        }
        GuessOutcome::NotFound => Some(format!("? {} (no such city)", guess.trim())),
        GuessOutcome::Empty => None,
    }
}

/// `2 cities, 985,000 people`
pub fn counter_line(session: &QuizSession) -> String {
    let stats = session.stats();
    format!(
        "{} {}, {} people",
        stats.accepted(),
        plural(stats.accepted(), "city", "cities"),
        format_population(stats.population_sum())
    )
}

/// The end-of-game report: each bracket, capital and area counter against
/// what the mode holds, then the extreme latitudes.
///
/// Brackets the dataset has no city for are left out.
pub fn summary_lines(session: &QuizSession) -> Vec<String> {
    let stats = session.stats();
    let totals = session.totals();
    let guessed = stats.bracket_counts();

    let mut lines = vec![format!(
        "Cities: {} of {}",
        stats.accepted(),
        totals.cities
    )];
    for (i, bracket, total) in totals.visible_brackets() {
        lines.push(format!("  {}: {} of {}", bracket.label, guessed[i], total));
    }
    lines.push(format!("Capitals: {} of {}", stats.capitals(), totals.capitals));
    lines.push(format!(
        "Countries: {} of {}",
        stats.distinct_countries(),
        totals.countries
    ));
    lines.push(format!(
        "Territories: {} of {}",
        stats.distinct_territories(),
        totals.territories
    ));
    lines.push(format!(
        "Population: {}",
        format_population(stats.population_sum())
    ));
    if let Some(city) = stats.northernmost() {
        lines.push(format!("Northernmost: {}", place(city)));
    }
    if let Some(city) = stats.southernmost() {
        lines.push(format!("Southernmost: {}", place(city)));
    }
    lines
}

/// What a mode contains, without any guesses.
pub fn totals_lines(mode: &str, totals: &DatasetTotals) -> Vec<String> {
    let mut lines = vec![
        format!("Mode: {mode}"),
        format!("  Cities: {}", totals.cities),
        format!("  Countries: {}", totals.countries),
        format!("  Territories: {}", totals.territories),
        format!("  Capitals: {}", totals.capitals),
    ];
    for (_, bracket, total) in totals.visible_brackets() {
        lines.push(format!("  {}: {}", bracket.label, total));
    }
    lines
}

fn place(city: &CityRecord) -> String {
    format!("{}, {} ({:.2}°)", city.name, city.country, city.latitude)
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}

/// `--filter` value to a [`Filter`]: `any`, `countries` and `states` pick the
/// fixed entries, anything else is a country or state label.
pub fn parse_filter(arg: &str) -> Filter {
    match arg.trim().to_ascii_lowercase().as_str() {
        "" | "any" => Filter::Any,
        "countries" => Filter::AllCountries,
        "states" => Filter::AllStates,
        _ => Filter::Label(arg.trim().to_owned()),
    }
}
