//! geoquiz: play the city quiz from a terminal
//!
//! Usage examples
//! --------------
//!
//! - Play, one guess per line, until EOF
//!   $ geoquiz play
//!   $ geoquiz --mode europe play --svg-out markers.svg --width 1200 --height 800
//!
//! - Show what a mode contains
//!   $ geoquiz totals
//!
//! - See which city a guess resolves to
//!   $ geoquiz lookup "st louis"
//!
//! - List or search the country/state filter labels
//!   $ geoquiz labels
//!   $ geoquiz labels ile
//!
//! Data source
//! -----------
//!
//! By default the data directory bundled with `geoquiz-core` is used. Point
//! `--data-dir` somewhere else for custom datasets. The mode can also come
//! from `GEOQUIZ_MODE`. Logging goes to stderr and honors `RUST_LOG`.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use geoquiz_cli::report;
use geoquiz_core::prelude::*;
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geoquiz=info,geoquiz_core=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = CliArgs::parse();

    let data_dir = args.data_dir.unwrap_or_else(QuizConfig::default_data_dir);
    let config = QuizConfig::new(data_dir, args.mode);
    let loaded = load_mode(&config);
    tracing::info!(mode = %config.mode, cities = loaded.dataset.len(), "mode ready");

    match args.command {
        Commands::Play {
            svg_out,
            width,
            height,
            filter,
        } => {
            let surface = SurfaceSize::new(width, height);
            let regions = loaded.regions.clone();
            let mut session = QuizSession::new(loaded.dataset, loaded.bounds);
            let mut layer = MarkerLayer::new();

            let stdin = io::stdin();
            let mut out = io::stdout().lock();
            for line in stdin.lock().lines() {
                let guess = line.context("reading guesses from stdin")?;
                let outcome = session.submit(&guess, surface);
                let Some(text) = report::outcome_line(&guess, &outcome) else {
                    continue;
                };
                writeln!(out, "{text}")?;
                if let GuessOutcome::Accepted(hit) = outcome {
                    if let Some(marker) = hit.marker {
                        layer.push(marker);
                    }
                    writeln!(out, "  {}", report::counter_line(&session))?;
                }
            }

            writeln!(out)?;
            for line in report::summary_lines(&session) {
                writeln!(out, "{line}")?;
            }

            if let Some(filter) = filter.as_deref().map(report::parse_filter) {
                let catalog = FilterCatalog::build(session.dataset(), regions);
                writeln!(out)?;
                writeln!(out, "Guessed ({filter:?}):")?;
                for city in catalog.apply(&filter, session.history()) {
                    writeln!(out, "  {}", list_label(city))?;
                }
            }

            if let Some(path) = svg_out {
                std::fs::write(&path, layer.to_svg(surface))
                    .with_context(|| format!("writing {}", path.display()))?;
                tracing::info!(path = %path.display(), markers = layer.len(), "svg written");
            }
        }

        Commands::Totals => {
            for line in report::totals_lines(loaded.dataset.mode(), loaded.dataset.totals()) {
                println!("{line}");
            }
        }

        Commands::Lookup { name } => match loaded.dataset.resolve(&name) {
            Some(city) => {
                println!("{}", list_label(city));
                println!("  Key: {}", city.key());
                println!("  Lat/Lon: {:.4}, {:.4}", city.latitude, city.longitude);
                if !city.alt_names.is_empty() {
                    println!("  Also: {}", city.alt_names.join(", "));
                }
            }
            None => eprintln!("No city found for: {name}"),
        },

        Commands::Labels { query } => {
            let catalog = FilterCatalog::build(&loaded.dataset, loaded.regions);
            let labels: Vec<&str> = match query.as_deref() {
                Some(q) => catalog.search_labels(q),
                None => catalog.labels().iter().map(String::as_str).collect(),
            };
            if labels.is_empty() {
                println!("No labels found");
            }
            for label in labels {
                println!("{label}");
            }
        }
    }

    Ok(())
}
