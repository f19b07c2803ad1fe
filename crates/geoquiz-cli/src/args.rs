use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for geoquiz
#[derive(Debug, Parser)]
#[command(
    name = "geoquiz",
    version,
    about = "Name as many cities as you can; the quiz keeps score"
)]
pub struct CliArgs {
    /// Data directory holding map_bounds.json, cities/ and states/ (default: bundled data)
    #[arg(short = 'd', long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Quiz mode, i.e. which dataset and map bounds to use (e.g. world, europe)
    #[arg(short = 'm', long = "mode", global = true, env = "GEOQUIZ_MODE", default_value = "world")]
    pub mode: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play: read one guess per line from stdin until EOF
    Play {
        /// Write the guessed-city markers as an SVG overlay when done
        #[arg(long = "svg-out")]
        svg_out: Option<PathBuf>,

        /// Drawing surface width in pixels
        #[arg(long, default_value_t = 1000.0)]
        width: f64,

        /// Drawing surface height in pixels
        #[arg(long, default_value_t = 500.0)]
        height: f64,

        /// Only list guessed cities in this country or state at the end
        #[arg(short = 'f', long = "filter")]
        filter: Option<String>,
    },

    /// Show how many cities, countries, capitals and territories the mode has
    Totals,

    /// Show which city a guess would resolve to
    Lookup {
        /// The guess, e.g. "sao paulo"
        name: String,
    },

    /// List country/state filter labels, optionally searching them
    Labels {
        /// Substring to search (accent- and case-insensitive)
        query: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_flags_parse() {
        let args = CliArgs::try_parse_from([
            "geoquiz", "--mode", "europe", "play", "--svg-out", "out.svg", "--width", "800",
        ])
        .unwrap();
        assert_eq!(args.mode, "europe");
        match args.command {
            Commands::Play {
                svg_out,
                width,
                height,
                filter,
            } => {
                assert_eq!(svg_out, Some(PathBuf::from("out.svg")));
                assert_eq!(width, 800.0);
                assert_eq!(height, 500.0);
                assert!(filter.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_work_after_the_subcommand() {
        let args = CliArgs::try_parse_from(["geoquiz", "lookup", "paris", "-d", "/tmp/data"]).unwrap();
        assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/data")));
        assert!(matches!(args.command, Commands::Lookup { ref name } if name == "paris"));
    }

    #[test]
    fn labels_query_is_optional() {
        let args = CliArgs::try_parse_from(["geoquiz", "labels"]).unwrap();
        assert!(matches!(args.command, Commands::Labels { query: None }));
    }

    #[test]
    fn a_subcommand_is_required() {
        assert!(CliArgs::try_parse_from(["geoquiz"]).is_err());
    }
}
