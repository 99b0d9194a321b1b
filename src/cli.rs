use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "WTA draw and results normalizer")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Fetch a season from the WTA API and write one record per tournament
    Collect {
        /// Season year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,
        /// Season to retry when a draw or match list is missing (defaults to the previous year)
        #[arg(long, conflicts_with = "no_fallback")]
        fallback_year: Option<i32>,
        /// Never retry another season
        #[arg(long)]
        no_fallback: bool,
        /// Only collect the first N tournaments of the listing
        #[arg(short, long)]
        limit: Option<usize>,
        /// Output directory (defaults to data/wta/tournaments)
        #[arg(short, long)]
        output_dir: Option<String>,
    },
    /// Build a record from saved draw/matches payloads
    Normalize {
        /// Saved draw endpoint payload
        #[arg(long)]
        draw: PathBuf,
        /// Saved match list endpoint payload
        #[arg(long)]
        matches: Option<PathBuf>,
        /// Saved tournament listing entry or page
        #[arg(long)]
        tournament: Option<PathBuf>,
        /// Season year, when the tournament entry does not say
        #[arg(short, long)]
        year: Option<i32>,
        /// Output directory (defaults to data/wta/tournaments)
        #[arg(short, long)]
        output_dir: Option<String>,
    },
    /// Print a stored record as a text bracket
    Show {
        /// Record file, or a directory of records
        target: PathBuf,
        /// Which record of the directory to show, 1-based
        #[arg(short, long)]
        pick: Option<usize>,
    },
    /// Print shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}
