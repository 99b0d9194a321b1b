use anyhow::Result;

use wta_draw_normalizer::cli::Command;
use wta_draw_normalizer::services::NormalizeInput;
use wta_draw_normalizer::{
    collection_options, handle_collect, handle_completions, handle_normalize, handle_show, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(command)
}

fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Collect {
            year,
            fallback_year,
            no_fallback,
            limit,
            output_dir,
        } => handle_collect(collection_options(year, fallback_year, no_fallback, limit), output_dir),
        Command::Normalize {
            draw,
            matches,
            tournament,
            year,
            output_dir,
        } => handle_normalize(
            NormalizeInput {
                draw,
                matches,
                tournament,
                year,
            },
            output_dir,
        ),
        Command::Show { target, pick } => handle_show(&target, pick),
        Command::Completions { shell } => handle_completions(shell),
    }
}
