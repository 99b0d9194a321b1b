pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod pagination;
pub mod rate_limiter;
pub mod services;
pub mod store;

use anyhow::Result;
use chrono::{Datelike, Utc};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use std::path::Path;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::services::{CollectionOptions, CollectionService, NormalizeInput, NormalizeService, ReportService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

/// Season defaults: current year, previous year as fallback
pub fn collection_options(
    year: Option<i32>,
    fallback_year: Option<i32>,
    no_fallback: bool,
    limit: Option<usize>,
) -> CollectionOptions {
    let year = year.unwrap_or_else(|| Utc::now().year());
    let fallback_year = if no_fallback {
        None
    } else {
        Some(fallback_year.unwrap_or(year - 1))
    };
    CollectionOptions {
        year,
        fallback_year,
        limit,
    }
}

pub fn handle_collect(options: CollectionOptions, output_dir: Option<String>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env().with_output_dir(output_dir);
        let mut service = CollectionService::new(&config, options)?;
        service.run().await
    })
}

pub fn handle_normalize(input: NormalizeInput, output_dir: Option<String>) -> Result<()> {
    let config = AppConfig::new().with_output_dir(output_dir);
    let service = NormalizeService::new(&config)?;
    service.run(&input)?;
    Ok(())
}

pub fn handle_show(target: &Path, pick: Option<usize>) -> Result<()> {
    let service = ReportService::new()?;
    service.run(target, pick)
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
