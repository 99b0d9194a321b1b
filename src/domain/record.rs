use chrono::{DateTime, Utc};

use crate::api::models::TournamentSummary;
use crate::config::ProviderCodes;

use super::champion::resolve_champion;
use super::models::{Draw, FlatMatch, TournamentRecord};
use super::tournament::TournamentNaming;

/// Draw and match list found for a tournament, with the season each came from
#[derive(Debug, Clone, Default)]
pub struct FetchedResults {
    pub draw: Option<Draw>,
    pub draw_year: Option<i32>,
    pub matches: Vec<FlatMatch>,
    pub scores_year: Option<i32>,
}

/// Composes one tournament record; `order` is provisional until the
/// collection is sorted.
pub fn build_record(
    order: usize,
    summary: &TournamentSummary,
    results: FetchedResults,
    codes: &ProviderCodes,
    naming: &TournamentNaming,
    generated_at: DateTime<Utc>,
) -> TournamentRecord {
    let resolution = resolve_champion(
        results.draw.as_ref(),
        &results.matches,
        &summary.winners,
        codes,
    );
    let level = summary.display_level().map(str::to_string);

    TournamentRecord {
        order,
        tournament_group_id: summary.group_id(),
        name: summary.group_name().map(str::to_string),
        title: summary.display_title().map(str::to_string),
        level_number: level.as_deref().and_then(|l| naming.level_number(l)),
        level,
        year: summary.year,
        start_date: summary.start_date.clone(),
        end_date: summary.end_date.clone(),
        surface: summary.surface.clone(),
        indoor_outdoor: summary.in_outdoor.clone(),
        city: summary.city.clone(),
        country: summary.country.clone(),
        status: summary.status.clone(),
        draw_size_singles: summary.singles_draw_size,
        draw_size_doubles: summary.doubles_draw_size,
        prize_money: summary.prize_money.clone(),
        prize_money_currency: summary.prize_money_currency.clone(),
        champion: resolution.champion,
        runner_up: resolution.runner_up,
        champion_source: resolution.source,
        draw_year: results.draw.as_ref().and(results.draw_year),
        draw: results.draw,
        scores_year: results.scores_year,
        matches: results.matches,
        generated_at,
    }
}
