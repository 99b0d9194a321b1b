use anyhow::Result;
use chrono::Utc;
use log::{debug, info, warn};

use crate::api::models::{RawFlatMatch, TournamentSummary};
use crate::api::WtaClient;
use crate::config::{get_provider_codes, AppConfig, ProviderCodes};
use crate::domain::tournament::{should_fetch_draw, SeasonFallback};
use crate::domain::{
    build_record, extract_flat_matches, CollectionProgress, Draw, DrawAssembler, FetchedResults,
    RecordCollection, ScoreTokenizer,
};
use crate::store::RecordStore;

/// What to collect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionOptions {
    pub year: i32,
    pub fallback_year: Option<i32>,
    pub limit: Option<usize>,
}

/// Outcome of trying each season in turn
struct SeasonResult<T> {
    value: Option<T>,
    year: Option<i32>,
    failed: bool,
}

impl<T> Default for SeasonResult<T> {
    fn default() -> Self {
        Self {
            value: None,
            year: None,
            failed: false,
        }
    }
}

pub struct CollectionService {
    client: WtaClient,
    store: RecordStore,
    tokenizer: ScoreTokenizer,
    codes: ProviderCodes,
    options: CollectionOptions,
}

impl CollectionService {
    pub fn new(config: &AppConfig, options: CollectionOptions) -> Result<Self> {
        Ok(Self {
            client: WtaClient::new(&config.collector)?,
            store: RecordStore::new(&config.output.output_dir)?,
            tokenizer: ScoreTokenizer::new()?,
            codes: get_provider_codes(),
            options,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        info!("=== Starting {} Season Collection ===\n", self.options.year);

        // Step 1: Season listing
        let tournaments = self.fetch_listing().await?;
        info!("  → Found {} tournaments\n", tournaments.len());

        // Step 2: Draws, results and champions
        let collection = self.collect_tournaments(&tournaments).await;
        info!("  → Collected {} tournament records\n", collection.len());

        // Step 3: Write records
        self.write_records(collection)?;

        info!("=== Collection Complete ===");
        Ok(())
    }

    async fn fetch_listing(&mut self) -> Result<Vec<TournamentSummary>> {
        info!("Step 1: Fetching tournament listing...");

        let mut tournaments = self.client.fetch_tournaments(self.options.year).await?;
        if let Some(limit) = self.options.limit.filter(|l| *l > 0) {
            tournaments.truncate(limit);
        }
        Ok(tournaments)
    }

    async fn collect_tournaments(&mut self, tournaments: &[TournamentSummary]) -> RecordCollection {
        info!("Step 2: Collecting draws and results...");

        let total = tournaments.len();
        let mut progress = CollectionProgress::new(total);
        let mut collection = RecordCollection::new();
        let generated_at = Utc::now();

        for (idx, summary) in tournaments.iter().enumerate() {
            debug!("[{}/{}] {}", idx + 1, total, summary.display_title().unwrap_or("?"));

            let (results, complete) = self.collect_results(summary).await;
            if complete {
                progress.record_collected(results.draw.is_some());
            } else {
                progress.record_partial();
            }

            collection.add(build_record(idx + 1, summary, results, &self.codes, self.store.naming(), generated_at));
        }

        if progress.partial() > 0 {
            warn!("{} tournaments were recorded with missing parts", progress.partial());
        }
        collection
    }

    /// Results for one tournament, and whether every fetch went through
    async fn collect_results(&mut self, summary: &TournamentSummary) -> (FetchedResults, bool) {
        let Some(group_id) = summary.group_id() else {
            warn!("No tournament group id for {:?}, skipping fetches", summary.display_title());
            return (FetchedResults::default(), true);
        };

        let primary = summary.year.unwrap_or(self.options.year);
        let seasons = SeasonFallback::new(primary, self.options.fallback_year);

        let draw = if should_fetch_draw(summary, &self.codes) {
            self.fetch_draw(group_id, seasons, summary.singles_draw_size).await
        } else {
            debug!("Draw not eligible for group {}", group_id);
            SeasonResult::default()
        };

        let matches = self.fetch_matches(group_id, seasons).await;
        combine_results(draw, matches, primary)
    }

    /// First season with a draw wins
    async fn fetch_draw(
        &mut self,
        group_id: i64,
        seasons: SeasonFallback,
        listed_draw_size: Option<u32>,
    ) -> SeasonResult<Draw> {
        let client = &mut self.client;
        let found = first_season(seasons, "Draw", group_id, async |year| {
            client.fetch_draw(group_id, year).await
        })
        .await;

        let assembler = DrawAssembler::new(&self.tokenizer, &self.codes);
        SeasonResult {
            value: found.value.map(|event| assembler.assemble(&event, listed_draw_size)),
            year: found.year,
            failed: found.failed,
        }
    }

    /// First season with a non-empty match list wins
    async fn fetch_matches(&mut self, group_id: i64, seasons: SeasonFallback) -> SeasonResult<Vec<RawFlatMatch>> {
        let client = &mut self.client;
        first_season(seasons, "Match", group_id, async |year| {
            client.fetch_matches(group_id, year).await.map(non_empty)
        })
        .await
    }

    fn write_records(&self, collection: RecordCollection) -> Result<()> {
        info!("Step 3: Writing tournament records...");
        let records = collection.into_ordered();
        self.store.save_all(&records)?;
        Ok(())
    }
}

/// Tries each season in turn. Only a not-found moves on to the next season;
/// a failed fetch ends the search.
async fn first_season<T>(
    seasons: SeasonFallback,
    kind: &str,
    group_id: i64,
    mut fetch: impl AsyncFnMut(i32) -> Result<Option<T>>,
) -> SeasonResult<T> {
    let mut result = SeasonResult::default();
    for year in seasons.years() {
        match fetch(year).await {
            Ok(Some(value)) => {
                result.value = Some(value);
                result.year = Some(year);
                break;
            }
            Ok(None) => debug!("{} not found for group {} in {}", kind, group_id, year),
            Err(e) => {
                warn!("{} fetch failed for group {} in {}: {:#}", kind, group_id, year, e);
                result.failed = true;
                break;
            }
        }
    }
    result
}

/// An empty match list counts as not found
fn non_empty(matches: Option<Vec<RawFlatMatch>>) -> Option<Vec<RawFlatMatch>> {
    matches.filter(|m| !m.is_empty())
}

/// Scores default to the primary season when no match list was found
fn combine_results(
    draw: SeasonResult<Draw>,
    matches: SeasonResult<Vec<RawFlatMatch>>,
    primary: i32,
) -> (FetchedResults, bool) {
    let complete = !draw.failed && !matches.failed;
    let results = FetchedResults {
        draw: draw.value,
        draw_year: draw.year,
        matches: matches.value.map(|m| extract_flat_matches(&m)).unwrap_or_default(),
        scores_year: matches.year.or(Some(primary)),
    };
    (results, complete)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use serde_json::json;

    fn seasons() -> SeasonFallback {
        SeasonFallback::new(2026, Some(2025))
    }

    fn raw_matches(value: serde_json::Value) -> Vec<RawFlatMatch> {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_found_in_primary_skips_fallback() {
        let mut tried = Vec::new();
        let result = first_season(seasons(), "Draw", 1, async |year| -> Result<Option<i32>> {
            tried.push(year);
            Ok(Some(year))
        })
        .await;

        assert_eq!(tried, vec![2026]);
        assert_eq!(result.value, Some(2026));
        assert_eq!(result.year, Some(2026));
        assert!(!result.failed);
    }

    #[tokio::test]
    async fn test_not_found_moves_to_fallback() {
        let mut tried = Vec::new();
        let result = first_season(seasons(), "Draw", 1, async |year| -> Result<Option<&'static str>> {
            tried.push(year);
            Ok((year == 2025).then_some("last season"))
        })
        .await;

        assert_eq!(tried, vec![2026, 2025]);
        assert_eq!(result.value, Some("last season"));
        assert_eq!(result.year, Some(2025));
        assert!(!result.failed);
    }

    #[tokio::test]
    async fn test_failed_fetch_stops_before_fallback() {
        let mut tried = Vec::new();
        let result = first_season(seasons(), "Draw", 1, async |year| -> Result<Option<&'static str>> {
            tried.push(year);
            if year == 2026 {
                Err(anyhow!("HTTP 500 Internal Server Error"))
            } else {
                Ok(Some("last season"))
            }
        })
        .await;

        assert_eq!(tried, vec![2026]);
        assert_eq!(result.value, None);
        assert_eq!(result.year, None);
        assert!(result.failed);
    }

    #[tokio::test]
    async fn test_missing_everywhere_is_not_a_failure() {
        let result = first_season(seasons(), "Match", 1, async |_| -> Result<Option<u32>> { Ok(None) }).await;

        assert_eq!(result.value, None);
        assert_eq!(result.year, None);
        assert!(!result.failed);
    }

    #[tokio::test]
    async fn test_empty_match_list_falls_back() {
        let mut tried = Vec::new();
        let matches = first_season(seasons(), "Match", 1, async |year| -> Result<Option<Vec<RawFlatMatch>>> {
            tried.push(year);
            let found = if year == 2026 {
                Vec::new()
            } else {
                raw_matches(json!([{"MatchID": "LS001", "RoundID": "F", "DrawMatchType": "S"}]))
            };
            Ok(non_empty(Some(found)))
        })
        .await;
        assert_eq!(tried, vec![2026, 2025]);

        let (results, complete) = combine_results(SeasonResult::default(), matches, 2026);
        assert!(complete);
        assert_eq!(results.matches.len(), 1);
        assert_eq!(results.scores_year, Some(2025));
    }

    #[test]
    fn test_nothing_found_keeps_primary_scores_year() {
        let (results, complete) = combine_results(SeasonResult::default(), SeasonResult::default(), 2026);

        assert!(complete);
        assert!(results.draw.is_none());
        assert_eq!(results.draw_year, None);
        assert!(results.matches.is_empty());
        assert_eq!(results.scores_year, Some(2026));
    }

    #[test]
    fn test_failed_fetch_marks_results_incomplete() {
        let failed = SeasonResult {
            value: None,
            year: None,
            failed: true,
        };
        let (_, complete) = combine_results(SeasonResult::default(), failed, 2026);
        assert!(!complete);
    }
}
