use anyhow::{Context, Result};
use chrono::Utc;
use log::{info, warn};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::models::TournamentSummary;
use crate::api::parsers;
use crate::config::{get_provider_codes, AppConfig, ProviderCodes};
use crate::domain::{build_record, extract_flat_matches, DrawAssembler, FetchedResults, ScoreTokenizer, TournamentRecord};
use crate::errors::{parse_context, with_parse_context};
use crate::store::RecordStore;

/// Saved provider payloads to normalize
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeInput {
    pub draw: PathBuf,
    pub matches: Option<PathBuf>,
    pub tournament: Option<PathBuf>,
    pub year: Option<i32>,
}

/// Builds a record from payloads on disk, without touching the network
pub struct NormalizeService {
    store: RecordStore,
    tokenizer: ScoreTokenizer,
    codes: ProviderCodes,
}

impl NormalizeService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            store: RecordStore::new(&config.output.output_dir)?,
            tokenizer: ScoreTokenizer::new()?,
            codes: get_provider_codes(),
        })
    }

    pub fn run(&self, input: &NormalizeInput) -> Result<PathBuf> {
        info!("=== Normalizing {} ===", input.draw.display());

        let record = self.normalize(input)?;
        let path = self.store.save_record(&record)?;

        info!("  → Wrote {}", path.display());
        Ok(path)
    }

    pub fn normalize(&self, input: &NormalizeInput) -> Result<TournamentRecord> {
        let mut summary = match &input.tournament {
            Some(path) => load_summary(path)?,
            None => TournamentSummary::default(),
        };
        if summary.year.is_none() {
            summary.year = input.year;
        }

        let draw_payload = read_payload(&input.draw)?;
        let draw = match with_parse_context(parsers::parse_draw_response(draw_payload), "draw payload")? {
            Some(event) => {
                let assembler = DrawAssembler::new(&self.tokenizer, &self.codes);
                Some(assembler.assemble(&event, summary.singles_draw_size))
            }
            None => {
                warn!("No events in {}", input.draw.display());
                None
            }
        };

        let matches = match &input.matches {
            Some(path) => {
                let payload = read_payload(path)?;
                with_parse_context(parsers::parse_matches_response(payload), "match list")?
            }
            None => Vec::new(),
        };

        let results = FetchedResults {
            draw_year: draw.as_ref().and(summary.year),
            draw,
            scores_year: (!matches.is_empty()).then_some(summary.year).flatten(),
            matches: extract_flat_matches(&matches),
        };
        Ok(build_record(1, &summary, results, &self.codes, self.store.naming(), Utc::now()))
    }
}

fn read_payload(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| parse_context(&path.display().to_string()))
}

/// A single listing entry, or a listing page whose first entry is used
fn load_summary(path: &Path) -> Result<TournamentSummary> {
    let payload = read_payload(path)?;
    if payload.get("content").is_some() {
        let page = with_parse_context(parsers::parse_tournament_page(payload), "tournament listing")?;
        return page
            .content
            .into_iter()
            .next()
            .with_context(|| format!("No tournaments listed in {}", path.display()));
    }
    serde_json::from_value(payload).with_context(|| parse_context("tournament entry"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CanonicalRound, ChampionSource};
    use serde_json::json;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("wta_normalize_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write(dir: &Path, name: &str, value: Value) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, value.to_string()).unwrap();
        path
    }

    fn draw_payload() -> Value {
        let event = json!({
            "EventTypeCode": "LS",
            "DrawSize": 8,
            "Draw": {"DrawLine": [
                {"Pos": 1, "Seed": "1", "DisplayLine": "Sabalenka"},
                {"Pos": 2, "EntryType": "Q", "DisplayLine": "Kudermetova"}
            ]},
            "Results": {"Round": [
                {"roundId": "2", "Match": {"ResultScore": "63 64",
                    "Players": {"PT": [{"PTDisplayLine": "Sabalenka"}, {"PTDisplayLine": "Kudermetova"}]}}},
                {"roundId": "1", "Match": {"Result": {"winnerPTId": "B"},
                    "Players": {"PT": [{"PTDisplayLine": "Sabalenka"}, {"PTDisplayLine": "Muchova"}]}}}
            ]}
        });
        json!({"drawInfo": [event_wrapper(event).to_string()]})
    }

    fn event_wrapper(event: Value) -> Value {
        json!({"Draws": {"Events": {"Event": [event]}}})
    }

    #[test]
    fn test_normalize_saved_payloads() {
        let dir = temp_dir("payloads");
        let draw = write(&dir, "draw.json", draw_payload());
        let tournament = write(&dir, "tournament.json", json!({
            "content": [{"tournamentGroup": {"id": 2077, "name": "Brisbane"}, "year": 2026}],
            "pageInfo": {"numPages": 1}
        }));

        let config = AppConfig::new().with_output_dir(Some(dir.join("out").display().to_string()));
        let service = NormalizeService::new(&config).unwrap();
        let input = NormalizeInput {
            draw,
            matches: None,
            tournament: Some(tournament),
            year: Some(2025),
        };

        let record = service.normalize(&input).unwrap();
        assert_eq!(record.year, Some(2026));
        assert_eq!(record.draw_year, Some(2026));
        assert_eq!(record.scores_year, None);

        let draw = record.draw.as_ref().unwrap();
        assert_eq!(draw.counts.seeds, 1);
        assert_eq!(draw.counts.qualifiers, 1);
        assert_eq!(draw.rounds[1].label, Some(CanonicalRound::SF));
        assert_eq!(record.champion.as_ref().unwrap().name, "Muchova");
        assert_eq!(record.champion_source, Some(ChampionSource::DrawFinal));

        let path = service.run(&input).unwrap();
        assert!(path.ends_with("001_brisbane.json"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_matches_payload_settles_champion() {
        let dir = temp_dir("matches");
        let draw = write(&dir, "draw.json", json!({"drawInfo": []}));
        let matches = write(&dir, "matches.json", json!({"matches": [{
            "RoundID": "F", "DrawMatchType": "S",
            "PlayerNameFirstA": "Madison", "PlayerNameLastA": "Keys",
            "PlayerNameFirstB": "Aryna", "PlayerNameLastB": "Sabalenka",
            "ScoreSet1A": 6, "ScoreSet1B": 3, "ScoreSet2A": 2, "ScoreSet2B": 6,
            "ScoreSet3A": 7, "ScoreSet3B": 5
        }]}));

        let config = AppConfig::new().with_output_dir(Some(dir.join("out").display().to_string()));
        let service = NormalizeService::new(&config).unwrap();
        let record = service
            .normalize(&NormalizeInput { draw, matches: Some(matches), tournament: None, year: Some(2025) })
            .unwrap();

        assert!(record.draw.is_none());
        assert_eq!(record.draw_year, None);
        assert_eq!(record.scores_year, Some(2025));
        assert_eq!(record.champion.unwrap().name, "Madison Keys");
        assert_eq!(record.runner_up.unwrap().name, "Aryna Sabalenka");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_draw_file_is_an_error() {
        let dir = temp_dir("missing");
        let config = AppConfig::new().with_output_dir(Some(dir.display().to_string()));
        let service = NormalizeService::new(&config).unwrap();

        let input = NormalizeInput {
            draw: dir.join("nope.json"),
            matches: None,
            tournament: None,
            year: None,
        };
        assert!(service.normalize(&input).is_err());

        fs::remove_dir_all(&dir).unwrap();
    }
}
