use serde::Deserialize;
use serde_json::Value;

use super::de::{self, Embedded};

// --- Tournament listing ---

#[derive(Debug, Default, Deserialize)]
pub struct TournamentListResponse {
    #[serde(default, deserialize_with = "de::list")]
    pub content: Vec<TournamentSummary>,
    #[serde(rename = "pageInfo", default, deserialize_with = "de::nested")]
    pub page_info: Option<PageInfo>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageInfo {
    #[serde(rename = "numPages", default, deserialize_with = "de::opt_u32")]
    pub num_pages: Option<u32>,
}

/// Tournament entry from the season listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TournamentSummary {
    #[serde(rename = "tournamentGroup", default, deserialize_with = "de::nested")]
    pub group: Option<TournamentGroup>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub level: Option<String>,
    #[serde(default, deserialize_with = "de::opt_i32")]
    pub year: Option<i32>,
    #[serde(rename = "startDate", default, deserialize_with = "de::opt_string")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", default, deserialize_with = "de::opt_string")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub surface: Option<String>,
    #[serde(rename = "inOutdoor", default, deserialize_with = "de::opt_string")]
    pub in_outdoor: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub status: Option<String>,
    #[serde(rename = "singlesDrawSize", default, deserialize_with = "de::opt_u32")]
    pub singles_draw_size: Option<u32>,
    #[serde(rename = "doublesDrawSize", default, deserialize_with = "de::opt_u32")]
    pub doubles_draw_size: Option<u32>,
    #[serde(rename = "prizeMoney", default)]
    pub prize_money: Option<Value>,
    #[serde(rename = "prizeMoneyCurrency", default, deserialize_with = "de::opt_string")]
    pub prize_money_currency: Option<String>,
    #[serde(default, deserialize_with = "de::list")]
    pub winners: Vec<WinnerEntry>,
}

impl TournamentSummary {
    pub fn group_id(&self) -> Option<i64> {
        self.group.as_ref().and_then(|g| g.id)
    }

    pub fn group_name(&self) -> Option<&str> {
        self.group.as_ref().and_then(|g| g.name.as_deref())
    }

    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().or_else(|| self.group_name())
    }

    pub fn display_level(&self) -> Option<&str> {
        self.level
            .as_deref()
            .or_else(|| self.group.as_ref().and_then(|g| g.level.as_deref()))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TournamentGroup {
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WinnerEntry {
    #[serde(default, deserialize_with = "de::nested")]
    pub singles: Option<WinnerSingles>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WinnerSingles {
    #[serde(default, deserialize_with = "de::nested")]
    pub player: Option<WinnerPlayer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WinnerPlayer {
    #[serde(default, deserialize_with = "de::opt_string")]
    pub id: Option<String>,
    #[serde(rename = "fullName", default, deserialize_with = "de::opt_string")]
    pub full_name: Option<String>,
    #[serde(rename = "firstName", default, deserialize_with = "de::opt_string")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default, deserialize_with = "de::opt_string")]
    pub last_name: Option<String>,
    #[serde(rename = "countryCode", default, deserialize_with = "de::opt_string")]
    pub country_code: Option<String>,
}

// --- Draw payload ---

#[derive(Debug, Default, Deserialize)]
pub struct DrawResponse {
    #[serde(rename = "drawInfo", default, deserialize_with = "de::list")]
    pub draw_info: Vec<Embedded<DrawInfo>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DrawInfo {
    #[serde(rename = "Draws", default, deserialize_with = "de::nested")]
    pub draws: Option<DrawsBlock>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DrawsBlock {
    #[serde(rename = "Events", default, deserialize_with = "de::nested")]
    pub events: Option<EventsBlock>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventsBlock {
    #[serde(rename = "Event", default, deserialize_with = "de::list")]
    pub event: Vec<DrawEvent>,
}

/// One event (singles, doubles, qualifying) of a tournament draw
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DrawEvent {
    #[serde(rename = "DrawSize", default, deserialize_with = "de::opt_u32")]
    pub draw_size: Option<u32>,
    #[serde(rename = "Surface", default, deserialize_with = "de::opt_string")]
    pub surface: Option<String>,
    #[serde(rename = "EventTypeCode", default, deserialize_with = "de::opt_string")]
    pub event_type_code: Option<String>,
    #[serde(rename = "DrawTypeTitle", default, deserialize_with = "de::opt_string")]
    pub draw_type_title: Option<String>,
    #[serde(rename = "Draw", default, deserialize_with = "de::nested")]
    pub draw: Option<DrawLinesBlock>,
    #[serde(rename = "Breakdown", default, deserialize_with = "de::nested")]
    pub breakdown: Option<BreakdownBlock>,
    #[serde(rename = "Results", default, deserialize_with = "de::nested")]
    pub results: Option<ResultsBlock>,
}

impl DrawEvent {
    pub fn lines(&self) -> &[RawDrawLine] {
        self.draw.as_ref().map(|d| d.lines.as_slice()).unwrap_or_default()
    }

    pub fn places(&self) -> &[RawPlace] {
        self.breakdown.as_ref().map(|b| b.places.as_slice()).unwrap_or_default()
    }

    pub fn rounds(&self) -> &[RawRound] {
        self.results.as_ref().map(|r| r.rounds.as_slice()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DrawLinesBlock {
    #[serde(rename = "DrawLine", default, deserialize_with = "de::list")]
    pub lines: Vec<RawDrawLine>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDrawLine {
    #[serde(rename = "Pos", default, deserialize_with = "de::opt_u32")]
    pub pos: Option<u32>,
    #[serde(rename = "Seed", default, deserialize_with = "de::opt_string")]
    pub seed: Option<String>,
    #[serde(rename = "Rank", default, deserialize_with = "de::opt_string")]
    pub rank: Option<String>,
    #[serde(rename = "EntryType", default, deserialize_with = "de::opt_string")]
    pub entry_type: Option<String>,
    #[serde(rename = "DisplayLine", default, deserialize_with = "de::opt_verbatim")]
    pub display: Option<String>,
    #[serde(rename = "Players", default, deserialize_with = "de::nested")]
    pub players: Option<LinePlayers>,
}

impl RawDrawLine {
    /// Singles lines carry one player, sometimes wrapped in a list.
    pub fn player(&self) -> Option<&RawPlayer> {
        self.players.as_ref().and_then(|p| p.player.first())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LinePlayers {
    #[serde(rename = "Player", default, deserialize_with = "de::list")]
    pub player: Vec<RawPlayer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlayer {
    #[serde(default, deserialize_with = "de::opt_string")]
    pub id: Option<String>,
    #[serde(rename = "FirstName", default, deserialize_with = "de::opt_string")]
    pub first_name: Option<String>,
    #[serde(rename = "SurName", default, deserialize_with = "de::opt_string")]
    pub last_name: Option<String>,
    #[serde(rename = "Country", default, deserialize_with = "de::opt_string")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BreakdownBlock {
    #[serde(rename = "Place", default, deserialize_with = "de::list")]
    pub places: Vec<RawPlace>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlace {
    #[serde(default, deserialize_with = "de::opt_string")]
    pub id: Option<String>,
    #[serde(rename = "Name", default, deserialize_with = "de::opt_string")]
    pub name: Option<String>,
    #[serde(rename = "PointsRound", default, deserialize_with = "de::opt_string")]
    pub points: Option<String>,
    #[serde(rename = "PrizeRound", default, deserialize_with = "de::opt_string")]
    pub prize: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultsBlock {
    #[serde(rename = "Round", default, deserialize_with = "de::list")]
    pub rounds: Vec<RawRound>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRound {
    #[serde(rename = "roundId", default, deserialize_with = "de::opt_string")]
    pub round_id: Option<String>,
    #[serde(rename = "Match", default, deserialize_with = "de::list")]
    pub matches: Vec<Embedded<RawMatch>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMatch {
    #[serde(rename = "Id", default, deserialize_with = "de::opt_string")]
    pub id: Option<String>,
    #[serde(rename = "DisplayName", default, deserialize_with = "de::opt_string")]
    pub display_name: Option<String>,
    #[serde(rename = "ResultScore", default, deserialize_with = "de::opt_string")]
    pub result_score: Option<String>,
    #[serde(rename = "Result", default, deserialize_with = "de::nested")]
    pub result: Option<RawMatchResult>,
    #[serde(rename = "Players", default, deserialize_with = "de::nested")]
    pub players: Option<MatchParticipants>,
}

impl RawMatch {
    pub fn score_text(&self) -> Option<&str> {
        self.result_score
            .as_deref()
            .or_else(|| self.result.as_ref().and_then(|r| r.result_score.as_deref()))
    }

    pub fn winner_slot(&self) -> Option<&str> {
        self.result.as_ref().and_then(|r| r.winner_slot.as_deref())
    }

    pub fn name_and_score(&self) -> Option<&str> {
        self.result.as_ref().and_then(|r| r.name_and_score.as_deref())
    }

    pub fn participants(&self) -> &[RawParticipant] {
        self.players.as_ref().map(|p| p.participants.as_slice()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMatchResult {
    #[serde(rename = "ResultScore", default, deserialize_with = "de::opt_string")]
    pub result_score: Option<String>,
    #[serde(rename = "winnerPTId", default, deserialize_with = "de::opt_string")]
    pub winner_slot: Option<String>,
    #[serde(rename = "ResultNameAndScore", default, deserialize_with = "de::opt_string")]
    pub name_and_score: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchParticipants {
    #[serde(rename = "PT", default, deserialize_with = "de::list")]
    pub participants: Vec<RawParticipant>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawParticipant {
    #[serde(default, deserialize_with = "de::opt_string")]
    pub id: Option<String>,
    #[serde(rename = "PTDisplayLine", default, deserialize_with = "de::opt_string")]
    pub display: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub seed: Option<String>,
    #[serde(rename = "eType", default, deserialize_with = "de::opt_string")]
    pub entry_type: Option<String>,
    #[serde(rename = "Player", default, deserialize_with = "de::nested")]
    pub player: Option<RawPlayer>,
}

// --- Flat match payload ---

#[derive(Debug, Default, Deserialize)]
pub struct MatchesResponse {
    #[serde(default, deserialize_with = "de::list")]
    pub matches: Vec<RawFlatMatch>,
}

/// Flat per-tournament match entry, provider field names
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawFlatMatch {
    #[serde(rename = "MatchID", default, deserialize_with = "de::opt_string")]
    pub match_id: Option<String>,
    #[serde(rename = "RoundID", default, deserialize_with = "de::opt_string")]
    pub round_id: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub draw_level_type: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub draw_match_type: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub match_state: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub match_time_stamp: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub match_time_total: Option<String>,

    #[serde(rename = "PlayerIDA", default, deserialize_with = "de::opt_string")]
    pub player_id_a: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub player_name_first_a: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub player_name_last_a: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub player_country_a: Option<String>,

    #[serde(rename = "PlayerIDB", default, deserialize_with = "de::opt_string")]
    pub player_id_b: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub player_name_first_b: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub player_name_last_b: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub player_country_b: Option<String>,

    #[serde(default, deserialize_with = "de::opt_string")]
    pub score_string: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub result_string: Option<String>,

    #[serde(rename = "ScoreSet1A", default, deserialize_with = "de::opt_u32")]
    pub score_set1_a: Option<u32>,
    #[serde(rename = "ScoreSet1B", default, deserialize_with = "de::opt_u32")]
    pub score_set1_b: Option<u32>,
    #[serde(rename = "ScoreSet2A", default, deserialize_with = "de::opt_u32")]
    pub score_set2_a: Option<u32>,
    #[serde(rename = "ScoreSet2B", default, deserialize_with = "de::opt_u32")]
    pub score_set2_b: Option<u32>,
    #[serde(rename = "ScoreSet3A", default, deserialize_with = "de::opt_u32")]
    pub score_set3_a: Option<u32>,
    #[serde(rename = "ScoreSet3B", default, deserialize_with = "de::opt_u32")]
    pub score_set3_b: Option<u32>,
    #[serde(rename = "ScoreSet4A", default, deserialize_with = "de::opt_u32")]
    pub score_set4_a: Option<u32>,
    #[serde(rename = "ScoreSet4B", default, deserialize_with = "de::opt_u32")]
    pub score_set4_b: Option<u32>,
    #[serde(rename = "ScoreSet5A", default, deserialize_with = "de::opt_u32")]
    pub score_set5_a: Option<u32>,
    #[serde(rename = "ScoreSet5B", default, deserialize_with = "de::opt_u32")]
    pub score_set5_b: Option<u32>,
}

impl RawFlatMatch {
    /// The five provider set columns, side A first.
    pub fn set_columns(&self) -> [(Option<u32>, Option<u32>); 5] {
        [
            (self.score_set1_a, self.score_set1_b),
            (self.score_set2_a, self.score_set2_b),
            (self.score_set3_a, self.score_set3_b),
            (self.score_set4_a, self.score_set4_b),
            (self.score_set5_a, self.score_set5_b),
        ]
    }
}
