use chrono::{DateTime, Utc};
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

pub const PLACEHOLDER_NAME: &str = "TBD";

// --- Scores ---

/// One set: games won by each side, plus the tiebreak loser's points if given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetResult {
    pub a: u32,
    pub b: u32,
    pub tiebreak: Option<u32>,
}

impl SetResult {
    pub fn new(a: u32, b: u32, tiebreak: Option<u32>) -> Self {
        Self { a, b, tiebreak }
    }

    pub fn winner(&self) -> Option<Side> {
        match self.a.cmp(&self.b) {
            Ordering::Greater => Some(Side::A),
            Ordering::Less => Some(Side::B),
            Ordering::Equal => None,
        }
    }

    /// A tiebreak only means something for a 7-6 style set.
    pub fn has_meaningful_tiebreak(&self) -> bool {
        self.tiebreak.is_some() && self.a.abs_diff(self.b) == 1
    }

    /// Provider compact form (`"75(3)"`); falls back to the hyphenated form
    /// when a side has more than nine games.
    pub fn to_compact(&self) -> String {
        if self.a > 9 || self.b > 9 {
            return self.to_string();
        }
        match self.tiebreak {
            Some(tb) => format!("{}{}({})", self.a, self.b, tb),
            None => format!("{}{}", self.a, self.b),
        }
    }
}

impl fmt::Display for SetResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)?;
        if let Some(tb) = self.tiebreak {
            write!(f, "({})", tb)?;
        }
        Ok(())
    }
}

pub type ScoreLine = Vec<SetResult>;

/// Side of a match: `A` is the first listed competitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

// --- Rounds ---

/// Opaque provider round token (`7`, `1`, `"F"`, `"QF"`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoundId {
    Number(i64),
    Code(String),
}

impl RoundId {
    /// Numeric text becomes `Number`; blank text is no identifier at all.
    pub fn parse(raw: &str) -> Option<RoundId> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        Some(match raw.parse::<i64>() {
            Ok(n) => RoundId::Number(n),
            Err(_) => RoundId::Code(raw.to_string()),
        })
    }
}

/// Numbers compare numerically, codes lexically, and every number sorts
/// below every code.
impl Ord for RoundId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (RoundId::Number(a), RoundId::Number(b)) => a.cmp(b),
            (RoundId::Code(a), RoundId::Code(b)) => a.cmp(b),
            (RoundId::Number(_), RoundId::Code(_)) => Ordering::Less,
            (RoundId::Code(_), RoundId::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for RoundId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundId::Number(n) => write!(f, "{}", n),
            RoundId::Code(code) => f.write_str(code),
        }
    }
}

impl Serialize for RoundId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RoundId::Number(n) => serializer.serialize_i64(*n),
            RoundId::Code(code) => serializer.serialize_str(code),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RoundIdInner {
    Number(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for RoundId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RoundIdInner::deserialize(deserializer)? {
            RoundIdInner::Number(n) => RoundId::Number(n),
            RoundIdInner::Text(text) => {
                RoundId::parse(&text).unwrap_or(RoundId::Code(text))
            }
        })
    }
}

/// Normalized round name, earliest round first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CanonicalRound {
    R128,
    R64,
    R32,
    R16,
    QF,
    SF,
    F,
}

impl CanonicalRound {
    pub fn as_str(&self) -> &str {
        match self {
            CanonicalRound::R128 => "R128",
            CanonicalRound::R64 => "R64",
            CanonicalRound::R32 => "R32",
            CanonicalRound::R16 => "R16",
            CanonicalRound::QF => "QF",
            CanonicalRound::SF => "SF",
            CanonicalRound::F => "F",
        }
    }
}

impl fmt::Display for CanonicalRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Draw ---

/// How a competitor got into the draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Direct,
    Qualifier,
    WildCard,
    /// Any other entry code (lucky loser, protected ranking, ...)
    Other(String),
}

/// One side of a bracket slot or match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub name: String,
    pub seed: Option<String>,
    pub entry_type: Option<String>,
    pub entry_kind: EntryKind,
    pub slot: Option<String>,
    pub player_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub country: Option<String>,
}

impl Competitor {
    pub fn placeholder() -> Self {
        Self {
            name: PLACEHOLDER_NAME.to_string(),
            seed: None,
            entry_type: None,
            entry_kind: EntryKind::Direct,
            slot: None,
            player_id: None,
            first_name: None,
            last_name: None,
            country: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.name == PLACEHOLDER_NAME && self.player_id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawLine {
    pub pos: Option<u32>,
    pub rank: Option<String>,
    pub competitor: Competitor,
}

/// Independent classification counts over the draw lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryCounts {
    pub seeds: usize,
    pub qualifiers: usize,
    pub wildcards: usize,
    pub byes: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrizePlace {
    pub id: Option<String>,
    pub name: Option<String>,
    pub points: Option<String>,
    pub prize: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawMatch {
    pub id: Option<String>,
    pub title: Option<String>,
    pub player_a: Competitor,
    pub player_b: Competitor,
    pub score_text: Option<String>,
    pub sets: ScoreLine,
    pub score: String,
    pub winner_marker: Option<String>,
    pub winner: Option<Side>,
    pub summary: Option<String>,
    pub display: String,
}

impl DrawMatch {
    pub fn competitor(&self, side: Side) -> &Competitor {
        match side {
            Side::A => &self.player_a,
            Side::B => &self.player_b,
        }
    }

    pub fn winner_competitor(&self) -> Option<&Competitor> {
        self.winner.map(|side| self.competitor(side))
    }

    pub fn loser_competitor(&self) -> Option<&Competitor> {
        self.winner.map(|side| self.competitor(side.other()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawRound {
    pub round_id: Option<RoundId>,
    pub label: Option<CanonicalRound>,
    pub name: String,
    pub matches: Vec<DrawMatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draw {
    pub draw_size: Option<u32>,
    pub labeled_draw_size: u32,
    pub surface: Option<String>,
    pub event_type: Option<String>,
    pub draw_type: Option<String>,
    pub lines: Vec<DrawLine>,
    pub counts: EntryCounts,
    pub breakdown: Vec<PrizePlace>,
    pub rounds: Vec<DrawRound>,
    pub unmapped_round_ids: Vec<RoundId>,
}

// --- Flat match list ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetPair {
    pub a: Option<u32>,
    pub b: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchPlayer {
    pub id: Option<String>,
    pub name: String,
    pub last_name: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatMatch {
    pub match_id: Option<String>,
    pub round_id: Option<RoundId>,
    pub draw_level_type: Option<String>,
    pub draw_match_type: Option<String>,
    pub match_state: Option<String>,
    pub scheduled: Option<String>,
    pub duration: Option<String>,
    pub player_a: MatchPlayer,
    pub player_b: MatchPlayer,
    pub score_string: Option<String>,
    pub result_string: Option<String>,
    pub sets: Vec<SetPair>,
    pub winner_side: Option<Side>,
}

impl FlatMatch {
    pub fn player(&self, side: Side) -> &MatchPlayer {
        match side {
            Side::A => &self.player_a,
            Side::B => &self.player_b,
        }
    }
}

// --- Champion ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finalist {
    pub id: Option<String>,
    pub name: String,
    pub country: Option<String>,
}

/// Which source settled the champion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChampionSource {
    DrawFinal,
    MatchList,
    WinnersList,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChampionResolution {
    pub champion: Option<Finalist>,
    pub runner_up: Option<Finalist>,
    pub source: Option<ChampionSource>,
}

// --- Output record ---

/// Normalized draw-and-results record, one per tournament-year fetch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentRecord {
    pub order: usize,
    pub tournament_group_id: Option<i64>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub level: Option<String>,
    pub level_number: Option<String>,
    pub year: Option<i32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub surface: Option<String>,
    pub indoor_outdoor: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub status: Option<String>,
    pub draw_size_singles: Option<u32>,
    pub draw_size_doubles: Option<u32>,
    pub prize_money: Option<serde_json::Value>,
    pub prize_money_currency: Option<String>,
    pub champion: Option<Finalist>,
    pub runner_up: Option<Finalist>,
    pub champion_source: Option<ChampionSource>,
    pub draw_year: Option<i32>,
    pub draw: Option<Draw>,
    pub scores_year: Option<i32>,
    pub matches: Vec<FlatMatch>,
    pub generated_at: DateTime<Utc>,
}
