use log::debug;

use crate::api::models::{DrawEvent, RawDrawLine, RawMatch, RawParticipant, RawPlace, RawPlayer};
use crate::config::ProviderCodes;

use super::models::{
    Competitor, Draw, DrawLine, DrawMatch, DrawRound, EntryCounts, EntryKind, PrizePlace, RoundId,
    Side, PLACEHOLDER_NAME,
};
use super::rounds::{resolve_round_labels, RoundLabels};
use super::score::ScoreTokenizer;
use super::winner::{resolve_winner, WinnerMarker};

const BYE: &str = "bye";

/// Builds the normalized draw for one provider event
pub struct DrawAssembler<'a> {
    tokenizer: &'a ScoreTokenizer,
    codes: &'a ProviderCodes,
}

impl<'a> DrawAssembler<'a> {
    pub fn new(tokenizer: &'a ScoreTokenizer, codes: &'a ProviderCodes) -> Self {
        Self { tokenizer, codes }
    }

    /// `fallback_draw_size` is used when the event does not declare one;
    /// failing both, the number of draw lines is taken.
    pub fn assemble(&self, event: &DrawEvent, fallback_draw_size: Option<u32>) -> Draw {
        let lines: Vec<DrawLine> = event.lines().iter().map(|l| self.build_line(l)).collect();
        let counts = self.classify(&lines);

        let labeled_draw_size = event
            .draw_size
            .or(fallback_draw_size)
            .unwrap_or(lines.len() as u32);

        let round_ids: Vec<Option<RoundId>> = event
            .rounds()
            .iter()
            .map(|r| r.round_id.as_deref().and_then(RoundId::parse))
            .collect();
        let labels = resolve_round_labels(labeled_draw_size, round_ids.iter().flatten());

        let rounds = event
            .rounds()
            .iter()
            .zip(round_ids)
            .map(|(raw, round_id)| {
                let matches = raw
                    .matches
                    .iter()
                    .cloned()
                    .filter_map(|m| m.decode())
                    .map(|m| self.build_match(&m))
                    .collect();
                self.build_round(round_id, &labels, matches)
            })
            .collect();

        Draw {
            draw_size: event.draw_size,
            labeled_draw_size,
            surface: event.surface.clone(),
            event_type: event.event_type_code.clone(),
            draw_type: event.draw_type_title.clone(),
            lines,
            counts,
            breakdown: event.places().iter().map(build_place).collect(),
            rounds,
            unmapped_round_ids: labels.unmapped.clone(),
        }
    }

    // --- Draw lines ---

    fn build_line(&self, line: &RawDrawLine) -> DrawLine {
        let player = line.player();
        // Bye lines keep their literal display text
        let name = line
            .display
            .clone()
            .or_else(|| player.and_then(full_name))
            .unwrap_or_else(|| PLACEHOLDER_NAME.to_string());

        DrawLine {
            pos: line.pos,
            rank: line.rank.clone(),
            competitor: self.build_competitor(
                name,
                line.seed.clone(),
                line.entry_type.clone(),
                None,
                player,
            ),
        }
    }

    /// Each predicate is counted on its own; a slot may land in several buckets
    pub fn classify(&self, lines: &[DrawLine]) -> EntryCounts {
        let mut counts = EntryCounts::default();
        for line in lines {
            let competitor = &line.competitor;
            if is_seeded(competitor.seed.as_deref()) {
                counts.seeds += 1;
            }
            if let Some(entry_type) = competitor.entry_type.as_deref() {
                if self.codes.is_qualifier(entry_type) {
                    counts.qualifiers += 1;
                }
                if self.codes.is_wildcard(entry_type) {
                    counts.wildcards += 1;
                }
            }
            if competitor.name.eq_ignore_ascii_case(BYE) {
                counts.byes += 1;
            }
        }
        counts
    }

    // --- Rounds and matches ---

    fn build_round(
        &self,
        round_id: Option<RoundId>,
        labels: &RoundLabels,
        matches: Vec<DrawMatch>,
    ) -> DrawRound {
        DrawRound {
            label: round_id.as_ref().and_then(|id| labels.label(id)),
            name: labels.display_name(round_id.as_ref()),
            round_id,
            matches,
        }
    }

    pub fn build_match(&self, raw: &RawMatch) -> DrawMatch {
        let participants = raw.participants();
        let player_a = self.match_competitor(participants.first());
        let player_b = self.match_competitor(participants.get(1));

        let score_text = raw.score_text().map(str::to_string);
        let tokenized = self.tokenizer.tokenize_opt(score_text.as_deref());

        let winner_marker = raw.winner_slot().map(str::to_string);
        let marker = WinnerMarker::resolve(
            winner_marker.as_deref(),
            player_a.slot.as_deref(),
            player_b.slot.as_deref(),
        );
        let winner = resolve_winner(self.tokenizer, score_text.as_deref(), marker);

        let summary = raw.name_and_score().map(str::to_string);
        let display = match summary.as_deref() {
            Some(line) => line.to_string(),
            None => match_line(&player_a, &player_b, winner, &tokenized.display),
        };
        debug!("Assembled match {:?}: {}", raw.id, display);

        DrawMatch {
            id: raw.id.clone(),
            title: raw.display_name.clone(),
            player_a,
            player_b,
            score_text,
            sets: tokenized.sets,
            score: tokenized.display,
            winner_marker,
            winner,
            summary,
            display,
        }
    }

    fn match_competitor(&self, participant: Option<&RawParticipant>) -> Competitor {
        let Some(pt) = participant else {
            return Competitor::placeholder();
        };
        let name = pt
            .display
            .clone()
            .or_else(|| pt.player.as_ref().and_then(full_name))
            .unwrap_or_else(|| PLACEHOLDER_NAME.to_string());

        self.build_competitor(
            name,
            pt.seed.clone(),
            pt.entry_type.clone(),
            pt.id.clone(),
            pt.player.as_ref(),
        )
    }

    fn build_competitor(
        &self,
        name: String,
        seed: Option<String>,
        entry_type: Option<String>,
        slot: Option<String>,
        player: Option<&RawPlayer>,
    ) -> Competitor {
        Competitor {
            name,
            seed,
            entry_kind: self.entry_kind(entry_type.as_deref()),
            entry_type,
            slot,
            player_id: player.and_then(|p| p.id.clone()),
            first_name: player.and_then(|p| p.first_name.clone()),
            last_name: player.and_then(|p| p.last_name.clone()),
            country: player.and_then(|p| p.country.clone()),
        }
    }

    fn entry_kind(&self, entry_type: Option<&str>) -> EntryKind {
        match entry_type {
            None => EntryKind::Direct,
            Some(code) if self.codes.is_qualifier(code) => EntryKind::Qualifier,
            Some(code) if self.codes.is_wildcard(code) => EntryKind::WildCard,
            Some(code) => EntryKind::Other(code.to_string()),
        }
    }
}

fn is_seeded(seed: Option<&str>) -> bool {
    seed.is_some_and(|s| !s.is_empty() && s != "0")
}

fn full_name(player: &RawPlayer) -> Option<String> {
    let parts: Vec<&str> = [player.first_name.as_deref(), player.last_name.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if parts.is_empty() { None } else { Some(parts.join(" ")) }
}

fn build_place(place: &RawPlace) -> PrizePlace {
    PrizePlace {
        id: place.id.clone(),
        name: place.name.clone(),
        points: place.points.clone(),
        prize: place.prize.clone(),
    }
}

/// `"W def L 6-4 6-2"`, `"A vs B 6-4"`, `"W def L"` or `"A vs B"`
fn match_line(a: &Competitor, b: &Competitor, winner: Option<Side>, score: &str) -> String {
    let head = match winner {
        Some(side) => {
            let (w, l) = match side {
                Side::A => (a, b),
                Side::B => (b, a),
            };
            format!("{} def {}", w.name, l.name)
        }
        None => format!("{} vs {}", a.name, b.name),
    };
    if score.is_empty() { head } else { format!("{} {}", head, score) }
}
