use crate::api::models::RawFlatMatch;

use super::models::{FlatMatch, MatchPlayer, RoundId, SetPair, Side};
use super::winner::winner_from_set_pairs;

/// Normalizes the provider's flat match list, keeping provider order
pub fn extract_flat_matches(raw: &[RawFlatMatch]) -> Vec<FlatMatch> {
    raw.iter().map(extract_flat_match).collect()
}

pub fn extract_flat_match(raw: &RawFlatMatch) -> FlatMatch {
    // A column counts as played when either side has a value
    let sets: Vec<SetPair> = raw
        .set_columns()
        .into_iter()
        .filter(|(a, b)| a.is_some() || b.is_some())
        .map(|(a, b)| SetPair { a, b })
        .collect();

    let winner_side = winner_from_set_pairs(
        &sets,
        raw.result_string.as_deref(),
        raw.player_name_last_a.as_deref(),
        raw.player_name_last_b.as_deref(),
    );

    FlatMatch {
        match_id: raw.match_id.clone(),
        round_id: raw.round_id.as_deref().and_then(RoundId::parse),
        draw_level_type: raw.draw_level_type.clone(),
        draw_match_type: raw.draw_match_type.clone(),
        match_state: raw.match_state.clone(),
        scheduled: raw.match_time_stamp.clone(),
        duration: raw.match_time_total.clone(),
        player_a: match_player(raw, Side::A),
        player_b: match_player(raw, Side::B),
        score_string: raw.score_string.clone(),
        result_string: raw.result_string.clone(),
        sets,
        winner_side,
    }
}

fn match_player(raw: &RawFlatMatch, side: Side) -> MatchPlayer {
    let (id, first, last, country) = match side {
        Side::A => (
            &raw.player_id_a,
            &raw.player_name_first_a,
            &raw.player_name_last_a,
            &raw.player_country_a,
        ),
        Side::B => (
            &raw.player_id_b,
            &raw.player_name_first_b,
            &raw.player_name_last_b,
            &raw.player_country_b,
        ),
    };

    let name = [first.as_deref(), last.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");

    MatchPlayer {
        id: id.clone(),
        name,
        last_name: last.clone(),
        country: country.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawFlatMatch {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_extracts_players_and_sets() {
        let m = extract_flat_match(&raw(json!({
            "MatchID": "MS001",
            "RoundID": "F",
            "DrawMatchType": "S",
            "DrawLevelType": "M",
            "MatchState": "F",
            "PlayerIDA": 320760,
            "PlayerNameFirstA": "Aryna",
            "PlayerNameLastA": "Sabalenka",
            "PlayerCountryA": "BLR",
            "PlayerIDB": "328560",
            "PlayerNameLastB": "Muchova",
            "ScoreSet1A": "6", "ScoreSet1B": 4,
            "ScoreSet2A": 6, "ScoreSet2B": "",
            "ScoreSet3A": "", "ScoreSet3B": null
        })));

        assert_eq!(m.round_id, Some(RoundId::Code("F".to_string())));
        assert_eq!(m.player_a.id.as_deref(), Some("320760"));
        assert_eq!(m.player_a.name, "Aryna Sabalenka");
        assert_eq!(m.player_b.name, "Muchova");
        assert_eq!(
            m.sets,
            vec![SetPair { a: Some(6), b: Some(4) }, SetPair { a: Some(6), b: None }]
        );
        assert_eq!(m.winner_side, Some(Side::A));
    }

    #[test]
    fn test_result_string_settles_split_sets() {
        let m = extract_flat_match(&raw(json!({
            "RoundID": "2",
            "PlayerNameLastA": "Kalinskaya",
            "PlayerNameLastB": "Svitolina",
            "ScoreSet1A": 6, "ScoreSet1B": 3,
            "ScoreSet2A": 2, "ScoreSet2B": 6,
            "ResultString": "Svitolina d Kalinskaya 3-6 6-2 ret."
        })));

        assert_eq!(m.round_id, Some(RoundId::Number(2)));
        assert_eq!(m.winner_side, Some(Side::B));
    }

    #[test]
    fn test_unplayed_match() {
        let matches = extract_flat_matches(&[raw(json!({"MatchID": "MS015"})), RawFlatMatch::default()]);

        assert_eq!(matches.len(), 2);
        assert!(matches[0].sets.is_empty());
        assert_eq!(matches[0].winner_side, None);
        assert_eq!(matches[1].player_a.name, "");
    }
}
