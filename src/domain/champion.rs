use log::debug;

use crate::api::models::{WinnerEntry, WinnerPlayer};
use crate::config::ProviderCodes;

use super::models::{
    ChampionResolution, ChampionSource, Competitor, Draw, Finalist, FlatMatch, MatchPlayer, RoundId,
};

/// Settles champion and runner-up from the first source that can tell:
/// the draw's final, then the flat match list, then the listing's winners.
pub fn resolve_champion(
    draw: Option<&Draw>,
    flat_matches: &[FlatMatch],
    winners: &[WinnerEntry],
    codes: &ProviderCodes,
) -> ChampionResolution {
    if let Some(resolution) = draw.and_then(|d| from_draw_final(d, codes)) {
        return resolution;
    }
    debug!("No decided final in the draw, trying the match list");

    if let Some(resolution) = from_match_list(flat_matches, codes) {
        return resolution;
    }
    debug!("No decided final in the match list, trying the winners list");

    from_winners_list(winners).unwrap_or_default()
}

pub fn is_final_round(id: &RoundId, codes: &ProviderCodes) -> bool {
    match id {
        RoundId::Number(n) => codes.final_round_numbers.contains(n),
        RoundId::Code(code) => codes
            .final_round_codes
            .iter()
            .any(|c| c.eq_ignore_ascii_case(code.trim())),
    }
}

fn from_draw_final(draw: &Draw, codes: &ProviderCodes) -> Option<ChampionResolution> {
    let round = draw.rounds.iter().find(|r| {
        r.round_id.as_ref().is_some_and(|id| is_final_round(id, codes)) && !r.matches.is_empty()
    })?;
    let final_match = round.matches.first()?;

    let winner = final_match.winner_competitor()?;
    let loser = final_match.loser_competitor()?;
    Some(ChampionResolution {
        champion: Some(finalist_from_competitor(winner)),
        runner_up: Some(finalist_from_competitor(loser)),
        source: Some(ChampionSource::DrawFinal),
    })
}

fn from_match_list(matches: &[FlatMatch], codes: &ProviderCodes) -> Option<ChampionResolution> {
    let final_match = matches.iter().find(|m| {
        m.round_id.as_ref().is_some_and(|id| is_final_round(id, codes))
            && m.draw_match_type.as_deref().is_some_and(|t| codes.is_singles(t))
    })?;

    let side = final_match.winner_side?;
    Some(ChampionResolution {
        champion: Some(finalist_from_player(final_match.player(side))),
        runner_up: Some(finalist_from_player(final_match.player(side.other()))),
        source: Some(ChampionSource::MatchList),
    })
}

fn from_winners_list(winners: &[WinnerEntry]) -> Option<ChampionResolution> {
    winners
        .iter()
        .filter_map(|w| w.singles.as_ref()?.player.as_ref())
        .find_map(finalist_from_winner)
        .map(|champion| ChampionResolution {
            champion: Some(champion),
            runner_up: None,
            source: Some(ChampionSource::WinnersList),
        })
}

fn finalist_from_competitor(competitor: &Competitor) -> Finalist {
    Finalist {
        id: competitor.player_id.clone(),
        name: competitor.name.clone(),
        country: competitor.country.clone(),
    }
}

fn finalist_from_player(player: &MatchPlayer) -> Finalist {
    Finalist {
        id: player.id.clone(),
        name: player.name.clone(),
        country: player.country.clone(),
    }
}

fn finalist_from_winner(player: &WinnerPlayer) -> Option<Finalist> {
    let name = player.full_name.clone().or_else(|| {
        let parts: Vec<&str> = [player.first_name.as_deref(), player.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        (!parts.is_empty()).then(|| parts.join(" "))
    })?;

    Some(Finalist {
        id: player.id.clone(),
        name,
        country: player.country_code.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{DrawEvent, RawFlatMatch};
    use crate::config::get_provider_codes;
    use crate::domain::draw::DrawAssembler;
    use crate::domain::flat_matches::extract_flat_matches;
    use crate::domain::models::Side;
    use crate::domain::score::ScoreTokenizer;
    use serde_json::{json, Value};

    fn draw(value: Value) -> Draw {
        let tokenizer = ScoreTokenizer::new().unwrap();
        let codes = get_provider_codes();
        let event: DrawEvent = serde_json::from_value(value).unwrap();
        DrawAssembler::new(&tokenizer, &codes).assemble(&event, Some(4))
    }

    fn flat(value: Value) -> Vec<FlatMatch> {
        let raw: Vec<RawFlatMatch> = serde_json::from_value(value).unwrap();
        extract_flat_matches(&raw)
    }

    fn winners(value: Value) -> Vec<WinnerEntry> {
        serde_json::from_value(value).unwrap()
    }

    fn flat_final() -> Vec<FlatMatch> {
        flat(json!([
            {"RoundID": "S", "DrawMatchType": "S", "PlayerNameLastA": "Wrong"},
            {
                "RoundID": "F", "DrawMatchType": "D",
                "PlayerNameLastA": "Doubles", "ScoreSet1A": 6, "ScoreSet1B": 0
            },
            {
                "RoundID": "F", "DrawMatchType": "S",
                "PlayerIDA": "1", "PlayerNameFirstA": "Elena", "PlayerNameLastA": "Rybakina",
                "PlayerCountryA": "KAZ",
                "PlayerIDB": "2", "PlayerNameFirstB": "Jasmine", "PlayerNameLastB": "Paolini",
                "ScoreSet1A": 6, "ScoreSet1B": 3, "ScoreSet2A": 6, "ScoreSet2B": 4
            }
        ]))
    }

    #[test]
    fn test_draw_final_wins() {
        let codes = get_provider_codes();
        let d = draw(json!({"Results": {"Round": [
            {"roundId": 2, "Match": {"ResultScore": "64 64",
                "Players": {"PT": [{"PTDisplayLine": "Semi A"}, {"PTDisplayLine": "Semi B"}]}}},
            {"roundId": 1, "Match": {"ResultScore": "36 64 62",
                "Players": {"PT": [
                    {"id": "1", "PTDisplayLine": "Keys", "Player": {"id": "10", "Country": "USA"}},
                    {"id": "2", "PTDisplayLine": "Sabalenka"}
                ]}}}
        ]}}));

        let resolution = resolve_champion(Some(&d), &flat_final(), &[], &codes);

        assert_eq!(resolution.source, Some(ChampionSource::DrawFinal));
        let champion = resolution.champion.unwrap();
        assert_eq!(champion.name, "Keys");
        assert_eq!(champion.id.as_deref(), Some("10"));
        assert_eq!(champion.country.as_deref(), Some("USA"));
        assert_eq!(resolution.runner_up.unwrap().name, "Sabalenka");
    }

    #[test]
    fn test_empty_grouped_final_falls_back_to_match_list() {
        let codes = get_provider_codes();
        let d = draw(json!({"Results": {"Round": [
            {"roundId": "F", "Match": []},
            {"roundId": "2", "Match": {"ResultScore": "61 61"}}
        ]}}));

        let resolution = resolve_champion(Some(&d), &flat_final(), &[], &codes);

        assert_eq!(resolution.source, Some(ChampionSource::MatchList));
        assert_eq!(resolution.champion.unwrap().name, "Elena Rybakina");
        let runner_up = resolution.runner_up.unwrap();
        assert_eq!(runner_up.name, "Jasmine Paolini");
        assert_eq!(runner_up.id.as_deref(), Some("2"));
    }

    #[test]
    fn test_undecided_draw_final_falls_through() {
        let codes = get_provider_codes();
        let d = draw(json!({"Results": {"Round": {"roundId": 1, "Match": {"ResultScore": "64 46"}}}}));

        let resolution = resolve_champion(Some(&d), &flat_final(), &[], &codes);

        assert_eq!(resolution.source, Some(ChampionSource::MatchList));
    }

    #[test]
    fn test_winners_list_has_no_runner_up() {
        let codes = get_provider_codes();
        let list = winners(json!([
            {"singles": ""},
            {"singles": {"player": {"id": "5"}}},
            {"singles": {"player": {"firstName": "Mirra", "lastName": "Andreeva", "countryCode": "RUS"}}},
            {"singles": {"player": {"fullName": "Later Entry"}}}
        ]));

        let resolution = resolve_champion(None, &[], &list, &codes);

        assert_eq!(resolution.source, Some(ChampionSource::WinnersList));
        let champion = resolution.champion.unwrap();
        assert_eq!(champion.name, "Mirra Andreeva");
        assert_eq!(champion.country.as_deref(), Some("RUS"));
        assert_eq!(resolution.runner_up, None);
    }

    #[test]
    fn test_nothing_known_is_not_an_error() {
        let codes = get_provider_codes();
        let unresolved = flat(json!([{"RoundID": "F", "DrawMatchType": "S",
            "ScoreSet1A": 6, "ScoreSet1B": 4, "ScoreSet2A": 4, "ScoreSet2B": 6}]));

        let resolution = resolve_champion(None, &unresolved, &[], &codes);

        assert_eq!(resolution, ChampionResolution::default());
    }

    #[test]
    fn test_final_sentinels() {
        let codes = get_provider_codes();
        assert!(is_final_round(&RoundId::Number(1), &codes));
        assert!(is_final_round(&RoundId::Code("f".to_string()), &codes));
        assert!(!is_final_round(&RoundId::Number(2), &codes));
        assert!(!is_final_round(&RoundId::Code("SF".to_string()), &codes));
    }

    #[test]
    fn test_match_list_side_b() {
        let codes = get_provider_codes();
        let matches = flat(json!([{"RoundID": "F", "DrawMatchType": "s",
            "PlayerNameLastA": "Gauff", "PlayerNameLastB": "Swiatek",
            "ScoreSet1A": 1, "ScoreSet1B": 6}]));

        let resolution = resolve_champion(None, &matches, &[], &codes);

        assert_eq!(matches[0].winner_side, Some(Side::B));
        assert_eq!(resolution.champion.unwrap().name, "Swiatek");
        assert_eq!(resolution.runner_up.unwrap().name, "Gauff");
    }
}
