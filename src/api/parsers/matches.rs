use serde_json::Value;

use crate::api::models::{MatchesResponse, RawFlatMatch};
use crate::errors::PayloadError;

/// Parse the flat match list endpoint payload
pub fn parse_matches_response(raw: Value) -> Result<Vec<RawFlatMatch>, PayloadError> {
    let response: MatchesResponse =
        serde_json::from_value(raw).map_err(|e| PayloadError::shape("matches", e))?;
    Ok(response.matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reads_provider_field_names() {
        let raw = json!({"matches": [{
            "MatchID": "LS001",
            "RoundID": "F",
            "DrawMatchType": "S",
            "PlayerNameFirstA": "Aryna",
            "PlayerNameLastA": "Sabalenka",
            "PlayerIDB": 316956,
            "ScoreSet1A": "6",
            "ScoreSet1B": 3,
            "ScoreSet2A": ""
        }]});

        let matches = parse_matches_response(raw).unwrap();
        assert_eq!(matches.len(), 1);

        let m = &matches[0];
        assert_eq!(m.match_id.as_deref(), Some("LS001"));
        assert_eq!(m.round_id.as_deref(), Some("F"));
        assert_eq!(m.player_name_last_a.as_deref(), Some("Sabalenka"));
        assert_eq!(m.player_id_b.as_deref(), Some("316956"));
        assert_eq!(m.set_columns()[0], (Some(6), Some(3)));
        assert_eq!(m.set_columns()[1], (None, None));
    }

    #[test]
    fn test_missing_list_is_empty() {
        assert!(parse_matches_response(json!({})).unwrap().is_empty());
    }
}
