use super::models::{SetPair, SetResult, Side};
use super::score::ScoreTokenizer;

/// Explicit winner indicator attached to a match by the provider
pub struct WinnerMarker;

impl WinnerMarker {
    /// `"A"`/`"B"` pick a side directly; anything else must equal exactly one
    /// competitor's slot id.
    pub fn resolve(raw: Option<&str>, slot_a: Option<&str>, slot_b: Option<&str>) -> Option<Side> {
        let marker = raw?.trim();
        if marker.is_empty() {
            return None;
        }
        if marker.eq_ignore_ascii_case("A") {
            return Some(Side::A);
        }
        if marker.eq_ignore_ascii_case("B") {
            return Some(Side::B);
        }

        let is_a = slot_a.is_some_and(|slot| slot.trim() == marker);
        let is_b = slot_b.is_some_and(|slot| slot.trim() == marker);
        match (is_a, is_b) {
            (true, false) => Some(Side::A),
            (false, true) => Some(Side::B),
            _ => None,
        }
    }
}

/// Winning side of a match, `None` when it cannot be told
///
/// An explicit marker is trusted over the score.
pub fn resolve_winner(
    tokenizer: &ScoreTokenizer,
    score: Option<&str>,
    marker: Option<Side>,
) -> Option<Side> {
    if marker.is_some() {
        return marker;
    }
    let tokenized = tokenizer.tokenize_opt(score);
    winner_from_sets(&tokenized.sets)
}

/// Majority of sets won; tiebreak points never count
pub fn winner_from_sets(sets: &[SetResult]) -> Option<Side> {
    majority(sets.iter().filter_map(SetResult::winner))
}

/// Winning side of a flat provider match
///
/// Compares the set columns side by side; when that is inconclusive, looks
/// for a surname in the winner part of `"<winner> d <loser> ..."`.
pub fn winner_from_set_pairs(
    sets: &[SetPair],
    result_string: Option<&str>,
    last_name_a: Option<&str>,
    last_name_b: Option<&str>,
) -> Option<Side> {
    let set_winners = sets.iter().filter_map(|pair| match (pair.a, pair.b) {
        (Some(a), Some(b)) => SetResult::new(a, b, None).winner(),
        _ => None,
    });

    majority(set_winners)
        .or_else(|| winner_from_result_string(result_string?, last_name_a, last_name_b))
}

fn winner_from_result_string(
    result: &str,
    last_name_a: Option<&str>,
    last_name_b: Option<&str>,
) -> Option<Side> {
    let (winner_text, _) = result.split_once(" d ")?;
    let winner_text = winner_text.trim().to_lowercase();

    let mentions = |last_name: Option<&str>| {
        last_name
            .map(|name| name.trim().to_lowercase())
            .is_some_and(|name| !name.is_empty() && winner_text.contains(&name))
    };

    if mentions(last_name_a) {
        Some(Side::A)
    } else if mentions(last_name_b) {
        Some(Side::B)
    } else {
        None
    }
}

fn majority<I: Iterator<Item = Side>>(set_winners: I) -> Option<Side> {
    let (a, b) = set_winners.fold((0usize, 0usize), |(a, b), side| match side {
        Side::A => (a + 1, b),
        Side::B => (a, b + 1),
    });
    match a.cmp(&b) {
        std::cmp::Ordering::Greater => Some(Side::A),
        std::cmp::Ordering::Less => Some(Side::B),
        std::cmp::Ordering::Equal => None,
    }
}
