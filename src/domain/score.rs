use anyhow::{Context, Result};
use regex::Regex;

use super::models::{ScoreLine, SetResult};

/// Structured sets plus the normalized text shown to readers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenizedScore {
    pub sets: ScoreLine,
    pub display: String,
}

/// Turns free-text provider scores (`"64 75(3)"`, `"6-4, 7-5(3)"`, `"w/o"`)
/// into sets
pub struct ScoreTokenizer {
    compact_set_regex: Regex,
    set_regex: Regex,
}

impl ScoreTokenizer {
    pub fn new() -> Result<Self> {
        let (compact_set_regex, set_regex) = Self::compile_regexes()?;
        Ok(Self {
            compact_set_regex,
            set_regex,
        })
    }

    pub fn tokenize(&self, raw: &str) -> TokenizedScore {
        let display = self.normalize(raw);
        let sets = self.extract_sets(&display);
        TokenizedScore { sets, display }
    }

    pub fn tokenize_opt(&self, raw: Option<&str>) -> TokenizedScore {
        raw.map(|r| self.tokenize(r)).unwrap_or_default()
    }

    /// Display form only: separators collapsed, compact sets hyphenated
    pub fn normalize(&self, raw: &str) -> String {
        raw.replace(',', " ")
            .split_whitespace()
            .map(|token| self.rewrite_compact(token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    // --- Construction Helpers ---

    fn compile_regexes() -> Result<(Regex, Regex)> {
        let compact = Regex::new(r"^(\d)(\d)(\(\d+\))?$")
            .context("Failed to compile compact set regex")?;
        let set = Regex::new(r"(\d+)-(\d+)(?:\((\d+)\))?")
            .context("Failed to compile set regex")?;
        Ok((compact, set))
    }

    // --- Tokenizing ---

    fn rewrite_compact(&self, token: &str) -> String {
        match self.compact_set_regex.captures(token) {
            Some(caps) => format!(
                "{}-{}{}",
                &caps[1],
                &caps[2],
                caps.get(3).map_or("", |m| m.as_str())
            ),
            None => token.to_string(),
        }
    }

    fn extract_sets(&self, normalized: &str) -> ScoreLine {
        self.set_regex
            .captures_iter(normalized)
            .filter_map(|caps| {
                let a = caps[1].parse().ok()?;
                let b = caps[2].parse().ok()?;
                let tiebreak = caps.get(3).and_then(|m| m.as_str().parse().ok());
                Some(SetResult::new(a, b, tiebreak))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> ScoreTokenizer {
        ScoreTokenizer::new().unwrap()
    }

    #[test]
    fn test_compact_score() {
        let score = tokenizer().tokenize("64 75(3)");

        assert_eq!(score.display, "6-4 7-5(3)");
        assert_eq!(
            score.sets,
            vec![SetResult::new(6, 4, None), SetResult::new(7, 5, Some(3))]
        );
    }

    #[test]
    fn test_hyphenated_score_with_commas() {
        let score = tokenizer().tokenize("6-4,  7-6(5),6-7(2)");

        assert_eq!(score.display, "6-4 7-6(5) 6-7(2)");
        assert_eq!(score.sets.len(), 3);
        assert_eq!(score.sets[2], SetResult::new(6, 7, Some(2)));
    }

    #[test]
    fn test_empty_input() {
        let t = tokenizer();
        assert_eq!(t.tokenize(""), TokenizedScore::default());
        assert_eq!(t.tokenize_opt(None), TokenizedScore::default());
        assert_eq!(t.tokenize("   ").display, "");
    }

    #[test]
    fn test_annotations_kept_for_display_only() {
        let t = tokenizer();

        let walkover = t.tokenize("w/o");
        assert_eq!(walkover.display, "w/o");
        assert!(walkover.sets.is_empty());

        let retired = t.tokenize("64 21 ret.");
        assert_eq!(retired.display, "6-4 2-1 ret.");
        assert_eq!(retired.sets, vec![SetResult::new(6, 4, None), SetResult::new(2, 1, None)]);
    }

    #[test]
    fn test_long_final_set() {
        let score = tokenizer().tokenize("6-4 3-6 12-10");
        assert_eq!(score.sets[2], SetResult::new(12, 10, None));
    }

    #[test]
    fn test_three_digit_token_passes_through() {
        // Only two-digit tokens are compact sets
        let score = tokenizer().tokenize("646");
        assert_eq!(score.display, "646");
        assert!(score.sets.is_empty());
    }

    #[test]
    fn test_rendered_sets_retokenize_to_same_set() {
        let t = tokenizer();
        let sets = [
            SetResult::new(6, 4, None),
            SetResult::new(7, 6, Some(5)),
            SetResult::new(6, 7, Some(10)),
            SetResult::new(0, 6, None),
            SetResult::new(13, 11, None),
        ];

        for set in sets {
            assert_eq!(t.tokenize(&set.to_string()).sets, vec![set]);
            assert_eq!(t.tokenize(&set.to_compact()).sets, vec![set]);
        }
    }
}
