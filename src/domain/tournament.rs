use anyhow::{Context, Result};
use regex::Regex;

use crate::api::models::TournamentSummary;
use crate::config::ProviderCodes;

const GRAND_SLAM: &str = "Grand Slam";

/// Level tags and record file names for tournaments
pub struct TournamentNaming {
    tier_regex: Regex,
    slug_regex: Regex,
}

impl TournamentNaming {
    pub fn new() -> Result<Self> {
        let (tier_regex, slug_regex) = Self::compile_regexes()?;
        Ok(Self {
            tier_regex,
            slug_regex,
        })
    }

    /// Short level tag: `"Grand Slam"`, the tier number (`"WTA 1000"` → `"1000"`),
    /// or the level text itself.
    pub fn level_number(&self, level: &str) -> Option<String> {
        let level = level.trim();
        if level.is_empty() {
            return None;
        }
        if is_grand_slam(level) {
            return Some(GRAND_SLAM.to_string());
        }
        let tier = self.tier_regex.find(level).map(|m| m.as_str()).unwrap_or(level);
        Some(tier.to_string())
    }

    /// Lowercase, runs of anything but `[a-z0-9]` collapsed to a single `-`
    pub fn slugify(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        self.slug_regex
            .replace_all(&lowered, "-")
            .trim_matches('-')
            .to_string()
    }

    /// `{order:03}_{slug}.json`, named after the group, else the title
    pub fn record_file_name(&self, order: usize, name: Option<&str>, title: Option<&str>) -> String {
        let slug = [name, title]
            .into_iter()
            .flatten()
            .map(|text| self.slugify(text))
            .find(|s| !s.is_empty())
            .unwrap_or_else(|| format!("tournament-{}", order));
        format!("{:03}_{}.json", order, slug)
    }

    // --- Construction Helpers ---

    fn compile_regexes() -> Result<(Regex, Regex)> {
        let tier = Regex::new(r"\d{3,4}").context("Failed to compile tier regex")?;
        let slug = Regex::new(r"[^a-z0-9]+").context("Failed to compile slug regex")?;
        Ok((tier, slug))
    }
}

pub fn is_grand_slam(level: &str) -> bool {
    level.to_uppercase().contains("GRAND SLAM")
}

/// Team events never get a draw; otherwise a singles draw size or a Grand
/// Slam level is enough.
pub fn should_fetch_draw(summary: &TournamentSummary, codes: &ProviderCodes) -> bool {
    if summary.group_name().is_some_and(|name| codes.is_excluded_group(name)) {
        return false;
    }
    let has_singles_draw = summary.singles_draw_size.is_some_and(|size| size > 0);
    has_singles_draw || summary.display_level().is_some_and(is_grand_slam)
}

/// Season years to try for a tournament, primary first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonFallback {
    pub primary: i32,
    pub fallback: Option<i32>,
}

impl SeasonFallback {
    pub fn new(primary: i32, fallback: Option<i32>) -> Self {
        Self { primary, fallback }
    }

    pub fn years(self) -> impl Iterator<Item = i32> {
        let fallback = self.fallback.filter(|year| *year != self.primary);
        std::iter::once(self.primary).chain(fallback)
    }
}
