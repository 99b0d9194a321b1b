use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::config::{get_provider_codes, ProviderCodes};
use crate::domain::champion::is_final_round;
use crate::domain::{DrawMatch, FlatMatch, ScoreTokenizer, Side, TournamentRecord};
use crate::store::{list_record_files, load_record};

const RULE_WIDTH: usize = 60;

/// Prints a stored record as a plain-text bracket
pub struct ReportService {
    tokenizer: ScoreTokenizer,
    codes: ProviderCodes,
}

impl ReportService {
    pub fn new() -> Result<Self> {
        Ok(Self {
            tokenizer: ScoreTokenizer::new()?,
            codes: get_provider_codes(),
        })
    }

    /// `target` is a record file, or a directory of them with `pick` the
    /// 1-based position in the listing (default 1).
    pub fn run(&self, target: &Path, pick: Option<usize>) -> Result<()> {
        let path = resolve_target(target, pick)?;
        let record = load_record(&path)?;
        for line in self.render(&record, &path) {
            println!("{}", line);
        }
        Ok(())
    }

    pub fn render(&self, record: &TournamentRecord, path: &Path) -> Vec<String> {
        let mut out = Vec::new();
        self.render_header(record, path, &mut out);

        if let Some(draw) = &record.draw {
            if !draw.breakdown.is_empty() {
                out.push(String::new());
                out.push("Prize Money by Round".bold().to_string());
                out.push("-".repeat(24));
                for place in &draw.breakdown {
                    let name = place.name.as_deref().unwrap_or("");
                    let prize = place.prize.as_deref().unwrap_or("");
                    match &place.points {
                        Some(points) => out.push(format!("{}: {} ({} pts)", name, prize, points)),
                        None => out.push(format!("{}: {}", name, prize)),
                    }
                }
            }
            out.push("-".repeat(RULE_WIDTH));

            for round in &draw.rounds {
                out.push(String::new());
                out.push(round.name.cyan().bold().to_string());
                out.push("-".repeat(round.name.len()));
                for m in &round.matches {
                    out.push(self.match_line(m));
                }
            }
        }

        if !self.has_final_in_draw(record) {
            if let Some(final_match) = self.flat_final(&record.matches) {
                out.push(String::new());
                out.push("Final".cyan().bold().to_string());
                out.push("-----".to_string());
                out.push(self.flat_final_line(final_match));
            }
        }

        out
    }

    fn render_header(&self, record: &TournamentRecord, path: &Path, out: &mut Vec<String>) {
        let title = record
            .title
            .as_deref()
            .or(record.name.as_deref())
            .unwrap_or("Unknown tournament");
        let dates = match (record.start_date.as_deref(), record.end_date.as_deref()) {
            (None, None) => "N/A".to_string(),
            (start, end) => format!("{} → {}", start.unwrap_or(""), end.unwrap_or("")),
        };
        let draw_size = record
            .draw
            .as_ref()
            .map(|d| d.labeled_draw_size)
            .or(record.draw_size_singles)
            .unwrap_or(0);

        out.push(format!("Tournament: {}", title).bold().to_string());
        out.push(format!("Dates: {}", dates));
        out.push(format!("Draw size: {}", draw_size));
        out.push(format!("File: {}", path.display()));
        if let Some(champion) = &record.champion {
            out.push(format!("Champion: {}", champion.name).green().to_string());
        }
        if let Some(draw) = &record.draw {
            let c = draw.counts;
            out.push(format!(
                "Seeds: {}  |  Qualifiers: {}  |  Wild Cards: {}  |  Byes: {}",
                c.seeds, c.qualifiers, c.wildcards, c.byes
            ));
        }
    }

    fn match_line(&self, m: &DrawMatch) -> String {
        match &m.summary {
            Some(summary) => self.tokenizer.normalize(summary),
            None => m.display.clone(),
        }
    }

    fn has_final_in_draw(&self, record: &TournamentRecord) -> bool {
        record.draw.as_ref().is_some_and(|draw| {
            draw.rounds.iter().any(|r| {
                r.round_id.as_ref().is_some_and(|id| is_final_round(id, &self.codes))
                    && !r.matches.is_empty()
            })
        })
    }

    fn flat_final<'a>(&self, matches: &'a [FlatMatch]) -> Option<&'a FlatMatch> {
        matches.iter().find(|m| {
            m.round_id.as_ref().is_some_and(|id| is_final_round(id, &self.codes))
                && m.draw_match_type.as_deref().is_some_and(|t| self.codes.is_singles(t))
        })
    }

    fn flat_final_line(&self, m: &FlatMatch) -> String {
        let name = |side: Side, fallback: &'static str| {
            let name = m.player(side).name.trim();
            if name.is_empty() { fallback.to_string() } else { name.to_string() }
        };
        let a = name(Side::A, "Player A");
        let b = name(Side::B, "Player B");
        let score = self.tokenizer.normalize(m.score_string.as_deref().unwrap_or(""));

        let head = match m.winner_side {
            Some(Side::A) => format!("{} def {}", a, b),
            Some(Side::B) => format!("{} def {}", b, a),
            None => format!("{} vs {}", a, b),
        };
        if score.is_empty() { head } else { format!("{} {}", head, score) }
    }
}

fn resolve_target(target: &Path, pick: Option<usize>) -> Result<PathBuf> {
    if !target.is_dir() {
        return Ok(target.to_path_buf());
    }

    let files = list_record_files(target)?;
    if files.is_empty() {
        bail!("No tournament records in {}", target.display());
    }
    let index = pick.unwrap_or(1);
    files
        .get(index.wrapping_sub(1))
        .cloned()
        .with_context(|| format!("No record #{} in {} ({} available)", index, target.display(), files.len()))
}
