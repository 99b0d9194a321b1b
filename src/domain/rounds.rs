use log::warn;
use std::collections::HashMap;

use super::models::CanonicalRound::{self, F, QF, R128, R16, R32, R64, SF};
use super::models::RoundId;

/// Orders the distinct round identifiers of one draw, earliest round first.
pub type RoundOrderPolicy = fn(&mut Vec<RoundId>);

/// Default policy: the provider numbers rounds down towards the final, so the
/// largest identifier is the earliest round.
///
/// This is a heuristic; it has only been checked against the numeric
/// identifiers seen in WTA draws.
pub fn descending_round_order(ids: &mut Vec<RoundId>) {
    ids.sort_by(|a, b| b.cmp(a));
}

/// Labels available for a draw, earliest round first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTemplate(&'static [CanonicalRound]);

impl RoundTemplate {
    pub fn for_draw_size(draw_size: u32) -> Self {
        let labels: &'static [CanonicalRound] = if draw_size >= 128 {
            &[R128, R64, R32, R16, QF, SF, F]
        } else if draw_size >= 48 {
            // 48 and 56 draws have byes into the second round
            &[R64, R32, R16, QF, SF, F]
        } else if draw_size >= 32 {
            &[R32, R16, QF, SF, F]
        } else if draw_size >= 16 {
            &[R16, QF, SF, F]
        } else {
            &[QF, SF, F]
        };
        RoundTemplate(labels)
    }

    pub fn labels(&self) -> &'static [CanonicalRound] {
        self.0
    }
}

/// Mapping from provider round identifiers to canonical rounds for one draw
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoundLabels {
    mapping: HashMap<RoundId, CanonicalRound>,
    /// Identifiers left over once the template ran out of labels
    pub unmapped: Vec<RoundId>,
}

impl RoundLabels {
    pub fn label(&self, id: &RoundId) -> Option<CanonicalRound> {
        self.mapping.get(id).copied()
    }

    /// Canonical label, or `"Round <raw id>"` when the id could not be mapped
    pub fn display_name(&self, id: Option<&RoundId>) -> String {
        match id {
            Some(id) => match self.label(id) {
                Some(label) => label.to_string(),
                None => format!("Round {}", id),
            },
            None => "Round ?".to_string(),
        }
    }
}

pub fn resolve_round_labels<'a, I>(draw_size: u32, ids: I) -> RoundLabels
where
    I: IntoIterator<Item = &'a RoundId>,
{
    resolve_round_labels_with(draw_size, ids, descending_round_order)
}

/// Assigns the template's labels positionally to the ordered distinct ids
pub fn resolve_round_labels_with<'a, I>(
    draw_size: u32,
    ids: I,
    policy: RoundOrderPolicy,
) -> RoundLabels
where
    I: IntoIterator<Item = &'a RoundId>,
{
    let template = RoundTemplate::for_draw_size(draw_size);
    let mut distinct = collect_distinct(ids);
    policy(&mut distinct);

    let mut labels = RoundLabels::default();
    for (idx, id) in distinct.into_iter().enumerate() {
        match template.labels().get(idx) {
            Some(label) => {
                labels.mapping.insert(id, *label);
            }
            None => labels.unmapped.push(id),
        }
    }

    if !labels.unmapped.is_empty() {
        warn!(
            "Draw size {} allows {} rounds; left unlabeled: {:?}",
            draw_size,
            template.labels().len(),
            labels.unmapped.iter().map(ToString::to_string).collect::<Vec<_>>()
        );
    }

    labels
}

fn collect_distinct<'a, I>(ids: I) -> Vec<RoundId>
where
    I: IntoIterator<Item = &'a RoundId>,
{
    let mut distinct: Vec<RoundId> = Vec::new();
    for id in ids {
        if !distinct.contains(id) {
            distinct.push(id.clone());
        }
    }
    distinct
}
