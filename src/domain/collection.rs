use super::models::TournamentRecord;

/// Records of one collection run, in calendar order once finalized
pub struct RecordCollection {
    records: Vec<TournamentRecord>,
}

impl RecordCollection {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn add(&mut self, record: TournamentRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorts by start date (undated first, ties keep insertion order) and
    /// renumbers from 1.
    pub fn into_ordered(mut self) -> Vec<TournamentRecord> {
        self.records.sort_by(|a, b| start_key(a).cmp(start_key(b)));
        for (idx, record) in self.records.iter_mut().enumerate() {
            record.order = idx + 1;
        }
        self.records
    }
}

fn start_key(record: &TournamentRecord) -> &str {
    record.start_date.as_deref().unwrap_or("")
}

impl Default for RecordCollection {
    fn default() -> Self {
        Self::new()
    }
}
