use log::info;

/// Track progress of tournament collection
pub struct CollectionProgress {
    total: usize,
    with_draw: usize,
    without_draw: usize,
    partial: usize,
}

impl CollectionProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            with_draw: 0,
            without_draw: 0,
            partial: 0,
        }
    }

    pub fn record_collected(&mut self, has_draw: bool) {
        if has_draw {
            self.with_draw += 1;
        } else {
            self.without_draw += 1;
        }
        self.log_progress();
    }

    /// Recorded, but a fetch for it failed along the way
    pub fn record_partial(&mut self) {
        self.partial += 1;
        self.log_progress();
    }

    pub fn current_count(&self) -> usize {
        self.with_draw + self.without_draw + self.partial
    }

    pub fn partial(&self) -> usize {
        self.partial
    }

    fn log_progress(&self) {
        let current = self.current_count();
        if should_log(current, self.total) {
            info!(
                "  → Progress: {}/{} ({} with draw, {} without, {} partial)",
                current, self.total, self.with_draw, self.without_draw, self.partial
            );
        }
    }
}

fn should_log(current: usize, total: usize) -> bool {
    is_milestone(current) || is_complete(current, total)
}

fn is_milestone(count: usize) -> bool {
    count % 10 == 0
}

fn is_complete(current: usize, total: usize) -> bool {
    current == total
}
