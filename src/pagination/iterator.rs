use super::config::PaginationConfig;

/// Walks zero-based page numbers
pub struct PageIterator {
    current_page: usize,
    config: PaginationConfig,
}

impl PageIterator {
    pub fn new(config: PaginationConfig) -> Self {
        Self {
            current_page: 0,
            config,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.config.page_size
    }

    pub fn has_reached_max(&self) -> bool {
        self.config
            .max_pages
            .is_some_and(|max| self.current_page >= max)
    }

    pub fn advance(&mut self) {
        self.current_page += 1;
    }
}
