use crate::api::models::{DrawEvent, RawFlatMatch, TournamentSummary};
use crate::api::parsers;
use crate::config::settings::CollectorSettings;
use crate::errors::with_parse_context;
use crate::http::RateLimitedClient;
use crate::pagination::{PageIterator, PaginationConfig};
use anyhow::{bail, Result};
use log::{debug, info};

/// WTA tennis API client
pub struct WtaClient {
    client: RateLimitedClient,
    base_url: String,
    page_size: usize,
    max_listing_pages: Option<usize>,
    excluded_levels: &'static str,
}

impl WtaClient {
    pub fn new(settings: &CollectorSettings) -> Result<Self> {
        let client = RateLimitedClient::new(
            settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
        )?;
        Ok(Self {
            client,
            base_url: settings.api_base_url.clone(),
            page_size: settings.page_size,
            max_listing_pages: settings.max_listing_pages,
            excluded_levels: settings.excluded_levels,
        })
    }

    /// Fetch the season listing, page by page
    pub async fn fetch_tournaments(&mut self, year: i32) -> Result<Vec<TournamentSummary>> {
        info!("Fetching {} tournament listing", year);

        let mut pages = PageIterator::new(self.build_pagination_config());
        let mut tournaments = Vec::new();
        let url = self.build_listing_url();

        loop {
            if pages.has_reached_max() {
                break;
            }

            let query = self.build_listing_query(year, &pages);
            let Some(raw) = self.client.get_json_opt(&url, &query).await? else {
                bail!("Tournament listing not found at {}", url);
            };
            let page = with_parse_context(parsers::parse_tournament_page(raw), "tournament listing")?;
            debug!("Page {}: {} tournaments", pages.current_page(), page.content.len());

            let more = parsers::has_more_pages(&page, pages.current_page());
            tournaments.extend(page.content);
            if !more {
                break;
            }

            pages.advance();
        }

        info!("Fetched {} tournaments for {}", tournaments.len(), year);
        Ok(tournaments)
    }

    /// Singles event of a tournament draw, `None` when the provider has none
    pub async fn fetch_draw(&mut self, group_id: i64, year: i32) -> Result<Option<DrawEvent>> {
        let url = self.build_tournament_url(group_id, year, "draw");
        let Some(raw) = self.client.get_json_opt(&url, &[]).await? else {
            return Ok(None);
        };
        with_parse_context(parsers::parse_draw_response(raw), "draw payload")
    }

    /// Flat match list, `None` when the provider has none
    pub async fn fetch_matches(&mut self, group_id: i64, year: i32) -> Result<Option<Vec<RawFlatMatch>>> {
        let url = self.build_tournament_url(group_id, year, "matches");
        let Some(raw) = self.client.get_json_opt(&url, &[]).await? else {
            return Ok(None);
        };
        with_parse_context(parsers::parse_matches_response(raw), "match list").map(Some)
    }

    // --- Pagination Configuration ---

    fn build_pagination_config(&self) -> PaginationConfig {
        let mut config = PaginationConfig::new(self.page_size);
        if let Some(max) = self.max_listing_pages {
            config = config.with_max_pages(max);
        }
        config
    }

    // --- Helper Methods ---

    fn build_listing_url(&self) -> String {
        format!("{}/tournaments/", self.base_url)
    }

    fn build_tournament_url(&self, group_id: i64, year: i32, resource: &str) -> String {
        format!("{}/tournaments/{}/{}/{}", self.base_url, group_id, year, resource)
    }

    fn build_listing_query(&self, year: i32, pages: &PageIterator) -> Vec<(&'static str, String)> {
        vec![
            ("page", pages.current_page().to_string()),
            ("pageSize", pages.page_size().to_string()),
            ("levels", String::new()),
            ("excludeLevels", self.excluded_levels.to_string()),
            ("surfaces", String::new()),
            ("from", format!("{}-01-01", year)),
            ("to", format!("{}-12-31", year)),
        ]
    }
}
