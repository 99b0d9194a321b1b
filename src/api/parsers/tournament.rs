use serde_json::Value;

use crate::api::models::TournamentListResponse;
use crate::errors::PayloadError;

/// Parse one page of the season tournament listing
pub fn parse_tournament_page(raw: Value) -> Result<TournamentListResponse, PayloadError> {
    serde_json::from_value(raw).map_err(|e| PayloadError::shape("tournament listing", e))
}
