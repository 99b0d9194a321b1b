use crate::api::models::TournamentListResponse;

/// Check if the listing has pages after the zero-based `page`
pub fn has_more_pages(data: &TournamentListResponse, page: usize) -> bool {
    match extract_num_pages(data) {
        Some(total) if total > 0 => page + 1 < total,
        _ => false,
    }
}

/// Extract pagination info from response
fn extract_num_pages(data: &TournamentListResponse) -> Option<usize> {
    data.page_info.as_ref()?.num_pages.map(|n| n as usize)
}
