mod draw;
mod matches;
mod pagination;
mod tournament;

pub use draw::{parse_draw_response, pick_singles_event};
pub use matches::parse_matches_response;
pub use pagination::has_more_pages;
pub use tournament::parse_tournament_page;
