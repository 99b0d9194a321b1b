pub mod champion;
mod collection;
pub mod draw;
pub mod flat_matches;
pub mod models;
mod progress;
pub mod record;
pub mod rounds;
pub mod score;
pub mod tournament;
pub mod winner;

pub use champion::resolve_champion;
pub use collection::RecordCollection;
pub use draw::DrawAssembler;
pub use flat_matches::extract_flat_matches;
pub use models::*;
pub use progress::CollectionProgress;
pub use record::{build_record, FetchedResults};
pub use rounds::{resolve_round_labels, RoundLabels};
pub use score::{ScoreTokenizer, TokenizedScore};
pub use winner::{resolve_winner, WinnerMarker};
