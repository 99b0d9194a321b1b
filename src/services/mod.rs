pub mod collection;
pub mod normalize;
pub mod report;

pub use collection::{CollectionOptions, CollectionService};
pub use normalize::{NormalizeInput, NormalizeService};
pub use report::ReportService;
