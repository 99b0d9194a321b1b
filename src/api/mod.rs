pub mod de;
pub mod models;
pub mod parsers;
pub mod wta_client;

pub use wta_client::WtaClient;
