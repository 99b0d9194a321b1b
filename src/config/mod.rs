pub mod codes;
pub mod settings;

pub use codes::{get_provider_codes, ProviderCodes};
pub use settings::AppConfig;
