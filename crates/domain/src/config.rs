pub mod backend;
pub mod errors;
pub mod logging;
pub mod records;
pub mod root;
pub mod soa;

pub use backend::BackendConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use records::RecordsConfig;
pub use root::{CliOverrides, Config};
pub use soa::SoaConfig;
