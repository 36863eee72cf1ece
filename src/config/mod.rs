mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ClockConfig, Config, LoggingConfig};
