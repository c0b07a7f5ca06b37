//! Report configuration for the `cmdargs` binary.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, ReportConfig};
