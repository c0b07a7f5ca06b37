use serde::{Deserialize, Serialize};

use crate::args::ReportFormat;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,
}

/// How the parsed arguments are reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title line printed above the arguments (default: "Arguments:").
    #[serde(default = "default_title")]
    pub title: String,
    /// Output format: "text" or "json" (default: "text").
    #[serde(default)]
    pub format: ReportFormat,
}

fn default_title() -> String {
    "Arguments:".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            format: ReportFormat::default(),
        }
    }
}
