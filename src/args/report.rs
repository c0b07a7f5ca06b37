//! Human-readable and JSON reports of a parsed argument store.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::args::kind::{ArgumentKind, Entry};
use crate::args::store::ParsedArgs;

/// Title used by the `Display` impl.
pub const DEFAULT_TITLE: &str = "Arguments:\n";

/// Output format of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One `K:`/`P:` line per argument.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    title: &'a str,
    arguments: Vec<JsonArgument<'a>>,
}

#[derive(Serialize)]
struct JsonArgument<'a> {
    key: &'a str,
    kind: ArgumentKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a str>,
}

impl ParsedArgs {
    /// Render the store under `title`, one line per entry.
    ///
    /// The title is written verbatim, so it should carry its own line break.
    /// Flags with a one-character key render as `-x`, every other flag as
    /// `--name`; pairs always render as `--name value`.
    pub fn render(&self, title: &str) -> String {
        let mut out = String::from(title);
        for (key, entry) in self.iter() {
            match entry {
                Entry::Flag if key.chars().count() == 1 => {
                    out.push_str("  K: -");
                    out.push_str(key);
                }
                Entry::Flag => {
                    out.push_str("  K: --");
                    out.push_str(key);
                }
                Entry::Pair(value) => {
                    out.push_str("  P: --");
                    out.push_str(key);
                    out.push(' ');
                    out.push_str(value);
                }
            }
            out.push('\n');
        }
        out
    }

    /// Serialize the store as a pretty-printed JSON report.
    pub fn to_json_report(&self, title: &str) -> serde_json::Result<String> {
        let report = JsonReport {
            title,
            arguments: self
                .iter()
                .map(|(key, entry)| JsonArgument {
                    key,
                    kind: entry.kind(),
                    value: entry.value(),
                })
                .collect(),
        };
        serde_json::to_string_pretty(&report)
    }

    /// Render in the given format. A line break is appended to the title for
    /// text output.
    pub fn report(&self, format: ReportFormat, title: &str) -> serde_json::Result<String> {
        match format {
            ReportFormat::Text => Ok(self.render(&format!("{}\n", title))),
            ReportFormat::Json => self.to_json_report(title),
        }
    }
}

impl fmt::Display for ParsedArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_TITLE))
    }
}
