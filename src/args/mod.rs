//! Command-line argument parsing.
//!
//! ```text
//! Raw tokens → Scan → ParsedArgs → Query / Report
//! ```
//!
//! Three shapes are recognised: bundled one-character flags (`-abc`),
//! multi-character flags (`--verbose`) and multi-character keys with a value
//! that may span several tokens (`--name John Doe`).

mod error;
mod kind;
mod report;
mod scanner;
mod store;

pub use error::OrphanValueError;
pub use kind::{ArgumentKind, Entry};
pub use report::{ReportFormat, DEFAULT_TITLE};
pub use scanner::parse;
pub use store::ParsedArgs;
