//! Parse raw command-line tokens into a queryable store of flags and
//! key/value pairs.
//!
//! ```
//! let args = cmdargs::args::parse(["-vq", "--name", "John", "Doe"]).unwrap();
//!
//! assert!(args.exists("v"));
//! assert_eq!(args.get("name"), Some("John Doe"));
//! ```

pub mod args;
pub mod config;
pub mod logging;
