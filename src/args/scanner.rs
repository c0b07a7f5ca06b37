//! Argument scanner — raw tokens → parsed argument store.
//!
//! A single left-to-right pass with one token of lookahead. Single-dash tokens
//! are bundles of one-character flags and are committed immediately. A
//! double-dash token opens a key whose shape (flag or pair) is only decided
//! once the following tokens are known: bare tokens after it are joined with a
//! single space into its value, and another dash-prefixed token (or the end of
//! input) closes it as a flag.

use crate::args::error::OrphanValueError;
use crate::args::store::ParsedArgs;

/// Parse raw tokens into a [`ParsedArgs`] store.
///
/// Fails only when a bare value token appears with no key open to receive it.
/// Any other input, however odd (`--`, `-`, consecutive keys), has a defined
/// interpretation.
pub fn parse<I>(tokens: I) -> Result<ParsedArgs, OrphanValueError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut scanner = Scanner::new();
    let mut iter = tokens.into_iter().enumerate().peekable();

    while let Some((position, token)) = iter.next() {
        let token = token.as_ref();
        if let Some(rest) = token.strip_prefix('-') {
            scanner.open(rest);
        } else {
            let more = iter
                .peek()
                .is_some_and(|(_, next)| !next.as_ref().starts_with('-'));
            scanner.value(token, position, more)?;
        }
    }

    let args = scanner.finish();
    tracing::debug!(entries = args.len(), "Parsed command-line arguments");
    Ok(args)
}

/// Scan state: the store being built plus the key still waiting for its value.
#[derive(Debug, Default)]
struct Scanner {
    args: ParsedArgs,
    pending_key: Option<String>,
    pending_value: Option<String>,
}

impl Scanner {
    fn new() -> Self {
        Self::default()
    }

    /// Handle a dash-prefixed token, with the first dash already stripped.
    fn open(&mut self, rest: &str) {
        // The previous key got no value at all.
        if let Some(key) = self.pending_key.take() {
            self.commit_flag(key);
        }

        if let Some(name) = rest.strip_prefix('-') {
            self.pending_key = Some(name.to_string());
        } else {
            for c in rest.chars() {
                self.commit_flag(c.to_string());
            }
        }
    }

    /// Handle a bare token. `more` tells whether the next token is bare too.
    fn value(
        &mut self,
        fragment: &str,
        position: usize,
        more: bool,
    ) -> Result<(), OrphanValueError> {
        if self.pending_key.is_none() {
            return Err(OrphanValueError {
                value: fragment.to_string(),
                position,
            });
        }

        let value = join_fragment(self.pending_value.take(), fragment);
        if more {
            self.pending_value = Some(value);
        } else if let Some(key) = self.pending_key.take() {
            self.commit_pair(key, value);
        }
        Ok(())
    }

    fn finish(mut self) -> ParsedArgs {
        if let Some(key) = self.pending_key.take() {
            match self.pending_value.take() {
                Some(value) => self.commit_pair(key, value),
                None => self.commit_flag(key),
            }
        }
        self.args
    }

    fn commit_flag(&mut self, key: String) {
        tracing::trace!(key = %key, "Committed flag");
        self.args.add_flag(key);
    }

    fn commit_pair(&mut self, key: String, value: String) {
        tracing::trace!(key = %key, value = %value, "Committed pair");
        self.args.add_pair(key, value);
    }
}

fn join_fragment(acc: Option<String>, fragment: &str) -> String {
    match acc {
        Some(mut acc) => {
            acc.push(' ');
            acc.push_str(fragment);
            acc
        }
        None => fragment.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::kind::ArgumentKind;

    #[test]
    fn empty_input() {
        let args = parse(Vec::<String>::new()).unwrap();
        assert!(args.is_empty());
    }

    #[test]
    fn key_followed_by_key_is_flag() {
        let args = parse(["--a", "--b", "x"]).unwrap();
        assert_eq!(args.kind_of("a"), ArgumentKind::Flag);
        assert_eq!(args.get("b"), Some("x"));
    }

    #[test]
    fn value_at_end_of_input() {
        let args = parse(["--name", "John", "Doe"]).unwrap();
        assert_eq!(args.get("name"), Some("John Doe"));
    }

    #[test]
    fn single_value_at_end_of_input() {
        let args = parse(["--name", "John"]).unwrap();
        assert_eq!(args.get("name"), Some("John"));
    }

    #[test]
    fn lone_dash_adds_nothing() {
        let args = parse(["-"]).unwrap();
        assert!(args.is_empty());
    }

    #[test]
    fn triple_dash_keeps_third_dash() {
        let args = parse(["---x"]).unwrap();
        assert_eq!(args.kind_of("-x"), ArgumentKind::Flag);
    }

    #[test]
    fn bundle_closes_pending_key() {
        let args = parse(["--verbose", "-ab"]).unwrap();
        assert_eq!(args.kind_of("verbose"), ArgumentKind::Flag);
        assert_eq!(args.kind_of("a"), ArgumentKind::Flag);
        assert_eq!(args.kind_of("b"), ArgumentKind::Flag);
    }

    #[test]
    fn short_flag_never_takes_value() {
        let err = parse(["-v", "value"]).unwrap_err();
        assert_eq!(err.value, "value");
        assert_eq!(err.position, 1);
    }

    #[test]
    fn value_after_completed_pair_is_orphan() {
        // "--a 1" completes because "-b" follows; "2" then has no key.
        let err = parse(["--a", "1", "-b", "2"]).unwrap_err();
        assert_eq!(err.position, 3);
    }

    #[test]
    fn empty_string_token_is_a_value() {
        let args = parse(["--name", ""]).unwrap();
        assert_eq!(args.get("name"), Some(""));
    }

    #[test]
    fn join_fragment_uses_single_space() {
        assert_eq!(join_fragment(None, "a"), "a");
        assert_eq!(join_fragment(Some("a".to_string()), "b"), "a b");
    }
}
