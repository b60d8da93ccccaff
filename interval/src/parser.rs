//! Textual grammar of intervals.
//!
//! ```text
//! interval := ('[' | '(') endpoint SEPARATOR endpoint (']' | ')')
//! endpoint := '-'? (digits? '.'? digits | 'INF')
//! ```
//!
//! A square bracket marks an inclusive boundary and a parenthesis an exclusive one.
//! The separator is matched literally, so the grammar must be rebuilt whenever it changes.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

/// Separator used between the two endpoints unless configured otherwise.
pub const DEFAULT_SEPARATOR: &str = ", ";

/// A single endpoint: an optionally negative decimal number or infinity.
const ENDPOINT: &str = r"(-?(?:[0-9]*\.?[0-9]+|INF))";

lazy_static! {
    static ref DEFAULT_GRAMMAR: Grammar =
        Grammar::new(DEFAULT_SEPARATOR).expect("the default interval grammar is a valid regex");
}

/// The interval grammar compiled for one separator.
#[derive(Clone, Debug)]
pub struct Grammar {
    regex: Regex,
}

/// The raw parts of a textual interval, before endpoint conversion.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct Parts<'a> {
    pub lower_inclusive: bool,
    pub lower: &'a str,
    pub upper: &'a str,
    pub upper_inclusive: bool,
}

impl Grammar {
    /// Compiles the grammar for the given separator.
    ///
    /// The separator is escaped, so any string is matched literally.
    pub fn new(separator: &str) -> Result<Grammar, regex::Error> {
        let separator = regex::escape(separator);
        let pattern = format!(r"^([\[(]){ENDPOINT}{separator}{ENDPOINT}([\])])$");
        let regex = Regex::new(&pattern)?;
        Ok(Grammar { regex })
    }

    /// Returns the grammar for the given separator.
    ///
    /// The grammar of [DEFAULT_SEPARATOR] is compiled once and shared, any other one is compiled on demand.
    pub fn for_separator(separator: &str) -> Result<Cow<'static, Grammar>, regex::Error> {
        if separator == DEFAULT_SEPARATOR {
            Ok(Cow::Borrowed(&*DEFAULT_GRAMMAR))
        } else {
            Grammar::new(separator).map(Cow::Owned)
        }
    }

    /// Returns true if the whole text is an interval of this grammar.
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Splits a textual interval into its boundaries and endpoint tokens.
    ///
    /// Returns `None` if the text does not match the grammar.
    pub fn split<'a>(&self, text: &'a str) -> Option<Parts<'a>> {
        let captures = self.regex.captures(text)?;
        Some(Parts {
            lower_inclusive: captures.get(1)?.as_str() == "[",
            lower: captures.get(2)?.as_str(),
            upper: captures.get(3)?.as_str(),
            upper_inclusive: captures.get(4)?.as_str() == "]",
        })
    }
}
