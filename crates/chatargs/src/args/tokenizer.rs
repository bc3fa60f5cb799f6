//! Chat command tokenizer.
//!
//! A command line is processed in three passes:
//! 1. quote-aware word splitting (see [`split_words`]),
//! 2. `key=value` detection with value coercion,
//! 3. `--flag` detection, otherwise a positional entry keyed by the word's
//!    index in the full split sequence.

use serde::{Deserialize, Serialize};

use super::map::{ArgumentKey, ArgumentMap};
use super::split::split_words;
use super::value::ArgumentValue;

pub const DEFAULT_FLAG_PREFIX: &str = "--";

/// Which `=` separates key from value when a word holds several.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitPoint {
    /// `x=1=2` → `x=1` / `2`.
    #[default]
    Last,
    /// `x=1=2` → `x` / `1=2`.
    First,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerOptions {
    pub flag_prefix: String,
    pub split_point: SplitPoint,
    pub coerce_values: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            flag_prefix: DEFAULT_FLAG_PREFIX.to_string(),
            split_point: SplitPoint::Last,
            coerce_values: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    options: TokenizerOptions,
}

impl Tokenizer {
    pub fn new(options: TokenizerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// Tokenize one command line. Never fails; empty input yields an empty map.
    pub fn tokenize(&self, input: &str) -> ArgumentMap {
        let mut args = ArgumentMap::new();

        for (index, word) in split_words(input).into_iter().enumerate() {
            let (key, value) = self.classify(index, word);
            args.insert(key, value);
        }

        tracing::trace!(entries = args.len(), "tokenized command line");
        args
    }

    fn classify(&self, index: usize, word: String) -> (ArgumentKey, ArgumentValue) {
        if let Some((key, raw_value)) = split_key_value(&word, self.options.split_point) {
            let value = if self.options.coerce_values {
                ArgumentValue::coerce(raw_value)
            } else {
                ArgumentValue::from(raw_value)
            };
            return (ArgumentKey::Name(key.to_string()), value);
        }

        if let Some(flag) = word.strip_prefix(self.options.flag_prefix.as_str()) {
            return (ArgumentKey::Name(flag.to_string()), ArgumentValue::Bool(true));
        }

        (ArgumentKey::Index(index), ArgumentValue::Str(word))
    }
}

/// Tokenize with default options.
pub fn tokenize(input: &str) -> ArgumentMap {
    Tokenizer::default().tokenize(input)
}

/// Split a word into key and value around an `=`.
///
/// Matching works line by line: the first line of the word that contains an
/// `=` is split, and only that line contributes to key and value.
fn split_key_value(word: &str, split_point: SplitPoint) -> Option<(&str, &str)> {
    word.split(is_line_terminator).find_map(|line| {
        let split = match split_point {
            SplitPoint::Last => line.rfind('='),
            SplitPoint::First => line.find('='),
        }?;
        Some((&line[..split], &line[split + 1..]))
    })
}

fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
