use serde::Serialize;

use super::map::ArgumentMap;
use super::tokenizer::{tokenize, Tokenizer};
use super::value::ArgumentValue;

/// Prefix that marks an API command in chat (`!example ...`).
pub const COMMAND_PREFIX: char = '!';

/// A chat command line together with its tokenized arguments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCommand {
    /// The original unmodified input.
    pub raw_text: String,
    pub args: ArgumentMap,
}

impl ChatCommand {
    pub fn parse(input: &str) -> Self {
        Self {
            raw_text: input.to_string(),
            args: tokenize(input),
        }
    }

    pub fn parse_with(tokenizer: &Tokenizer, input: &str) -> Self {
        Self {
            raw_text: input.to_string(),
            args: tokenizer.tokenize(input),
        }
    }

    /// Command name: positional 0 without its leading `!`.
    pub fn name(&self) -> Option<&str> {
        match self.args.positional(0)? {
            ArgumentValue::Str(word) => Some(word.strip_prefix(COMMAND_PREFIX).unwrap_or(word)),
            _ => None,
        }
    }

    /// Whether the first word carries the `!` API command prefix.
    pub fn is_api_command(&self) -> bool {
        matches!(
            self.args.positional(0),
            Some(ArgumentValue::Str(word)) if word.starts_with(COMMAND_PREFIX)
        )
    }
}
