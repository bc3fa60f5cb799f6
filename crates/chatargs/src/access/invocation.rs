use crate::args::{tokenize, ArgumentMap, Tokenizer};

/// Context of one chat command invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Invocation {
    /// Actor (player) who issued the command.
    pub actor_id: String,
    /// Ids of the on-map objects selected when the command was sent.
    pub selected: Vec<String>,
    pub args: ArgumentMap,
}

impl Invocation {
    pub fn new(actor_id: impl Into<String>, args: ArgumentMap) -> Self {
        Self {
            actor_id: actor_id.into(),
            selected: Vec::new(),
            args,
        }
    }

    /// Build an invocation by tokenizing `input` with default options.
    pub fn from_input(actor_id: impl Into<String>, input: &str) -> Self {
        Self::new(actor_id, tokenize(input))
    }

    pub fn from_input_with(
        tokenizer: &Tokenizer,
        actor_id: impl Into<String>,
        input: &str,
    ) -> Self {
        Self::new(actor_id, tokenizer.tokenize(input))
    }

    pub fn with_selection<I, S>(mut self, selected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected = selected.into_iter().map(Into::into).collect();
        self
    }

    /// First selected object, if any selection was sent.
    pub fn primary_selection(&self) -> Option<&str> {
        self.selected.first().map(String::as_str)
    }
}
