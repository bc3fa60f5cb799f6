//! Chat command argument tokenizing.

pub mod command;
pub mod map;
pub mod split;
pub mod tokenizer;
pub mod value;

pub use command::ChatCommand;
pub use map::{ArgumentKey, ArgumentMap};
pub use split::split_words;
pub use tokenizer::{tokenize, SplitPoint, Tokenizer, TokenizerOptions};
pub use value::ArgumentValue;
