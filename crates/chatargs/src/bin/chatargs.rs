//! Tokenizes chat command lines read from stdin, one JSON object per line.
//!
//! Usage: `cargo run --bin chatargs [-- --config path/to/chatargs.json]`

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use chatargs::{load_config, ChatArgsConfig, ChatArgsError, ChatCommand, Tokenizer};

fn main() {
    env_logger::init();

    if let Err(error) = run() {
        eprintln!("chatargs: {error}");
        std::process::exit(1);
    }
}

fn run() -> chatargs::Result<()> {
    let config = match config_arg(std::env::args().skip(1))? {
        Some(path) => load_config(&path)?,
        None => ChatArgsConfig::default(),
    };
    let tokenizer = config.tokenizer();

    let stdin = io::stdin();
    let stdout = io::stdout();
    tokenize_lines(&tokenizer, stdin.lock(), stdout.lock())
}

/// Write one JSON argument object per non-blank input line.
fn tokenize_lines<R: BufRead, W: Write>(
    tokenizer: &Tokenizer,
    reader: R,
    mut writer: W,
) -> chatargs::Result<()> {
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = ChatCommand::parse_with(tokenizer, &line);
        let output = serde_json::to_string(&command.args)
            .map_err(|error| ChatArgsError::Serialization(error.to_string()))?;
        writeln!(writer, "{output}")?;
    }

    Ok(())
}

fn config_arg<I>(args: I) -> chatargs::Result<Option<PathBuf>>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    match args.next().as_deref() {
        None => Ok(None),
        Some("--config") => args
            .next()
            .map(|path| Some(PathBuf::from(path)))
            .ok_or_else(|| ChatArgsError::InvalidInput("--config requires a path".to_string())),
        Some(other) => Err(ChatArgsError::InvalidInput(format!(
            "unexpected argument: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn no_arguments_uses_defaults() {
        assert_eq!(config_arg(args(&[])).expect("no args"), None);
    }

    #[test]
    fn config_flag_takes_path() {
        let path = config_arg(args(&["--config", "conf/chatargs.json"])).expect("config path");
        assert_eq!(path, Some(PathBuf::from("conf/chatargs.json")));
    }

    #[test]
    fn config_flag_without_path_is_rejected() {
        let err = config_arg(args(&["--config"])).expect_err("expected error");
        assert!(matches!(err, ChatArgsError::InvalidInput(_)));
    }

    #[test]
    fn unknown_argument_is_rejected() {
        let err = config_arg(args(&["--verbose"])).expect_err("expected error");
        match err {
            ChatArgsError::InvalidInput(message) => assert!(message.contains("--verbose")),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn writes_one_object_per_line() {
        let input = "!roll dice=2 --hidden\n\n   \na b c d 3=x\n";
        let mut output = Vec::new();
        tokenize_lines(&Tokenizer::default(), input.as_bytes(), &mut output).expect("tokenize");

        let text = String::from_utf8(output).expect("utf8 output");
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(
            lines,
            vec![
                r#"{"0":"!roll","dice":2,"hidden":true}"#,
                r#"{"0":"a","1":"b","2":"c","3":"x"}"#,
            ]
        );
    }
}
