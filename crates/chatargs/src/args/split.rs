//! Quote-aware word splitting.

const QUOTE_CHARS: [char; 2] = ['"', '\''];

/// Split a command line into words.
///
/// Whitespace separates words unless it sits inside a matching pair of single
/// or double quotes. A quoted span glued to neighbouring characters stays in
/// the same word (`name="Sir Robin"` and `'a'"b"` are one word each). A quote
/// with no matching closer later in the line is an ordinary character.
///
/// All quote characters are removed from the returned words, not only the
/// delimiting pairs. A word made only of unmatched quotes is dropped, while an
/// empty quoted span (`""`) still yields an empty word.
pub fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut cursor = 0usize;

    while let Some(ch) = input[cursor..].chars().next() {
        if ch.is_whitespace() {
            cursor += ch.len_utf8();
            continue;
        }

        let (end, quoted) = consume_word(input, cursor);
        let word = strip_quotes(&input[cursor..end]);
        if quoted || !word.is_empty() {
            words.push(word);
        }
        cursor = end;
    }

    words
}

/// Returns the byte offset one past the end of the word starting at `start`,
/// and whether the word contains a matched quoted span.
fn consume_word(input: &str, start: usize) -> (usize, bool) {
    let mut end = start;
    let mut quoted = false;

    while let Some(ch) = input[end..].chars().next() {
        if ch.is_whitespace() {
            break;
        }
        end += ch.len_utf8();

        if QUOTE_CHARS.contains(&ch) {
            if let Some(offset) = input[end..].find(ch) {
                end += offset + ch.len_utf8();
                quoted = true;
            }
        }
    }

    (end, quoted)
}

fn strip_quotes(word: &str) -> String {
    word.chars().filter(|ch| !QUOTE_CHARS.contains(ch)).collect()
}
