//! Syntax highlighting for the REPL.

use std::borrow::Cow;

use phrasal_foundation::NodeKind;

const RESET: &str = "\x1b[0m";
const KEY: &str = "\x1b[36m"; // cyan
const STRING: &str = "\x1b[33m"; // yellow
const NODE_TYPE: &str = "\x1b[1;32m"; // bold green
const NUMBER: &str = "\x1b[35m"; // magenta
const LITERAL: &str = "\x1b[34m"; // blue
const COMMAND: &str = "\x1b[1;36m"; // bold cyan

/// Highlighter for JSON phrase specifications and REPL commands.
pub struct JsonHighlighter;

impl JsonHighlighter {
    /// Creates a new highlighter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Highlight a line of input.
    #[allow(clippy::unused_self)]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim_start().starts_with(':') {
            return Cow::Owned(format!("{COMMAND}{line}{RESET}"));
        }

        let chars: Vec<char> = line.chars().collect();
        let mut result = String::with_capacity(line.len() * 2);
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            match c {
                '"' => {
                    let end = string_end(&chars, i);
                    let text: String = chars[i..end].iter().collect();
                    let color = if is_key(&chars, end) {
                        KEY
                    } else if is_node_type(&text) {
                        NODE_TYPE
                    } else {
                        STRING
                    };
                    result.push_str(color);
                    result.push_str(&text);
                    result.push_str(RESET);
                    i = end;
                }
                '-' | '0'..='9' => {
                    let start = i;
                    i += 1;
                    while i < chars.len() && is_number_char(chars[i]) {
                        i += 1;
                    }
                    result.push_str(NUMBER);
                    result.extend(&chars[start..i]);
                    result.push_str(RESET);
                }
                'a'..='z' => {
                    let start = i;
                    while i < chars.len() && chars[i].is_ascii_alphabetic() {
                        i += 1;
                    }
                    let word: String = chars[start..i].iter().collect();
                    if matches!(word.as_str(), "true" | "false" | "null") {
                        result.push_str(LITERAL);
                        result.push_str(&word);
                        result.push_str(RESET);
                    } else {
                        result.push_str(&word);
                    }
                }
                '{' | '}' | '[' | ']' => {
                    result.push_str("\x1b[1m");
                    result.push(c);
                    result.push_str(RESET);
                    i += 1;
                }
                _ => {
                    result.push(c);
                    i += 1;
                }
            }
        }

        Cow::Owned(result)
    }
}

impl Default for JsonHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Index one past the closing quote of the string starting at `start`, or the
/// end of the line if the string is unterminated.
fn string_end(chars: &[char], start: usize) -> usize {
    let mut i = start + 1;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            '"' => return i + 1,
            _ => i += 1,
        }
    }
    chars.len()
}

/// A string is a key when the next non-space character is a colon.
fn is_key(chars: &[char], end: usize) -> bool {
    chars[end.min(chars.len())..]
        .iter()
        .find(|c| !c.is_whitespace())
        .is_some_and(|&c| c == ':')
}

fn is_node_type(quoted: &str) -> bool {
    let inner = quoted.trim_matches('"');
    NodeKind::from_tag(inner).is_some()
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')
}
