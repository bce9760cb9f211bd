use crate::error::ShellError;
use crate::utils::grow;
use std::borrow::Cow;

/// Initial number of token slots, and the amount the token list grows by.
pub const TOK_BUFSIZE: usize = 64;

/// Bytes that separate words: space, tab, carriage return, newline, bell.
pub const TOK_DELIM: &[u8] = b" \t\r\n\x07";

/// The words of one input line, borrowed from that line.
#[derive(Debug)]
pub struct Tokens<'a> {
    words: Vec<&'a [u8]>,
}

impl<'a> Tokens<'a> {
    /// The command name, or `None` for a blank line.
    pub fn command(&self) -> Option<&'a [u8]> {
        self.words.first().copied()
    }

    /// Everything after the command name.
    pub fn args(&self) -> &[&'a [u8]] {
        self.words.get(1..).unwrap_or(&[])
    }

    /// All words, command name first.
    pub fn argv(&self) -> &[&'a [u8]] {
        &self.words
    }
}

/// Lossy text form of a token, for diagnostics and logs.
pub fn display(word: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(word)
}

/// Splits a line on `TOK_DELIM`. Runs of delimiters never produce empty
/// words, and there is no quoting or escaping.
pub fn split_line(line: &[u8]) -> Result<Tokens<'_>, ShellError> {
    let mut words = Vec::new();
    words.try_reserve_exact(TOK_BUFSIZE)?;
    for word in line
        .split(|b| TOK_DELIM.contains(b))
        .filter(|w| !w.is_empty())
    {
        grow(&mut words, TOK_BUFSIZE)?;
        words.push(word);
    }
    Ok(Tokens { words })
}
