use crate::error::ShellError;
use crate::utils::grow;
use log::warn;
use std::io::Read;

/// Initial capacity of a line buffer, and the amount it grows by.
pub const RL_BUFSIZE: usize = 1024;

/// One line of operator input, without its trailing newline.
#[derive(Debug)]
pub struct Line {
    bytes: Vec<u8>,
    eof: bool,
}

impl Line {
    fn new() -> Result<Self, ShellError> {
        let mut bytes = Vec::new();
        bytes.try_reserve_exact(RL_BUFSIZE)?;
        Ok(Line { bytes, eof: false })
    }

    fn push(&mut self, b: u8) -> Result<(), ShellError> {
        grow(&mut self.bytes, RL_BUFSIZE)?;
        self.bytes.push(b);
        Ok(())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// True when the input stream ended while (or before) reading this line.
    pub fn at_eof(&self) -> bool {
        self.eof
    }

    #[cfg(test)]
    fn capacity(&self) -> usize {
        self.bytes.capacity()
    }
}

/// Reads bytes one at a time until a newline or the end of the stream.
///
/// Interrupted reads are retried. Any other read error is treated like end of
/// input so that a broken stdin stops the shell instead of spinning on it.
pub fn read_line<R: Read>(input: &mut R) -> Result<Line, ShellError> {
    let mut line = Line::new()?;
    for byte in input.bytes() {
        match byte {
            Ok(b'\n') => return Ok(line),
            Ok(b) => line.push(b)?,
            Err(e) => {
                warn!("error reading input, treating as end of input: {}", e);
                break;
            }
        }
    }
    line.eof = true;
    Ok(line)
}
