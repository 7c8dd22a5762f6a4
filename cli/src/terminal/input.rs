//! Line-based prompts for the interactive shell.
//!
//! Every read returns `Ok(None)` once the input is closed, which callers treat
//! as a request to leave the shell.

use std::io::{self, BufRead, Write};

use tracing::warn;

pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Shows `prompt` and reads one line without its line terminator.
    pub fn line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }

        let trimmed_len = buf.trim_end_matches(['\r', '\n']).len();
        buf.truncate(trimmed_len);
        Ok(Some(buf))
    }

    /// Y/N question. Only `y` (any case) answers yes.
    pub fn yes(&mut self, prompt: &str) -> io::Result<Option<bool>> {
        Ok(self.line(prompt)?.map(|answer| is_affirmative(&answer)))
    }

    /// Asks until a positive number of days is entered.
    pub fn days(&mut self, prompt: &str) -> io::Result<Option<u32>> {
        loop {
            let Some(answer) = self.line(prompt)? else {
                return Ok(None);
            };
            match parse_days(&answer) {
                Ok(days) => return Ok(Some(days)),
                Err(reason) => warn!("{reason}"),
            }
        }
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

pub fn parse_days(answer: &str) -> Result<u32, String> {
    let days: u32 = answer
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a whole number of days.", answer.trim()))?;
    if days == 0 {
        return Err("Rental days must be at least 1.".to_string());
    }
    Ok(days)
}
