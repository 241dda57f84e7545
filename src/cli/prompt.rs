//! Line-oriented prompting over any reader/writer pair

use std::io::{self, BufRead, Write};

const QUIT_WORDS: [&str; 3] = ["quit", "exit", "q"];

/// Whether `input` is a request to leave the session
pub fn is_quit(input: &str) -> bool {
    let input = input.trim();
    QUIT_WORDS.iter().any(|word| input.eq_ignore_ascii_case(word))
}

/// Prompt/response loop plumbing shared by the interactive commands.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` and read one line.
    ///
    /// Returns `None` on end of input or a quit word.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if is_quit(&line) {
            tracing::debug!("quit requested");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }
}
