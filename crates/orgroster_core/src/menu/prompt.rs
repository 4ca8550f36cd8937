//! Blocking user prompts.
//!
//! `Prompter` is the seam between the menu session and the terminal. Both
//! calls block until the user answers.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};

pub type PromptResult<T> = Result<T, PromptError>;

#[derive(Debug)]
pub enum PromptError {
    Io(io::Error),
    /// Input stream reached its end while waiting for an answer.
    Closed,
}

impl Display for PromptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "prompt i/o failed: {err}"),
            Self::Closed => write!(f, "input closed while waiting for an answer"),
        }
    }
}

impl Error for PromptError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Closed => None,
        }
    }
}

impl From<io::Error> for PromptError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Source of user answers.
pub trait Prompter {
    /// Asks the user to pick one of `choices`; returns its index.
    fn select(&mut self, message: &str, choices: &[String]) -> PromptResult<usize>;
    /// Asks for one line of free text, without the trailing newline.
    fn input(&mut self, message: &str) -> PromptResult<String>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn select(&mut self, message: &str, choices: &[String]) -> PromptResult<usize> {
        (**self).select(message, choices)
    }

    fn input(&mut self, message: &str) -> PromptResult<String> {
        (**self).input(message)
    }
}

/// Line-oriented prompter over any reader/writer pair.
///
/// Choices are shown as a numbered list and answered by number. An invalid
/// answer repeats the question.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_answer(&mut self) -> PromptResult<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn select(&mut self, message: &str, choices: &[String]) -> PromptResult<usize> {
        loop {
            writeln!(self.writer, "? {message}")?;
            for (index, choice) in choices.iter().enumerate() {
                writeln!(self.writer, "  {}) {choice}", index + 1)?;
            }
            write!(self.writer, "> ")?;
            self.writer.flush()?;

            let answer = self.read_answer()?;
            match answer.trim().parse::<usize>() {
                Ok(number) if (1..=choices.len()).contains(&number) => return Ok(number - 1),
                _ => writeln!(
                    self.writer,
                    "Please enter a number between 1 and {}.",
                    choices.len()
                )?,
            }
        }
    }

    fn input(&mut self, message: &str) -> PromptResult<String> {
        write!(self.writer, "? {message} ")?;
        self.writer.flush()?;
        self.read_answer()
    }
}
