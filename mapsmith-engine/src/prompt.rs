/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Operator interaction.
//!
//! This module defines the interface the flows use to ask the operator for
//! choices and to report progress, and a console implementation over any
//! reader/writer pair.

use console::style;
use mapsmith_core::error::{MapError, Result};
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};
use tracing::info;

/// Tone of a progress message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Neutral information.
    Info,
    /// A question or menu.
    Question,
    /// A completed step.
    Success,
    /// A step that failed or found something missing.
    Failure,
}

/// Operator interaction used by the flows.
///
/// Implement this trait to drive the flows from something other than a
/// terminal, such as scripted answers.
pub trait Prompter {
    /// Reports a message to the operator.
    ///
    /// # Errors
    /// Returns `MapError::Io` if the message cannot be written.
    fn report(&mut self, tone: Tone, message: &str) -> Result<()>;

    /// Asks for one line of free text, without the line break.
    ///
    /// # Errors
    /// Returns `MapError::Io` on read failure or end of input.
    fn ask_line(&mut self, question: &str) -> Result<String>;

    /// Asks the operator to pick one of `options` from a 1-based menu.
    ///
    /// Invalid answers are asked again.
    ///
    /// # Returns
    /// The zero-based index of the chosen option.
    ///
    /// # Errors
    /// Returns `MapError::InvalidArgument` if `options` is empty and
    /// `MapError::Io` on read failure or end of input.
    fn choose(&mut self, question: &str, options: &[String]) -> Result<usize> {
        if options.is_empty() {
            return Err(MapError::InvalidArgument(format!(
                "no options to choose from: {question}"
            )));
        }
        self.report(Tone::Question, question)?;
        for (i, option) in options.iter().enumerate() {
            self.report(Tone::Question, &format!("{}. {option}", i + 1))?;
        }
        loop {
            let answer = self.ask_line("Enter the number of your choice: ")?;
            match answer.trim().parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
                _ => self.report(Tone::Failure, "Invalid input. Please enter a valid number.")?,
            }
        }
    }

    /// Asks for a non-negative integer, asking again until one is given.
    ///
    /// # Errors
    /// Returns `MapError::Io` on read failure or end of input.
    fn ask_number(&mut self, question: &str) -> Result<u32> {
        loop {
            let answer = self.ask_line(question)?;
            match answer.trim().parse::<u32>() {
                Ok(n) => return Ok(n),
                Err(_) => self.report(Tone::Failure, "Invalid input. Please enter a number.")?,
            }
        }
    }
}

/// Prompter for runs without an operator.
///
/// Messages go to the log; any question fails with
/// `MapError::InvalidArgument` naming the value that was needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonInteractive;

impl Prompter for NonInteractive {
    fn report(&mut self, tone: Tone, message: &str) -> Result<()> {
        info!(?tone, "{message}");
        Ok(())
    }

    fn ask_line(&mut self, question: &str) -> Result<String> {
        Err(MapError::InvalidArgument(format!(
            "input required but not interactive: {}",
            question.trim().trim_end_matches(':')
        )))
    }
}

/// Terminal prompter writing styled text.
#[derive(Debug)]
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompter<StdinLock<'static>, Stdout> {
    /// Creates a prompter on the process's standard input and output.
    #[must_use]
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    /// Creates a prompter over a reader and a writer.
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the writer.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the prompter and returns the writer.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn report(&mut self, tone: Tone, message: &str) -> Result<()> {
        let styled = match tone {
            Tone::Info => style(message),
            Tone::Question => style(message).yellow(),
            Tone::Success => style(message).green(),
            Tone::Failure => style(message).red(),
        };
        writeln!(self.output, "{styled}")?;
        Ok(())
    }

    fn ask_line(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", style(question).white())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("no answer to: {}", question.trim()),
            )
            .into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
