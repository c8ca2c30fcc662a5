//! Line prompting for interactive flows.
//!
//! `dialoguer` needs a real terminal, so interactive code talks to a
//! [`Prompter`] and the caller picks the implementation: [`TerminalPrompter`]
//! on a TTY, [`LinePrompter`] when stdin is piped and in tests.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::{Confirm, Input};

/// Source of user answers and sink for conversational messages.
pub trait Prompter {
    /// Ask for one line of text. Returns `None` at end of input.
    fn input(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;

    /// Ask a yes/no question. Returns `None` at end of input.
    fn confirm(&mut self, prompt: &str, default: bool) -> anyhow::Result<Option<bool>>;

    /// Print a message to the user.
    fn say(&mut self, message: &str) -> anyhow::Result<()>;
}

/// Prompter backed by `dialoguer`, for use on a terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

fn eof_as_none<T>(result: Result<T, dialoguer::Error>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(err) => Err(anyhow::anyhow!("Failed to read input: {}", err)),
    }
}

impl Prompter for TerminalPrompter {
    fn input(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        eof_as_none(
            Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text(),
        )
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> anyhow::Result<Option<bool>> {
        eof_as_none(
            Confirm::new()
                .with_prompt(prompt)
                .default(default)
                .interact(),
        )
    }

    fn say(&mut self, message: &str) -> anyhow::Result<()> {
        println!("{}", message);
        Ok(())
    }
}

/// Prompter over any line reader and writer.
///
/// Prompts are written as `prompt: ` without a newline; answers are read one
/// line at a time with the line terminator stripped.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the prompter, returning the writer.
    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn input(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.writer, "{}: ", prompt)?;
        self.writer.flush()?;
        self.read_line()
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> anyhow::Result<Option<bool>> {
        let choices = if default { "[Y/n]" } else { "[y/N]" };
        loop {
            write!(self.writer, "{} {} ", prompt, choices)?;
            self.writer.flush()?;
            let Some(answer) = self.read_line()? else {
                return Ok(None);
            };
            match answer.trim().to_lowercase().as_str() {
                "" => return Ok(Some(default)),
                "y" | "yes" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                _ => writeln!(self.writer, "Please answer y or n.")?,
            }
        }
    }

    fn say(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", message)?;
        Ok(())
    }
}

/// True when stdin is a terminal.
pub fn stdin_is_terminal() -> bool {
    io::stdin().is_terminal()
}
