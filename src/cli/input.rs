//! Vehicle input sources for the interactive console.
//!
//! [`DialoguerInput`] prompts on a real terminal; [`LineInputReader`] reads
//! newline-separated answers from any [`BufRead`] (piped stdin, scripts, tests).

use std::io::BufRead;

use dialoguer::Input;

/// Errors raised while reading operator input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Invalid input provided")]
    Invalid,

    /// The input stream reached end of file.
    #[error("Input closed")]
    Closed,

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read input: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Source of menu selections and registration numbers.
#[cfg_attr(test, mockall::automock)]
pub trait InputSource {
    /// Reads a numeric menu selection.
    ///
    /// Returns `Ok(None)` when the answer is empty or not a number.
    fn read_selection(&mut self) -> Result<Option<u32>, InputError>;

    /// Reads a vehicle registration number.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Invalid`] for blank input.
    fn read_vehicle_registration_number(&mut self) -> Result<String, InputError>;
}

fn parse_selection(line: &str) -> Option<u32> {
    line.trim().parse().ok()
}

fn non_blank(line: &str) -> Result<String, InputError> {
    let value = line.trim();
    if value.is_empty() {
        return Err(InputError::Invalid);
    }
    Ok(value.to_string())
}

/// Line-oriented reader over any buffered source.
pub struct LineInputReader<R: BufRead> {
    reader: R,
}

impl<R: BufRead> LineInputReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn read_line(&mut self) -> Result<String, InputError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        Ok(line)
    }
}

impl<R: BufRead> InputSource for LineInputReader<R> {
    fn read_selection(&mut self) -> Result<Option<u32>, InputError> {
        let line = self.read_line()?;
        Ok(parse_selection(&line))
    }

    fn read_vehicle_registration_number(&mut self) -> Result<String, InputError> {
        let line = self.read_line()?;
        non_blank(&line)
    }
}

/// Terminal prompts backed by `dialoguer`.
#[derive(Default)]
pub struct DialoguerInput;

impl DialoguerInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for DialoguerInput {
    fn read_selection(&mut self) -> Result<Option<u32>, InputError> {
        let answer: String = Input::new()
            .with_prompt(">")
            .allow_empty(true)
            .interact_text()?;
        Ok(parse_selection(&answer))
    }

    fn read_vehicle_registration_number(&mut self) -> Result<String, InputError> {
        let answer: String = Input::new()
            .with_prompt("Registration number")
            .allow_empty(true)
            .interact_text()?;
        non_blank(&answer)
    }
}
