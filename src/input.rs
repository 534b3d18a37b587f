use std::io;

use tracing::debug;

use crate::session::SessionError;
use crate::terminal::Terminal;
use crate::Operator;

pub(crate) const INVALID_NUMBER: &str = "Invalid input! Please enter a valid number.";
const INVALID_OPERATOR: &str = "Invalid operator! Please enter +, -, *, or /.";

/// Prompted input over a [`Terminal`].
///
/// `get_operator_input` and `get_number_input` keep asking until the user
/// types something valid. The only way out without a value is an
/// interrupt, end of input, or an I/O failure.
pub struct InputSystem<T> {
    terminal: T,
}

impl<T: Terminal> InputSystem<T> {
    pub fn new(terminal: T) -> Self {
        InputSystem { terminal }
    }

    pub fn get_operator_input(&mut self, prompt: &str) -> Result<Operator, SessionError> {
        loop {
            let line = self.prompt_line(prompt)?;
            match line.as_deref().map(|text| text.trim().parse::<Operator>()) {
                Some(Ok(operator)) => return Ok(operator),
                _ => {
                    debug!(input = ?line, "rejected operator");
                    self.write_line(INVALID_OPERATOR)?;
                }
            }
        }
    }

    pub fn get_number_input(&mut self, prompt: &str) -> Result<f64, SessionError> {
        loop {
            let line = self.prompt_line(prompt)?;
            match line.as_deref().map(|text| text.trim().parse::<f64>()) {
                Some(Ok(number)) => return Ok(number),
                _ => {
                    debug!(input = ?line, "rejected number");
                    self.write_line(INVALID_NUMBER)?;
                }
            }
        }
    }

    /// Shows `prompt` and reads one line. `None` means the line could not
    /// be decoded, which callers treat like any other unparseable text.
    pub fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>, SessionError> {
        match self.terminal.read_line(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(SessionError::Io(err)) if err.kind() == io::ErrorKind::InvalidData => {
                debug!(error = %err, "undecodable line");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.terminal.write_line(text)
    }

    pub fn into_terminal(self) -> T {
        self.terminal
    }
}
