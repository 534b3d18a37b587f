use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::display::{format_number, format_outcome};
use crate::input::{InputSystem, INVALID_NUMBER};
use crate::terminal::{Script, Terminal};

const BANNER: &str = "=== Basic Calculator ===\n\
                      Supported operations: +, -, *, /\n\
                      Type 'quit' when prompted for first number to exit\n";
const FIRST_PROMPT: &str = "Enter first number (or 'quit' to exit): ";
const OPERATOR_PROMPT: &str = "Enter operator (+, -, *, /): ";
const SECOND_PROMPT: &str = "Enter second number: ";
const QUIT: &str = "quit";
const GOODBYE: &str = "Goodbye!";
const SEPARATOR_WIDTH: usize = 30;

/// What interrupted an iteration before it could print a result.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("interrupted")]
    Interrupted,
    #[error("end of input")]
    EndOfInput,
    #[error(transparent)]
    Io(#[from] io::Error),
}

enum Step {
    Continue,
    Quit,
}

/// The read-calculate-print loop.
pub struct Session<T> {
    input: InputSystem<T>,
}

impl<R: BufRead, W: Write> Session<Script<R, W>> {
    pub fn new(reader: R, writer: W) -> Self {
        Session::with_terminal(Script::new(reader, writer))
    }

    pub fn into_writer(self) -> W {
        self.input.into_terminal().into_writer()
    }
}

impl<T: Terminal> Session<T> {
    pub fn with_terminal(terminal: T) -> Self {
        Session {
            input: InputSystem::new(terminal),
        }
    }

    /// Runs until the user quits, input ends, or Ctrl-C is pressed.
    ///
    /// A failed iteration is reported and the loop carries on. The only
    /// error returned is a failure to write the farewell or an error report.
    pub fn run(&mut self) -> Result<(), SessionError> {
        self.input.write_line(BANNER)?;

        loop {
            match self.step() {
                Ok(Step::Continue) => {}
                Ok(Step::Quit) => {
                    info!("quit requested");
                    self.input.write_line(GOODBYE)?;
                    return Ok(());
                }
                Err(SessionError::Interrupted) => {
                    info!("interrupted");
                    self.input.write_line(&format!("\n{}", GOODBYE))?;
                    return Ok(());
                }
                Err(SessionError::EndOfInput) => {
                    info!("end of input");
                    self.input.write_line(&format!("\n{}", GOODBYE))?;
                    return Ok(());
                }
                Err(SessionError::Io(err)) if is_disconnect(&err) => {
                    info!(error = %err, "input disconnected");
                    self.input.write_line(&format!("\n{}", GOODBYE))?;
                    return Ok(());
                }
                Err(SessionError::Io(err)) => {
                    warn!(error = %err, "iteration failed");
                    self.input
                        .write_line(&format!("An error occurred: {}", err))?;
                }
            }
        }
    }

    pub fn into_terminal(self) -> T {
        self.input.into_terminal()
    }

    fn step(&mut self) -> Result<Step, SessionError> {
        let line = self.input.prompt_line(FIRST_PROMPT)?.unwrap_or_default();
        let first = line.trim();
        if first.eq_ignore_ascii_case(QUIT) {
            return Ok(Step::Quit);
        }

        let lhs = match first.parse::<f64>() {
            Ok(n) => n,
            Err(_) => {
                debug!(input = first, "rejected first operand");
                self.input.write_line(INVALID_NUMBER)?;
                return Ok(Step::Continue);
            }
        };

        let operator = self.input.get_operator_input(OPERATOR_PROMPT)?;
        let rhs = self.input.get_number_input(SECOND_PROMPT)?;

        let outcome = operator.apply(lhs, rhs);
        debug!(lhs, %operator, rhs, ?outcome, "calculated");

        self.input.write_line(&format!(
            "Result: {} {} {} = {}",
            format_number(lhs),
            operator,
            format_number(rhs),
            format_outcome(&outcome)
        ))?;
        self.input.write_line(&"-".repeat(SEPARATOR_WIDTH))?;
        Ok(Step::Continue)
    }
}

// Input that can never deliver another line.
fn is_disconnect(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::BrokenPipe | io::ErrorKind::UnexpectedEof
    )
}
