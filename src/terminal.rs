//! Where prompts go and lines come from.

use std::io::{self, BufRead, Write};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::session::SessionError;

/// A line-oriented conversation with the user.
///
/// `read_line` shows `prompt` and returns the next line without its line
/// terminator. Ctrl-C surfaces as [`SessionError::Interrupted`], a closed
/// input as [`SessionError::EndOfInput`], and a line that is not UTF-8 as
/// an [`io::ErrorKind::InvalidData`] error.
pub trait Terminal {
    fn read_line(&mut self, prompt: &str) -> Result<String, SessionError>;

    fn write_line(&mut self, text: &str) -> io::Result<()>;
}

/// The interactive terminal, backed by rustyline.
pub struct Console {
    editor: DefaultEditor,
    stdout: io::Stdout,
}

impl Console {
    pub fn new() -> Result<Self, ReadlineError> {
        Ok(Console {
            editor: DefaultEditor::new()?,
            stdout: io::stdout(),
        })
    }
}

impl Terminal for Console {
    fn read_line(&mut self, prompt: &str) -> Result<String, SessionError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(line),
            Err(ReadlineError::Interrupted) => Err(SessionError::Interrupted),
            Err(ReadlineError::Eof) => Err(SessionError::EndOfInput),
            Err(ReadlineError::Io(err)) => Err(err.into()),
            Err(err) => Err(io::Error::new(io::ErrorKind::Other, err.to_string()).into()),
        }
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = self.stdout.lock();
        writeln!(stdout, "{}", text)?;
        stdout.flush()
    }
}

/// Any reader/writer pair, e.g. piped input or an in-memory transcript.
/// Prompts are written to the writer just like the console shows them.
pub struct Script<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Script<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Script { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Terminal for Script<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String, SessionError> {
        self.writer.write_all(prompt.as_bytes())?;
        self.writer.flush()?;

        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Err(SessionError::EndOfInput);
        }
        if line.ends_with(b"\n") {
            line.pop();
            if line.ends_with(b"\r") {
                line.pop();
            }
        }
        String::from_utf8(line)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err).into())
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn script(input: &[u8]) -> Script<Cursor<Vec<u8>>, Vec<u8>> {
        Script::new(Cursor::new(input.to_vec()), Vec::new())
    }

    #[test]
    fn strips_line_terminators() {
        let mut term = script(b"one\ntwo\r\nthree");
        assert_eq!(term.read_line("> ").unwrap(), "one");
        assert_eq!(term.read_line("> ").unwrap(), "two");
        assert_eq!(term.read_line("> ").unwrap(), "three");
        assert_eq!(String::from_utf8(term.into_writer()).unwrap(), "> > > ");
    }

    #[test]
    fn empty_line_is_not_end_of_input() {
        let mut term = script(b"\n");
        assert_eq!(term.read_line("> ").unwrap(), "");
        match term.read_line("> ") {
            Err(SessionError::EndOfInput) => {}
            other => panic!("expected end of input, got {:?}", other),
        }
    }

    #[test]
    fn invalid_utf8_is_invalid_data() {
        let mut term = script(&[0xff, 0xfe, b'\n', b'7', b'\n']);
        match term.read_line("> ") {
            Err(SessionError::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::InvalidData),
            other => panic!("expected invalid data, got {:?}", other),
        }
        assert_eq!(term.read_line("> ").unwrap(), "7");
    }
}
