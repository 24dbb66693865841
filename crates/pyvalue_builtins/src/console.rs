//! Console I/O: `print` and `input`.
//!
//! [`Console`] owns a writer and a reader so tests and embedders can
//! capture output and script input. The free functions [`print`] and
//! [`input`] use the process's stdout and stdin.

use std::io::{self, BufRead, Write};

use pyvalue_foundation::{Error, ErrorKind, Result, Value};
use tracing::debug;

use crate::config::RuntimeConfig;

/// Renders values the way `print` does by default: each value's textual
/// form, separated by single spaces, followed by a newline.
#[must_use]
pub fn format_line(values: &[Value]) -> String {
    render(values, " ", "\n")
}

fn render(values: &[Value], separator: &str, terminator: &str) -> String {
    let mut line = values
        .iter()
        .map(Value::to_repr)
        .collect::<Vec<_>>()
        .join(separator);
    line.push_str(terminator);
    line
}

/// A console bound to an output writer and an input reader.
#[derive(Debug)]
pub struct Console<W, R> {
    writer: W,
    reader: R,
    config: RuntimeConfig,
}

impl<W: Write, R: BufRead> Console<W, R> {
    /// Creates a console with the default configuration.
    pub fn new(writer: W, reader: R) -> Self {
        Self::with_config(writer, reader, RuntimeConfig::default())
    }

    /// Creates a console with the given configuration.
    pub fn with_config(writer: W, reader: R, config: RuntimeConfig) -> Self {
        Self {
            writer,
            reader,
            config,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// `print(*values)`.
    ///
    /// # Errors
    ///
    /// Fails with an I/O error if the writer fails.
    pub fn print(&mut self, values: &[Value]) -> Result<()> {
        let line = render(values, &self.config.separator, &self.config.terminator);
        debug!(values = values.len(), bytes = line.len(), "print");
        self.writer.write_all(line.as_bytes())?;
        if self.config.flush_each_print {
            self.writer.flush()?;
        }
        Ok(())
    }

    /// `input(prompt)`: writes the prompt, then reads one line without its
    /// line terminator.
    ///
    /// # Errors
    ///
    /// Fails with `Eof` when the reader is exhausted and with an I/O error
    /// if reading or writing fails.
    pub fn input(&mut self, prompt: Option<&Value>) -> Result<Value> {
        if let Some(prompt) = prompt.filter(|_| self.config.echo_prompt) {
            self.writer.write_all(prompt.to_repr().as_bytes())?;
            self.writer.flush()?;
        }

        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            debug!("input reached end of stream");
            return Err(Error::new(ErrorKind::Eof));
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        debug!(bytes = line.len(), "input");
        Ok(Value::from(line))
    }

    /// Consumes the console, returning the writer and reader.
    pub fn into_parts(self) -> (W, R) {
        (self.writer, self.reader)
    }
}

/// `print(*values)` to stdout.
///
/// # Errors
///
/// Fails with an I/O error if stdout cannot be written.
pub fn print(values: &[Value]) -> Result<()> {
    let mut console = Console::with_config(
        io::stdout().lock(),
        io::empty(),
        RuntimeConfig::interactive(),
    );
    console.print(values)
}

/// `input(prompt)` from stdin.
///
/// # Errors
///
/// Fails with `Eof` at the end of stdin and with an I/O error if stdin or
/// stdout fails.
pub fn input(prompt: Option<&Value>) -> Result<Value> {
    let mut console = Console::with_config(
        io::stdout().lock(),
        io::stdin().lock(),
        RuntimeConfig::interactive(),
    );
    console.input(prompt)
}
