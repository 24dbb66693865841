//! Configuration for console I/O.

/// Configuration for the console builtins.
///
/// Controls how `print` joins and terminates its output and how `input`
/// treats its prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Text placed between printed values.
    pub separator: String,

    /// Text written after the last printed value.
    pub terminator: String,

    /// Flush the writer after every `print`.
    pub flush_each_print: bool,

    /// Write the `input` prompt before reading.
    pub echo_prompt: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            terminator: "\n".to_string(),
            flush_each_print: false,
            echo_prompt: true,
        }
    }
}

impl RuntimeConfig {
    /// Creates a configuration for an interactive terminal: output is
    /// flushed after each `print` so it interleaves with prompts.
    #[must_use]
    pub fn interactive() -> Self {
        Self {
            flush_each_print: true,
            ..Self::default()
        }
    }

    /// Creates a configuration for batch runs with piped input, where
    /// prompts are suppressed.
    #[must_use]
    pub fn batch() -> Self {
        Self {
            flush_each_print: false,
            echo_prompt: false,
            ..Self::default()
        }
    }

    /// Builder method to set the separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Builder method to set the terminator.
    #[must_use]
    pub fn with_terminator(mut self, terminator: impl Into<String>) -> Self {
        self.terminator = terminator.into();
        self
    }

    /// Builder method to enable/disable flushing after each print.
    #[must_use]
    pub fn with_flush_each_print(mut self, flush: bool) -> Self {
        self.flush_each_print = flush;
        self
    }

    /// Builder method to enable/disable prompt echo.
    #[must_use]
    pub fn with_echo_prompt(mut self, echo: bool) -> Self {
        self.echo_prompt = echo;
        self
    }
}
