//! Error types for value operations.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::kind::Kind;
use crate::value::Value;

/// Result type alias for value operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for value operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        tracing::trace!(error = %kind, "value operation failed");
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an error for a binary operator applied to unsupported kinds.
    #[must_use]
    pub fn unsupported_operands(operation: &'static str, left: &Value, right: &Value) -> Self {
        Self::new(ErrorKind::UnsupportedOperands {
            operation,
            left: left.kind(),
            right: right.kind(),
        })
    }

    /// Creates an error for a unary operation applied to an unsupported kind.
    #[must_use]
    pub fn unsupported_operand(operation: &'static str, operand: &Value) -> Self {
        Self::new(ErrorKind::UnsupportedOperand {
            operation,
            operand: operand.kind(),
        })
    }

    /// Creates a string-to-number (or float-to-int) conversion error.
    #[must_use]
    pub fn conversion(target: Kind, text: impl Into<String>, failure: ConversionFailure) -> Self {
        Self::new(ErrorKind::Conversion {
            target,
            text: text.into(),
            failure,
        })
    }

    /// Creates a division-by-zero error.
    #[must_use]
    pub fn division_by_zero(operation: ZeroDivision) -> Self {
        Self::new(ErrorKind::DivisionByZero(operation))
    }

    /// Creates an integer overflow error.
    #[must_use]
    pub fn integer_overflow(operation: &'static str) -> Self {
        Self::new(ErrorKind::IntegerOverflow { operation })
    }

    /// Creates an index out of bounds error.
    #[must_use]
    pub fn index_out_of_bounds(index: i64, length: usize) -> Self {
        Self::new(ErrorKind::IndexOutOfBounds { index, length })
    }

    /// Creates a missing-key error.
    #[must_use]
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::new(ErrorKind::KeyNotFound(key.into()))
    }

    /// Returns the broad category of this error.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// Returns the name of the Python exception this error corresponds to.
    ///
    /// Generated code uses this to re-raise failures as the reference
    /// language's own exceptions.
    #[must_use]
    pub fn python_name(&self) -> &'static str {
        self.kind.python_name()
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Binary operator applied to a combination of kinds it does not support.
    #[error("unsupported operand type(s) for {operation}: '{left}' and '{right}'")]
    UnsupportedOperands {
        /// The operator or method, e.g. `+` or `append`.
        operation: &'static str,
        /// Kind of the left operand (or receiver).
        left: Kind,
        /// Kind of the right operand (or argument).
        right: Kind,
    },

    /// Unary operation or conversion applied to a kind it does not support.
    #[error("bad operand type for {operation}: '{operand}'")]
    UnsupportedOperand {
        /// The operation, e.g. `unary -` or `int()`.
        operation: &'static str,
        /// Kind of the operand.
        operand: Kind,
    },

    /// A container was used where a hashable key is required.
    #[error("unhashable type: '{0}'")]
    Unhashable(Kind),

    /// Text (or a float) could not be converted to a number.
    #[error("cannot convert {text:?} to {target}: {failure}")]
    Conversion {
        /// The requested target kind.
        target: Kind,
        /// Textual form of the source value.
        text: String,
        /// Why the conversion failed.
        failure: ConversionFailure,
    },

    /// Division, modulo, or floor division by zero.
    #[error("{0}")]
    DivisionByZero(ZeroDivision),

    /// Integer arithmetic left the 64-bit range.
    #[error("integer overflow in {operation}")]
    IntegerOverflow {
        /// The operator that overflowed.
        operation: &'static str,
    },

    /// Index out of bounds after negative-index normalization.
    #[error("index out of range: {index} (length {length})")]
    IndexOutOfBounds {
        /// The index as supplied by the caller.
        index: i64,
        /// The length of the collection.
        length: usize,
    },

    /// Slice bounds outside `[0, len]` or reversed.
    #[error("slice bounds out of range: {start}..{end} (length {length})")]
    SliceOutOfBounds {
        /// Start index as supplied.
        start: i64,
        /// End index as supplied.
        end: i64,
        /// The length of the list.
        length: usize,
    },

    /// A slice or range step of zero.
    #[error("slice step cannot be zero")]
    ZeroStep,

    /// Reduction over an empty sequence (e.g. `min([])`).
    #[error("{0}() arg is an empty sequence")]
    EmptySequence(&'static str),

    /// Dict key not present.
    #[error("key not found: {0:?}")]
    KeyNotFound(String),

    /// Element not present in a list or set.
    #[error("{element} not in {container}")]
    ElementNotFound {
        /// Kind of the container searched.
        container: Kind,
        /// Textual form of the missing element.
        element: String,
    },

    /// Console read or write failed.
    #[error("i/o error: {0}")]
    Io(#[source] std::io::Error),

    /// Console input reached end of stream.
    #[error("EOF when reading a line")]
    Eof,
}

impl ErrorKind {
    /// Returns the broad category of this error kind.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsupportedOperands { .. } | Self::UnsupportedOperand { .. } | Self::Unhashable(_) => {
                ErrorCategory::TypeMismatch
            }
            Self::Conversion { .. } => ErrorCategory::Conversion,
            Self::DivisionByZero(_) | Self::IntegerOverflow { .. } => ErrorCategory::Arithmetic,
            Self::IndexOutOfBounds { .. }
            | Self::SliceOutOfBounds { .. }
            | Self::ZeroStep
            | Self::EmptySequence(_) => ErrorCategory::Bounds,
            Self::KeyNotFound(_) | Self::ElementNotFound { .. } => ErrorCategory::Key,
            Self::Io(_) | Self::Eof => ErrorCategory::Io,
        }
    }

    /// Returns the name of the matching Python exception class.
    #[must_use]
    pub fn python_name(&self) -> &'static str {
        match self {
            Self::UnsupportedOperands { .. } | Self::UnsupportedOperand { .. } | Self::Unhashable(_) => {
                "TypeError"
            }
            Self::Conversion {
                failure: ConversionFailure::OutOfRange,
                ..
            } => "OverflowError",
            Self::Conversion { .. } | Self::ZeroStep | Self::EmptySequence(_) => "ValueError",
            Self::DivisionByZero(_) => "ZeroDivisionError",
            Self::IntegerOverflow { .. } => "OverflowError",
            Self::IndexOutOfBounds { .. } | Self::SliceOutOfBounds { .. } => "IndexError",
            Self::KeyNotFound(_) => "KeyError",
            Self::ElementNotFound {
                container: Kind::List,
                ..
            } => "ValueError",
            Self::ElementNotFound { .. } => "KeyError",
            Self::Io(_) => "OSError",
            Self::Eof => "EOFError",
        }
    }
}

/// Broad error categories shared by every operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Operation attempted on a kind it does not support.
    TypeMismatch,
    /// Conversion from text or float to a number failed.
    Conversion,
    /// Division by zero or integer overflow.
    Arithmetic,
    /// Index, slice, or step outside the permitted range.
    Bounds,
    /// Missing dict key or set/list element.
    Key,
    /// Console input/output failure.
    Io,
}

/// Why a conversion to a number failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConversionFailure {
    /// The text is not a number literal.
    NotANumber,
    /// The number does not fit the target representation.
    OutOfRange,
}

impl fmt::Display for ConversionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber => write!(f, "invalid literal"),
            Self::OutOfRange => write!(f, "out of range"),
        }
    }
}

/// The operation that attempted to divide by zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZeroDivision {
    /// True division (`/`).
    Division,
    /// Modulo (`%`).
    Modulo,
    /// Floor division (`//`).
    FloorDivision,
}

impl fmt::Display for ZeroDivision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Division => write!(f, "division by zero"),
            Self::Modulo => write!(f, "modulo by zero"),
            Self::FloorDivision => write!(f, "floor division by zero"),
        }
    }
}

/// Location in the source program that triggered an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Source file of the transpiled program.
    pub file: String,
    /// Line number (1-indexed).
    pub line: u32,
}

/// Context about where an error occurred.
///
/// Generated code attaches the originating source location and the chain
/// of enclosing functions so the failure can be reported like a traceback.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Where in the source program the failing expression lives.
    pub location: Option<SourceLocation>,
    /// Enclosing function names, innermost last.
    pub frames: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn at(mut self, file: impl Into<String>, line: u32) -> Self {
        self.location = Some(SourceLocation {
            file: file.into(),
            line,
        });
        self
    }

    /// Adds an enclosing function frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.frames.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = &self.location {
            write!(f, "File \"{}\", line {}", location.file, location.line)?;
            if let Some(innermost) = self.frames.last() {
                write!(f, ", in {innermost}")?;
            }
        }
        for frame in self.frames.iter().rev().skip(1) {
            writeln!(f)?;
            write!(f, "  called from {frame}")?;
        }
        Ok(())
    }
}
