//! Conversions between value kinds.
//!
//! Each conversion is total over the kinds it accepts and fails with a
//! typed error otherwise. String parsing distinguishes text that is not a
//! number from a number that does not fit the target.

use std::fmt;
use std::num::IntErrorKind;

use crate::error::{ConversionFailure, Error, Result};
use crate::kind::Kind;
use crate::value::Value;

// Bounds of the i64 range as f64; the upper bound itself is not representable.
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

impl Value {
    /// Converts to an integer (Python `int()`).
    ///
    /// Floats truncate toward zero; booleans become 0 or 1; strings are
    /// parsed as integer literals after trimming whitespace.
    ///
    /// # Errors
    ///
    /// Returns a conversion error for unparseable or out-of-range input, and
    /// a type error for `None` and containers.
    pub fn to_int(&self) -> Result<i64> {
        match self {
            Self::Int(n) => Ok(*n),
            Self::Bool(b) => Ok(i64::from(*b)),
            Self::Float(f) => float_to_int(*f),
            Self::String(s) => parse_int(s),
            _ => Err(Error::unsupported_operand("int()", self)),
        }
    }

    /// Converts to a float (Python `float()`).
    ///
    /// # Errors
    ///
    /// Returns a conversion error for unparseable or out-of-range text, and
    /// a type error for `None` and containers.
    #[allow(clippy::cast_precision_loss)]
    pub fn to_float(&self) -> Result<f64> {
        match self {
            Self::Float(f) => Ok(*f),
            Self::Int(n) => Ok(*n as f64),
            Self::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Self::String(s) => parse_float(s),
            _ => Err(Error::unsupported_operand("float()", self)),
        }
    }

    /// Renders the textual form used by `print` and `str()`.
    ///
    /// Equivalent to `self.to_string()`.
    #[must_use]
    pub fn to_repr(&self) -> String {
        self.to_string()
    }

    /// Returns the truthiness of this value.
    ///
    /// `None`, `False`, zero, and empty strings or containers are false.
    #[must_use]
    pub fn to_bool(&self) -> bool {
        match self {
            Self::None => false,
            Self::Bool(b) => *b,
            Self::Int(n) => *n != 0,
            Self::Float(f) => *f != 0.0,
            Self::String(s) => !s.is_empty(),
            Self::List(l) => !l.is_empty(),
            Self::Dict(d) => !d.is_empty(),
            Self::Set(s) => !s.is_empty(),
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn float_to_int(f: f64) -> Result<i64> {
    let truncated = f.trunc();
    if !truncated.is_finite() || !(I64_LOWER..I64_UPPER).contains(&truncated) {
        return Err(Error::conversion(
            Kind::Int,
            format_float(f),
            ConversionFailure::OutOfRange,
        ));
    }
    Ok(truncated as i64)
}

fn parse_int(text: &str) -> Result<i64> {
    text.trim().parse::<i64>().map_err(|err| {
        let failure = match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ConversionFailure::OutOfRange,
            _ => ConversionFailure::NotANumber,
        };
        Error::conversion(Kind::Int, text, failure)
    })
}

fn parse_float(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let parsed = trimmed
        .parse::<f64>()
        .map_err(|_| Error::conversion(Kind::Float, text, ConversionFailure::NotANumber))?;
    if parsed.is_infinite() && !names_infinity(trimmed) {
        return Err(Error::conversion(
            Kind::Float,
            text,
            ConversionFailure::OutOfRange,
        ));
    }
    Ok(parsed)
}

fn names_infinity(text: &str) -> bool {
    let unsigned = text.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Formats a float the way Python prints it: shortest round-trip digits,
/// always with a fractional part, switching to exponent form outside
/// `[1e-4, 1e16)`.
pub(crate) fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let magnitude = f.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let scientific = format!("{f:e}");
        if let Some((mantissa, exponent)) = scientific.split_once('e') {
            if let Ok(exponent) = exponent.parse::<i32>() {
                let sign = if exponent < 0 { '-' } else { '+' };
                return format!("{mantissa}e{sign}{:02}", exponent.abs());
            }
        }
        return scientific;
    }
    let mut text = f.to_string();
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}

fn write_joined<'a, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: Iterator<Item = &'a Value>,
{
    for (i, item) in items.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => f.write_str(&format_float(*x)),
            Self::String(s) => f.write_str(s),
            Self::List(l) => {
                write!(f, "[")?;
                write_joined(f, l.iter())?;
                write!(f, "]")
            }
            Self::Dict(d) => {
                write!(f, "{{")?;
                for (i, (k, v)) in d.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "'{k}': {v}")?;
                }
                write!(f, "}}")
            }
            Self::Set(s) if s.is_empty() => write!(f, "set()"),
            Self::Set(s) => {
                write!(f, "{{")?;
                write_joined(f, s.iter())?;
                write!(f, "}}")
            }
        }
    }
}
