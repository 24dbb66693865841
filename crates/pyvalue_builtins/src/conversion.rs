//! Conversion and scalar builtins: `type`, `str`, `int`, `float`, `bool`,
//! and `abs`.

use pyvalue_foundation::{Error, Result, Value};

/// `type(v)`: the type label (`"int"`, `"NoneType"`, ...).
#[must_use]
pub fn type_of(value: &Value) -> Value {
    Value::from(value.kind().type_name())
}

/// `str(v)`.
#[must_use]
pub fn str_of(value: &Value) -> Value {
    Value::from(value.to_repr())
}

/// `int(v)`.
///
/// # Errors
///
/// Fails with a conversion error for unparseable or out-of-range input and
/// a type error for `None` and containers.
pub fn int_of(value: &Value) -> Result<Value> {
    value.to_int().map(Value::Int)
}

/// `float(v)`.
///
/// # Errors
///
/// Fails with a conversion error for unparseable or out-of-range text and
/// a type error for `None` and containers.
pub fn float_of(value: &Value) -> Result<Value> {
    value.to_float().map(Value::Float)
}

/// `bool(v)`.
#[must_use]
pub fn bool_of(value: &Value) -> Value {
    Value::Bool(value.to_bool())
}

/// `abs(v)`. Booleans are treated as integers.
///
/// # Errors
///
/// Fails on `i64::MIN` (overflow) and for non-numeric kinds.
pub fn abs(value: &Value) -> Result<Value> {
    match value {
        Value::Int(n) => n
            .checked_abs()
            .map(Value::Int)
            .ok_or_else(|| Error::integer_overflow("abs()")),
        Value::Bool(b) => Ok(Value::Int(i64::from(*b))),
        Value::Float(f) => Ok(Value::Float(f.abs())),
        _ => Err(Error::unsupported_operand("abs()", value)),
    }
}
