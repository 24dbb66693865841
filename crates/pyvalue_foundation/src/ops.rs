//! Operator semantics.
//!
//! Binary operators borrow both operands and return a fresh value. Numeric
//! dispatch follows the promotion lattice `Bool -> Int -> Float`: if either
//! side is a float both are promoted, otherwise integer arithmetic is used
//! and checked for overflow.

#![allow(clippy::should_implement_trait)]

use crate::error::{Error, Result, ZeroDivision};
use crate::value::Value;

/// A value viewed through the numeric promotion lattice.
#[derive(Clone, Copy, Debug)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    #[allow(clippy::cast_precision_loss)]
    fn as_f64(self) -> f64 {
        match self {
            Self::Int(n) => n as f64,
            Self::Float(f) => f,
        }
    }
}

impl Value {
    /// Views the value as a number. Bool counts as an Int, as in Python,
    /// so `True + 1` is `2`.
    fn number(&self) -> Option<Number> {
        match self {
            Self::Int(n) => Some(Number::Int(*n)),
            Self::Bool(b) => Some(Number::Int(i64::from(*b))),
            Self::Float(f) => Some(Number::Float(*f)),
            _ => None,
        }
    }

    fn numbers(&self, other: &Value, operation: &'static str) -> Result<(Number, Number)> {
        match (self.number(), other.number()) {
            (Some(a), Some(b)) => Ok((a, b)),
            _ => Err(Error::unsupported_operands(operation, self, other)),
        }
    }

    fn arithmetic(
        &self,
        other: &Value,
        operation: &'static str,
        int_op: fn(i64, i64) -> Option<i64>,
        float_op: fn(f64, f64) -> f64,
    ) -> Result<Value> {
        match self.numbers(other, operation)? {
            (Number::Int(a), Number::Int(b)) => int_op(a, b)
                .map(Value::Int)
                .ok_or_else(|| Error::integer_overflow(operation)),
            (a, b) => Ok(Value::Float(float_op(a.as_f64(), b.as_f64()))),
        }
    }

    /// `self + other`.
    ///
    /// Lists concatenate. If either side is a string, both sides are
    /// rendered and joined. Otherwise numeric addition.
    ///
    /// # Errors
    ///
    /// Type error for unsupported kinds; overflow for integer results
    /// outside the 64-bit range.
    pub fn add(&self, other: &Value) -> Result<Value> {
        match (self, other) {
            (Self::List(a), Self::List(b)) => Ok(Self::List(a.concat(b))),
            (Self::String(_), _) | (_, Self::String(_)) => {
                Ok(Self::from(format!("{self}{other}")))
            }
            _ => self.arithmetic(other, "+", i64::checked_add, |a, b| a + b),
        }
    }

    /// `self - other`.
    ///
    /// # Errors
    ///
    /// Type error unless both sides are numeric; overflow for integers.
    pub fn sub(&self, other: &Value) -> Result<Value> {
        self.arithmetic(other, "-", i64::checked_sub, |a, b| a - b)
    }

    /// `self * other`.
    ///
    /// A string times a number repeats the string `to_int()` times; a
    /// non-positive count gives the empty string. A list times an integer
    /// repeats the list. Otherwise numeric multiplication.
    ///
    /// # Errors
    ///
    /// Type error for unsupported kinds; overflow for integers and for
    /// repetitions longer than [`MAX_REPEAT_LEN`].
    pub fn mul(&self, other: &Value) -> Result<Value> {
        match (self, other) {
            (Self::String(s), count) | (count, Self::String(s)) if count.number().is_some() => {
                let count = repeat_count(s.len(), count.to_int()?)?;
                Ok(Self::from(s.repeat(count)))
            }
            (Self::List(l), count) | (count, Self::List(l))
                if matches!(count.number(), Some(Number::Int(_))) =>
            {
                let count = repeat_count(l.len(), count.to_int()?)?;
                Ok(Self::List(l.repeat(count)))
            }
            _ => self.arithmetic(other, "*", i64::checked_mul, |a, b| a * b),
        }
    }

    /// `self / other`: true division, always producing a float.
    ///
    /// # Errors
    ///
    /// Division by zero when the divisor is zero; type error for
    /// non-numeric operands.
    pub fn div(&self, other: &Value) -> Result<Value> {
        let (a, b) = self.numbers(other, "/")?;
        let divisor = b.as_f64();
        if divisor == 0.0 {
            return Err(Error::division_by_zero(ZeroDivision::Division));
        }
        Ok(Value::Float(a.as_f64() / divisor))
    }

    /// `self % other`: integer modulo of both operands' `to_int()`.
    ///
    /// The result takes the sign of the divisor, matching Python.
    ///
    /// # Errors
    ///
    /// Division by zero when the divisor is zero; type error for
    /// non-numeric operands.
    pub fn rem(&self, other: &Value) -> Result<Value> {
        self.numbers(other, "%")?;
        let (a, b) = (self.to_int()?, other.to_int()?);
        if b == 0 {
            return Err(Error::division_by_zero(ZeroDivision::Modulo));
        }
        let r = a.checked_rem(b).ok_or_else(|| Error::integer_overflow("%"))?;
        if r != 0 && (r < 0) != (b < 0) {
            Ok(Value::Int(r + b))
        } else {
            Ok(Value::Int(r))
        }
    }

    /// `self ** exponent`, computed in floating point.
    ///
    /// # Errors
    ///
    /// Type error for non-numeric operands.
    pub fn pow(&self, exponent: &Value) -> Result<Value> {
        let (base, exp) = self.numbers(exponent, "**")?;
        Ok(Value::Float(base.as_f64().powf(exp.as_f64())))
    }

    /// `self // other`: division rounded toward negative infinity.
    ///
    /// Integer operands give an integer; a float operand gives a float.
    ///
    /// # Errors
    ///
    /// Division by zero when the divisor is zero; type error for
    /// non-numeric operands; overflow for `i64::MIN // -1`.
    pub fn floor_div(&self, other: &Value) -> Result<Value> {
        match self.numbers(other, "//")? {
            (Number::Int(_), Number::Int(0)) => {
                Err(Error::division_by_zero(ZeroDivision::FloorDivision))
            }
            (Number::Int(a), Number::Int(b)) => {
                let q = a.checked_div(b).ok_or_else(|| Error::integer_overflow("//"))?;
                if a % b != 0 && (a < 0) != (b < 0) {
                    Ok(Value::Int(q - 1))
                } else {
                    Ok(Value::Int(q))
                }
            }
            (a, b) => {
                let divisor = b.as_f64();
                if divisor == 0.0 {
                    return Err(Error::division_by_zero(ZeroDivision::FloorDivision));
                }
                Ok(Value::Float((a.as_f64() / divisor).floor()))
            }
        }
    }

    /// Unary `-`.
    ///
    /// # Errors
    ///
    /// Type error unless the value is an int or float; overflow for
    /// `-i64::MIN`.
    pub fn neg(&self) -> Result<Value> {
        match self {
            Self::Int(n) => n
                .checked_neg()
                .map(Value::Int)
                .ok_or_else(|| Error::integer_overflow("unary -")),
            Self::Float(f) => Ok(Value::Float(-f)),
            _ => Err(Error::unsupported_operand("unary -", self)),
        }
    }

    /// Unary `+`: identity on numbers.
    ///
    /// # Errors
    ///
    /// Type error unless the value is an int or float.
    pub fn pos(&self) -> Result<Value> {
        if self.is_numeric() {
            Ok(self.clone())
        } else {
            Err(Error::unsupported_operand("unary +", self))
        }
    }

    /// Logical `not`.
    #[must_use]
    pub fn logical_not(&self) -> Value {
        Value::Bool(!self.to_bool())
    }

    /// Logical `and` over two already-evaluated operands.
    #[must_use]
    pub fn logical_and(&self, other: &Value) -> Value {
        Value::Bool(self.to_bool() && other.to_bool())
    }

    /// Logical `or` over two already-evaluated operands.
    #[must_use]
    pub fn logical_or(&self, other: &Value) -> Value {
        Value::Bool(self.to_bool() || other.to_bool())
    }

    /// `self == other` as a boolean value.
    #[must_use]
    pub fn equals(&self, other: &Value) -> Value {
        Value::Bool(self == other)
    }

    /// `self != other` as a boolean value.
    #[must_use]
    pub fn not_equals(&self, other: &Value) -> Value {
        Value::Bool(self != other)
    }

    /// `self < other` under the total order.
    #[must_use]
    pub fn less_than(&self, other: &Value) -> Value {
        Value::Bool(self < other)
    }

    /// `self <= other`, defined as `self < other || self == other`.
    #[must_use]
    pub fn less_equal(&self, other: &Value) -> Value {
        Value::Bool(self < other || self == other)
    }

    /// `self > other`, defined as `!(self <= other)`.
    #[must_use]
    pub fn greater_than(&self, other: &Value) -> Value {
        Value::Bool(!(self < other || self == other))
    }

    /// `self >= other`, defined as `!(self < other)`.
    #[must_use]
    pub fn greater_equal(&self, other: &Value) -> Value {
        Value::Bool(self >= other)
    }
}

/// Longest string (in bytes) or list (in elements) that `*` will build.
pub const MAX_REPEAT_LEN: usize = 1 << 30;

/// Number of copies for `unit_len * count`, where `unit_len` is the length
/// of the repeated string or list.
fn repeat_count(unit_len: usize, count: i64) -> Result<usize> {
    if count <= 0 || unit_len == 0 {
        return Ok(0);
    }
    usize::try_from(count)
        .ok()
        .filter(|&count| {
            unit_len
                .checked_mul(count)
                .is_some_and(|total| total <= MAX_REPEAT_LEN)
        })
        .ok_or_else(|| Error::integer_overflow("*"))
}

// Operator overloads so generated code can write `(&a + &b)?`.

macro_rules! binary_operator {
    ($trait:ident, $method:ident) => {
        impl std::ops::$trait<&Value> for &Value {
            type Output = Result<Value>;

            fn $method(self, rhs: &Value) -> Result<Value> {
                Value::$method(self, rhs)
            }
        }
    };
}

binary_operator!(Add, add);
binary_operator!(Sub, sub);
binary_operator!(Mul, mul);
binary_operator!(Div, div);
binary_operator!(Rem, rem);

impl std::ops::Neg for &Value {
    type Output = Result<Value>;

    fn neg(self) -> Result<Value> {
        Value::neg(self)
    }
}

impl std::ops::Not for &Value {
    type Output = Value;

    fn not(self) -> Value {
        self.logical_not()
    }
}
