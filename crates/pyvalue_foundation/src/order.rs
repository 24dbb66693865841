//! Equality, ordering, and hashing.
//!
//! The three relations are structural and mutually consistent:
//!
//! - `a == b` holds only for values of the same kind (`Int(1) != Float(1.0)`).
//! - `Ord` is a strict total order over all values, so heterogeneous
//!   containers stay sortable and can back an ordered set.
//! - `a == b` implies `hash(a) == hash(b)`, including containers nested
//!   inside sets.
//!
//! Floats compare by numeric value with two adjustments that keep `Eq`
//! lawful: NaN equals NaN, and `-0.0` equals `0.0`.
//!
//! [`repr_cmp`] and [`repr_hash`] expose the older textual approximation,
//! which orders and hashes containers through their rendered form.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::value::Value;

/// Collapses every NaN to one bit pattern and `-0.0` to `0.0`.
fn canonical(f: f64) -> f64 {
    if f.is_nan() {
        f64::NAN
    } else if f == 0.0 {
        0.0
    } else {
        f
    }
}

fn float_cmp(a: f64, b: f64) -> Ordering {
    canonical(a).total_cmp(&canonical(b))
}

/// Compares two numeric values as one band.
///
/// Int and Float interleave by magnitude; at equal magnitude the Int sorts
/// first, so the order never reports two values of different kinds as
/// equal.
#[allow(clippy::cast_precision_loss)]
fn numeric_cmp(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => Some(x.cmp(y)),
        (Value::Float(x), Value::Float(y)) => Some(float_cmp(*x, *y)),
        (Value::Int(x), Value::Float(y)) => Some(float_cmp(*x as f64, *y).then(Ordering::Less)),
        (Value::Float(x), Value::Int(y)) => {
            Some(float_cmp(*x, *y as f64).then(Ordering::Greater))
        }
        _ => None,
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None) => true,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Dict(a), Self::Dict(b)) => a == b,
            (Self::Set(a), Self::Set(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        if let Some(ordering) = numeric_cmp(self, other) {
            return ordering;
        }
        match (self, other) {
            (Self::None, Self::None) => Ordering::Equal,
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::String(a), Self::String(b)) => a.cmp(b),
            (Self::List(a), Self::List(b)) => a.cmp(b),
            (Self::Dict(a), Self::Dict(b)) => a.cmp(b),
            (Self::Set(a), Self::Set(b)) => a.cmp(b),
            _ => self.kind().rank().cmp(&other.kind().rank()),
        }
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        match self {
            Self::None => {}
            Self::Int(n) => n.hash(state),
            Self::Float(f) => canonical(*f).to_bits().hash(state),
            Self::String(s) => s.hash(state),
            Self::Bool(b) => b.hash(state),
            Self::List(l) => l.hash(state),
            Self::Dict(d) => d.hash(state),
            Self::Set(s) => s.hash(state),
        }
    }
}

/// Orders values using the textual fallback.
///
/// Different kinds order by [`Kind::rank`](crate::Kind::rank); numbers of
/// the same kind by value; strings lexicographically; booleans with false
/// first. Containers of the same kind compare their rendered text. This is
/// an approximation: it is deterministic, but it does not respect nested
/// numeric magnitude (`[10]` sorts before `[9]`).
#[must_use]
pub fn repr_cmp(a: &Value, b: &Value) -> Ordering {
    if a.kind() != b.kind() {
        return a.kind().rank().cmp(&b.kind().rank());
    }
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::Float(x), Value::Float(y)) => float_cmp(*x, *y),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::None, Value::None) => Ordering::Equal,
        _ => a.to_repr().cmp(&b.to_repr()),
    }
}

/// Hashes a value using the textual fallback.
///
/// Scalars hash their natural value; containers hash their rendered text.
/// Two structurally different containers can collide when their elements'
/// renderings are ambiguous (a string containing `", "`).
pub fn repr_hash<H: Hasher>(value: &Value, state: &mut H) {
    match value {
        Value::None => 0u8.hash(state),
        Value::Int(n) => n.hash(state),
        Value::Float(f) => canonical(*f).to_bits().hash(state),
        Value::String(s) => s.hash(state),
        Value::Bool(b) => b.hash(state),
        Value::List(_) | Value::Dict(_) | Value::Set(_) => value.to_repr().hash(state),
    }
}
