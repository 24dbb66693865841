//! Sequence builtins: `len`, `range`, `sum`, `min`, `max`, `sorted`, and
//! the `list`/`set` constructors.

use pyvalue_foundation::{Error, ErrorKind, Kind, Result, Value};

fn integer_arg(operation: &'static str, value: &Value) -> Result<i64> {
    match value {
        Value::Int(n) => Ok(*n),
        Value::Bool(b) => Ok(i64::from(*b)),
        _ => Err(Error::unsupported_operand(operation, value)),
    }
}

/// Elements of a List or Set; other kinds are rejected.
fn reducible(operation: &'static str, value: &Value) -> Result<Vec<Value>> {
    match value.kind() {
        Kind::List | Kind::Set => value.elements(),
        _ => Err(Error::unsupported_operand(operation, value)),
    }
}

// =============================================================================
// Size and Construction
// =============================================================================

/// `len(v)`: character count for strings, element count for containers.
///
/// # Errors
///
/// Fails with a type error for other kinds.
pub fn len(value: &Value) -> Result<Value> {
    let n = value.len()?;
    i64::try_from(n)
        .map(Value::Int)
        .map_err(|_| Error::integer_overflow("len()"))
}

/// `list(v)`: a new list of the elements produced by iterating `v`.
///
/// # Errors
///
/// Fails with a type error for non-iterable kinds.
pub fn list_from(value: &Value) -> Result<Value> {
    Ok(Value::new_list(value.elements()?))
}

/// `set(v)`: a new set of the elements produced by iterating `v`.
///
/// # Errors
///
/// Fails with a type error for non-iterable kinds.
pub fn set_from(value: &Value) -> Result<Value> {
    Ok(Value::new_set(value.elements()?))
}

/// `sorted(v)`: a new list of the elements in ascending total order.
///
/// # Errors
///
/// Fails with a type error for non-iterable kinds.
pub fn sorted(value: &Value) -> Result<Value> {
    let mut items = value.elements()?;
    items.sort();
    Ok(Value::new_list(items))
}

// =============================================================================
// Ranges
// =============================================================================

/// `range(stop)`.
///
/// # Errors
///
/// Fails with a type error for a non-integer bound.
pub fn range(stop: &Value) -> Result<Value> {
    range_step(&Value::Int(0), stop, &Value::Int(1))
}

/// `range(start, stop)`.
///
/// # Errors
///
/// Fails with a type error for non-integer bounds.
pub fn range_from(start: &Value, stop: &Value) -> Result<Value> {
    range_step(start, stop, &Value::Int(1))
}

/// `range(start, stop, step)`: integers from `start` toward `stop`
/// (exclusive). A step pointing away from `stop` gives an empty list.
///
/// # Errors
///
/// Fails with `ZeroStep` for a zero step and a type error for non-integer
/// arguments.
pub fn range_step(start: &Value, stop: &Value, step: &Value) -> Result<Value> {
    let start = integer_arg("range()", start)?;
    let stop = integer_arg("range()", stop)?;
    let step = integer_arg("range()", step)?;
    if step == 0 {
        return Err(Error::new(ErrorKind::ZeroStep));
    }

    let mut items = Vec::new();
    let mut i = start;
    while (step > 0 && i < stop) || (step < 0 && i > stop) {
        items.push(Value::Int(i));
        match i.checked_add(step) {
            Some(next) => i = next,
            None => break,
        }
    }
    Ok(Value::new_list(items))
}

// =============================================================================
// Reductions
// =============================================================================

/// `sum(iterable)`: folds the elements with `+`, starting from `0`.
///
/// # Errors
///
/// Fails if the iterable is not a List or Set, or if an addition fails.
pub fn sum(iterable: &Value) -> Result<Value> {
    sum_with(iterable, &Value::Int(0))
}

/// `sum(iterable, start)`.
///
/// # Errors
///
/// Fails if the iterable is not a List or Set, or if an addition fails.
pub fn sum_with(iterable: &Value, start: &Value) -> Result<Value> {
    reducible("sum()", iterable)?
        .iter()
        .try_fold(start.clone(), |acc, item| acc.add(item))
}

/// `min(iterable)`: the smallest element under the total order.
///
/// # Errors
///
/// Fails with `EmptySequence` on an empty iterable and a type error for
/// kinds other than List and Set.
pub fn min(iterable: &Value) -> Result<Value> {
    reducible("min()", iterable)?
        .into_iter()
        .min()
        .ok_or_else(|| Error::new(ErrorKind::EmptySequence("min")))
}

/// `max(iterable)`: the largest element under the total order.
///
/// # Errors
///
/// Fails with `EmptySequence` on an empty iterable and a type error for
/// kinds other than List and Set.
pub fn max(iterable: &Value) -> Result<Value> {
    reducible("max()", iterable)?
        .into_iter()
        .max()
        .ok_or_else(|| Error::new(ErrorKind::EmptySequence("max")))
}

/// `min(a, b)`. Returns `a` when the two are equal.
#[must_use]
pub fn min_pair(a: &Value, b: &Value) -> Value {
    if b < a { b.clone() } else { a.clone() }
}

/// `max(a, b)`. Returns `a` when the two are equal.
#[must_use]
pub fn max_pair(a: &Value, b: &Value) -> Value {
    if b > a { b.clone() } else { a.clone() }
}
