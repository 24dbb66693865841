//! Container API on [`Value`].
//!
//! Every operation checks the receiver's kind and fails with a type error
//! on the wrong one. Mutations go through `&mut self`; persistent payloads
//! make them copy-on-write, so clones taken earlier are unaffected.

use std::sync::Arc;

use crate::collections::{PyDict, PyList, PySet};
use crate::error::{Error, ErrorKind, Result};
use crate::kind::Kind;
use crate::value::Value;

fn signed_len(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

/// Resolves a possibly negative element index against `len`.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn element_index(index: i64, len: usize) -> Result<usize> {
    let n = signed_len(len);
    let adjusted = if index < 0 { index + n } else { index };
    if (0..n).contains(&adjusted) {
        Ok(adjusted as usize)
    } else {
        Err(Error::index_out_of_bounds(index, len))
    }
}

/// Resolves a possibly negative slice bound; valid bounds lie in `[0, len]`.
fn slice_bound(bound: i64, len: usize) -> Option<i64> {
    let n = signed_len(len);
    let adjusted = if bound < 0 { bound + n } else { bound };
    (0..=n).contains(&adjusted).then_some(adjusted)
}

/// Clamps a Python slice bound into `[lower, upper]`.
fn clamp_bound(bound: Option<i64>, default: i64, lower: i64, upper: i64, len: i64) -> i64 {
    match bound {
        None => default,
        Some(b) if b < 0 => (b + len).max(lower),
        Some(b) => b.min(upper),
    }
}

/// Walks from `start` toward `stop` (exclusive) by `step`, never wrapping.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn walk(start: i64, stop: i64, step: i64) -> Vec<usize> {
    let mut indices = Vec::new();
    let mut i = start;
    while (step > 0 && i < stop) || (step < 0 && i > stop) {
        indices.push(i as usize);
        match i.checked_add(step) {
            Some(next) => i = next,
            None => break,
        }
    }
    indices
}

/// Computes the indices selected by `[start:stop:step]` on a sequence of
/// `len` elements, with Python's clamping rules.
fn slice_indices(
    len: usize,
    start: Option<i64>,
    stop: Option<i64>,
    step: Option<i64>,
) -> Result<Vec<usize>> {
    let step = step.unwrap_or(1);
    if step == 0 {
        return Err(Error::new(ErrorKind::ZeroStep));
    }
    let n = signed_len(len);
    let (lower, upper) = if step > 0 { (0, n) } else { (-1, n - 1) };
    let (first, last) = if step > 0 { (lower, upper) } else { (upper, lower) };
    let start = clamp_bound(start, first, lower, upper, n);
    let stop = clamp_bound(stop, last, lower, upper, n);
    Ok(walk(start, stop, step))
}

/// Normalizes a dict key to its textual form.
fn dict_key(key: &Value) -> Result<Arc<str>> {
    match key {
        Value::String(s) => Ok(Arc::clone(s)),
        Value::List(_) | Value::Dict(_) | Value::Set(_) => {
            Err(Error::new(ErrorKind::Unhashable(key.kind())))
        }
        _ => Ok(key.to_repr().into()),
    }
}

/// Extracts an integer subscript. Booleans count as 0 and 1.
fn subscript(operation: &'static str, container: Kind, index: &Value) -> Result<i64> {
    match index {
        Value::Int(n) => Ok(*n),
        Value::Bool(b) => Ok(i64::from(*b)),
        _ => Err(Error::new(ErrorKind::UnsupportedOperands {
            operation,
            left: container,
            right: index.kind(),
        })),
    }
}

fn element_not_found(container: Kind, element: &Value) -> Error {
    Error::new(ErrorKind::ElementNotFound {
        container,
        element: element.to_repr(),
    })
}

fn pick(list: &PyList, indices: &[usize]) -> Value {
    Value::List(
        indices
            .iter()
            .filter_map(|&i| list.get(i))
            .cloned()
            .collect(),
    )
}

impl Value {
    // List operations

    /// Appends an element to a list.
    ///
    /// # Errors
    ///
    /// Fails with a type error unless the receiver is a list.
    pub fn append(&mut self, value: Value) -> Result<()> {
        match self {
            Self::List(list) => {
                list.push(value);
                Ok(())
            }
            _ => Err(Error::unsupported_operand("append", self)),
        }
    }

    /// Removes and returns the element at `index`. Negative indices count
    /// from the end.
    ///
    /// # Errors
    ///
    /// Fails with a bounds error if the normalized index is outside
    /// `[0, len)`, and with a type error unless the receiver is a list.
    pub fn remove_at(&mut self, index: i64) -> Result<Value> {
        match self {
            Self::List(list) => {
                let i = element_index(index, list.len())?;
                Ok(list.remove(i))
            }
            _ => Err(Error::unsupported_operand("remove_at", self)),
        }
    }

    /// Returns the elements in `[start, end)` as a new list.
    ///
    /// # Errors
    ///
    /// Fails with a bounds error if a normalized bound is outside
    /// `[0, len]` or `start > end`.
    pub fn sublist(&self, start: i64, end: i64) -> Result<Value> {
        let Self::List(list) = self else {
            return Err(Error::unsupported_operand("sublist", self));
        };
        let len = list.len();
        match (slice_bound(start, len), slice_bound(end, len)) {
            (Some(from), Some(to)) if from <= to => {
                #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
                let indices: Vec<usize> = (from as usize..to as usize).collect();
                Ok(pick(list, &indices))
            }
            _ => Err(Error::new(ErrorKind::SliceOutOfBounds {
                start,
                end,
                length: len,
            })),
        }
    }

    /// Returns every `step`-th element walking from `start` toward `end`.
    ///
    /// A negative step walks downward. The walk never wraps around, and a
    /// walk that points away from `end` yields an empty list.
    ///
    /// # Errors
    ///
    /// Fails with `ZeroStep` for a zero step and with a bounds error if a
    /// normalized bound is outside `[0, len]`.
    pub fn sublist_step(&self, start: i64, end: i64, step: i64) -> Result<Value> {
        let Self::List(list) = self else {
            return Err(Error::unsupported_operand("sublist", self));
        };
        if step == 0 {
            return Err(Error::new(ErrorKind::ZeroStep));
        }
        let len = list.len();
        let (Some(from), Some(to)) = (slice_bound(start, len), slice_bound(end, len)) else {
            return Err(Error::new(ErrorKind::SliceOutOfBounds {
                start,
                end,
                length: len,
            }));
        };
        // Downward walks start on the last element at most.
        let from = if step < 0 {
            from.min(signed_len(len) - 1)
        } else {
            from
        };
        Ok(pick(list, &walk(from, to, step)))
    }

    /// Python slice `[start:stop:step]` on a list or string.
    ///
    /// Missing bounds take Python's defaults, and out-of-range bounds clamp
    /// instead of failing.
    ///
    /// # Errors
    ///
    /// Fails with `ZeroStep` for a zero step, and with a type error for
    /// kinds other than list and string.
    pub fn slice(&self, start: Option<i64>, stop: Option<i64>, step: Option<i64>) -> Result<Value> {
        match self {
            Self::List(list) => {
                let indices = slice_indices(list.len(), start, stop, step)?;
                Ok(pick(list, &indices))
            }
            Self::String(s) => {
                let chars: Vec<char> = s.chars().collect();
                let indices = slice_indices(chars.len(), start, stop, step)?;
                Ok(Self::from(indices.iter().map(|&i| chars[i]).collect::<String>()))
            }
            _ => Err(Error::unsupported_operand("slice", self)),
        }
    }

    /// Removes and returns the element at `index`, or the last element.
    ///
    /// # Errors
    ///
    /// Fails with a bounds error on an empty list or a bad index.
    pub fn pop(&mut self, index: Option<i64>) -> Result<Value> {
        match self {
            Self::List(list) => {
                let i = element_index(index.unwrap_or(-1), list.len())?;
                Ok(list.remove(i))
            }
            _ => Err(Error::unsupported_operand("pop", self)),
        }
    }

    /// Inserts `value` before `index`, clamping the index into `[0, len]`.
    ///
    /// # Errors
    ///
    /// Fails with a type error unless the receiver is a list.
    pub fn insert(&mut self, index: i64, value: Value) -> Result<()> {
        match self {
            Self::List(list) => {
                let n = signed_len(list.len());
                let at = clamp_bound(Some(index), 0, 0, n, n);
                #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
                list.insert(at as usize, value);
                Ok(())
            }
            _ => Err(Error::unsupported_operand("insert", self)),
        }
    }

    /// Appends every element of an iterable value to a list.
    ///
    /// # Errors
    ///
    /// Fails with a type error unless the receiver is a list and `other`
    /// is iterable.
    pub fn extend(&mut self, other: &Value) -> Result<()> {
        let items = other.elements()?;
        match self {
            Self::List(list) => {
                for item in items {
                    list.push(item);
                }
                Ok(())
            }
            _ => Err(Error::unsupported_operand("extend", self)),
        }
    }

    /// Removes the first equal element from a list, or the element from a
    /// set.
    ///
    /// # Errors
    ///
    /// Fails with `ElementNotFound` if no element equals `value`.
    pub fn remove(&mut self, value: &Value) -> Result<()> {
        match self {
            Self::List(list) => {
                let i = list
                    .position(value)
                    .ok_or_else(|| element_not_found(Kind::List, value))?;
                list.remove(i);
                Ok(())
            }
            Self::Set(set) => {
                if set.remove(value) {
                    Ok(())
                } else {
                    Err(element_not_found(Kind::Set, value))
                }
            }
            _ => Err(Error::unsupported_operand("remove", self)),
        }
    }

    /// Membership test (`value in self`).
    ///
    /// Lists scan by equality, dicts test keys, sets test elements, and
    /// strings test for a substring.
    ///
    /// # Errors
    ///
    /// Fails with a type error for non-containers, for a non-string needle
    /// in a string, and for an unhashable dict key.
    pub fn contains(&self, value: &Value) -> Result<bool> {
        match (self, value) {
            (Self::List(list), _) => Ok(list.contains(value)),
            (Self::Set(set), _) => Ok(set.contains(value)),
            (Self::Dict(dict), _) => Ok(dict.contains_key(&dict_key(value)?)),
            (Self::String(haystack), Self::String(needle)) => Ok(haystack.contains(&**needle)),
            _ => Err(Error::unsupported_operands("in", value, self)),
        }
    }

    /// Subscript read (`self[index]`).
    ///
    /// Lists and strings take integer indices with negative normalization;
    /// dicts look up the normalized key.
    ///
    /// # Errors
    ///
    /// Fails with a bounds error for a bad index, `KeyNotFound` for a
    /// missing dict key, and a type error for non-subscriptable kinds.
    pub fn get_item(&self, index: &Value) -> Result<Value> {
        match self {
            Self::List(list) => {
                let i = element_index(subscript("[]", Kind::List, index)?, list.len())?;
                Ok(list.get(i).cloned().unwrap_or_default())
            }
            Self::String(s) => {
                let n = subscript("[]", Kind::String, index)?;
                let i = element_index(n, s.chars().count())?;
                Ok(s.chars().nth(i).map(String::from).map(Self::from).unwrap_or_default())
            }
            Self::Dict(dict) => {
                let key = dict_key(index)?;
                dict.get(&key)
                    .cloned()
                    .ok_or_else(|| Error::key_not_found(&*key))
            }
            _ => Err(Error::unsupported_operands("[]", self, index)),
        }
    }

    /// Subscript write (`self[index] = value`).
    ///
    /// # Errors
    ///
    /// Fails with a bounds error for a bad list index, and a type error for
    /// kinds other than list and dict.
    pub fn set_item(&mut self, index: &Value, value: Value) -> Result<()> {
        match self {
            Self::List(list) => {
                let n = subscript("[]=", Kind::List, index)?;
                let i = element_index(n, list.len())?;
                list.set(i, value);
                Ok(())
            }
            Self::Dict(dict) => {
                dict.insert(dict_key(index)?, value);
                Ok(())
            }
            _ => Err(Error::unsupported_operands("[]=", self, index)),
        }
    }

    // Dict operations

    /// Inserts or replaces a dict entry. The key is normalized to its
    /// textual form, so `1` and `"1"` name the same entry.
    ///
    /// # Errors
    ///
    /// Fails with `Unhashable` for container keys and a type error unless
    /// the receiver is a dict.
    pub fn set(&mut self, key: &Value, value: Value) -> Result<()> {
        match self {
            Self::Dict(dict) => {
                dict.insert(dict_key(key)?, value);
                Ok(())
            }
            _ => Err(Error::unsupported_operand("set", self)),
        }
    }

    /// Looks up a dict entry, returning `None` when the key is absent.
    ///
    /// # Errors
    ///
    /// Fails only for a non-dict receiver or an unhashable key.
    pub fn get(&self, key: &Value) -> Result<Value> {
        match self {
            Self::Dict(dict) => Ok(dict.get(&dict_key(key)?).cloned().unwrap_or_default()),
            _ => Err(Error::unsupported_operand("get", self)),
        }
    }

    /// Removes a dict entry and returns its value.
    ///
    /// # Errors
    ///
    /// Fails with `KeyNotFound` if the key is absent.
    pub fn remove_key(&mut self, key: &Value) -> Result<Value> {
        match self {
            Self::Dict(dict) => {
                let key = dict_key(key)?;
                dict.remove(&key).ok_or_else(|| Error::key_not_found(&*key))
            }
            _ => Err(Error::unsupported_operand("remove_key", self)),
        }
    }

    /// Snapshot of a dict's keys as a list of strings.
    ///
    /// # Errors
    ///
    /// Fails with a type error unless the receiver is a dict.
    pub fn keys(&self) -> Result<Value> {
        let dict = self.dict_for("keys")?;
        Ok(Self::new_list(dict.keys().cloned().map(Self::String)))
    }

    /// Snapshot of a dict's values in key order.
    ///
    /// # Errors
    ///
    /// Fails with a type error unless the receiver is a dict.
    pub fn values(&self) -> Result<Value> {
        let dict = self.dict_for("values")?;
        Ok(Self::new_list(dict.values().cloned()))
    }

    /// Snapshot of a dict's entries as `[key, value]` lists.
    ///
    /// # Errors
    ///
    /// Fails with a type error unless the receiver is a dict.
    pub fn items(&self) -> Result<Value> {
        let dict = self.dict_for("items")?;
        Ok(Self::new_list(dict.iter().map(|(k, v)| {
            Self::new_list([Self::String(Arc::clone(k)), v.clone()])
        })))
    }

    fn dict_for(&self, operation: &'static str) -> Result<&PyDict> {
        self.as_dict()
            .ok_or_else(|| Error::unsupported_operand(operation, self))
    }

    // Set operations

    /// Adds an element to a set. Adding a present element is a no-op.
    ///
    /// # Errors
    ///
    /// Fails with a type error unless the receiver is a set.
    pub fn add_element(&mut self, value: Value) -> Result<()> {
        match self {
            Self::Set(set) => {
                set.insert(value);
                Ok(())
            }
            _ => Err(Error::unsupported_operand("add", self)),
        }
    }

    /// Returns a new set with the elements of both sets.
    ///
    /// # Errors
    ///
    /// Fails with a type error unless both operands are sets.
    pub fn union(&self, other: &Value) -> Result<Value> {
        let (a, b) = self.sets_for("|", other)?;
        Ok(Self::Set(a.union(b)))
    }

    /// Returns a new set with the elements common to both sets.
    ///
    /// # Errors
    ///
    /// Fails with a type error unless both operands are sets.
    pub fn intersection(&self, other: &Value) -> Result<Value> {
        let (a, b) = self.sets_for("&", other)?;
        Ok(Self::Set(a.intersection(b)))
    }

    /// Returns a new set with this set's elements absent from `other`.
    ///
    /// # Errors
    ///
    /// Fails with a type error unless both operands are sets.
    pub fn difference(&self, other: &Value) -> Result<Value> {
        let (a, b) = self.sets_for("-", other)?;
        Ok(Self::Set(a.difference(b)))
    }

    fn sets_for<'a>(
        &'a self,
        operation: &'static str,
        other: &'a Value,
    ) -> Result<(&'a PySet, &'a PySet)> {
        match (self, other) {
            (Self::Set(a), Self::Set(b)) => Ok((a, b)),
            _ => Err(Error::unsupported_operands(operation, self, other)),
        }
    }

    // Generic

    /// Number of elements; for strings, the number of characters.
    ///
    /// # Errors
    ///
    /// Fails with a type error for scalars other than strings.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> Result<usize> {
        match self {
            Self::String(s) => Ok(s.chars().count()),
            Self::List(list) => Ok(list.len()),
            Self::Dict(dict) => Ok(dict.len()),
            Self::Set(set) => Ok(set.len()),
            _ => Err(Error::unsupported_operand("len()", self)),
        }
    }

    /// Snapshot of the values produced by iterating over this value.
    ///
    /// Lists yield their elements, sets their elements in ascending order,
    /// dicts their keys, and strings their characters.
    ///
    /// # Errors
    ///
    /// Fails with a type error for non-iterable kinds.
    pub fn elements(&self) -> Result<Vec<Value>> {
        match self {
            Self::List(list) => Ok(list.iter().cloned().collect()),
            Self::Set(set) => Ok(set.iter().cloned().collect()),
            Self::Dict(dict) => Ok(dict.keys().cloned().map(Self::String).collect()),
            Self::String(s) => Ok(s.chars().map(|c| Self::from(String::from(c))).collect()),
            _ => Err(Error::unsupported_operand("iter()", self)),
        }
    }
}
