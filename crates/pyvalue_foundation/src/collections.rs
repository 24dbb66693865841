//! Container payloads with value semantics.
//!
//! These are thin wrappers around the `im` crate's persistent data
//! structures. Cloning is O(1) and mutation is copy-on-write, so two
//! values never observe each other's in-place changes even though they
//! may share structure internally.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::sync::Arc;

use crate::value::Value;

/// Ordered sequence of values backing the `List` kind.
#[derive(Clone, Default)]
pub struct PyList(im::Vector<Value>);

impl PyList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self(im::Vector::new())
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets an element by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, value: Value) -> Value {
        self.0.set(index, value)
    }

    /// Appends an element.
    pub fn push(&mut self, value: Value) {
        self.0.push_back(value);
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Option<Value> {
        self.0.pop_back()
    }

    /// Inserts an element before `index` (`index == len` appends).
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: Value) {
        self.0.insert(index, value);
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Value {
        self.0.remove(index)
    }

    /// Appends every element of `other`.
    pub fn extend_from(&mut self, other: &PyList) {
        self.0.append(other.0.clone());
    }

    /// Returns a new list holding this list's elements followed by `other`'s.
    #[must_use]
    pub fn concat(&self, other: &PyList) -> PyList {
        let mut new = self.0.clone();
        new.append(other.0.clone());
        Self(new)
    }

    /// Returns a new list with the elements repeated `count` times.
    #[must_use]
    pub fn repeat(&self, count: usize) -> PyList {
        if self.0.is_empty() || count == 0 {
            return Self::default();
        }
        let mut new = im::Vector::new();
        for _ in 0..count {
            new.append(self.0.clone());
        }
        Self(new)
    }

    /// Returns the index of the first element equal to `value`.
    #[must_use]
    pub fn position(&self, value: &Value) -> Option<usize> {
        self.0.iter().position(|item| item == value)
    }

    /// Returns true if any element equals `value`.
    #[must_use]
    pub fn contains(&self, value: &Value) -> bool {
        self.position(value).is_some()
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.0.iter()
    }
}

impl fmt::Debug for PyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for PyList {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for PyList {}

impl PartialOrd for PyList {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PyList {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl Hash for PyList {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl FromIterator<Value> for PyList {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(im::Vector::from_iter(iter))
    }
}

impl From<Vec<Value>> for PyList {
    fn from(values: Vec<Value>) -> Self {
        values.into_iter().collect()
    }
}

impl IntoIterator for PyList {
    type Item = Value;
    type IntoIter = im::vector::ConsumingIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PyList {
    type Item = &'a Value;
    type IntoIter = im::vector::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Mapping from normalized string keys to values, backing the `Dict` kind.
///
/// Iteration is in ascending key order, which makes rendering, hashing,
/// and ordering of dicts deterministic.
#[derive(Clone, Default)]
pub struct PyDict(im::OrdMap<Arc<str>, Value>);

impl PyDict {
    /// Creates an empty dict.
    #[must_use]
    pub fn new() -> Self {
        Self(im::OrdMap::new())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the dict is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns true if the dict contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Inserts or replaces an entry, returning the previous value.
    pub fn insert(&mut self, key: Arc<str>, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Removes an entry, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Returns an iterator over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Arc<str>, &Value)> {
        self.0.iter()
    }

    /// Returns an iterator over keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &Arc<str>> {
        self.0.keys()
    }

    /// Returns an iterator over values in key order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.0.values()
    }
}

impl fmt::Debug for PyDict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl PartialEq for PyDict {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for PyDict {}

impl PartialOrd for PyDict {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PyDict {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl Hash for PyDict {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (k, v) in self.iter() {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl FromIterator<(Arc<str>, Value)> for PyDict {
    fn from_iter<I: IntoIterator<Item = (Arc<str>, Value)>>(iter: I) -> Self {
        Self(im::OrdMap::from_iter(iter))
    }
}

/// Set of values backing the `Set` kind.
///
/// Elements are kept in the total order defined on [`Value`], so a set
/// iterates, renders, and hashes identically regardless of insertion order.
#[derive(Clone, Default)]
pub struct PySet(im::OrdSet<Value>);

impl PySet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self(im::OrdSet::new())
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the set contains the value.
    #[must_use]
    pub fn contains(&self, value: &Value) -> bool {
        self.0.contains(value)
    }

    /// Inserts a value. Returns false if an equal value was already present.
    pub fn insert(&mut self, value: Value) -> bool {
        if self.0.contains(&value) {
            return false;
        }
        self.0.insert(value);
        true
    }

    /// Removes a value. Returns false if it was not present.
    pub fn remove(&mut self, value: &Value) -> bool {
        self.0.remove(value).is_some()
    }

    /// Returns an iterator over the elements in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.0.iter()
    }

    /// Returns a new set holding the elements of either set.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut new = self.clone();
        for item in other.iter() {
            new.insert(item.clone());
        }
        new
    }

    /// Returns a new set holding the elements present in both sets.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.iter()
            .filter(|item| other.contains(item))
            .cloned()
            .collect()
    }

    /// Returns a new set holding the elements of this set absent from `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.iter()
            .filter(|item| !other.contains(item))
            .cloned()
            .collect()
    }
}

impl fmt::Debug for PySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl PartialEq for PySet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for PySet {}

impl PartialOrd for PySet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PySet {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl Hash for PySet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Iteration is sorted, so equal sets feed identical sequences.
        self.len().hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl FromIterator<Value> for PySet {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(im::OrdSet::from_iter(iter))
    }
}
