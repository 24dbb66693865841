//! Core value type manipulated by transpiled programs.

use std::fmt;
use std::sync::Arc;

use crate::collections::{PyDict, PyList, PySet};
use crate::kind::Kind;

/// Dynamically-typed value with Python semantics.
///
/// Cloning is cheap: strings are reference counted and containers use
/// persistent structures. Cloned values are nevertheless independent;
/// mutating one never changes another.
#[derive(Clone, Default)]
pub enum Value {
    /// The absent value (`None`).
    #[default]
    None,
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Immutable text.
    String(Arc<str>),
    /// Boolean.
    Bool(bool),
    /// Ordered sequence.
    List(PyList),
    /// Mapping from string keys to values.
    Dict(PyDict),
    /// Set of values.
    Set(PySet),
}

impl Value {
    /// Creates a list value from its elements.
    pub fn new_list(items: impl IntoIterator<Item = Value>) -> Self {
        Self::List(items.into_iter().collect())
    }

    /// Creates a set value from its elements. Duplicates collapse.
    pub fn new_set(items: impl IntoIterator<Item = Value>) -> Self {
        Self::Set(items.into_iter().collect())
    }

    /// Creates a dict value from string-keyed entries.
    pub fn new_dict<K: Into<Arc<str>>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Self::Dict(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::None => Kind::None,
            Self::Int(_) => Kind::Int,
            Self::Float(_) => Kind::Float,
            Self::String(_) => Kind::String,
            Self::Bool(_) => Kind::Bool,
            Self::List(_) => Kind::List,
            Self::Dict(_) => Kind::Dict,
            Self::Set(_) => Kind::Set,
        }
    }

    /// Returns true if this value is `None`.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns true if this value is an integer.
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Returns true if this value is a float.
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Returns true if this value is a string.
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Returns true if this value is a boolean.
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    /// Returns true if this value is a list.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns true if this value is a dict.
    #[must_use]
    pub const fn is_dict(&self) -> bool {
        matches!(self, Self::Dict(_))
    }

    /// Returns true if this value is a set.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Returns true for `Int` and `Float`.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        self.kind().is_numeric()
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a float value.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a list reference.
    #[must_use]
    pub const fn as_list(&self) -> Option<&PyList> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    /// Attempts to extract a mutable list reference.
    pub fn as_list_mut(&mut self) -> Option<&mut PyList> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    /// Attempts to extract a dict reference.
    #[must_use]
    pub const fn as_dict(&self) -> Option<&PyDict> {
        match self {
            Self::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Attempts to extract a mutable dict reference.
    pub fn as_dict_mut(&mut self) -> Option<&mut PyDict> {
        match self {
            Self::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Attempts to extract a set reference.
    #[must_use]
    pub const fn as_set(&self) -> Option<&PySet> {
        match self {
            Self::Set(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a mutable set reference.
    pub fn as_set_mut(&mut self) -> Option<&mut PySet> {
        match self {
            Self::Set(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(_) | Self::Bool(_) => write!(f, "{self}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::List(l) => write!(f, "{l:?}"),
            Self::Dict(d) => write!(f, "{d:?}"),
            Self::Set(s) => write!(f, "{s:?}"),
        }
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl From<PyList> for Value {
    fn from(l: PyList) -> Self {
        Self::List(l)
    }
}

impl From<PyDict> for Value {
    fn from(d: PyDict) -> Self {
        Self::Dict(d)
    }
}

impl From<PySet> for Value {
    fn from(s: PySet) -> Self {
        Self::Set(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::new_list(v.into_iter().map(Into::into))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::None, Into::into)
    }
}
