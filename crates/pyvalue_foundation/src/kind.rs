//! Kind tags for dynamic values.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The active discriminant of a [`Value`](crate::Value).
///
/// Every value has exactly one kind, and the payload stored in the value
/// always matches it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Kind {
    /// The absent value.
    None,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// Text.
    String,
    /// Boolean.
    Bool,
    /// Ordered sequence of values.
    List,
    /// Mapping from string keys to values.
    Dict,
    /// Set of values.
    Set,
}

impl Kind {
    /// All kinds, in declaration order.
    pub const ALL: [Kind; 8] = [
        Self::None,
        Self::Int,
        Self::Float,
        Self::String,
        Self::Bool,
        Self::List,
        Self::Dict,
        Self::Set,
    ];

    /// Returns the type label reported by `type()`.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::None => "NoneType",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "str",
            Self::Bool => "bool",
            Self::List => "list",
            Self::Dict => "dict",
            Self::Set => "set",
        }
    }

    /// Returns true for `Int` and `Float`.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }

    /// Returns true for the container kinds (`List`, `Dict`, `Set`).
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(self, Self::List | Self::Dict | Self::Set)
    }

    /// Position of this kind in the cross-kind total order.
    ///
    /// `None < Bool < Int < Float < String < List < Dict < Set`. Int and
    /// Float are adjacent so they can share one numeric band.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Bool => 1,
            Self::Int => 2,
            Self::Float => 3,
            Self::String => 4,
            Self::List => 5,
            Self::Dict => 6,
            Self::Set => 7,
        }
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
