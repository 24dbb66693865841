//! Core value type, coercion rules, and containers for pyvalue.
//!
//! This crate provides:
//! - [`Value`] - The dynamically-typed value with Python semantics
//! - [`Kind`] - The active discriminant of a value
//! - [`Error`] - Typed failures with a Python exception mapping
//! - Persistent containers ([`PyList`], [`PyDict`], [`PySet`])
//!
//! Operators live as methods on [`Value`] (`add`, `floor_div`, ...) and as
//! `std::ops` impls on `&Value`. Equality, ordering, and hashing are
//! structural and mutually consistent; see [`order`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
mod container;
mod convert;
pub mod error;
pub mod kind;
mod ops;
pub mod order;
#[cfg(feature = "serde")]
mod serialize;
pub mod value;

pub use collections::{PyDict, PyList, PySet};
pub use error::{
    ConversionFailure, Error, ErrorCategory, ErrorContext, ErrorKind, Result, SourceLocation,
    ZeroDivision,
};
pub use kind::Kind;
pub use ops::MAX_REPEAT_LEN;
pub use value::Value;
