//! pyvalue - Python-semantics values for transpiled programs
//!
//! This crate re-exports all layers of the pyvalue runtime for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: pyvalue_builtins   — print, input, len, range, sum, conversions
//! Layer 0: pyvalue_foundation — Value, operators, ordering, containers, Error
//! ```

pub use pyvalue_builtins as builtins;
pub use pyvalue_foundation as foundation;

pub use pyvalue_foundation::{Error, ErrorKind, Kind, Result, Value};
