//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, operators, ordering, containers, and Error.

mod containers;
mod errors;
mod operators;
