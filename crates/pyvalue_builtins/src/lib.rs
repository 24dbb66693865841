//! Builtin functions for programs transpiled onto pyvalue.
//!
//! This crate provides:
//! - Sequence builtins ([`len`], [`range`], [`sum`], [`min`], [`max`], ...)
//! - Conversion builtins ([`type_of`], [`str_of`], [`int_of`], ...)
//! - [`Console`] - `print` and `input` over any writer and reader
//! - [`RuntimeConfig`] - Console configuration
//!
//! Every builtin is a free function over [`Value`](pyvalue_foundation::Value).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collection;
pub mod config;
pub mod console;
pub mod conversion;

use std::sync::Once;

pub use collection::{
    len, list_from, max, max_pair, min, min_pair, range, range_from, range_step, set_from,
    sorted, sum, sum_with,
};
pub use config::RuntimeConfig;
pub use console::{Console, format_line, input, print};
pub use conversion::{abs, bool_of, float_of, int_of, str_of, type_of};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=pyvalue_builtins=debug` or
/// `RUST_LOG=pyvalue_foundation=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
