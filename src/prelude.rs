//! Prelude module for date_range_formatter crate.
//!
//! Re-exports the derive_more macros shared by the value types.

pub use derive_more::Display;
