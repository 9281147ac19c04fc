//! Shared helpers

pub mod comparison;

pub use comparison::{by_time, by_value, safe_float_cmp, sorted_by};
