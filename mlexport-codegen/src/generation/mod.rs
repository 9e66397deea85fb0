//! Code generation outputs.
//!
//! This module provides utilities shared by language generators:
//! - [`ImportCollector`] - Import tracking and deduplication
//! - [`format_number`] / [`join_numbers`] - Fixed-precision number rendering

mod imports;
mod numeric;

pub use imports::ImportCollector;
pub use numeric::{DEFAULT_PRECISION, format_number, join_numbers};
